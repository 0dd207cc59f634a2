#![allow(dead_code)]

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use voronoi_edges::{Diagram, EdgeId, Point2, VertexId};

/// Which endpoints a generated bisector starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Known {
    None,
    Start,
    End,
}

/// Pairs of sites whose midpoints lie uniformly in `[lo, hi]^2`.
///
/// Returns the midpoints alongside the diagram so callers can seed ray endpoints on
/// the bisector.
pub fn random_bisectors(
    n: usize,
    lo: f64,
    hi: f64,
    known: Known,
    seed: u64,
) -> (Diagram, Vec<(EdgeId, Option<VertexId>)>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut diagram = Diagram::new();
    let mut edges = Vec::with_capacity(n);

    for _ in 0..n {
        let mx: f64 = rng.gen_range(lo..hi);
        let my: f64 = rng.gen_range(lo..hi);
        let hx: f64 = rng.gen_range(-3.0..3.0);
        let hy: f64 = rng.gen_range(-3.0..3.0);
        let left = diagram.add_site(mx - hx, my - hy);
        let right = diagram.add_site(mx + hx, my + hy);

        let seed_vertex = match known {
            Known::None => None,
            Known::Start | Known::End => Some(diagram.create_vertex(mx, my)),
        };
        let (v0, v1) = match known {
            Known::Start => (seed_vertex, None),
            Known::End => (None, seed_vertex),
            Known::None => (None, None),
        };
        let id = diagram
            .create_edge(left, right, v0, v1)
            .expect("generated handles are valid");
        edges.push((id, seed_vertex));
    }
    (diagram, edges)
}

/// Fully bounded segments with both endpoints uniformly in the given box.
pub fn random_segments(
    n: usize,
    x_range: (f64, f64),
    y_range: (f64, f64),
    seed: u64,
) -> (Diagram, Vec<EdgeId>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut diagram = Diagram::new();
    let a = diagram.add_site(-1.0, -1.0);
    let b = diagram.add_site(1.0, 1.0);

    let point = |rng: &mut ChaCha8Rng| {
        Point2::new(
            rng.gen_range(x_range.0..x_range.1),
            rng.gen_range(y_range.0..y_range.1),
        )
    };

    let edges = (0..n)
        .map(|_| {
            let p = point(&mut rng);
            let q = point(&mut rng);
            let v0 = diagram.create_vertex(p.x, p.y);
            let v1 = diagram.create_vertex(q.x, q.y);
            diagram
                .create_edge(a, b, Some(v0), Some(v1))
                .expect("generated handles are valid")
        })
        .collect();
    (diagram, edges)
}

/// Endpoint coordinates of every live edge, keyed by edge id.
pub fn snapshot(diagram: &Diagram) -> Vec<(EdgeId, Option<(Point2, Point2)>)> {
    diagram
        .iter_edges()
        .map(|(id, _)| (id, diagram.edge_segment(id)))
        .collect()
}

/// The two endpoints as an unordered pair, lower point first.
pub fn unordered(seg: (Point2, Point2)) -> (Point2, Point2) {
    let (a, b) = seg;
    if (a.x, a.y) <= (b.x, b.y) {
        (a, b)
    } else {
        (b, a)
    }
}

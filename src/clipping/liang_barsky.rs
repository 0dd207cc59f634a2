//! Liang–Barsky clipping of bounded edges.

use glam::DVec2;

use super::ClipWindow;
use crate::diagram::VertexRegistry;
use crate::edge::Edge;
use crate::VertexId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClipResult {
    /// Segment already inside the window. No vertices created.
    Unchanged,
    /// At least one endpoint was replaced by a new vertex on the boundary.
    Changed,
}

/// Parameter interval `[t0, t1]` of `a + t * (b - a)` that lies inside `w`.
///
/// Each side is a constraint `p * t <= q`. Boundaries are inclusive on all four
/// sides: a segment lying exactly on a window edge is kept. Returns `None` when
/// the interval is empty or an endpoint is not finite.
pub(crate) fn clip_interval(a: DVec2, b: DVec2, w: &ClipWindow) -> Option<(f64, f64)> {
    if !(a.is_finite() && b.is_finite()) {
        return None;
    }
    let d = b - a;
    let constraints = [
        (-d.x, a.x - w.x0()),
        (d.x, w.x1() - a.x),
        (-d.y, a.y - w.y0()),
        (d.y, w.y1() - a.y),
    ];

    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;
    for (p, q) in constraints {
        if p == 0.0 {
            // Parallel to this side.
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            if r > t0 {
                t0 = r;
            }
        } else {
            if r < t0 {
                return None;
            }
            if r < t1 {
                t1 = r;
            }
        }
    }
    Some((t0, t1))
}

/// A clipped edge: what happened and the endpoints it ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Clipped {
    pub(crate) result: ClipResult,
    pub(crate) start: VertexId,
    pub(crate) end: VertexId,
}

/// Clip a two-endpoint edge to the window, replacing moved endpoints.
///
/// Replacement points are clamped into the window, so every returned endpoint
/// satisfies `window.encloses` exactly. An endpoint a few ulps outside with a
/// parameter that rounded to 0 or 1 is replaced by its clamped copy. A second
/// clip of the result is therefore `Unchanged`.
///
/// Returns `None` if the edge is outside the window (or not fully resolved).
pub(crate) fn clip_edge(
    edge: &mut Edge,
    vertices: &mut VertexRegistry,
    window: &ClipWindow,
) -> Option<Clipped> {
    let (start, end) = edge.ends.pair()?;
    let a = vertices.get(start);
    let b = vertices.get(end);
    let (t0, t1) = clip_interval(a, b, window)?;

    let move_start = t0 > 0.0 || !window.encloses(a);
    let move_end = t1 < 1.0 || !window.encloses(b);
    if !move_start && !move_end {
        return Some(Clipped {
            result: ClipResult::Unchanged,
            start,
            end,
        });
    }

    let d = b - a;
    let start = if move_start {
        vertices.push(window.clamp(a + d * t0))
    } else {
        start
    };
    let end = if move_end {
        vertices.push(window.clamp(a + d * t1))
    } else {
        end
    };
    edge.ends.start = Some(start);
    edge.ends.end = Some(end);
    Some(Clipped {
        result: ClipResult::Changed,
        start,
        end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Diagram, EdgeId, Point2};

    fn window() -> ClipWindow {
        ClipWindow::new(0.0, 0.0, 10.0, 10.0).unwrap()
    }

    fn segment_edge(d: &mut Diagram, a: (f64, f64), b: (f64, f64)) -> EdgeId {
        let s0 = d.add_site(0.0, 0.0);
        let s1 = d.add_site(1.0, 1.0);
        let v0 = d.create_vertex(a.0, a.1);
        let v1 = d.create_vertex(b.0, b.1);
        d.create_edge(s0, s1, Some(v0), Some(v1)).unwrap()
    }

    fn clip(d: &mut Diagram, id: EdgeId) -> Option<ClipResult> {
        let edge = d.edges[id.index()].as_mut().unwrap();
        let clipped = clip_edge(edge, &mut d.vertices, &window())?;
        assert_eq!(
            edge.ends.pair(),
            Some((clipped.start, clipped.end)),
            "returned endpoints must match the stored ones"
        );
        Some(clipped.result)
    }

    #[test]
    fn test_interval_inside() {
        let w = window();
        assert_eq!(
            clip_interval(DVec2::new(1.0, 1.0), DVec2::new(9.0, 9.0), &w),
            Some((0.0, 1.0))
        );
    }

    #[test]
    fn test_interval_crossing() {
        let w = window();
        let (t0, t1) = clip_interval(DVec2::new(-5.0, 5.0), DVec2::new(15.0, 5.0), &w).unwrap();
        assert_eq!(t0, 0.25);
        assert_eq!(t1, 0.75);
    }

    #[test]
    fn test_interval_parallel_outside() {
        let w = window();
        assert_eq!(
            clip_interval(DVec2::new(-1.0, 0.0), DVec2::new(-1.0, 10.0), &w),
            None
        );
        assert_eq!(
            clip_interval(DVec2::new(0.0, 11.0), DVec2::new(10.0, 11.0), &w),
            None
        );
    }

    #[test]
    fn test_interval_on_boundary_is_kept() {
        let w = window();
        for (a, b) in [
            ((0.0, 0.0), (0.0, 10.0)),
            ((10.0, 0.0), (10.0, 10.0)),
            ((0.0, 0.0), (10.0, 0.0)),
            ((0.0, 10.0), (10.0, 10.0)),
        ] {
            assert_eq!(
                clip_interval(DVec2::new(a.0, a.1), DVec2::new(b.0, b.1), &w),
                Some((0.0, 1.0)),
                "boundary segment {a:?}-{b:?}"
            );
        }
    }

    #[test]
    fn test_interval_diagonal_miss() {
        // Crosses both slabs but never the window.
        let w = window();
        assert_eq!(
            clip_interval(DVec2::new(-5.0, 8.0), DVec2::new(8.0, 21.0), &w),
            None
        );
    }

    #[test]
    fn test_clip_edge_horizontal_example() {
        let mut d = Diagram::new();
        let e = segment_edge(&mut d, (-5.0, 5.0), (15.0, 5.0));
        assert_eq!(clip(&mut d, e), Some(ClipResult::Changed));
        assert_eq!(
            d.edge_segment(e),
            Some((Point2::new(0.0, 5.0), Point2::new(10.0, 5.0)))
        );
        assert_eq!(d.num_vertices(), 4);
    }

    #[test]
    fn test_clip_edge_one_side() {
        let mut d = Diagram::new();
        let e = segment_edge(&mut d, (5.0, 5.0), (5.0, 20.0));
        let start = d.edge(e).unwrap().ends().start;
        assert_eq!(clip(&mut d, e), Some(ClipResult::Changed));
        assert_eq!(d.edge(e).unwrap().ends().start, start);
        assert_eq!(
            d.edge_segment(e),
            Some((Point2::new(5.0, 5.0), Point2::new(5.0, 10.0)))
        );
        assert_eq!(d.num_vertices(), 3);
    }

    #[test]
    fn test_clip_edge_inside_is_unchanged() {
        let mut d = Diagram::new();
        let e = segment_edge(&mut d, (1.0, 2.0), (3.0, 4.0));
        let before = d.edge(e).unwrap().ends();
        assert_eq!(clip(&mut d, e), Some(ClipResult::Unchanged));
        assert_eq!(d.edge(e).unwrap().ends(), before);
        assert_eq!(d.num_vertices(), 2);
    }

    #[test]
    fn test_clip_edge_outside() {
        let mut d = Diagram::new();
        let e = segment_edge(&mut d, (11.0, 11.0), (20.0, 15.0));
        assert_eq!(clip(&mut d, e), None);
        assert_eq!(d.num_vertices(), 2);
    }

    #[test]
    fn test_clip_edge_needs_both_endpoints() {
        let mut d = Diagram::new();
        let s0 = d.add_site(0.0, 0.0);
        let s1 = d.add_site(1.0, 1.0);
        let v = d.create_vertex(5.0, 5.0);
        let e = d.create_edge(s0, s1, Some(v), None).unwrap();
        assert_eq!(clip(&mut d, e), None);
    }

    #[test]
    fn test_interval_rejects_non_finite() {
        let w = window();
        assert_eq!(
            clip_interval(DVec2::new(f64::NAN, 10.0), DVec2::new(f64::NAN, 0.0), &w),
            None
        );
        assert_eq!(
            clip_interval(DVec2::new(f64::NEG_INFINITY, 5.0), DVec2::new(5.0, 5.0), &w),
            None
        );
    }

    #[test]
    fn test_clip_edge_snaps_stray_endpoint() {
        // One ulp past the right edge, far from the start: the parameter rounds to 1.
        let mut d = Diagram::new();
        let stray = 10.0f64.next_up();
        let e = segment_edge(&mut d, (-1e6, 5.0), (stray, 5.0));
        assert_eq!(clip(&mut d, e), Some(ClipResult::Changed));
        let (p, q) = d.edge_segment(e).unwrap();
        assert!(p.x >= 0.0 && p.x < 1e-9, "{p:?}");
        assert_eq!(p.y, 5.0);
        assert_eq!(q, Point2::new(10.0, 5.0));
        assert_eq!(clip(&mut d, e), Some(ClipResult::Unchanged));
    }

    #[test]
    fn test_clip_edge_result_is_stable() {
        let mut d = Diagram::new();
        let e = segment_edge(&mut d, (-3.7, 0.3), (12.9, 9.1));
        assert_eq!(clip(&mut d, e), Some(ClipResult::Changed));
        let vertices = d.num_vertices();
        let ends = d.edge(e).unwrap().ends();
        assert_eq!(clip(&mut d, e), Some(ClipResult::Unchanged));
        assert_eq!(d.num_vertices(), vertices);
        assert_eq!(d.edge(e).unwrap().ends(), ends);
    }
}

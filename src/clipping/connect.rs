//! Bounding of bisector rays and lines by the clip window.
//!
//! An edge produced by the sweep may still be missing one or both endpoints. The
//! missing ones are placed where the bisector line crosses the window boundary.
//! Which boundary is "near" follows from the side the left site lies on: walking
//! from the near endpoint to the far one keeps the left site on the left.

use glam::DVec2;

use super::ClipWindow;
use crate::diagram::{Cell, VertexRegistry};
use crate::edge::Edge;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Connection {
    /// Both endpoints were already resolved; nothing was created.
    AlreadyBounded,
    /// Missing endpoints were placed on the window boundary.
    Extended,
}

/// The perpendicular bisector of two sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum BisectorLine {
    /// Sites share a y coordinate: the line `x = x`.
    Vertical { x: f64 },
    /// Sites share an x coordinate: the line `y = y`.
    Horizontal { y: f64 },
    /// `|slope| > 1`, crosses the bottom and top edges first.
    Steep { slope: f64, intercept: f64 },
    /// `|slope| <= 1`, crosses the left and right edges first.
    Shallow { slope: f64, intercept: f64 },
}

impl BisectorLine {
    pub(crate) fn between(l: DVec2, r: DVec2) -> Self {
        let mid = (l + r) * 0.5;
        if r.y == l.y {
            return Self::Vertical { x: mid.x };
        }
        if r.x == l.x {
            return Self::Horizontal { y: mid.y };
        }
        let slope = (l.x - r.x) / (r.y - l.y);
        let intercept = mid.y - slope * mid.x;
        if slope < -1.0 || slope > 1.0 {
            Self::Steep { slope, intercept }
        } else {
            Self::Shallow { slope, intercept }
        }
    }
}

/// Window crossings of a bisector, ordered along its direction.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Span {
    near: DVec2,
    far: DVec2,
}

/// Fill the missing endpoint(s) of `edge`.
///
/// Returns `None` when the edge cannot be bounded: its line misses the window, an
/// existing endpoint lies beyond the far boundary, or it is a border edge with a
/// missing endpoint. Vertices created before a rejection are not reclaimed.
pub(crate) fn connect_edge(
    edge: &mut Edge,
    cells: &[Cell],
    vertices: &mut VertexRegistry,
    window: &ClipWindow,
) -> Option<Connection> {
    if edge.ends.is_complete() {
        return Some(Connection::AlreadyBounded);
    }
    let right = edge.right?;

    // Orient so the resolved endpoint, if any, is the near one.
    let (from, to, known, reversed) = match (edge.ends.start, edge.ends.end) {
        (None, Some(v)) => (right, edge.left, Some(v), true),
        (start, _) => (edge.left, right, start, false),
    };
    let l = cells[from.index()].position();
    let r = cells[to.index()].position();

    let line = BisectorLine::between(l, r);
    let span = window_span(line, l, r, window, known.map(|v| vertices.get(v)))?;

    let near = known.unwrap_or_else(|| vertices.push(span.near));
    let far = vertices.push(span.far);
    if reversed {
        edge.ends.start = Some(far);
        edge.ends.end = Some(near);
    } else {
        edge.ends.start = Some(near);
        edge.ends.end = Some(far);
    }
    Some(Connection::Extended)
}

fn window_span(
    line: BisectorLine,
    l: DVec2,
    r: DVec2,
    w: &ClipWindow,
    known: Option<DVec2>,
) -> Option<Span> {
    match line {
        BisectorLine::Vertical { x } => {
            // Half-open in x: a bisector along the right edge is dropped.
            if x < w.x0() || x >= w.x1() {
                return None;
            }
            along_y(|_| x, l.x > r.x, w, known)
        }
        BisectorLine::Steep { slope, intercept } => {
            along_y(|y| (y - intercept) / slope, l.x > r.x, w, known)
        }
        BisectorLine::Horizontal { y } => along_x(|_| y, l.y < r.y, w, known),
        BisectorLine::Shallow { slope, intercept } => {
            along_x(|x| slope * x + intercept, l.y < r.y, w, known)
        }
    }
}

/// Crossings with the bottom/top edges. `upward` runs from `y0` to `y1`.
fn along_y(
    x_at: impl Fn(f64) -> f64,
    upward: bool,
    w: &ClipWindow,
    known: Option<DVec2>,
) -> Option<Span> {
    let (near_y, far_y) = if upward {
        (w.y0(), w.y1())
    } else {
        (w.y1(), w.y0())
    };
    if let Some(p) = known {
        let beyond = if upward { p.y >= w.y1() } else { p.y < w.y0() };
        if beyond {
            return None;
        }
    }
    Some(Span {
        near: DVec2::new(x_at(near_y), near_y),
        far: DVec2::new(x_at(far_y), far_y),
    })
}

/// Crossings with the left/right edges. `rightward` runs from `x0` to `x1`.
fn along_x(
    y_at: impl Fn(f64) -> f64,
    rightward: bool,
    w: &ClipWindow,
    known: Option<DVec2>,
) -> Option<Span> {
    let (near_x, far_x) = if rightward {
        (w.x0(), w.x1())
    } else {
        (w.x1(), w.x0())
    };
    if let Some(p) = known {
        let beyond = if rightward { p.x >= w.x1() } else { p.x < w.x0() };
        if beyond {
            return None;
        }
    }
    Some(Span {
        near: DVec2::new(near_x, y_at(near_x)),
        far: DVec2::new(far_x, y_at(far_x)),
    })
}

//! The clip pass: bound, clip and prune every edge of a diagram.

use std::fmt;

use glam::DVec2;

use super::connect::{connect_edge, Connection};
use super::liang_barsky::{clip_edge, ClipResult};
use super::ClipWindow;
use crate::diagram::{Cell, VertexRegistry};
use crate::edge::Edge;
use crate::{Diagram, EdgeId};

/// Per-pass counters.
///
/// Removal is not an error: it is how edges outside the window (or collapsed by
/// clipping) leave the diagram. These counts make it observable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipReport {
    /// Live edges examined.
    pub visited: usize,
    /// Slots skipped because an earlier pass had already removed them.
    pub skipped_removed: usize,
    /// Edges that survived the pass.
    pub kept: usize,
    /// Survivors that had at least one endpoint placed on the window boundary.
    pub extended: usize,
    /// Survivors with at least one endpoint moved by the clipper.
    pub clipped: usize,
    /// Edges whose bisector could not be bounded by the window.
    pub removed_unconnectable: usize,
    /// Edges lying entirely outside the window.
    pub removed_outside: usize,
    /// Edges shorter than epsilon on both axes after clipping.
    pub removed_degenerate: usize,
    /// Vertices appended during the pass, including ones left unreferenced.
    pub vertices_created: usize,
}

impl ClipReport {
    /// Total number of edges removed by the pass.
    pub fn removed(&self) -> usize {
        self.removed_unconnectable + self.removed_outside + self.removed_degenerate
    }

    /// Returns true if the pass changed nothing.
    pub fn is_noop(&self) -> bool {
        self.removed() == 0 && self.extended == 0 && self.clipped == 0 && self.vertices_created == 0
    }
}

impl fmt::Display for ClipReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "kept {}/{} (extended {}, clipped {}), removed {} (unconnectable {}, outside {}, degenerate {}), {} new vertices",
            self.kept,
            self.visited,
            self.extended,
            self.clipped,
            self.removed(),
            self.removed_unconnectable,
            self.removed_outside,
            self.removed_degenerate,
            self.vertices_created
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Removal {
    Unconnectable,
    Outside,
    Degenerate,
}

#[derive(Debug, Clone, Copy)]
struct Kept {
    extended: bool,
    clipped: bool,
}

/// Endpoints closer than `epsilon` on both axes. NaN coordinates count as degenerate.
#[inline]
pub(crate) fn is_degenerate(a: DVec2, b: DVec2, epsilon: f64) -> bool {
    !((a.x - b.x).abs() > epsilon || (a.y - b.y).abs() > epsilon)
}

fn finalize_edge(
    edge: &mut Edge,
    cells: &[Cell],
    vertices: &mut VertexRegistry,
    window: &ClipWindow,
    epsilon: f64,
) -> Result<Kept, Removal> {
    let connection =
        connect_edge(edge, cells, vertices, window).ok_or(Removal::Unconnectable)?;
    let clipped = clip_edge(edge, vertices, window).ok_or(Removal::Outside)?;
    if is_degenerate(vertices.get(clipped.start), vertices.get(clipped.end), epsilon) {
        return Err(Removal::Degenerate);
    }
    Ok(Kept {
        extended: connection == Connection::Extended,
        clipped: clipped.result == ClipResult::Changed,
    })
}

/// Run the clip pass over every edge, highest index first.
///
/// Removal only tombstones the visited slot, so indices not yet visited are
/// unaffected and cell half-edge lists stay valid.
pub(crate) fn clip_pass(diagram: &mut Diagram, window: &ClipWindow) -> ClipReport {
    let epsilon = diagram.config.epsilon;
    let vertices_before = diagram.vertices.len();
    let mut report = ClipReport::default();

    for i in (0..diagram.edges.len()).rev() {
        let id = EdgeId::from_index(i);
        let Some(edge) = diagram.edges[i].as_mut() else {
            report.skipped_removed += 1;
            continue;
        };
        report.visited += 1;

        match finalize_edge(edge, &diagram.cells, &mut diagram.vertices, window, epsilon) {
            Ok(kept) => {
                report.kept += 1;
                report.extended += usize::from(kept.extended);
                report.clipped += usize::from(kept.clipped);
            }
            Err(reason) => {
                tracing::trace!(edge = %id, ?reason, "removing edge");
                match reason {
                    Removal::Unconnectable => report.removed_unconnectable += 1,
                    Removal::Outside => report.removed_outside += 1,
                    Removal::Degenerate => report.removed_degenerate += 1,
                }
                diagram.remove_edge(id);
            }
        }
    }

    report.vertices_created = diagram.vertices.len() - vertices_before;
    tracing::debug!(
        x0 = window.x0(),
        y0 = window.y0(),
        x1 = window.x1(),
        y1 = window.y1(),
        "clip pass: {report}"
    );
    report
}

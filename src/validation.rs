//! Post-pass validation for clipped diagrams.
//!
//! Checks that every surviving edge is a proper window-bounded segment and that
//! cell half-edge lists agree with the edges they reference. Useful for testing
//! and for catching numerical issues in the bounding step.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::clipping::ClipWindow;
use crate::{Diagram, EdgeId};

/// Detailed validation report for a clipped diagram.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Number of edge slots, tombstones included.
    pub num_edges: usize,
    /// Number of edges not removed.
    pub live_edges: usize,
    /// Number of vertices in the registry.
    pub num_vertices: usize,

    /// Live edges missing one or both endpoints.
    pub unresolved_edges: usize,
    /// Endpoints referencing a vertex outside the registry.
    pub dangling_endpoints: usize,
    /// Endpoints lying outside the window by more than epsilon.
    pub endpoints_outside: usize,
    /// Live edges shorter than epsilon on both axes.
    pub degenerate_edges: usize,

    /// Bisector edges missing from one of their two cells' lists, or listed by a
    /// cell that does not own them.
    pub mislinked_halfedges: usize,
    /// Half-edge entries pointing at removed edges (expected after a pass).
    pub halfedges_to_removed: usize,
    /// Vertices referenced by no live edge (includes abandoned intermediates).
    pub orphan_vertices: usize,
}

impl ValidationReport {
    /// Every live edge is a resolved, non-degenerate segment inside the window, and
    /// the half-edge lists are consistent.
    pub fn is_valid(&self) -> bool {
        self.unresolved_edges == 0
            && self.dangling_endpoints == 0
            && self.endpoints_outside == 0
            && self.degenerate_edges == 0
            && self.mislinked_halfedges == 0
    }

    /// Format a summary of any issues found.
    pub fn summary(&self) -> String {
        if !self.is_valid() {
            let mut issues = Vec::new();
            if self.unresolved_edges > 0 {
                issues.push(format!("{} unresolved edges", self.unresolved_edges));
            }
            if self.dangling_endpoints > 0 {
                issues.push(format!("{} dangling endpoints", self.dangling_endpoints));
            }
            if self.endpoints_outside > 0 {
                issues.push(format!(
                    "{} endpoints outside window",
                    self.endpoints_outside
                ));
            }
            if self.degenerate_edges > 0 {
                issues.push(format!("{} degenerate edges", self.degenerate_edges));
            }
            if self.mislinked_halfedges > 0 {
                issues.push(format!(
                    "{} mislinked half-edges",
                    self.mislinked_halfedges
                ));
            }
            return issues.join(", ");
        }

        if self.orphan_vertices == 0 && self.halfedges_to_removed == 0 {
            "Valid".to_string()
        } else {
            format!(
                "Valid ({} orphan vertices, {} half-edges to removed edges)",
                self.orphan_vertices, self.halfedges_to_removed
            )
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (E={}/{}, V={})",
            self.summary(),
            self.live_edges,
            self.num_edges,
            self.num_vertices
        )
    }
}

/// Validate a diagram after a clip pass with `window`.
pub fn validate(diagram: &Diagram, window: &ClipWindow) -> ValidationReport {
    let epsilon = diagram.config().epsilon;
    let mut report = ValidationReport {
        num_edges: diagram.num_edges(),
        num_vertices: diagram.num_vertices(),
        ..Default::default()
    };

    let mut referenced = vec![false; diagram.num_vertices()];
    for (_, edge) in diagram.iter_edges() {
        report.live_edges += 1;
        let ends = edge.ends();

        let mut points = Vec::with_capacity(2);
        for v in [ends.start, ends.end].into_iter().flatten() {
            match diagram.vertex(v) {
                Some(p) => {
                    referenced[v.index()] = true;
                    if !window.contains(p, epsilon) {
                        report.endpoints_outside += 1;
                    }
                    points.push(p);
                }
                None => report.dangling_endpoints += 1,
            }
        }

        if !ends.is_complete() {
            report.unresolved_edges += 1;
        } else if let [a, b] = points.as_slice() {
            let long = (a.x - b.x).abs() > epsilon || (a.y - b.y).abs() > epsilon;
            if !long {
                report.degenerate_edges += 1;
            }
        }
    }
    report.orphan_vertices = referenced.iter().filter(|r| !**r).count();

    let lists: Vec<FxHashSet<EdgeId>> = diagram
        .iter_cells()
        .map(|(_, cell)| cell.halfedges().iter().copied().collect())
        .collect();

    for (site, cell) in diagram.iter_cells() {
        for &id in cell.halfedges() {
            if diagram.is_removed(id) {
                report.halfedges_to_removed += 1;
                continue;
            }
            match diagram.edge(id) {
                Some(edge) if edge.left() == site || edge.right() == Some(site) => {}
                _ => report.mislinked_halfedges += 1,
            }
        }
    }
    for (id, edge) in diagram.iter_edges() {
        let Some(right) = edge.right() else {
            continue;
        };
        for site in [edge.left(), right] {
            let listed = lists
                .get(site.index())
                .is_some_and(|set| set.contains(&id));
            if !listed {
                report.mislinked_halfedges += 1;
            }
        }
    }

    report
}

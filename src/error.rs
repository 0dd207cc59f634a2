//! Error types for diagram construction.
//!
//! The clip pass itself never fails: edges that cannot be bounded or clipped are
//! tombstoned and counted in [`crate::ClipReport`]. Errors are reserved for misuse of
//! the construction API (stale handles, mismatched orientations, bad windows).

use crate::{EdgeId, SiteId, VertexId};

/// Errors that can occur while building or clipping a diagram.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DiagramError {
    #[error("unknown site: {0}")]
    UnknownSite(SiteId),

    #[error("unknown vertex: {0}")]
    UnknownVertex(VertexId),

    #[error("unknown edge: {0}")]
    UnknownEdge(EdgeId),

    /// The edge slot exists but was tombstoned by a clip pass.
    #[error("edge {0} has been removed")]
    RemovedEdge(EdgeId),

    /// A bisector needs two distinct sites.
    #[error("site {0} cannot bisect itself")]
    SelfBisector(SiteId),

    /// `set_edge_end` was called with a site pair that does not match the edge.
    #[error("edge {edge} does not separate sites {left} and {right}")]
    OrientationMismatch {
        edge: EdgeId,
        left: SiteId,
        right: SiteId,
    },

    /// Border edges take their endpoints at creation only.
    #[error("edge {0} is a border edge")]
    BorderEdge(EdgeId),

    #[error("invalid clip window [{x0}, {x1}] x [{y0}, {y1}]")]
    InvalidWindow { x0: f64, y0: f64, x1: f64, y1: f64 },

    #[error("invalid epsilon: {0} (must be finite and non-negative)")]
    InvalidEpsilon(f64),
}

pub type Result<T> = std::result::Result<T, DiagramError>;

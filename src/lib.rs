//! Window clipping for planar Voronoi diagrams.
//!
//! A sweep-line construction leaves each pair of neighbouring sites with a
//! bisector edge that has zero, one or two endpoints. This crate turns those
//! rays and lines into finite segments inside a rectangular window, clips
//! bounded segments with Liang–Barsky, and drops edges that end up outside or
//! degenerate.
//!
//! # Example
//!
//! ```
//! use voronoi_edges::{ClipWindow, Diagram};
//!
//! let mut diagram = Diagram::new();
//! let a = diagram.add_site(2.0, 2.0);
//! let b = diagram.add_site(8.0, 2.0);
//! let edge = diagram.create_edge(a, b, None, None).unwrap();
//!
//! let window = ClipWindow::new(0.0, 0.0, 10.0, 10.0).unwrap();
//! let report = diagram.clip_edges(&window);
//! assert_eq!(report.kept, 1);
//!
//! let (p, q) = diagram.edge_segment(edge).unwrap();
//! assert_eq!((p.x, q.x), (5.0, 5.0));
//! assert_eq!(p.y.min(q.y), 0.0);
//! assert_eq!(p.y.max(q.y), 10.0);
//! ```

mod clipping;
mod diagram;
mod edge;
mod error;
mod types;
pub mod validation;

pub use clipping::{ClipReport, ClipWindow};
pub use diagram::{Cell, Diagram};
pub use edge::{Edge, EdgeEnds};
pub use error::{DiagramError, Result};
pub use types::{EdgeId, Point2, Point2Like, SiteId, VertexId};

/// Default tolerance for degenerate-edge detection.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Environment variable read by [`DiagramConfig::from_env`].
pub const EPSILON_ENV_VAR: &str = "VORONOI_EDGES_EPSILON";

/// Configuration for a [`Diagram`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramConfig {
    /// Edges whose endpoints differ by no more than this on both axes are removed
    /// by the clip pass.
    ///
    /// Must be finite and non-negative. Zero only removes exact zero-length edges.
    pub epsilon: f64,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl DiagramConfig {
    /// Defaults, with `epsilon` overridden by `VORONOI_EDGES_EPSILON` when it parses.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(epsilon) = std::env::var(EPSILON_ENV_VAR)
            .ok()
            .and_then(|s| s.trim().parse::<f64>().ok())
        {
            config.epsilon = epsilon;
        }
        config
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.epsilon.is_finite() && self.epsilon >= 0.0 {
            Ok(())
        } else {
            Err(DiagramError::InvalidEpsilon(self.epsilon))
        }
    }
}

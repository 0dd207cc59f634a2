//! Edge records.

use crate::{SiteId, VertexId};

/// Endpoint slots of an edge, keyed by orientation.
///
/// `start` is the endpoint assigned with orientation `(left, right)`, `end` the one
/// assigned with `(right, left)`. Which slot a vertex lands in never depends on the
/// order in which endpoints were reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeEnds {
    pub start: Option<VertexId>,
    pub end: Option<VertexId>,
}

impl EdgeEnds {
    #[inline]
    pub fn new(start: Option<VertexId>, end: Option<VertexId>) -> Self {
        Self { start, end }
    }

    /// Both endpoints are resolved.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Neither endpoint is resolved (a full line).
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Both endpoints, if resolved.
    #[inline]
    pub fn pair(&self) -> Option<(VertexId, VertexId)> {
        Some((self.start?, self.end?))
    }
}

/// A diagram edge.
///
/// Bisector edges separate `left` from `right`; both are fixed at creation. Border
/// edges (pieces of the clip window's boundary) have no `right` site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub(crate) left: SiteId,
    pub(crate) right: Option<SiteId>,
    pub(crate) ends: EdgeEnds,
}

impl Edge {
    pub(crate) fn bisector(left: SiteId, right: SiteId) -> Self {
        Self {
            left,
            right: Some(right),
            ends: EdgeEnds::default(),
        }
    }

    pub(crate) fn border(left: SiteId, start: Option<VertexId>, end: Option<VertexId>) -> Self {
        Self {
            left,
            right: None,
            ends: EdgeEnds::new(start, end),
        }
    }

    #[inline]
    pub fn left(&self) -> SiteId {
        self.left
    }

    /// The site on the other side; `None` for border edges.
    #[inline]
    pub fn right(&self) -> Option<SiteId> {
        self.right
    }

    #[inline]
    pub fn ends(&self) -> EdgeEnds {
        self.ends
    }

    #[inline]
    pub fn is_border(&self) -> bool {
        self.right.is_none()
    }

    /// Given one incident site, return the one across the edge.
    pub fn other_site(&self, site: SiteId) -> Option<SiteId> {
        match self.right {
            Some(right) if site == self.left => Some(right),
            Some(right) if site == right => Some(self.left),
            _ => None,
        }
    }
}

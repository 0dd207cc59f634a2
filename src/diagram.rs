//! Planar Voronoi diagram arena: vertices, edges and cells.

use glam::DVec2;

use crate::clipping::{self, ClipReport, ClipWindow};
use crate::edge::Edge;
use crate::error::{DiagramError, Result};
use crate::{DiagramConfig, EdgeId, Point2, Point2Like, SiteId, VertexId};

/// Append-only vertex storage.
///
/// Identity is positional: two vertices with equal coordinates are still distinct.
#[derive(Debug, Clone, Default)]
pub(crate) struct VertexRegistry {
    points: Vec<DVec2>,
}

impl VertexRegistry {
    #[inline]
    pub(crate) fn push(&mut self, p: DVec2) -> VertexId {
        let id = VertexId::from_index(self.points.len());
        self.points.push(p);
        id
    }

    /// Lookup for handles minted by this registry.
    #[inline]
    pub(crate) fn get(&self, id: VertexId) -> DVec2 {
        self.points[id.index()]
    }

    #[inline]
    pub(crate) fn try_get(&self, id: VertexId) -> Option<DVec2> {
        self.points.get(id.index()).copied()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.points.len()
    }
}

/// A site together with its cell boundary list.
#[derive(Debug, Clone)]
pub struct Cell {
    position: DVec2,
    halfedges: Vec<EdgeId>,
}

impl Cell {
    /// The generator point of this cell.
    #[inline]
    pub fn site(&self) -> Point2 {
        Point2::from_dvec2(self.position)
    }

    /// Edge handles in insertion order. May reference tombstoned edges after a clip pass.
    #[inline]
    pub fn halfedges(&self) -> &[EdgeId] {
        &self.halfedges
    }

    #[inline]
    pub(crate) fn position(&self) -> DVec2 {
        self.position
    }
}

/// A planar Voronoi diagram under construction or after clipping.
///
/// The diagram is an arena: vertices, edges and cells are addressed by stable
/// handles. Edges removed by a clip pass leave a tombstone so that cell half-edge
/// lists keep pointing at the right slots.
#[derive(Debug, Clone)]
pub struct Diagram {
    pub(crate) vertices: VertexRegistry,
    pub(crate) edges: Vec<Option<Edge>>,
    pub(crate) cells: Vec<Cell>,
    pub(crate) config: DiagramConfig,
}

impl Default for Diagram {
    fn default() -> Self {
        Self::new()
    }
}

impl Diagram {
    /// Create an empty diagram with default settings.
    pub fn new() -> Self {
        Self {
            vertices: VertexRegistry::default(),
            edges: Vec::new(),
            cells: Vec::new(),
            config: DiagramConfig::default(),
        }
    }

    /// Create an empty diagram with explicit configuration.
    pub fn with_config(config: DiagramConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// Create a diagram with one cell per input site, in order.
    pub fn from_sites<P: Point2Like>(sites: &[P]) -> Self {
        let mut diagram = Self::new();
        for p in sites {
            diagram.add_site(p.x(), p.y());
        }
        diagram
    }

    #[inline]
    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    /// Register a site and its (empty) cell.
    pub fn add_site(&mut self, x: f64, y: f64) -> SiteId {
        let id = SiteId::from_index(self.cells.len());
        self.cells.push(Cell {
            position: DVec2::new(x, y),
            halfedges: Vec::new(),
        });
        id
    }

    /// Append a vertex. Never deduplicates.
    #[inline]
    pub fn create_vertex(&mut self, x: f64, y: f64) -> VertexId {
        self.vertices.push(DVec2::new(x, y))
    }

    /// Create a bisector edge between `left` and `right`.
    ///
    /// `v0` is assigned with orientation `(left, right)` and `v1` with
    /// `(right, left)`. The edge is appended to `left`'s half-edge list, then to
    /// `right`'s.
    pub fn create_edge(
        &mut self,
        left: SiteId,
        right: SiteId,
        v0: Option<VertexId>,
        v1: Option<VertexId>,
    ) -> Result<EdgeId> {
        self.check_site(left)?;
        self.check_site(right)?;
        if left == right {
            return Err(DiagramError::SelfBisector(left));
        }
        for v in [v0, v1].into_iter().flatten() {
            self.check_vertex(v)?;
        }

        let id = EdgeId::from_index(self.edges.len());
        self.edges.push(Some(Edge::bisector(left, right)));
        if let Some(v) = v0 {
            self.set_edge_end(id, left, right, v)?;
        }
        if let Some(v) = v1 {
            self.set_edge_end(id, right, left, v)?;
        }
        self.cells[left.index()].halfedges.push(id);
        self.cells[right.index()].halfedges.push(id);
        Ok(id)
    }

    /// Create a border edge owned by `left` alone.
    ///
    /// Endpoints are stored as given. The edge is not linked into any half-edge
    /// list; polygon assembly places it with [`Diagram::insert_halfedge`].
    pub fn create_border_edge(
        &mut self,
        left: SiteId,
        v0: Option<VertexId>,
        v1: Option<VertexId>,
    ) -> Result<EdgeId> {
        self.check_site(left)?;
        for v in [v0, v1].into_iter().flatten() {
            self.check_vertex(v)?;
        }
        let id = EdgeId::from_index(self.edges.len());
        self.edges.push(Some(Edge::border(left, v0, v1)));
        Ok(id)
    }

    /// Record `vertex` as the endpoint of `edge` seen with orientation `(left, right)`.
    ///
    /// Matching the edge's own orientation fills `start`, the reverse fills `end`.
    /// A previously stored vertex in that slot is replaced.
    pub fn set_edge_end(
        &mut self,
        edge: EdgeId,
        left: SiteId,
        right: SiteId,
        vertex: VertexId,
    ) -> Result<()> {
        self.check_vertex(vertex)?;
        let e = self.edge_mut(edge)?;
        let Some(edge_right) = e.right else {
            return Err(DiagramError::BorderEdge(edge));
        };
        if (left, right) == (e.left, edge_right) {
            e.ends.start = Some(vertex);
        } else if (left, right) == (edge_right, e.left) {
            e.ends.end = Some(vertex);
        } else {
            return Err(DiagramError::OrientationMismatch { edge, left, right });
        }
        Ok(())
    }

    /// Insert `edge` into `site`'s half-edge list at `position` (clamped to the list length).
    pub fn insert_halfedge(&mut self, site: SiteId, position: usize, edge: EdgeId) -> Result<()> {
        self.check_site(site)?;
        if edge.index() >= self.edges.len() {
            return Err(DiagramError::UnknownEdge(edge));
        }
        let halfedges = &mut self.cells[site.index()].halfedges;
        let at = position.min(halfedges.len());
        halfedges.insert(at, edge);
        Ok(())
    }

    /// Bound and clip every edge to `window`, removing what cannot be kept.
    pub fn clip_edges(&mut self, window: &ClipWindow) -> ClipReport {
        clipping::clip_pass(self, window)
    }

    /// Like [`Diagram::clip_edges`], validating the raw window bounds first.
    pub fn clip_edges_to(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) -> Result<ClipReport> {
        let window = ClipWindow::new(x0, y0, x1, y1)?;
        Ok(self.clip_edges(&window))
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edge slots, tombstones included.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Number of edges that have not been removed.
    pub fn num_live_edges(&self) -> usize {
        self.edges.iter().filter(|e| e.is_some()).count()
    }

    #[inline]
    pub fn num_sites(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn vertex(&self, id: VertexId) -> Option<Point2> {
        self.vertices.try_get(id).map(Point2::from_dvec2)
    }

    /// The edge behind `id`, or `None` if unknown or removed.
    #[inline]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index()).and_then(Option::as_ref)
    }

    /// True if the slot exists and was tombstoned.
    pub fn is_removed(&self, id: EdgeId) -> bool {
        matches!(self.edges.get(id.index()), Some(None))
    }

    #[inline]
    pub fn cell(&self, site: SiteId) -> Option<&Cell> {
        self.cells.get(site.index())
    }

    /// Iterate over all cells with their site handles.
    pub fn iter_cells(&self) -> impl Iterator<Item = (SiteId, &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, c)| (SiteId::from_index(i), c))
    }

    /// Iterate over live edges in index order.
    pub fn iter_edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.as_ref().map(|e| (EdgeId::from_index(i), e)))
    }

    /// Live half-edges of a cell, in list order. Empty for unknown sites.
    pub fn cell_halfedges(&self, site: SiteId) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.cells
            .get(site.index())
            .map(|c| c.halfedges.as_slice())
            .unwrap_or(&[])
            .iter()
            .filter_map(move |&id| self.edge(id).map(|e| (id, e)))
    }

    /// Endpoint coordinates of a live edge with both endpoints resolved.
    pub fn edge_segment(&self, id: EdgeId) -> Option<(Point2, Point2)> {
        let (a, b) = self.edge(id)?.ends.pair()?;
        Some((self.vertex(a)?, self.vertex(b)?))
    }

    pub(crate) fn remove_edge(&mut self, id: EdgeId) {
        if let Some(slot) = self.edges.get_mut(id.index()) {
            *slot = None;
        }
    }

    fn edge_mut(&mut self, id: EdgeId) -> Result<&mut Edge> {
        match self.edges.get_mut(id.index()) {
            Some(Some(e)) => Ok(e),
            Some(None) => Err(DiagramError::RemovedEdge(id)),
            None => Err(DiagramError::UnknownEdge(id)),
        }
    }

    fn check_site(&self, id: SiteId) -> Result<()> {
        if id.index() < self.cells.len() {
            Ok(())
        } else {
            Err(DiagramError::UnknownSite(id))
        }
    }

    fn check_vertex(&self, id: VertexId) -> Result<()> {
        if id.index() < self.vertices.len() {
            Ok(())
        } else {
            Err(DiagramError::UnknownVertex(id))
        }
    }
}

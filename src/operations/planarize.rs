use tracing::{debug, debug_span};

use crate::error::{OperationError, Result};
use crate::graph::{dedup_edges, EdgeKey, PlaneGraph};
use crate::intersection::{EngineStrategy, IntersectionEngine};
use crate::math::Point2;

use super::classify::classify_intersections;
use super::ledger::{Augmenter, SplitLedger};
use super::project::project_segments;

/// Default per-axis distance at which an intersection snaps to an existing node.
pub const DEFAULT_VERTEX_MATCH_THRESHOLD: f64 = 1e-6;

/// Tunables for a [`Planarize`] run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarizeOptions {
    /// Per-axis distance within which an intersection reuses an existing node.
    pub vertex_match_threshold: f64,
    /// Intersection engine used by [`Planarize::execute`].
    pub strategy: EngineStrategy,
}

impl Default for PlanarizeOptions {
    fn default() -> Self {
        Self {
            vertex_match_threshold: DEFAULT_VERTEX_MATCH_THRESHOLD,
            strategy: EngineStrategy::default(),
        }
    }
}

/// Result of a detailed planarization run.
#[derive(Debug, Clone)]
pub struct PlanarizeOutcome {
    /// The planarized graph.
    pub graph: PlaneGraph,
    /// Fragments of every original edge that was split.
    pub ledger: SplitLedger,
    /// Number of vertices appended to the node list.
    pub vertices_added: usize,
}

/// Makes a plane graph topologically planar.
///
/// Every point where edges cross becomes a vertex shared by those edges:
/// either an existing node within the vertex-match threshold, or a new node
/// appended after the input nodes. The input is never modified.
pub struct Planarize<'a> {
    nodes: &'a [Point2],
    edges: &'a [EdgeKey],
    options: PlanarizeOptions,
}

impl<'a> Planarize<'a> {
    /// Creates a new `Planarize` operation with default options.
    #[must_use]
    pub fn new(nodes: &'a [Point2], edges: &'a [EdgeKey]) -> Self {
        Self {
            nodes,
            edges,
            options: PlanarizeOptions::default(),
        }
    }

    /// Creates a new `Planarize` operation over `graph`.
    #[must_use]
    pub fn from_graph(graph: &'a PlaneGraph) -> Self {
        Self::new(&graph.nodes, &graph.edges)
    }

    /// Sets the per-axis vertex-match threshold.
    #[must_use]
    pub fn with_threshold(mut self, vertex_match_threshold: f64) -> Self {
        self.options.vertex_match_threshold = vertex_match_threshold;
        self
    }

    /// Sets the bundled intersection engine used by [`execute`](Self::execute).
    #[must_use]
    pub fn with_strategy(mut self, strategy: EngineStrategy) -> Self {
        self.options.strategy = strategy;
        self
    }

    /// Replaces all options at once.
    #[must_use]
    pub fn with_options(mut self, options: PlanarizeOptions) -> Self {
        self.options = options;
        self
    }

    /// Executes the planarization with the configured engine.
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold is negative or not finite, or the
    /// intersection engine fails.
    pub fn execute(&self) -> Result<PlaneGraph> {
        Ok(self.execute_detailed()?.graph)
    }

    /// Like [`execute`](Self::execute), but also returns the split ledger and
    /// the number of vertices added.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub fn execute_detailed(&self) -> Result<PlanarizeOutcome> {
        self.execute_with(&self.options.strategy)
    }

    /// Executes the planarization with a caller-supplied intersection engine.
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold is negative or not finite. Engine
    /// errors are propagated unchanged.
    pub fn execute_with<E: IntersectionEngine>(&self, engine: &E) -> Result<PlanarizeOutcome> {
        let threshold = self.options.vertex_match_threshold;
        if !(threshold.is_finite() && threshold >= 0.0) {
            return Err(OperationError::InvalidInput(format!(
                "vertex match threshold must be finite and non-negative, got {threshold}"
            ))
            .into());
        }

        let span = debug_span!(
            "planarize",
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            threshold
        );
        let _enter = span.enter();

        let edges = dedup_edges(self.edges);
        let segments = project_segments(self.nodes, &edges);
        let intersections = engine.find_intersections(&segments)?;
        let augmentations = classify_intersections(self.nodes, &intersections, threshold);
        debug!(
            segments = segments.len(),
            intersections = intersections.len(),
            augmentations = augmentations.len(),
            "classified intersections"
        );

        let mut augmenter = Augmenter::new(self.nodes.to_vec(), edges);
        let splits = augmenter.apply_all(&augmentations);
        let vertices_added = augmenter.vertices_added();
        let (nodes, edges, ledger) = augmenter.finish();
        let edges = dedup_edges(&edges);
        debug!(
            splits,
            vertices_added,
            edges = edges.len(),
            "applied augmentations"
        );

        Ok(PlanarizeOutcome {
            graph: PlaneGraph::new(nodes, edges),
            ledger,
            vertices_added,
        })
    }
}

/// Planarizes `nodes`/`edges` with the default engine.
///
/// Shorthand for `Planarize::new(nodes, edges).with_threshold(t).execute()`.
///
/// # Errors
///
/// See [`Planarize::execute`].
pub fn planarize(
    nodes: &[Point2],
    edges: &[EdgeKey],
    vertex_match_threshold: f64,
) -> Result<PlaneGraph> {
    Planarize::new(nodes, edges)
        .with_threshold(vertex_match_threshold)
        .execute()
}

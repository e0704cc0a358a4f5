mod classify;
mod ledger;
mod planarize;
mod project;

pub use classify::{
    classify_intersection, classify_intersections, dedup_augmentations, find_matching_vertex,
    Augmentation,
};
pub use ledger::{route_edges_through_vertex, Augmenter, EdgeSet, SplitLedger};
pub use planarize::{
    planarize, Planarize, PlanarizeOptions, PlanarizeOutcome, DEFAULT_VERTEX_MATCH_THRESHOLD,
};
pub use project::project_segments;

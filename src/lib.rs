pub mod error;
pub mod graph;
pub mod intersection;
pub mod math;
pub mod operations;

pub use error::{PlanarizeError, Result};
pub use graph::{EdgeKey, PlaneGraph};
pub use operations::{planarize, Planarize, PlanarizeOptions};

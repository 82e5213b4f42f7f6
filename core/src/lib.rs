pub mod error;
pub mod gender_ratio;
pub mod graph;
pub mod index;
pub mod neighbors;
pub mod pathfinding;
pub mod record;
pub mod search_config;
pub mod string_normalization;

// Re-export commonly used items
pub use error::CastError;
pub use gender_ratio::{summarize, GenderRatioEvaluator, MovieRatio, RatioSummary, DEFAULT_FEMALE_THRESHOLD};
pub use graph::{BipartiteGraph, VertexId, VertexKind};
pub use index::{CastIndex, IndexBuilder};
pub use neighbors::{cast_of, movies_of};
pub use pathfinding::{bfs_find_path, degree_of_separation, Separation, SeparationReport, UnreachableReason};
pub use record::{CastRecord, Gender};
pub use search_config::SearchConfig;

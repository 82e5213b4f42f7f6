pub mod bfs;
pub mod separation;
pub mod utils;

// Re-export the public functions
pub use bfs::bfs_find_path;
pub use separation::{degree_of_separation, Separation, SeparationReport, UnreachableReason};
pub use utils::{degree_from_path_len, PathOutcome, PathResult};

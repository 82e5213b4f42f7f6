use crate::graph::VertexId;
use rustc_hash::FxHashMap;

/// Result of a raw search: outcome, vertices visited, seconds elapsed.
pub type PathResult = (PathOutcome, usize, f64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    /// Vertices from start to target inclusive, alternating actor and movie.
    Found(Vec<VertexId>),
    /// The start's component was searched without meeting the target.
    Exhausted,
    /// `SearchConfig::max_visited` was hit first.
    LimitReached,
}

pub fn reconstruct_path(
    parent_map: &FxHashMap<VertexId, VertexId>,
    start: VertexId,
    target: VertexId,
) -> Vec<VertexId> {
    let mut path = Vec::new();
    let mut current_vertex = target;

    while current_vertex != start {
        path.push(current_vertex);
        current_vertex = parent_map[&current_vertex];
    }

    path.push(start);
    path.reverse();
    path
}

/// Intermediate actors on a path of `path_len` vertices. Two vertices per
/// hop (movie, actor), less the starting actor: 3 → 0, 5 → 1.
pub fn degree_from_path_len(path_len: usize) -> usize {
    (path_len / 2).saturating_sub(1)
}

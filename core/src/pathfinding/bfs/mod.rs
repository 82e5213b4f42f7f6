mod state;

use crate::graph::VertexId;
use crate::index::CastIndex;
use crate::search_config::SearchConfig;
use super::utils::{PathOutcome, PathResult};
use state::BfsState;
use std::time::Instant;

/// Shortest movie-sharing path between two vertices of `index`'s graph.
/// Ids that are not in the graph give `Exhausted` without searching.
pub fn bfs_find_path(
    start: VertexId,
    target: VertexId,
    index: &CastIndex,
    config: &SearchConfig,
) -> PathResult {
    let search_timer = Instant::now();

    let graph = index.graph();
    if !graph.contains_id(start) || !graph.contains_id(target) {
        return (PathOutcome::Exhausted, 0, search_timer.elapsed().as_secs_f64());
    }

    let mut bfs_state = BfsState::new(start);
    let outcome = bfs_state.find_path_to_target(target, index, config);

    let elapsed_time = search_timer.elapsed().as_secs_f64();
    (outcome, bfs_state.visited.len(), elapsed_time)
}

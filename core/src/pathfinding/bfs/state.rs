use crate::graph::VertexId;
use crate::index::CastIndex;
use crate::neighbors::adjacent;
use crate::search_config::SearchConfig;
use super::super::utils::{reconstruct_path, PathOutcome};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

pub struct BfsState {
    start: VertexId,
    queue: VecDeque<VertexId>,
    pub visited: FxHashSet<VertexId>,
    parent_map: FxHashMap<VertexId, VertexId>,
}

impl BfsState {
    pub fn new(start: VertexId) -> Self {
        let mut queue = VecDeque::new();
        let mut visited = FxHashSet::default();

        queue.push_back(start);
        visited.insert(start);

        Self {
            start,
            queue,
            visited,
            parent_map: FxHashMap::default(),
        }
    }

    fn visit_neighbor(&mut self, neighbor: VertexId, current: VertexId) {
        self.visited.insert(neighbor);
        self.parent_map.insert(neighbor, current);
        self.queue.push_back(neighbor);
    }

    fn limit_reached(&self, config: &SearchConfig) -> bool {
        config
            .max_visited
            .is_some_and(|max_visited| self.visited.len() >= max_visited)
    }

    /// Expands the frontier until `target` is first discovered. Neighbors
    /// come in first-seen order and the first discovery of a vertex sticks,
    /// so equal-length paths resolve by discovery order.
    pub fn find_path_to_target(
        &mut self,
        target: VertexId,
        index: &CastIndex,
        config: &SearchConfig,
    ) -> PathOutcome {
        if self.start == target {
            return PathOutcome::Found(vec![target]);
        }

        while let Some(location) = self.queue.pop_front() {
            for neighbor in adjacent(index, location) {
                if self.visited.contains(&neighbor) {
                    continue;
                }
                if self.limit_reached(config) {
                    return PathOutcome::LimitReached;
                }

                self.visit_neighbor(neighbor, location);
                if neighbor == target {
                    return PathOutcome::Found(reconstruct_path(&self.parent_map, self.start, target));
                }
            }
        }

        PathOutcome::Exhausted
    }
}

use super::bfs::bfs_find_path;
use super::utils::{degree_from_path_len, PathOutcome};
use crate::graph::VertexKind;
use crate::index::CastIndex;
use crate::search_config::SearchConfig;
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Separation {
    /// Both names are the same actor. Degree 0.
    SameActor,
    Connected {
        degree: usize,
        /// Actor, movie, actor, ..., actor.
        path: Vec<String>,
    },
    Unreachable { reason: UnreachableReason },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnreachableReason {
    UnknownActor { name: String },
    Disconnected,
    SearchLimit { visited: usize },
}

impl Separation {
    pub fn degree(&self) -> Option<usize> {
        match self {
            Separation::SameActor => Some(0),
            Separation::Connected { degree, .. } => Some(*degree),
            Separation::Unreachable { .. } => None,
        }
    }

    pub fn path(&self) -> Option<&[String]> {
        match self {
            Separation::Connected { path, .. } => Some(path),
            _ => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        !matches!(self, Separation::Unreachable { .. })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SeparationReport {
    pub separation: Separation,
    pub vertices_visited: usize,
    pub search_duration: f64,
}

impl SeparationReport {
    pub fn degree(&self) -> Option<usize> {
        self.separation.degree()
    }
}

/// Degree of separation between two actors: the number of intermediate
/// actors on the shortest chain of shared movies. Names must match exactly;
/// an unknown name is reported as unreachable before the same-actor check.
pub fn degree_of_separation(
    index: &CastIndex,
    actor1: &str,
    actor2: &str,
    config: &SearchConfig,
) -> SeparationReport {
    let timer = Instant::now();

    let endpoints = [actor1, actor2].map(|name| index.vertex_of_kind(name, VertexKind::Actor));
    let (from, to) = match endpoints {
        [Some(from), Some(to)] => (from, to),
        [from, _] => {
            let name = if from.is_none() { actor1 } else { actor2 };
            let reason = UnreachableReason::UnknownActor {
                name: name.to_string(),
            };
            return SeparationReport {
                separation: Separation::Unreachable { reason },
                vertices_visited: 0,
                search_duration: timer.elapsed().as_secs_f64(),
            };
        }
    };

    if from == to {
        return SeparationReport {
            separation: Separation::SameActor,
            vertices_visited: 1,
            search_duration: timer.elapsed().as_secs_f64(),
        };
    }

    let (outcome, vertices_visited, search_duration) = bfs_find_path(from, to, index, config);
    let separation = match outcome {
        PathOutcome::Found(path) => Separation::Connected {
            degree: degree_from_path_len(path.len()),
            path: path
                .into_iter()
                .map(|id| index.graph().name(id).to_string())
                .collect(),
        },
        PathOutcome::Exhausted => Separation::Unreachable {
            reason: UnreachableReason::Disconnected,
        },
        PathOutcome::LimitReached => Separation::Unreachable {
            reason: UnreachableReason::SearchLimit {
                visited: vertices_visited,
            },
        },
    };

    debug!(
        actor1,
        actor2,
        degree = ?separation.degree(),
        vertices_visited,
        "separation search finished"
    );

    SeparationReport {
        separation,
        vertices_visited,
        search_duration,
    }
}

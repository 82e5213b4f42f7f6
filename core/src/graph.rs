use crate::error::CastError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense vertex handle. Ids are handed out in first-seen order, so sorting by
/// id is the same as sorting by first appearance in the dataset.
pub type VertexId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VertexKind {
    Movie,
    Actor,
}

impl VertexKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VertexKind::Movie => "movie",
            VertexKind::Actor => "actor",
        }
    }
}

impl fmt::Display for VertexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
struct Vertex {
    name: String,
    kind: VertexKind,
}

/// Undirected movie/actor graph. Every edge joins one movie and one actor;
/// `add_edge` rejects anything else with `KindConflict`.
#[derive(Debug, Clone, Default)]
pub struct BipartiteGraph {
    vertices: Vec<Vertex>,
    ids_by_name: FxHashMap<String, VertexId>,
    // Kept sorted by id.
    adjacency: Vec<Vec<VertexId>>,
    edge_count: usize,
}

impl BipartiteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `name`, inserting it as a new vertex of `kind` when
    /// it has not been seen before.
    pub fn add_vertex(&mut self, name: &str, kind: VertexKind) -> Result<VertexId, CastError> {
        if let Some(&id) = self.ids_by_name.get(name) {
            let existing = self.vertices[id].kind;
            if existing != kind {
                return Err(CastError::KindConflict {
                    name: name.to_string(),
                    existing,
                    requested: kind,
                });
            }
            return Ok(id);
        }

        let id = self.vertices.len();
        self.vertices.push(Vertex {
            name: name.to_string(),
            kind,
        });
        self.ids_by_name.insert(name.to_string(), id);
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    /// Joins a movie and an actor. Returns `Ok(false)` when the edge already
    /// existed.
    pub(crate) fn add_edge(&mut self, movie: VertexId, actor: VertexId) -> Result<bool, CastError> {
        self.expect_kind(movie, VertexKind::Movie)?;
        self.expect_kind(actor, VertexKind::Actor)?;

        if !insert_sorted(&mut self.adjacency[movie], actor) {
            return Ok(false);
        }
        insert_sorted(&mut self.adjacency[actor], movie);
        self.edge_count += 1;
        Ok(true)
    }

    fn expect_kind(&self, id: VertexId, kind: VertexKind) -> Result<(), CastError> {
        let vertex = &self.vertices[id];
        if vertex.kind != kind {
            return Err(CastError::KindConflict {
                name: vertex.name.clone(),
                existing: vertex.kind,
                requested: kind,
            });
        }
        Ok(())
    }

    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.ids_by_name.get(name).copied()
    }

    /// Ids come from this graph; a foreign id out of range panics, as
    /// slice indexing does.
    pub fn name(&self, id: VertexId) -> &str {
        &self.vertices[id].name
    }

    pub fn kind(&self, id: VertexId) -> VertexKind {
        self.vertices[id].kind
    }

    pub fn contains_id(&self, id: VertexId) -> bool {
        id < self.vertices.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ids_by_name.contains_key(name)
    }

    /// Adjacent vertices in first-seen order.
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        &self.adjacency[id]
    }

    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|neighbors| neighbors.binary_search(&b).is_ok())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &str, VertexKind)> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(id, vertex)| (id, vertex.name.as_str(), vertex.kind))
    }

    /// Each undirected edge once, as `(movie, actor)`.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> {
        self.adjacency
            .iter()
            .enumerate()
            .filter(|&(id, _)| self.vertices[id].kind == VertexKind::Movie)
            .flat_map(|(movie, actors)| actors.iter().map(move |&actor| (movie, actor)))
    }
}

fn insert_sorted(neighbors: &mut Vec<VertexId>, id: VertexId) -> bool {
    match neighbors.binary_search(&id) {
        Ok(_) => false,
        Err(position) => {
            neighbors.insert(position, id);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_edge_is_noop() {
        let mut graph = BipartiteGraph::new();
        let movie = graph.add_vertex("M1", VertexKind::Movie).unwrap();
        let actor = graph.add_vertex("A1", VertexKind::Actor).unwrap();

        assert_eq!(graph.add_edge(movie, actor), Ok(true));
        assert_eq!(graph.add_edge(movie, actor), Ok(false));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors(movie), &[actor]);
        assert_eq!(graph.neighbors(actor), &[movie]);
    }

    #[test]
    fn test_adjacency_sorted_by_first_seen() {
        let mut graph = BipartiteGraph::new();
        let early = graph.add_vertex("Early", VertexKind::Actor).unwrap();
        let movie = graph.add_vertex("M", VertexKind::Movie).unwrap();
        let late = graph.add_vertex("Late", VertexKind::Actor).unwrap();

        graph.add_edge(movie, late).unwrap();
        graph.add_edge(movie, early).unwrap();

        assert_eq!(graph.neighbors(movie), &[early, late]);
    }

    #[test]
    fn test_kind_conflict() {
        let mut graph = BipartiteGraph::new();
        graph.add_vertex("Heat", VertexKind::Movie).unwrap();

        let err = graph.add_vertex("Heat", VertexKind::Actor).unwrap_err();
        assert_eq!(
            err,
            CastError::KindConflict {
                name: "Heat".to_string(),
                existing: VertexKind::Movie,
                requested: VertexKind::Actor,
            }
        );
    }

    #[test]
    fn test_actor_actor_edge_rejected() {
        let mut graph = BipartiteGraph::new();
        let a = graph.add_vertex("A", VertexKind::Actor).unwrap();
        let b = graph.add_vertex("B", VertexKind::Actor).unwrap();

        assert_eq!(
            graph.add_edge(a, b),
            Err(CastError::KindConflict {
                name: "A".to_string(),
                existing: VertexKind::Actor,
                requested: VertexKind::Movie,
            })
        );
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.neighbors(a).is_empty());
    }
}

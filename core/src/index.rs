use crate::error::CastError;
use crate::graph::{BipartiteGraph, VertexId, VertexKind};
use crate::record::{CastRecord, Gender};
use crate::string_normalization::clean_str;
use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use tracing::debug;

type CastGenders = FxHashMap<VertexId, Vec<Gender>>;
type NameLookup = FxHashMap<String, Vec<VertexId>>;

/// Read-only snapshot of a cast dataset: the movie/actor graph, both
/// first-seen lists and the genders recorded for each movie's cast.
#[derive(Debug, Clone)]
pub struct CastIndex {
    graph: BipartiteGraph,
    movies: Vec<VertexId>,
    actors: Vec<VertexId>,
    cast_genders: CastGenders,
    name_lookup: NameLookup,
}

#[derive(Debug, Default)]
pub struct IndexBuilder {
    graph: BipartiteGraph,
    movies: Vec<VertexId>,
    actors: Vec<VertexId>,
    cast_genders: CastGenders,
    rows_seen: usize,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one row. A rejected row still takes a row number, so later
    /// errors point at the right line, but nothing from it reaches the index.
    pub fn add_record(&mut self, record: &CastRecord) -> Result<(), CastError> {
        self.rows_seen += 1;
        let row = self.rows_seen;

        let movie_name = record.movie.as_str();
        let actor_name = record.actor.as_str();
        if movie_name.trim().is_empty() {
            return Err(malformed(row, "missing movie name"));
        }
        if actor_name.trim().is_empty() {
            return Err(malformed(row, "missing actor name"));
        }
        if movie_name == actor_name {
            return Err(CastError::KindConflict {
                name: actor_name.to_string(),
                existing: VertexKind::Movie,
                requested: VertexKind::Actor,
            });
        }
        self.ensure_kind(movie_name, VertexKind::Movie)?;
        self.ensure_kind(actor_name, VertexKind::Actor)?;

        let new_movie = !self.graph.contains(movie_name);
        let new_actor = !self.graph.contains(actor_name);

        let movie = self.graph.add_vertex(movie_name, VertexKind::Movie)?;
        let actor = self.graph.add_vertex(actor_name, VertexKind::Actor)?;
        self.graph.add_edge(movie, actor)?;

        if new_movie {
            self.movies.push(movie);
        }
        if new_actor {
            self.actors.push(actor);
        }
        self.cast_genders
            .entry(movie)
            .or_default()
            .push(record.gender.clone());

        Ok(())
    }

    pub fn build(self) -> CastIndex {
        let mut name_lookup: NameLookup = FxHashMap::default();
        for (id, name, _) in self.graph.vertices() {
            name_lookup.entry(clean_str(name)).or_default().push(id);
        }

        debug!(
            rows_seen = self.rows_seen,
            vertices = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            movies = self.movies.len(),
            actors = self.actors.len(),
            "cast index built"
        );

        CastIndex {
            graph: self.graph,
            movies: self.movies,
            actors: self.actors,
            cast_genders: self.cast_genders,
            name_lookup,
        }
    }

    fn ensure_kind(&self, name: &str, kind: VertexKind) -> Result<(), CastError> {
        match self.graph.vertex_id(name) {
            Some(id) if self.graph.kind(id) != kind => Err(CastError::KindConflict {
                name: name.to_string(),
                existing: self.graph.kind(id),
                requested: kind,
            }),
            _ => Ok(()),
        }
    }
}

fn malformed(row: usize, reason: &str) -> CastError {
    CastError::MalformedRecord {
        row,
        reason: reason.to_string(),
    }
}

impl CastIndex {
    pub fn from_records<I>(records: I) -> Result<Self, CastError>
    where
        I: IntoIterator,
        I::Item: Borrow<CastRecord>,
    {
        let mut builder = IndexBuilder::new();
        for record in records {
            builder.add_record(record.borrow())?;
        }
        Ok(builder.build())
    }

    pub fn graph(&self) -> &BipartiteGraph {
        &self.graph
    }

    /// Movie ids in first-seen order.
    pub fn movie_ids(&self) -> &[VertexId] {
        &self.movies
    }

    /// Actor ids in first-seen order.
    pub fn actor_ids(&self) -> &[VertexId] {
        &self.actors
    }

    pub fn movies(&self) -> impl Iterator<Item = &str> {
        self.movies.iter().map(|&id| self.graph.name(id))
    }

    pub fn actors(&self) -> impl Iterator<Item = &str> {
        self.actors.iter().map(|&id| self.graph.name(id))
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn is_movie(&self, name: &str) -> bool {
        self.vertex_of_kind(name, VertexKind::Movie).is_some()
    }

    pub fn is_actor(&self, name: &str) -> bool {
        self.vertex_of_kind(name, VertexKind::Actor).is_some()
    }

    /// Exact-name lookup restricted to one kind of vertex.
    pub fn vertex_of_kind(&self, name: &str, kind: VertexKind) -> Option<VertexId> {
        self.graph
            .vertex_id(name)
            .filter(|&id| self.graph.kind(id) == kind)
    }

    /// Genders recorded for `movie`'s cast, in dataset order. Empty for an
    /// unknown movie.
    pub fn genders_of(&self, movie: &str) -> &[Gender] {
        self.vertex_of_kind(movie, VertexKind::Movie)
            .map(|id| self.genders_by_id(id))
            .unwrap_or_default()
    }

    pub(crate) fn genders_by_id(&self, movie: VertexId) -> &[Gender] {
        self.cast_genders
            .get(&movie)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn find_actor(&self, name: &str) -> Result<&str, CastError> {
        self.find_vertex(name, VertexKind::Actor)
            .map(|id| self.graph.name(id))
    }

    pub fn find_movie(&self, name: &str) -> Result<&str, CastError> {
        self.find_vertex(name, VertexKind::Movie)
            .map(|id| self.graph.name(id))
    }

    /// Resolves user input to a vertex: an exact match first, then the
    /// earliest vertex whose normalized name matches.
    pub fn find_vertex(&self, name: &str, kind: VertexKind) -> Result<VertexId, CastError> {
        if let Some(id) = self.vertex_of_kind(name, kind) {
            return Ok(id);
        }

        self.name_lookup
            .get(&clean_str(name))
            .and_then(|ids| ids.iter().copied().find(|&id| self.graph.kind(id) == kind))
            .ok_or_else(|| CastError::UnknownVertex {
                name: name.to_string(),
                kind,
            })
    }
}

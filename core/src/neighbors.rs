use crate::graph::{VertexId, VertexKind};
use crate::index::CastIndex;

/// Actors who appear in `movie`, in first-seen order. Unknown movies (and
/// actor names) give an empty list.
pub fn cast_of<'a>(index: &'a CastIndex, movie: &str) -> Vec<&'a str> {
    names_adjacent_to(index, movie, VertexKind::Movie)
}

/// Movies `actor` appears in, in first-seen order. Unknown actors (and movie
/// names) give an empty list.
pub fn movies_of<'a>(index: &'a CastIndex, actor: &str) -> Vec<&'a str> {
    names_adjacent_to(index, actor, VertexKind::Actor)
}

fn names_adjacent_to<'a>(index: &'a CastIndex, name: &str, kind: VertexKind) -> Vec<&'a str> {
    let graph = index.graph();
    match index.vertex_of_kind(name, kind) {
        Some(id) => adjacent(index, id).map(|neighbor| graph.name(neighbor)).collect(),
        None => Vec::new(),
    }
}

/// Neighbors of `id` of the opposite kind: the cast of a movie, or the
/// movies of an actor.
pub(crate) fn adjacent(index: &CastIndex, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
    let graph = index.graph();
    let wanted = match graph.kind(id) {
        VertexKind::Movie => VertexKind::Actor,
        VertexKind::Actor => VertexKind::Movie,
    };
    graph
        .neighbors(id)
        .iter()
        .copied()
        .filter(move |&neighbor| graph.kind(neighbor) == wanted)
}

use crate::graph::VertexKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CastError {
    /// A dataset row is missing a field the index needs. `row` is 1-based.
    #[error("malformed record at row {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },

    /// The same name was offered as both a movie and an actor.
    #[error("'{name}' is already known as {existing}, cannot add it as {requested}")]
    KindConflict {
        name: String,
        existing: VertexKind,
        requested: VertexKind,
    },

    #[error("{kind} '{name}' not found in dataset")]
    UnknownVertex { name: String, kind: VertexKind },
}

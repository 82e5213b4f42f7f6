use castpath_core::{CastError, CastIndex, CastRecord, IndexBuilder};
use csv::{ReaderBuilder, StringRecord};
use std::{fs::File, io::Read, path::Path};
use thiserror::Error;
use tracing::{debug, info};

const MOVIE_FIELD: usize = 0;
const ACTOR_FIELD: usize = 1;
const GENDER_FIELD: usize = 4;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("cannot open dataset {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    #[error("cannot read dataset: {0}")]
    Csv(#[from] csv::Error),

    /// `line` is the line number in the file, header included.
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error(transparent)]
    Index(#[from] CastError),
}

/// Parses cast rows: movie, actor, two ignored fields, gender. The first
/// line is a header. Double quotes are stripped from every field.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<CastRecord>, DatasetError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        records.push(parse_row(&row)?);
    }

    debug!(rows = records.len(), "dataset parsed");
    Ok(records)
}

pub fn load_records(path: &Path) -> Result<Vec<CastRecord>, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Open {
        path: path.display().to_string(),
        source,
    })?;
    read_records(file)
}

pub fn load_index(path: &Path) -> Result<CastIndex, DatasetError> {
    let records = load_records(path)?;

    let mut builder = IndexBuilder::new();
    for record in &records {
        builder.add_record(record)?;
    }
    let index = builder.build();

    info!(
        movies = index.movie_count(),
        actors = index.actor_count(),
        path = %path.display(),
        "dataset loaded"
    );
    Ok(index)
}

fn parse_row(row: &StringRecord) -> Result<CastRecord, DatasetError> {
    let line = row.position().map_or(0, |position| position.line());
    let field = |index: usize, name: &str| -> Result<String, DatasetError> {
        let value = row
            .get(index)
            .map(clean_field)
            .ok_or_else(|| DatasetError::MalformedRecord {
                line,
                reason: format!("expected at least {} fields, found {}", GENDER_FIELD + 1, row.len()),
            })?;
        if value.is_empty() && index != GENDER_FIELD {
            return Err(DatasetError::MalformedRecord {
                line,
                reason: format!("missing {}", name),
            });
        }
        Ok(value)
    };

    let movie = field(MOVIE_FIELD, "movie name")?;
    let actor = field(ACTOR_FIELD, "actor name")?;
    let gender = field(GENDER_FIELD, "gender")?;

    Ok(CastRecord::new(movie, actor, gender))
}

fn clean_field(raw: &str) -> String {
    raw.replace('"', "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::clean_field;

    #[test]
    fn test_clean_field() {
        assert_eq!(clean_field(" \"The Jungle Book\" "), "The Jungle Book");
        assert_eq!(clean_field("He said \"\"hi\"\""), "He said hi");
        assert_eq!(clean_field(""), "");
    }
}

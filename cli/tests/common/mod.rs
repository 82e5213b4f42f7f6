#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

/// Header plus the three-row movie set used across the tests.
pub const SMALL_DATASET: &str = "\
MOVIE,ACTOR,CHARACTER_NAME,TYPE,GENDER
\"M1\",\"A1\",\"Hero\",\"Leading\",\"Female\"
\"M1\",\"A2\",\"Sidekick\",\"Supporting\",\"Male\"
\"M2\",\"A2\",\"Villain\",\"Leading\",\"Female\"
";

pub fn dataset_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

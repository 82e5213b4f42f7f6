mod common;

use castpath::{load_index, save_tgf, write_tgf};
use common::{dataset_file, SMALL_DATASET};
use tempfile::NamedTempFile;

#[test]
fn test_write_tgf() {
    let file = dataset_file(SMALL_DATASET);
    let index = load_index(file.path()).unwrap();

    let mut output = Vec::new();
    write_tgf(index.graph(), &mut output).unwrap();

    // Vertices in first-seen order: M1, A1, A2, M2.
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "1 M1\n2 A1\n3 A2\n4 M2\n#\n1 2\n1 3\n4 3\n"
    );
}

#[test]
fn test_save_tgf() {
    let file = dataset_file(SMALL_DATASET);
    let index = load_index(file.path()).unwrap();
    let output = NamedTempFile::new().unwrap();

    save_tgf(index.graph(), output.path()).unwrap();

    let written = std::fs::read_to_string(output.path()).unwrap();
    let (vertices, edges) = written.split_once("#\n").unwrap();
    assert_eq!(vertices.lines().count(), 4);
    assert_eq!(edges.lines().count(), 3);
}

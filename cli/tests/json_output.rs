mod common;

use castpath::json_output::{create_separation_output, JsonBechdel};
use castpath::load_index;
use castpath_core::{degree_of_separation, summarize, GenderRatioEvaluator, SearchConfig};
use common::{dataset_file, SMALL_DATASET};
use serde_json::json;

#[test]
fn test_separation_json() {
    let file = dataset_file(SMALL_DATASET);
    let index = load_index(file.path()).unwrap();
    let report = degree_of_separation(&index, "A1", "A2", &SearchConfig::default());
    let visited = report.vertices_visited;

    let output = create_separation_output("A1".to_string(), "A2".to_string(), None, report);
    let value = serde_json::to_value(&output).unwrap();

    assert_eq!(value["query"], json!({"from": "A1", "to": "A2"}));
    assert_eq!(
        value["result"],
        json!({"outcome": "connected", "degree": 0, "path": ["A1", "M1", "A2"]})
    );
    assert_eq!(value["stats"]["vertices_explored"], json!(visited));
}

#[test]
fn test_unreachable_json_keeps_limit() {
    let file = dataset_file(SMALL_DATASET);
    let index = load_index(file.path()).unwrap();
    let report = degree_of_separation(&index, "A1", "A3", &SearchConfig::default());

    let output = create_separation_output("A1".to_string(), "A3".to_string(), Some(10), report);
    let value = serde_json::to_value(&output).unwrap();

    assert_eq!(value["query"]["max_visited"], json!(10));
    assert_eq!(value["result"]["outcome"], json!("unreachable"));
    assert_eq!(value["result"]["reason"]["kind"], json!("unknown_actor"));
}

#[test]
fn test_bechdel_json() {
    let file = dataset_file(SMALL_DATASET);
    let index = load_index(file.path()).unwrap();
    let ratios = GenderRatioEvaluator::default().evaluate(&index);

    let output = JsonBechdel {
        threshold: 48.0,
        summary: summarize(&ratios),
        movies: ratios,
    };
    let value = serde_json::to_value(&output).unwrap();

    assert_eq!(value["summary"], json!({"passing": 2, "failing": 0, "undefined": 0}));
    assert_eq!(
        value["movies"][0],
        json!({"movie": "M1", "total": 2, "female_count": 1, "percentage": 50.0, "passes": true})
    );
}

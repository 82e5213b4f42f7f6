use castpath_core::{MovieRatio, RatioSummary, Separation, SeparationReport};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonBechdel {
    pub threshold: f64,
    pub summary: RatioSummary,
    pub movies: Vec<MovieRatio>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonNeighbors {
    pub query: String,
    pub found: bool,
    pub results: Vec<String>,
}

#[derive(Serialize)]
pub struct JsonSeparation {
    pub query: JsonQuery,
    pub result: Separation,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_visited: Option<usize>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub vertices_explored: usize,
}

pub fn create_separation_output(
    from: String,
    to: String,
    max_visited: Option<usize>,
    report: SeparationReport,
) -> JsonSeparation {
    JsonSeparation {
        query: JsonQuery {
            from,
            to,
            max_visited,
        },
        result: report.separation,
        stats: JsonStats {
            search_time_ms: (report.search_duration * 1000.0) as u64,
            vertices_explored: report.vertices_visited,
        },
    }
}

pub fn print_json_output<T: Serialize>(json_output: &T) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}

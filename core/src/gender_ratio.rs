use crate::index::CastIndex;
use crate::record::Gender;
use serde::Serialize;

/// A movie passes when strictly more than this percentage of its cast
/// entries are female.
pub const DEFAULT_FEMALE_THRESHOLD: f64 = 48.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieRatio {
    pub movie: String,
    pub total: usize,
    pub female_count: usize,
    /// `None` when no cast entries were recorded.
    pub percentage: Option<f64>,
    pub passes: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RatioSummary {
    pub passing: usize,
    pub failing: usize,
    /// Movies with no recorded cast. Not included in `failing`.
    pub undefined: usize,
}

#[derive(Debug, Clone)]
pub struct GenderRatioEvaluator {
    threshold: f64,
}

impl Default for GenderRatioEvaluator {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_FEMALE_THRESHOLD,
        }
    }
}

impl GenderRatioEvaluator {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// One result per movie, in first-seen order.
    pub fn evaluate(&self, index: &CastIndex) -> Vec<MovieRatio> {
        index
            .movie_ids()
            .iter()
            .map(|&id| self.evaluate_genders(index.graph().name(id), index.genders_by_id(id)))
            .collect()
    }

    pub fn evaluate_movie(&self, index: &CastIndex, movie: &str) -> Option<MovieRatio> {
        index
            .is_movie(movie)
            .then(|| self.evaluate_genders(movie, index.genders_of(movie)))
    }

    pub fn evaluate_genders(&self, movie: &str, genders: &[Gender]) -> MovieRatio {
        let total = genders.len();
        let female_count = genders.iter().filter(|gender| gender.is_female()).count();

        let percentage = (total > 0).then(|| female_count as f64 / total as f64 * 100.0);
        let passes = percentage.is_some_and(|percentage| percentage > self.threshold);

        MovieRatio {
            movie: movie.to_string(),
            total,
            female_count,
            percentage,
            passes,
        }
    }
}

pub fn summarize(ratios: &[MovieRatio]) -> RatioSummary {
    ratios
        .iter()
        .fold(RatioSummary::default(), |mut summary, ratio| {
            match (ratio.percentage, ratio.passes) {
                (None, _) => summary.undefined += 1,
                (Some(_), true) => summary.passing += 1,
                (Some(_), false) => summary.failing += 1,
            }
            summary
        })
}

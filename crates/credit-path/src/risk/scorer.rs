use std::sync::Arc;

use super::domain::{ApplicantProfile, ScoreResult, SignalContribution};
use super::random::RandomSource;
use super::rules;

pub const BASE_PROBABILITY: f64 = 0.5;
pub const JITTER_BOUND: f64 = 0.02;
pub const PROBABILITY_FLOOR: f64 = 0.02;
pub const PROBABILITY_CEILING: f64 = 0.98;

/// Capability turning a profile into a bounded probability plus contributions.
pub trait RiskScorer: Send + Sync {
    fn name(&self) -> &'static str;
    fn score(&self, profile: &ApplicantProfile) -> ScoreResult;
}

/// An undefined probability falls back to the base rate before clamping.
pub fn clamp_probability(probability: f64) -> f64 {
    if probability.is_nan() {
        return BASE_PROBABILITY;
    }
    probability.clamp(PROBABILITY_FLOOR, PROBABILITY_CEILING)
}

/// Rule-table scorer with bounded measurement jitter.
pub struct HeuristicScorer {
    random: Arc<dyn RandomSource>,
}

impl HeuristicScorer {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Base probability plus every fired delta, before jitter and clamping.
    pub fn pre_jitter_probability(contributions: &[SignalContribution]) -> f64 {
        BASE_PROBABILITY
            + contributions
                .iter()
                .map(|contribution| contribution.probability_delta)
                .sum::<f64>()
    }
}

impl RiskScorer for HeuristicScorer {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn score(&self, profile: &ApplicantProfile) -> ScoreResult {
        let contributions = rules::contributions(profile);
        let jitter = self.random.uniform(-JITTER_BOUND, JITTER_BOUND);
        let probability = clamp_probability(Self::pre_jitter_probability(&contributions) + jitter);

        ScoreResult {
            probability,
            contributions,
        }
    }
}

//! Credit-risk scoring, explanation, and batch evaluation.

pub mod batch;
pub mod domain;
pub mod explainer;
pub mod intake;
pub mod model;
pub mod random;
pub mod router;
pub mod rules;
pub mod scorer;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tracing::debug;

pub use batch::{BatchError, BatchResult, BatchRow, BatchRowVerdict};
pub use domain::{
    ApplicantProfile, RiskBucket, ScoreResult, SeverityMarker, SignalCategory,
    SignalContribution, Verdict,
};
pub use intake::{ApplicantSubmission, NumericInput, ProfileError, ProfileErrorKind};
pub use model::{ModelLoadError, ModelScorer};
pub use random::{FixedRandom, RandomSource, ThreadRandom};
pub use router::risk_router;
pub use scorer::{HeuristicScorer, RiskScorer};

use crate::config::ScoringConfig;

/// Entry point pairing the active scorer with the explainer and batch adapter.
#[derive(Clone)]
pub struct RiskEngine {
    scorer: Arc<dyn RiskScorer>,
    batch_random: Arc<dyn RandomSource>,
}

impl RiskEngine {
    pub fn new(scorer: Arc<dyn RiskScorer>, batch_random: Arc<dyn RandomSource>) -> Self {
        Self {
            scorer,
            batch_random,
        }
    }

    /// Heuristic scorer with live jitter and live batch simulation.
    pub fn heuristic() -> Self {
        Self::new(
            Arc::new(HeuristicScorer::new(Arc::new(ThreadRandom))),
            Arc::new(ThreadRandom),
        )
    }

    /// Disabling jitter only pins the scorer; batch simulation stays random.
    pub fn from_config(config: &ScoringConfig) -> Self {
        let jitter: Arc<dyn RandomSource> = if config.jitter {
            Arc::new(ThreadRandom)
        } else {
            Arc::new(FixedRandom::centered())
        };
        Self::new(model::select_scorer(config, jitter), Arc::new(ThreadRandom))
    }

    pub fn scorer_name(&self) -> &'static str {
        self.scorer.name()
    }

    pub fn score(&self, profile: &ApplicantProfile) -> Verdict {
        let result = self.scorer.score(profile);
        let verdict = explainer::explain(&profile.name, &result);
        debug!(
            scorer = self.scorer.name(),
            probability = result.probability,
            prediction = %verdict.prediction,
            contributions = result.contributions.len(),
            "applicant scored"
        );
        verdict
    }

    /// Batch rows are simulated, not scored; see [`batch`].
    pub fn score_batch(&self, raw_text: &str) -> BatchResult {
        batch::score_batch(raw_text, self.batch_random.as_ref())
    }
}

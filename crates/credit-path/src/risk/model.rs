//! Coefficient-file scorer and the startup selection between scoring strategies.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::domain::{ApplicantProfile, ScoreResult};
use super::random::RandomSource;
use super::rules;
use super::scorer::{clamp_probability, HeuristicScorer, RiskScorer};
use crate::config::{ScorerStrategy, ScoringConfig};

/// Logistic coefficients over the profile's raw signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelCoefficients {
    pub intercept: f64,
    #[serde(default)]
    pub weights: FeatureWeights,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureWeights {
    pub loan_to_income: f64,
    pub credit_score: f64,
    pub debt_to_income_ratio: f64,
    pub existing_loans: f64,
    pub age: f64,
}

impl ModelCoefficients {
    fn validate(&self) -> Result<(), ModelLoadError> {
        let named = [
            ("intercept", self.intercept),
            ("loan_to_income", self.weights.loan_to_income),
            ("credit_score", self.weights.credit_score),
            ("debt_to_income_ratio", self.weights.debt_to_income_ratio),
            ("existing_loans", self.weights.existing_loans),
            ("age", self.weights.age),
        ];
        match named.iter().find(|(_, value)| !value.is_finite()) {
            Some((name, _)) => Err(ModelLoadError::NonFinite(*name)),
            None => Ok(()),
        }
    }

    fn logit(&self, profile: &ApplicantProfile) -> f64 {
        let weights = &self.weights;
        self.intercept
            + weights.loan_to_income * profile.loan_to_income()
            + weights.credit_score * profile.credit_score
            + weights.debt_to_income_ratio * profile.debt_to_income_ratio
            + weights.existing_loans * profile.existing_loans as f64
            + weights.age * profile.age as f64
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ModelLoadError {
    #[error("failed to read model coefficients: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid model coefficients: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("model coefficient `{0}` is not finite")]
    NonFinite(&'static str),
}

/// Scorer backed by externally supplied coefficients.
///
/// Explanations still come from the rule table so the verdict shape does not
/// depend on which scorer is active.
#[derive(Debug, Clone)]
pub struct ModelScorer {
    coefficients: ModelCoefficients,
}

impl ModelScorer {
    pub fn new(coefficients: ModelCoefficients) -> Result<Self, ModelLoadError> {
        coefficients.validate()?;
        Ok(Self { coefficients })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ModelLoadError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ModelLoadError> {
        let coefficients: ModelCoefficients = serde_json::from_reader(reader)?;
        Self::new(coefficients)
    }

    pub fn probability(&self, profile: &ApplicantProfile) -> f64 {
        let logit = self.coefficients.logit(profile);
        clamp_probability(1.0 / (1.0 + (-logit).exp()))
    }
}

impl RiskScorer for ModelScorer {
    fn name(&self) -> &'static str {
        "model"
    }

    fn score(&self, profile: &ApplicantProfile) -> ScoreResult {
        ScoreResult {
            probability: self.probability(profile),
            contributions: rules::contributions(profile),
        }
    }
}

/// Pick the scorer once at startup, falling back to the heuristic when the
/// coefficient file cannot be used.
pub fn select_scorer(
    config: &ScoringConfig,
    jitter: Arc<dyn RandomSource>,
) -> Arc<dyn RiskScorer> {
    match config.strategy {
        ScorerStrategy::Heuristic => {
            info!("using heuristic risk scorer");
            Arc::new(HeuristicScorer::new(jitter))
        }
        ScorerStrategy::Model => match ModelScorer::from_path(&config.model_path) {
            Ok(scorer) => {
                info!(path = %config.model_path.display(), "loaded risk model coefficients");
                Arc::new(scorer)
            }
            Err(err) => {
                warn!(
                    path = %config.model_path.display(),
                    error = %err,
                    "risk model unavailable, falling back to heuristic scorer"
                );
                Arc::new(HeuristicScorer::new(jitter))
            }
        },
    }
}

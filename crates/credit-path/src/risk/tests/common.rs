use std::sync::Arc;

use crate::risk::{
    ApplicantProfile, FixedRandom, HeuristicScorer, RandomSource, RiskEngine, ScoreResult,
    SignalCategory, SignalContribution,
};

/// Profile that lands in no special band except the healthy loan-to-income ratio.
pub(super) fn baseline_profile() -> ApplicantProfile {
    ApplicantProfile {
        name: "Avery".to_string(),
        age: 30,
        income: 50000.0,
        loan_amount: 40000.0,
        credit_score: 720.0,
        debt_to_income_ratio: 30.0,
        existing_loans: 1,
    }
}

pub(super) fn high_risk_profile() -> ApplicantProfile {
    ApplicantProfile {
        name: "Blake".to_string(),
        age: 19,
        income: 20000.0,
        loan_amount: 60000.0,
        credit_score: 540.0,
        debt_to_income_ratio: 62.0,
        existing_loans: 5,
    }
}

pub(super) fn scorer_with(random: impl RandomSource + 'static) -> HeuristicScorer {
    HeuristicScorer::new(Arc::new(random))
}

pub(super) fn engine_with(jitter: FixedRandom, batch: FixedRandom) -> RiskEngine {
    RiskEngine::new(Arc::new(scorer_with(jitter)), Arc::new(batch))
}

pub(super) fn deterministic_engine() -> RiskEngine {
    engine_with(FixedRandom::centered(), FixedRandom::centered())
}

pub(super) fn contribution(
    category: SignalCategory,
    delta: f64,
    reason: &str,
    action: Option<&str>,
) -> SignalContribution {
    SignalContribution {
        category,
        probability_delta: delta,
        reason: reason.to_string(),
        action: action.map(str::to_string),
    }
}

pub(super) fn score_result(
    probability: f64,
    contributions: Vec<SignalContribution>,
) -> ScoreResult {
    ScoreResult {
        probability,
        contributions,
    }
}

pub(super) fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}

use super::domain::{RiskBucket, ScoreResult, Verdict};

pub const HIGH_RISK_THRESHOLD: f64 = 0.70;
pub const MODERATE_RISK_THRESHOLD: f64 = 0.40;
pub const NO_MAJOR_ISSUES: &str = "No major issues";

/// Every probability maps to exactly one bucket; each upper bound is inclusive.
pub fn bucket(probability: f64) -> RiskBucket {
    if probability > HIGH_RISK_THRESHOLD {
        RiskBucket::High
    } else if probability > MODERATE_RISK_THRESHOLD {
        RiskBucket::Moderate
    } else {
        RiskBucket::Low
    }
}

pub(crate) fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Probability as a percentage rounded to two decimals.
pub fn display_percentage(probability: f64) -> f64 {
    round_to_hundredths(probability * 100.0)
}

/// Reduce a score to its headline reason, recommended action, and bucket.
pub fn explain(name: &str, result: &ScoreResult) -> Verdict {
    let prediction = bucket(result.probability);
    let severity = prediction.severity();

    let reason = result
        .contributions
        .iter()
        .map(|contribution| contribution.reason.as_str())
        .find(|reason| !reason.is_empty())
        .unwrap_or(NO_MAJOR_ISSUES)
        .to_string();

    let action = result
        .contributions
        .iter()
        .filter_map(|contribution| contribution.action.as_deref())
        .find(|action| !action.is_empty())
        .unwrap_or_else(|| prediction.default_action())
        .to_string();

    Verdict {
        name: name.to_string(),
        prediction,
        percentage: display_percentage(result.probability),
        severity,
        severity_marker: severity.glyph(),
        reason,
        action,
    }
}

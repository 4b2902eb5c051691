use super::common::*;
use crate::risk::rules;
use crate::risk::scorer::{PROBABILITY_CEILING, PROBABILITY_FLOOR};
use crate::risk::{
    ApplicantProfile, FixedRandom, HeuristicScorer, RiskScorer, SignalCategory, ThreadRandom,
};

fn reasons(profile: &ApplicantProfile) -> Vec<String> {
    rules::contributions(profile)
        .into_iter()
        .map(|contribution| contribution.reason)
        .collect()
}

fn reason_for(category: SignalCategory, profile: &ApplicantProfile) -> Option<String> {
    rules::evaluate(category, profile).map(|contribution| contribution.reason)
}

#[test]
fn baseline_profile_scores_healthy_ratio_only() {
    let scorer = scorer_with(FixedRandom::centered());
    let result = scorer.score(&baseline_profile());

    assert_eq!(
        reasons(&baseline_profile()),
        vec!["Healthy loan-to-income ratio", "Stable age range"]
    );
    assert_eq!(result.contributions.len(), 2);
    assert_eq!(result.contributions[0].category, SignalCategory::LoanToIncome);
    assert_eq!(result.contributions[0].probability_delta, -0.12);
    assert!(result.contributions[0].action.is_none());
    assert!(approx_eq(result.probability, 0.38));
}

#[test]
fn high_risk_profile_fires_every_category_in_order() {
    let scorer = scorer_with(FixedRandom::centered());
    let result = scorer.score(&high_risk_profile());

    let categories: Vec<_> = result
        .contributions
        .iter()
        .map(|contribution| contribution.category)
        .collect();
    assert_eq!(categories, SignalCategory::ORDERED.to_vec());
    assert_eq!(result.probability, PROBABILITY_CEILING);
}

#[test]
fn jitter_is_bounded_and_applied_after_deltas() {
    let profile = baseline_profile();
    let low = scorer_with(FixedRandom::lowest()).score(&profile);
    let high = scorer_with(FixedRandom::highest()).score(&profile);

    assert!(approx_eq(low.probability, 0.36));
    assert!(approx_eq(high.probability, 0.40));
}

#[test]
fn probability_never_drops_below_floor() {
    let profile = ApplicantProfile {
        name: "Casey".to_string(),
        age: 40,
        income: 200000.0,
        loan_amount: 10000.0,
        credit_score: 800.0,
        debt_to_income_ratio: 10.0,
        existing_loans: 0,
    };
    let result = scorer_with(FixedRandom::lowest()).score(&profile);

    assert_eq!(result.contributions.len(), 5);
    assert_eq!(result.probability, PROBABILITY_FLOOR);
}

#[test]
fn ratio_bands_are_first_match_wins() {
    let mut profile = baseline_profile();
    profile.income = 49999.0;

    profile.loan_amount = 100000.0;
    assert_eq!(profile.loan_to_income(), 2.0);
    assert_eq!(
        reason_for(SignalCategory::LoanToIncome, &profile).as_deref(),
        Some("High loan burden compared to income")
    );

    profile.loan_amount = 100001.0;
    assert_eq!(
        reason_for(SignalCategory::LoanToIncome, &profile).as_deref(),
        Some("Very high loan amount compared to income")
    );

    profile.loan_amount = 60000.0;
    assert_eq!(reason_for(SignalCategory::LoanToIncome, &profile), None);
}

#[test]
fn credit_score_bands() {
    let mut profile = baseline_profile();
    let cases = [
        (599.0, Some("Low credit score")),
        (600.0, Some("Average credit score")),
        (699.0, Some("Average credit score")),
        (700.0, None),
        (750.0, None),
        (751.0, Some("Strong credit score")),
    ];

    for (score, expected) in cases {
        profile.credit_score = score;
        assert_eq!(
            reason_for(SignalCategory::CreditScore, &profile).as_deref(),
            expected,
            "credit score {score}"
        );
    }
}

#[test]
fn debt_to_income_bands() {
    let mut profile = baseline_profile();
    let cases = [
        (50.5, Some("High debt-to-income ratio")),
        (50.0, Some("Moderate debt-to-income ratio")),
        (35.5, Some("Moderate debt-to-income ratio")),
        (35.0, None),
        (25.0, None),
        (24.9, Some("Low debt burden")),
    ];

    for (dti, expected) in cases {
        profile.debt_to_income_ratio = dti;
        assert_eq!(
            reason_for(SignalCategory::DebtToIncome, &profile).as_deref(),
            expected,
            "dti {dti}"
        );
    }
}

#[test]
fn existing_loan_bands() {
    let mut profile = baseline_profile();
    let cases = [
        (7, Some("Too many existing loans")),
        (4, Some("Too many existing loans")),
        (3, Some("Multiple active loans")),
        (2, None),
        (1, None),
        (0, Some("No existing loan burden")),
    ];

    for (loans, expected) in cases {
        profile.existing_loans = loans;
        assert_eq!(
            reason_for(SignalCategory::ExistingLoans, &profile).as_deref(),
            expected,
            "existing loans {loans}"
        );
    }
}

#[test]
fn age_category_always_contributes() {
    let mut profile = baseline_profile();
    let cases = [
        (20, "Very young borrower with limited history"),
        (21, "Stable age range"),
        (55, "Stable age range"),
        (56, "Older age range"),
        (-3, "Very young borrower with limited history"),
    ];

    for (age, expected) in cases {
        profile.age = age;
        assert_eq!(
            reason_for(SignalCategory::Age, &profile).as_deref(),
            Some(expected),
            "age {age}"
        );
    }
}

#[test]
fn zero_income_is_guarded() {
    let mut profile = baseline_profile();
    profile.income = 0.0;
    profile.loan_amount = 0.0;
    assert_eq!(
        reason_for(SignalCategory::LoanToIncome, &profile).as_deref(),
        Some("Healthy loan-to-income ratio")
    );

    profile.loan_amount = 5.0;
    assert_eq!(profile.loan_to_income(), 5.0);
    assert_eq!(
        reason_for(SignalCategory::LoanToIncome, &profile).as_deref(),
        Some("Very high loan amount compared to income")
    );
}

#[test]
fn scoring_is_deterministic_without_jitter() {
    let scorer = scorer_with(FixedRandom::centered());
    let first = scorer.score(&high_risk_profile());
    let second = scorer.score(&high_risk_profile());
    assert_eq!(first, second);
}

#[test]
fn raising_loan_amount_never_lowers_base_probability() {
    let mut profile = baseline_profile();
    let mut previous = f64::MIN;

    for step in 0..=300 {
        profile.loan_amount = step as f64 * 500.0;
        let base = HeuristicScorer::pre_jitter_probability(&rules::contributions(&profile));
        assert!(
            base >= previous,
            "loan {} lowered base probability",
            profile.loan_amount
        );
        previous = base;
    }
}

#[test]
fn live_jitter_stays_within_bounds() {
    let scorer = scorer_with(ThreadRandom);
    for profile in [baseline_profile(), high_risk_profile()] {
        for _ in 0..200 {
            let probability = scorer.score(&profile).probability;
            assert!((PROBABILITY_FLOOR..=PROBABILITY_CEILING).contains(&probability));
        }
    }

    for _ in 0..200 {
        let probability = scorer.score(&baseline_profile()).probability;
        assert!((0.36 - 1e-9..=0.40 + 1e-9).contains(&probability));
    }
}

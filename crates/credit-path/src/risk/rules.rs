//! Rule table driving the heuristic scorer.
//!
//! Each category lists its bands in priority order; the first band containing the
//! category's signal wins and later bands are ignored.

use super::domain::{ApplicantProfile, SignalCategory, SignalContribution};

/// Interval test applied to a category's signal value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Band {
    Above(f64),
    AtLeast(f64),
    Below(f64),
    Exactly(f64),
    Any,
}

impl Band {
    pub fn contains(&self, value: f64) -> bool {
        match *self {
            Band::Above(bound) => value > bound,
            Band::AtLeast(bound) => value >= bound,
            Band::Below(bound) => value < bound,
            Band::Exactly(target) => value == target,
            Band::Any => true,
        }
    }
}

#[derive(Debug)]
pub struct Rule {
    pub band: Band,
    pub delta: f64,
    pub reason: &'static str,
    pub action: Option<&'static str>,
}

pub struct CategoryRules {
    pub category: SignalCategory,
    pub signal: fn(&ApplicantProfile) -> f64,
    pub rules: &'static [Rule],
}

impl CategoryRules {
    pub fn evaluate(&self, profile: &ApplicantProfile) -> Option<SignalContribution> {
        let value = (self.signal)(profile);
        self.rules
            .iter()
            .find(|rule| rule.band.contains(value))
            .map(|rule| SignalContribution {
                category: self.category,
                probability_delta: rule.delta,
                reason: rule.reason.to_string(),
                action: rule.action.map(str::to_string),
            })
    }
}

fn credit_score(profile: &ApplicantProfile) -> f64 {
    profile.credit_score
}

fn debt_to_income(profile: &ApplicantProfile) -> f64 {
    profile.debt_to_income_ratio
}

fn existing_loans(profile: &ApplicantProfile) -> f64 {
    profile.existing_loans as f64
}

fn age(profile: &ApplicantProfile) -> f64 {
    profile.age as f64
}

pub static RULE_TABLE: [CategoryRules; 5] = [
    CategoryRules {
        category: SignalCategory::LoanToIncome,
        signal: ApplicantProfile::loan_to_income,
        rules: &[
            Rule {
                band: Band::Above(2.0),
                delta: 0.25,
                reason: "Very high loan amount compared to income",
                action: Some("Reduce loan amount or increase income proof"),
            },
            Rule {
                band: Band::Above(1.5),
                delta: 0.15,
                reason: "High loan burden compared to income",
                action: Some("Provide additional income documents"),
            },
            Rule {
                band: Band::Below(0.8),
                delta: -0.12,
                reason: "Healthy loan-to-income ratio",
                action: None,
            },
        ],
    },
    CategoryRules {
        category: SignalCategory::CreditScore,
        signal: credit_score,
        rules: &[
            Rule {
                band: Band::Below(600.0),
                delta: 0.25,
                reason: "Low credit score",
                action: Some("Improve credit score before approval"),
            },
            Rule {
                band: Band::Below(700.0),
                delta: 0.10,
                reason: "Average credit score",
                action: Some("Request recent credit report"),
            },
            Rule {
                band: Band::Above(750.0),
                delta: -0.20,
                reason: "Strong credit score",
                action: None,
            },
        ],
    },
    CategoryRules {
        category: SignalCategory::DebtToIncome,
        signal: debt_to_income,
        rules: &[
            Rule {
                band: Band::Above(50.0),
                delta: 0.18,
                reason: "High debt-to-income ratio",
                action: Some("Reduce monthly liabilities"),
            },
            Rule {
                band: Band::Above(35.0),
                delta: 0.10,
                reason: "Moderate debt-to-income ratio",
                action: None,
            },
            Rule {
                band: Band::Below(25.0),
                delta: -0.10,
                reason: "Low debt burden",
                action: None,
            },
        ],
    },
    CategoryRules {
        category: SignalCategory::ExistingLoans,
        signal: existing_loans,
        rules: &[
            Rule {
                band: Band::AtLeast(4.0),
                delta: 0.18,
                reason: "Too many existing loans",
                action: Some("Close at least one existing loan"),
            },
            Rule {
                band: Band::Exactly(3.0),
                delta: 0.10,
                reason: "Multiple active loans",
                action: None,
            },
            Rule {
                band: Band::Exactly(0.0),
                delta: -0.05,
                reason: "No existing loan burden",
                action: None,
            },
        ],
    },
    CategoryRules {
        category: SignalCategory::Age,
        signal: age,
        rules: &[
            Rule {
                band: Band::Below(21.0),
                delta: 0.10,
                reason: "Very young borrower with limited history",
                action: Some("Request guarantor"),
            },
            Rule {
                band: Band::Above(55.0),
                delta: 0.05,
                reason: "Older age range",
                action: None,
            },
            Rule {
                band: Band::Any,
                delta: 0.0,
                reason: "Stable age range",
                action: None,
            },
        ],
    },
];

/// Table entries are laid out in `SignalCategory` declaration order.
pub fn rules_for(category: SignalCategory) -> &'static CategoryRules {
    &RULE_TABLE[category as usize]
}

pub fn evaluate(
    category: SignalCategory,
    profile: &ApplicantProfile,
) -> Option<SignalContribution> {
    rules_for(category).evaluate(profile)
}

/// Contributions for every category that fired, in category order.
pub fn contributions(profile: &ApplicantProfile) -> Vec<SignalContribution> {
    RULE_TABLE
        .iter()
        .filter_map(|entry| entry.evaluate(profile))
        .collect()
}

use serde::{Deserialize, Serialize};

pub const DEFAULT_APPLICANT_NAME: &str = "Unknown";

fn default_applicant_name() -> String {
    DEFAULT_APPLICANT_NAME.to_string()
}

/// Financial attributes of a loan applicant.
///
/// Values are not range-checked: out-of-range figures flow straight through the
/// scoring arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    #[serde(default = "default_applicant_name")]
    pub name: String,
    pub age: i64,
    pub income: f64,
    pub loan_amount: f64,
    pub credit_score: f64,
    pub debt_to_income_ratio: f64,
    pub existing_loans: i64,
}

impl ApplicantProfile {
    /// Loan amount over income, with income shifted by one so a zero income
    /// never divides by zero.
    pub fn loan_to_income(&self) -> f64 {
        self.loan_amount / (self.income + 1.0)
    }
}

/// Scoring signals, declared in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SignalCategory {
    #[serde(rename = "ratio")]
    LoanToIncome,
    #[serde(rename = "credit_score")]
    CreditScore,
    #[serde(rename = "dti")]
    DebtToIncome,
    #[serde(rename = "existing_loans")]
    ExistingLoans,
    #[serde(rename = "age")]
    Age,
}

impl SignalCategory {
    pub const ORDERED: [SignalCategory; 5] = [
        SignalCategory::LoanToIncome,
        SignalCategory::CreditScore,
        SignalCategory::DebtToIncome,
        SignalCategory::ExistingLoans,
        SignalCategory::Age,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SignalCategory::LoanToIncome => "ratio",
            SignalCategory::CreditScore => "credit_score",
            SignalCategory::DebtToIncome => "dti",
            SignalCategory::ExistingLoans => "existing_loans",
            SignalCategory::Age => "age",
        }
    }
}

/// One category's adjustment to the probability plus its explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalContribution {
    pub category: SignalCategory,
    pub probability_delta: f64,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

/// Scorer output: bounded probability and contributions in category order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub probability: f64,
    pub contributions: Vec<SignalContribution>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskBucket {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Moderate Risk")]
    Moderate,
    #[serde(rename = "High Risk")]
    High,
}

impl RiskBucket {
    pub fn label(&self) -> &'static str {
        match self {
            RiskBucket::Low => "Low Risk",
            RiskBucket::Moderate => "Moderate Risk",
            RiskBucket::High => "High Risk",
        }
    }

    pub fn severity(&self) -> SeverityMarker {
        match self {
            RiskBucket::Low => SeverityMarker::Check,
            RiskBucket::Moderate => SeverityMarker::Warn,
            RiskBucket::High => SeverityMarker::Block,
        }
    }

    /// Action used when no scoring signal recommended one.
    pub fn default_action(&self) -> &'static str {
        match self {
            RiskBucket::Low => "Proceed with approval after standard checks.",
            RiskBucket::Moderate => "Review borrower documents and verify income stability.",
            RiskBucket::High => {
                "Call borrower immediately and request updated financial documents."
            }
        }
    }

    pub(crate) fn batch_reason(&self) -> &'static str {
        match self {
            RiskBucket::Low => "Stable borrower profile",
            RiskBucket::Moderate => "Medium borrower stability",
            RiskBucket::High => "High-risk borrower",
        }
    }

    pub(crate) fn batch_action(&self) -> &'static str {
        match self {
            RiskBucket::Low => "Proceed with approval",
            RiskBucket::Moderate => "Request additional documents",
            RiskBucket::High => "Verify repayment capacity",
        }
    }
}

impl std::fmt::Display for RiskBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityMarker {
    Check,
    Warn,
    Block,
}

impl SeverityMarker {
    pub fn glyph(&self) -> &'static str {
        match self {
            SeverityMarker::Check => "☑️",
            SeverityMarker::Warn => "❗",
            SeverityMarker::Block => "❌",
        }
    }

    /// Batch responses render the moderate case with a different glyph.
    pub fn batch_glyph(&self) -> &'static str {
        match self {
            SeverityMarker::Warn => "⚠️",
            other => other.glyph(),
        }
    }
}

/// Classification handed back to callers of a single evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub name: String,
    pub prediction: RiskBucket,
    pub percentage: f64,
    pub severity: SeverityMarker,
    pub severity_marker: &'static str,
    pub reason: String,
    pub action: String,
}

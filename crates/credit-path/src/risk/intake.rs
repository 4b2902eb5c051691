use serde::{Deserialize, Serialize};

use super::domain::{ApplicantProfile, DEFAULT_APPLICANT_NAME};

/// Loosely typed request body; numbers may arrive as JSON numbers or numeric strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicantSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<NumericInput>,
    #[serde(default)]
    pub income: Option<NumericInput>,
    #[serde(default)]
    pub loan_amount: Option<NumericInput>,
    #[serde(default)]
    pub credit_score: Option<NumericInput>,
    #[serde(default)]
    pub debt_to_income_ratio: Option<NumericInput>,
    #[serde(default)]
    pub existing_loans: Option<NumericInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for NumericInput {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid field `{field}`: {kind}")]
pub struct ProfileError {
    pub field: &'static str,
    pub kind: ProfileErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProfileErrorKind {
    #[error("value is required")]
    Missing,
    #[error("value is not numeric")]
    NotNumeric,
    #[error("value must be finite")]
    NotFinite,
    #[error("value must be a whole number")]
    NotIntegral,
}

impl ApplicantSubmission {
    /// Coerce the submission into a profile, rejecting missing or non-numeric fields.
    pub fn into_profile(self) -> Result<ApplicantProfile, ProfileError> {
        let name = self
            .name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_APPLICANT_NAME.to_string());

        Ok(ApplicantProfile {
            name,
            age: required_integer("age", self.age)?,
            income: required_real("income", self.income)?,
            loan_amount: required_real("loan_amount", self.loan_amount)?,
            credit_score: required_real("credit_score", self.credit_score)?,
            debt_to_income_ratio: required_real(
                "debt_to_income_ratio",
                self.debt_to_income_ratio,
            )?,
            existing_loans: required_integer("existing_loans", self.existing_loans)?,
        })
    }
}

impl From<ApplicantProfile> for ApplicantSubmission {
    fn from(profile: ApplicantProfile) -> Self {
        Self {
            name: Some(profile.name),
            age: Some(profile.age.into()),
            income: Some(profile.income.into()),
            loan_amount: Some(profile.loan_amount.into()),
            credit_score: Some(profile.credit_score.into()),
            debt_to_income_ratio: Some(profile.debt_to_income_ratio.into()),
            existing_loans: Some(profile.existing_loans.into()),
        }
    }
}

fn required_real(field: &'static str, value: Option<NumericInput>) -> Result<f64, ProfileError> {
    let error = |kind| ProfileError { field, kind };

    let number = match value.ok_or(error(ProfileErrorKind::Missing))? {
        NumericInput::Number(number) => number,
        NumericInput::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(error(ProfileErrorKind::Missing));
            }
            trimmed
                .parse::<f64>()
                .map_err(|_| error(ProfileErrorKind::NotNumeric))?
        }
        NumericInput::Other(serde_json::Value::Null) => {
            return Err(error(ProfileErrorKind::Missing))
        }
        NumericInput::Other(_) => return Err(error(ProfileErrorKind::NotNumeric)),
    };

    if number.is_finite() {
        Ok(number)
    } else {
        Err(error(ProfileErrorKind::NotFinite))
    }
}

fn required_integer(
    field: &'static str,
    value: Option<NumericInput>,
) -> Result<i64, ProfileError> {
    let number = required_real(field, value)?;
    if number.fract() != 0.0 || number.abs() > i64::MAX as f64 {
        return Err(ProfileError {
            field,
            kind: ProfileErrorKind::NotIntegral,
        });
    }
    Ok(number as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn submission(value: serde_json::Value) -> ApplicantSubmission {
        serde_json::from_value(value).expect("submission deserializes")
    }

    fn complete() -> serde_json::Value {
        json!({
            "name": "Dana",
            "age": 30,
            "income": 50000,
            "loan_amount": 40000.0,
            "credit_score": 720,
            "debt_to_income_ratio": 30,
            "existing_loans": 1
        })
    }

    #[test]
    fn complete_submission_becomes_profile() {
        let profile = submission(complete()).into_profile().expect("valid");
        assert_eq!(profile.name, "Dana");
        assert_eq!(profile.age, 30);
        assert_eq!(profile.income, 50000.0);
        assert_eq!(profile.existing_loans, 1);
    }

    #[test]
    fn numeric_strings_are_coerced() {
        let mut body = complete();
        body["income"] = json!(" 42000.5 ");
        body["age"] = json!("41");
        let profile = submission(body).into_profile().expect("coerced");
        assert_eq!(profile.income, 42000.5);
        assert_eq!(profile.age, 41);
    }

    #[test]
    fn missing_name_defaults_to_unknown() {
        let mut body = complete();
        body.as_object_mut().expect("object").remove("name");
        let profile = submission(body).into_profile().expect("valid");
        assert_eq!(profile.name, DEFAULT_APPLICANT_NAME);
    }

    #[test]
    fn missing_numeric_field_is_rejected() {
        let mut body = complete();
        body.as_object_mut().expect("object").remove("credit_score");
        let error = submission(body).into_profile().expect_err("missing field");
        assert_eq!(error.field, "credit_score");
        assert_eq!(error.kind, ProfileErrorKind::Missing);
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        let mut body = complete();
        body["loan_amount"] = json!("lots");
        let error = submission(body).into_profile().expect_err("bad number");
        assert_eq!(error.field, "loan_amount");
        assert_eq!(error.kind, ProfileErrorKind::NotNumeric);

        let mut body = complete();
        body["income"] = json!(true);
        let error = submission(body).into_profile().expect_err("bool income");
        assert_eq!(error.kind, ProfileErrorKind::NotNumeric);
    }

    #[test]
    fn fractional_age_is_rejected() {
        let mut body = complete();
        body["age"] = json!(30.5);
        let error = submission(body).into_profile().expect_err("fractional age");
        assert_eq!(error.field, "age");
        assert_eq!(error.kind, ProfileErrorKind::NotIntegral);
    }

    #[test]
    fn infinite_values_are_rejected() {
        let mut body = complete();
        body["debt_to_income_ratio"] = json!("inf");
        let error = submission(body).into_profile().expect_err("infinite");
        assert_eq!(error.kind, ProfileErrorKind::NotFinite);
    }

    #[test]
    fn out_of_range_values_pass_through() {
        let mut body = complete();
        body["income"] = json!(0);
        body["credit_score"] = json!(9000);
        body["age"] = json!(-4);
        let profile = submission(body).into_profile().expect("accepted");
        assert_eq!(profile.credit_score, 9000.0);
        assert_eq!(profile.age, -4);
    }
}

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use super::batch::BatchResult;
use super::domain::Verdict;
use super::intake::ApplicantSubmission;
use super::RiskEngine;
use crate::error::AppError;

/// Router builder exposing single-record and batch scoring.
pub fn risk_router(engine: Arc<RiskEngine>) -> Router {
    Router::new()
        .route("/api/v1/predict", post(predict_handler))
        .route("/predict/", post(predict_handler))
        .route("/api/v1/batch", post(batch_handler))
        .route("/batch/", post(batch_handler))
        .with_state(engine)
}

pub(crate) async fn predict_handler(
    State(engine): State<Arc<RiskEngine>>,
    submission: Result<Json<ApplicantSubmission>, JsonRejection>,
) -> Result<Json<Verdict>, AppError> {
    let Json(submission) = submission?;
    let profile = submission.into_profile()?;
    Ok(Json(engine.score(&profile)))
}

/// Undecodable bytes are replaced rather than rejected.
pub(crate) async fn batch_handler(
    State(engine): State<Arc<RiskEngine>>,
    body: Bytes,
) -> Json<BatchResult> {
    let text = String::from_utf8_lossy(&body);
    Json(engine.score_batch(&text))
}

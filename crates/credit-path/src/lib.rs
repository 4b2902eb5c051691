//! Credit-risk classification for loan applicants.
//!
//! The [`risk`] module holds the scoring engine; the remaining modules carry the
//! configuration, error, and telemetry plumbing shared with the API service.

pub mod config;
pub mod error;
pub mod risk;
pub mod telemetry;

pub use risk::{ApplicantProfile, BatchResult, RiskEngine, Verdict};

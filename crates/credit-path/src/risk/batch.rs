//! Bulk evaluation over delimited text.
//!
//! Batch probabilities are simulated per row instead of being computed by the
//! scorer, so batch output is indicative and not comparable with a
//! single-record verdict.

use serde::Serialize;
use tracing::{debug, warn};

use super::domain::RiskBucket;
use super::explainer::{bucket, display_percentage, round_to_hundredths};
use super::random::RandomSource;

pub const SIMULATED_PROBABILITY_LOW: f64 = 0.05;
pub const SIMULATED_PROBABILITY_HIGH: f64 = 0.95;
const MINIMUM_LINES: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BatchError {
    #[error("input appears empty or invalid")]
    Empty,
}

/// A data row with its 1-based position after the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRow {
    pub index: usize,
    pub fields: Vec<String>,
}

impl BatchRow {
    pub fn display_name(&self) -> String {
        match self.fields.first() {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format!("Row {}", self.index),
        }
    }
}

/// Drop blank lines and the header, splitting each remaining line into trimmed fields.
pub fn parse_rows(raw: &str) -> Result<Vec<BatchRow>, BatchError> {
    let lines: Vec<&str> = raw.lines().filter(|line| !line.trim().is_empty()).collect();
    if lines.len() < MINIMUM_LINES {
        return Err(BatchError::Empty);
    }

    Ok(lines
        .iter()
        .skip(1)
        .enumerate()
        .map(|(offset, line)| {
            let index = offset + 1;
            BatchRow {
                index,
                fields: split_fields(line, index),
            }
        })
        .collect())
}

fn split_fields(line: &str, index: usize) -> Vec<String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(line.as_bytes());

    match reader.records().next() {
        Some(Ok(record)) => record.iter().map(str::to_string).collect(),
        Some(Err(err)) => {
            warn!(row = index, error = %err, "undecodable batch row, using defaults");
            Vec::new()
        }
        None => Vec::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRowVerdict {
    pub row: usize,
    pub name: String,
    pub prediction: RiskBucket,
    pub percentage: f64,
    pub reason: &'static str,
    pub action: &'static str,
    pub severity_marker: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub ok: bool,
    pub count: usize,
    pub indicative: bool,
    pub results: Vec<BatchRowVerdict>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchFailure {
    pub ok: bool,
    pub message: String,
}

/// Callers inspect `ok` instead of handling an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BatchResult {
    Scored(BatchReport),
    Failed(BatchFailure),
}

impl BatchResult {
    pub fn scored(results: Vec<BatchRowVerdict>) -> Self {
        Self::Scored(BatchReport {
            ok: true,
            count: results.len(),
            indicative: true,
            results,
        })
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(BatchFailure {
            ok: false,
            message: message.into(),
        })
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, BatchResult::Scored(_))
    }

    pub fn count(&self) -> usize {
        match self {
            BatchResult::Scored(report) => report.count,
            BatchResult::Failed(_) => 0,
        }
    }

    pub fn results(&self) -> &[BatchRowVerdict] {
        match self {
            BatchResult::Scored(report) => &report.results,
            BatchResult::Failed(_) => &[],
        }
    }
}

fn simulate_row(row: &BatchRow, random: &dyn RandomSource) -> BatchRowVerdict {
    let probability = round_to_hundredths(
        random.uniform(SIMULATED_PROBABILITY_LOW, SIMULATED_PROBABILITY_HIGH),
    );
    let prediction = bucket(probability);

    BatchRowVerdict {
        row: row.index,
        name: row.display_name(),
        prediction,
        percentage: display_percentage(probability),
        reason: prediction.batch_reason(),
        action: prediction.batch_action(),
        severity_marker: prediction.severity().batch_glyph(),
    }
}

pub fn score_batch(raw: &str, random: &dyn RandomSource) -> BatchResult {
    match parse_rows(raw) {
        Ok(rows) => {
            let results: Vec<_> = rows.iter().map(|row| simulate_row(row, random)).collect();
            debug!(rows = results.len(), "batch scored");
            BatchResult::scored(results)
        }
        Err(err) => {
            debug!(error = %err, "batch rejected");
            BatchResult::failed(err.to_string())
        }
    }
}

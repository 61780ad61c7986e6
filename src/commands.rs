use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use crate::codec;
use crate::consensus::{self, AnalysisOptions};
use crate::domain::Base;
use crate::error::ConsensusError;
use crate::input;

/// What an analysis concluded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// A secret was reconstructed by at least one subset
    Consensus {
        secret: String,
        support: usize,
        /// Invalid share indices, ascending
        invalid_shares: Vec<String>,
        candidates: usize,
        subsets_evaluated: usize,
        degenerate_subsets: usize,
        non_integral_subsets: usize,
    },
    /// No subset produced a secret
    NoConsensus { subsets_evaluated: usize },
}

/// Result of analyzing one test case
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub threshold: usize,
    pub shares: usize,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Report (or failure) for one test case file
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub result: Result<Report>,
}

/// Analyze a test case document
///
/// Returns a report for both a reconstructed secret and the no-consensus outcome.
///
/// # Errors
/// Returns an error if the document violates the test case format
pub fn analyze_document(json: &str, options: &AnalysisOptions) -> Result<Report> {
    let case = input::load_test_case(json).context("Malformed test case")?;
    let threshold = *case.params.threshold();

    let outcome = match consensus::analyze(&case.shares, threshold, options) {
        Ok(result) => Outcome::Consensus {
            secret: result.secret.to_string(),
            support: result.support,
            invalid_shares: result
                .invalid_indices
                .iter()
                .map(ToString::to_string)
                .collect(),
            candidates: result.candidates.len(),
            subsets_evaluated: result.subsets_evaluated,
            degenerate_subsets: result.degenerate_subsets,
            non_integral_subsets: result.non_integral_subsets,
        },
        Err(ConsensusError::NoConsensus {
            subsets_evaluated, ..
        }) => Outcome::NoConsensus { subsets_evaluated },
    };

    Ok(Report {
        threshold,
        shares: case.shares.len(),
        outcome,
    })
}

/// Analyze the test case stored at `path`
///
/// # Errors
/// Returns an error if the file cannot be read or is not a valid test case
pub fn analyze_file(path: &Path, options: &AnalysisOptions) -> Result<Report> {
    debug!(path = %path.display(), "analyzing test case");

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read test case {}", path.display()))?;

    analyze_document(&json, options)
}

/// Analyze every file independently
///
/// A failure in one file is recorded in its [`FileReport`] and does not stop the
/// others.
pub fn analyze_files(paths: &[PathBuf], options: &AnalysisOptions) -> Vec<FileReport> {
    paths
        .iter()
        .map(|path| {
            let result = analyze_file(path, options);
            if let Err(e) = &result {
                debug!(path = %path.display(), "test case failed: {e:#}");
            }
            FileReport {
                path: path.clone(),
                result,
            }
        })
        .collect()
}

/// Render one report the way the results are read by people
#[must_use]
pub fn render_text(label: &str, report: &Report) -> String {
    match &report.outcome {
        Outcome::Consensus {
            secret,
            invalid_shares,
            ..
        } => {
            let invalid = if invalid_shares.is_empty() {
                "None".to_string()
            } else {
                invalid_shares.join(" ")
            };
            format!(
                "Secret for file {label}: {secret}\n\nInvalid shares for file {label}: {invalid}\n"
            )
        }
        Outcome::NoConsensus { subsets_evaluated } => format!(
            "No consensus for file {label}: none of the {subsets_evaluated} subsets of size {} produced a secret\n",
            report.threshold
        ),
    }
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    file: String,
    #[serde(flatten)]
    report: Option<&'a Report>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Render all file reports as a JSON array
///
/// # Errors
/// Returns an error if serialization fails
pub fn render_json(reports: &[FileReport]) -> Result<String> {
    let entries: Vec<JsonEntry<'_>> = reports
        .iter()
        .map(|file| JsonEntry {
            file: file.path.display().to_string(),
            report: file.result.as_ref().ok(),
            error: file.result.as_ref().err().map(|e| format!("{e:#}")),
        })
        .collect();

    serde_json::to_string_pretty(&entries).context("Failed to serialize reports")
}

/// Decode a single value written in `base` to decimal
///
/// # Errors
/// Returns an error if the base is unsupported or the digits are not valid in it
pub fn decode_digits(base: &str, digits: &str) -> Result<String> {
    let base = Base::from_str(base).context("Invalid base")?;
    let value = codec::decode_value(digits, base)
        .with_context(|| format!("Failed to decode '{digits}' in base {}", *base))?;
    Ok(value.to_string())
}

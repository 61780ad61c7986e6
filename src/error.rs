//! Error types for each stage of the audit pipeline

use num_bigint::BigInt;
use thiserror::Error;

/// Failure to turn a raw `(index, base, digits)` entry into a share
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unsupported base '{0}' (expected a decimal integer in 2..=62)")]
    UnsupportedBase(String),

    #[error("share value is empty")]
    EmptyValue,

    #[error("invalid digit '{digit}' at position {position} for base {base}")]
    InvalidDigit {
        digit: char,
        position: usize,
        base: u32,
    },

    #[error("share index '{0}' is not a decimal integer")]
    InvalidIndex(String),
}

/// A test case document that violates the input contract
#[derive(Debug, Error)]
pub enum InputError {
    #[error("test case is not valid JSON")]
    Json(#[from] serde_json::Error),

    #[error("test case must be a JSON object")]
    NotAnObject,

    #[error("missing \"keys\" entry with scheme parameters")]
    MissingKeys,

    #[error("invalid scheme parameters: {0}")]
    InvalidParameters(String),

    #[error("share '{key}' is malformed: {reason}")]
    MalformedShare { key: String, reason: String },

    #[error("share '{key}' could not be decoded")]
    Decode {
        key: String,
        #[source]
        source: DecodeError,
    },

    #[error("shares '{first}' and '{second}' have the same index {x}")]
    DuplicateIndex {
        first: String,
        second: String,
        x: BigInt,
    },
}

/// A subset that cannot be interpolated to an integer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InterpolationError {
    #[error("subset contains index {x} more than once")]
    DegenerateSubset { x: BigInt },

    #[error("interpolation at zero is not an integer")]
    NonIntegral,
}

/// No subset produced a usable candidate secret
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConsensusError {
    #[error(
        "no consensus: none of the {subsets_evaluated} subsets of size {threshold} produced a secret"
    )]
    NoConsensus {
        threshold: usize,
        subsets_evaluated: usize,
    },
}

//! Test case documents
//!
//! A test case is a JSON object. The reserved `"keys"` entry carries the scheme
//! parameters and every other entry is one share, keyed by its decimal index:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": "10", "value": "12" },
//!     "6": { "base": "4", "value": "213" }
//! }
//! ```
//!
//! Shares are returned in the order of their keys compared as strings, so `"10"` comes
//! before `"2"`. That order fixes the subset enumeration order and with it the
//! first-seen tie-break.

use std::collections::HashMap;

use num_bigint::BigInt;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::codec;
use crate::domain::{SchemeParams, Share, ShareCount, Threshold};
use crate::error::InputError;

/// Key of the entry holding the scheme parameters
pub const PARAMETERS_KEY: &str = "keys";

/// A share as it appears in a test case, before decoding
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawShareEntry {
    /// Base of `value`, as a decimal string
    pub base: String,
    /// The share value written in `base`
    pub value: String,
}

#[derive(Debug, Deserialize)]
struct RawParameters {
    n: usize,
    k: usize,
}

/// A loaded test case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub params: SchemeParams,
    pub shares: Vec<Share>,
}

fn parse_parameters(value: &Value) -> Result<SchemeParams, InputError> {
    let raw = RawParameters::deserialize(value)
        .map_err(|e| InputError::InvalidParameters(e.to_string()))?;

    let threshold =
        Threshold::new(raw.k).map_err(|e| InputError::InvalidParameters(e.to_string()))?;
    let share_count =
        ShareCount::new(raw.n).map_err(|e| InputError::InvalidParameters(e.to_string()))?;

    let params = SchemeParams::new(threshold, share_count);
    if params.threshold_exceeds_share_count() {
        warn!(
            threshold = raw.k,
            declared = raw.n,
            "threshold exceeds the declared share count"
        );
    }
    Ok(params)
}

/// Parses and decodes a test case document
///
/// # Errors
/// Returns an error if the document is not a JSON object, the `"keys"` entry is
/// missing or invalid, any share entry is malformed or fails to decode, or two
/// entries decode to the same index
pub fn load_test_case(json: &str) -> Result<TestCase, InputError> {
    let document: Value = serde_json::from_str(json)?;
    let Value::Object(entries) = document else {
        return Err(InputError::NotAnObject);
    };

    let params = parse_parameters(
        entries
            .get(PARAMETERS_KEY)
            .ok_or(InputError::MissingKeys)?,
    )?;

    let mut shares = Vec::with_capacity(entries.len().saturating_sub(1));
    let mut seen: HashMap<BigInt, &str> = HashMap::new();

    for (key, value) in &entries {
        if key == PARAMETERS_KEY {
            continue;
        }

        let raw = RawShareEntry::deserialize(value).map_err(|e| InputError::MalformedShare {
            key: key.clone(),
            reason: e.to_string(),
        })?;

        let share = codec::decode_share(key, &raw.base, &raw.value).map_err(|source| {
            InputError::Decode {
                key: key.clone(),
                source,
            }
        })?;

        if let Some(first) = seen.insert(share.x.clone(), key.as_str()) {
            return Err(InputError::DuplicateIndex {
                first: first.to_string(),
                second: key.clone(),
                x: share.x,
            });
        }

        shares.push(share);
    }

    if shares.len() != *params.share_count() {
        warn!(
            declared = *params.share_count(),
            present = shares.len(),
            "declared share count does not match the shares present"
        );
    }

    Ok(TestCase { params, shares })
}

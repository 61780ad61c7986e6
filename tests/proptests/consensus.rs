//! Property tests for majority consensus

use std::collections::BTreeSet;

use num_bigint::BigInt;
use quickcheck_macros::quickcheck;
use sharecheck::consensus::{AnalysisOptions, TieBreak, analyze};
use sharecheck::error::ConsensusError;
use sharecheck::Division;

use crate::polynomial::{CorruptedSharing, Sharing};

fn exact(tie_break: TieBreak) -> AnalysisOptions {
    AnalysisOptions {
        tie_break,
        division: Division::Exact,
    }
}

/// Honest shares reconstruct the secret from every subset and are all valid
#[quickcheck]
fn prop_honest_shares_all_valid(sharing: Sharing) -> bool {
    let shares = sharing.shares();
    let Ok(result) = analyze(&shares, sharing.threshold, &exact(TieBreak::FirstSeen)) else {
        return false;
    };

    &result.secret == sharing.secret()
        && result.support == result.subsets_evaluated
        && result.candidates.len() == 1
        && result.all_valid()
}

/// One corrupted share among at least `k + 2` does not move the secret and is flagged
#[quickcheck]
fn prop_single_corruption_detected(case: CorruptedSharing) -> bool {
    let shares = case.shares();
    let Ok(result) = analyze(&shares, case.sharing.threshold, &exact(TieBreak::FirstSeen)) else {
        return false;
    };

    let expected: BTreeSet<BigInt> = [BigInt::from(case.sharing.xs[case.corrupted])].into();
    &result.secret == case.sharing.secret() && result.invalid_indices == expected
}

/// Running the same analysis twice gives the same result, ties included
#[quickcheck]
fn prop_deterministic(case: CorruptedSharing, decimal_order: bool, exact_division: bool) -> bool {
    let options = AnalysisOptions {
        tie_break: if decimal_order {
            TieBreak::DecimalOrder
        } else {
            TieBreak::FirstSeen
        },
        division: if exact_division {
            Division::Exact
        } else {
            Division::Truncating
        },
    };
    let shares = case.shares();
    let threshold = case.sharing.threshold;

    analyze(&shares, threshold, &options) == analyze(&shares, threshold, &options)
}

/// Asking for more shares than exist never produces a secret
#[quickcheck]
fn prop_threshold_above_share_count_has_no_consensus(sharing: Sharing) -> bool {
    let shares = sharing.shares();
    let threshold = shares.len() + 1;

    analyze(&shares, threshold, &AnalysisOptions::default())
        == Err(ConsensusError::NoConsensus {
            threshold,
            subsets_evaluated: 0,
        })
}

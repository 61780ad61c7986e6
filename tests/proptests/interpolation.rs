//! Property tests for interpolation at zero

use num_bigint::BigInt;
use quickcheck_macros::quickcheck;
use sharecheck::combinations::Combinations;
use sharecheck::{Division, interpolate_at_zero};

use crate::polynomial::{Sharing, pairwise_difference_product};

/// With exact division every k-subset of shares on the polynomial recovers the
/// constant term
#[quickcheck]
fn prop_exact_every_subset_recovers_secret(sharing: Sharing) -> bool {
    let shares = sharing.shares();
    Combinations::new(&shares, sharing.threshold)
        .iter()
        .all(|subset| {
            interpolate_at_zero(subset.items(), Division::Exact).as_ref() == Ok(sharing.secret())
        })
}

/// Truncating division agrees with exact division whenever every term divides
/// evenly, which holds once all coefficients are multiples of every denominator
#[quickcheck]
fn prop_truncating_exact_when_terms_divide(sharing: Sharing) -> bool {
    let sharing = sharing.scaled(&pairwise_difference_product(&sharing.xs));
    let shares = sharing.shares();
    Combinations::new(&shares, sharing.threshold)
        .iter()
        .all(|subset| {
            interpolate_at_zero(subset.items(), Division::Truncating).as_ref()
                == Ok(sharing.secret())
        })
}

/// Interpolation does not depend on the order of the shares within a subset
#[quickcheck]
fn prop_exact_order_independent(sharing: Sharing) -> bool {
    let shares = sharing.shares();
    let forward: Vec<_> = shares.iter().take(sharing.threshold).collect();
    let backward: Vec<_> = forward.iter().rev().copied().collect();

    interpolate_at_zero(&forward, Division::Exact)
        == interpolate_at_zero(&backward, Division::Exact)
}

/// A repeated index is always degenerate, whatever the values
#[quickcheck]
fn prop_repeated_index_is_degenerate(x: i64, y1: i64, y2: i64) -> bool {
    let a = sharecheck::Share::new(x, y1);
    let b = sharecheck::Share::new(x, y2);
    [Division::Truncating, Division::Exact].into_iter().all(|division| {
        interpolate_at_zero(&[&a, &b], division)
            == Err(sharecheck::error::InterpolationError::DegenerateSubset { x: BigInt::from(x) })
    })
}

//! Lagrange interpolation at zero over the integers
//!
//! For a subset of `k` shares `(x_i, y_i)` the constant term of the unique
//! degree-`(k - 1)` polynomial through them is
//!
//! ```text
//! f(0) = sum_i  y_i * prod_{j != i} (-x_j) / prod_{j != i} (x_i - x_j)
//! ```
//!
//! All arithmetic is arbitrary precision. How the per-share quotients are combined is
//! selected by [`Division`].

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::domain::Share;
use crate::error::InterpolationError;

/// How the per-share Lagrange terms are divided
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Division {
    /// Divide every term on its own, truncating toward zero, and sum the quotients
    ///
    /// Matches the long-standing behaviour of GMP-based tooling for these test cases.
    /// A term whose denominator does not divide its numerator is silently truncated,
    /// so a subset on the polynomial can still reconstruct the wrong value.
    #[default]
    Truncating,

    /// Sum the terms over a common denominator and divide once
    ///
    /// A subset whose interpolation is not an integer fails with
    /// [`InterpolationError::NonIntegral`].
    Exact,
}

impl std::str::FromStr for Division {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "truncating" => Ok(Self::Truncating),
            "exact" => Ok(Self::Exact),
            other => Err(format!(
                "unknown division '{other}' (expected 'truncating' or 'exact')"
            )),
        }
    }
}

/// Rejects subsets that repeat an x-value, which would divide by zero
fn ensure_distinct(shares: &[&Share]) -> Result<(), InterpolationError> {
    for (i, a) in shares.iter().enumerate() {
        if let Some(b) = shares[i + 1..].iter().find(|b| b.x == a.x) {
            return Err(InterpolationError::DegenerateSubset { x: b.x.clone() });
        }
    }
    Ok(())
}

/// Evaluates the polynomial through `shares` at `x = 0`
///
/// An empty subset interpolates to zero.
///
/// # Errors
/// Returns [`InterpolationError::DegenerateSubset`] if two shares have the same
/// x-value, and [`InterpolationError::NonIntegral`] if `division` is
/// [`Division::Exact`] and the result is not an integer
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigInt;
/// use sharecheck::domain::Share;
/// use sharecheck::interpolation::{interpolate_at_zero, Division};
///
/// // f(x) = x^2 + 3
/// let shares = [Share::new(1, 4), Share::new(2, 7), Share::new(3, 12)];
/// let subset: Vec<&Share> = shares.iter().collect();
///
/// let secret = interpolate_at_zero(&subset, Division::Exact).unwrap();
/// assert_eq!(secret, BigInt::from(3));
/// ```
pub fn interpolate_at_zero(
    shares: &[&Share],
    division: Division,
) -> Result<BigInt, InterpolationError> {
    ensure_distinct(shares)?;

    // (y_i * numerator_i, denominator_i) for every share
    let terms: Vec<(BigInt, BigInt)> = shares
        .iter()
        .enumerate()
        .map(|(i, share)| {
            let mut numerator = BigInt::one();
            let mut denominator = BigInt::one();
            for (j, other) in shares.iter().enumerate() {
                if i == j {
                    continue;
                }
                numerator *= -&other.x;
                denominator *= &share.x - &other.x;
            }
            (&share.y * numerator, denominator)
        })
        .collect();

    match division {
        Division::Truncating => Ok(terms
            .into_iter()
            .map(|(numerator, denominator)| numerator / denominator)
            .sum()),
        Division::Exact => {
            let common: BigInt = terms.iter().map(|(_, denominator)| denominator).product();
            let numerator: BigInt = terms
                .iter()
                .map(|(numerator, denominator)| numerator * (&common / denominator))
                .sum();

            if (&numerator % &common).is_zero() {
                Ok(numerator / common)
            } else {
                Err(InterpolationError::NonIntegral)
            }
        }
    }
}

//! Majority consensus over every k-subset of a share set
//!
//! Each k-subset of the shares is interpolated at zero. The value reconstructed by
//! the most subsets is taken as the secret, and a share is reported invalid when its
//! index appears in none of the subsets that reconstructed it.
//!
//! A corrupted share that happens to join a subset reconstructing the winning value
//! is not reported. Majority voting cannot tell that case apart from a valid share.

use std::collections::{BTreeSet, HashMap};

use num_bigint::BigInt;
use tracing::{debug, info};

use crate::combinations::Combinations;
use crate::domain::Share;
use crate::error::{ConsensusError, InterpolationError};
use crate::interpolation::{Division, interpolate_at_zero};

/// How to choose between candidate secrets with the same support
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum TieBreak {
    /// The candidate whose first supporting subset was enumerated earliest
    #[default]
    FirstSeen,

    /// The candidate whose decimal representation sorts first as a string
    ///
    /// This is the order of a map keyed by the decimal secret, so `"10"` beats `"9"`
    /// and `"-5"` beats `"3"`.
    DecimalOrder,
}

impl std::str::FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-seen" => Ok(Self::FirstSeen),
            "decimal-order" => Ok(Self::DecimalOrder),
            other => Err(format!(
                "unknown tie-break '{other}' (expected 'first-seen' or 'decimal-order')"
            )),
        }
    }
}

/// Configuration for one analysis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub tie_break: TieBreak,
    pub division: Division,
}

/// One distinct reconstructed value and how many subsets produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub secret: BigInt,
    pub support: usize,
    /// Enumeration ordinal of the first subset that produced this value
    pub first_subset: usize,
}

/// Outcome of a successful consensus analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsensusResult {
    /// The winning secret
    pub secret: BigInt,
    /// Number of subsets that reconstructed the winning secret
    pub support: usize,
    /// Indices that appear in no subset reconstructing the winning secret
    pub invalid_indices: BTreeSet<BigInt>,
    pub subsets_evaluated: usize,
    /// Subsets skipped because they repeat an index
    pub degenerate_subsets: usize,
    /// Subsets skipped because their interpolation was not an integer
    pub non_integral_subsets: usize,
    /// Every distinct reconstructed value, in first-seen order
    pub candidates: Vec<Candidate>,
}

impl ConsensusResult {
    /// Whether every share took part in reconstructing the winning secret
    #[must_use]
    pub fn all_valid(&self) -> bool {
        self.invalid_indices.is_empty()
    }
}

/// Frequency table entry: a candidate plus the indices of its supporting subsets
struct Tally {
    candidate: Candidate,
    participants: BTreeSet<BigInt>,
}

/// Picks the index of the winning tally, or `None` when there are no tallies
fn select_winner(tallies: &[Tally], tie_break: TieBreak) -> Option<usize> {
    let mut order: Vec<usize> = (0..tallies.len()).collect();
    if tie_break == TieBreak::DecimalOrder {
        order.sort_by_cached_key(|&i| tallies[i].candidate.secret.to_string());
    }

    // Strictly greater: among equal supports the first in `order` wins
    let mut best: Option<usize> = None;
    for i in order {
        let support = tallies[i].candidate.support;
        if best.is_none_or(|b| support > tallies[b].candidate.support) {
            best = Some(i);
        }
    }
    best
}

/// Reconstructs the consensus secret from every `k`-subset of `shares`
///
/// Subsets are enumerated in lexicographic order of share positions. Subsets that
/// repeat an index, or that are not integral under [`Division::Exact`], are skipped
/// and counted.
///
/// # Errors
/// Returns [`ConsensusError::NoConsensus`] when no subset produced a value, for
/// instance because `k` exceeds the number of shares
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigInt;
/// use sharecheck::consensus::{analyze, AnalysisOptions};
/// use sharecheck::domain::Share;
///
/// // f(x) = 42 + 3x + 15x^2, with share 3 corrupted
/// let shares = [
///     Share::new(1, 60),
///     Share::new(2, 108),
///     Share::new(3, 191),
///     Share::new(4, 294),
///     Share::new(5, 432),
/// ];
///
/// let result = analyze(&shares, 3, &AnalysisOptions::default()).unwrap();
/// assert_eq!(result.secret, BigInt::from(42));
/// assert_eq!(result.support, 4);
/// assert!(result.invalid_indices.contains(&BigInt::from(3)));
/// assert_eq!(result.invalid_indices.len(), 1);
/// ```
pub fn analyze(
    shares: &[Share],
    k: usize,
    options: &AnalysisOptions,
) -> Result<ConsensusResult, ConsensusError> {
    let mut tallies: Vec<Tally> = Vec::new();
    let mut by_secret: HashMap<BigInt, usize> = HashMap::new();
    let mut subsets_evaluated = 0;
    let mut degenerate_subsets = 0;
    let mut non_integral_subsets = 0;

    for (ordinal, subset) in Combinations::new(shares, k).iter().enumerate() {
        subsets_evaluated += 1;

        let secret = match interpolate_at_zero(subset.items(), options.division) {
            Ok(secret) => secret,
            Err(InterpolationError::DegenerateSubset { x }) => {
                debug!(positions = ?subset.positions(), %x, "skipping degenerate subset");
                degenerate_subsets += 1;
                continue;
            }
            Err(InterpolationError::NonIntegral) => {
                debug!(positions = ?subset.positions(), "skipping non-integral subset");
                non_integral_subsets += 1;
                continue;
            }
        };

        let slot = *by_secret.entry(secret.clone()).or_insert_with(|| {
            tallies.push(Tally {
                candidate: Candidate {
                    secret,
                    support: 0,
                    first_subset: ordinal,
                },
                participants: BTreeSet::new(),
            });
            tallies.len() - 1
        });

        let tally = &mut tallies[slot];
        tally.candidate.support += 1;
        tally
            .participants
            .extend(subset.items().iter().map(|share| share.x.clone()));
    }

    let Some(winner) = select_winner(&tallies, options.tie_break) else {
        return Err(ConsensusError::NoConsensus {
            threshold: k,
            subsets_evaluated,
        });
    };

    let invalid_indices: BTreeSet<BigInt> = shares
        .iter()
        .map(|share| &share.x)
        .filter(|x| !tallies[winner].participants.contains(*x))
        .cloned()
        .collect();

    let secret = tallies[winner].candidate.secret.clone();
    let support = tallies[winner].candidate.support;

    info!(
        %secret,
        support,
        subsets_evaluated,
        candidates = tallies.len(),
        invalid = invalid_indices.len(),
        "consensus reached"
    );

    Ok(ConsensusResult {
        secret,
        support,
        invalid_indices,
        subsets_evaluated,
        degenerate_subsets,
        non_integral_subsets,
        candidates: tallies.into_iter().map(|tally| tally.candidate).collect(),
    })
}

//! Random sharing polynomials and the shares they issue

use num_bigint::BigInt;
use num_traits::Zero;
use quickcheck::{Arbitrary, Gen};
use sharecheck::Share;

/// Evaluates the polynomial with the given coefficients (constant term first) at `x`
pub fn evaluate(coefficients: &[BigInt], x: i64) -> BigInt {
    let x = BigInt::from(x);
    coefficients
        .iter()
        .rev()
        .fold(BigInt::zero(), |acc, c| acc * &x + c)
}

/// Product of `|x_i - x_j|` over every pair of indices
///
/// Every Lagrange denominator of every subset of `xs` divides it.
pub fn pairwise_difference_product(xs: &[i64]) -> BigInt {
    let mut product = BigInt::from(1);
    for (i, a) in xs.iter().enumerate() {
        for b in &xs[i + 1..] {
            product *= (a - b).abs();
        }
    }
    product
}

/// A polynomial of degree `threshold - 1` and the distinct, non-zero indices of
/// the shares issued from it
#[derive(Clone, Debug)]
pub struct Sharing {
    pub coefficients: Vec<BigInt>,
    pub xs: Vec<i64>,
    pub threshold: usize,
}

impl Sharing {
    pub fn secret(&self) -> &BigInt {
        &self.coefficients[0]
    }

    pub fn shares(&self) -> Vec<Share> {
        self.xs
            .iter()
            .map(|&x| Share::new(x, evaluate(&self.coefficients, x)))
            .collect()
    }

    /// The same sharing with every coefficient multiplied by `factor`
    pub fn scaled(&self, factor: &BigInt) -> Self {
        Self {
            coefficients: self.coefficients.iter().map(|c| c * factor).collect(),
            ..self.clone()
        }
    }
}

/// Picks `count` distinct values from `-15..=15` without zero
fn distinct_indices(g: &mut Gen, count: usize) -> Vec<i64> {
    let mut pool: Vec<i64> = (-15..=15).filter(|&x| x != 0).collect();
    for i in (1..pool.len()).rev() {
        let j = usize::arbitrary(g) % (i + 1);
        pool.swap(i, j);
    }
    pool.truncate(count);
    pool
}

fn coefficient(g: &mut Gen) -> BigInt {
    let value = BigInt::from(i32::arbitrary(g));
    // Now and then push values well beyond machine words
    if u8::arbitrary(g) % 4 == 0 {
        value << 160usize
    } else {
        value
    }
}

/// Generates a sharing with `threshold` in 1..=4 and between `threshold` and
/// `threshold + 3` shares
impl Arbitrary for Sharing {
    fn arbitrary(g: &mut Gen) -> Self {
        let threshold = usize::from(u8::arbitrary(g) % 4) + 1;
        let share_count = threshold + usize::from(u8::arbitrary(g) % 4);

        Self {
            coefficients: (0..threshold).map(|_| coefficient(g)).collect(),
            xs: distinct_indices(g, share_count),
            threshold,
        }
    }
}

/// A sharing with at least two spare shares, one of which is corrupted
#[derive(Clone, Debug)]
pub struct CorruptedSharing {
    pub sharing: Sharing,
    /// Position of the corrupted share
    pub corrupted: usize,
    /// Non-zero amount added to the corrupted share's value
    pub offset: BigInt,
}

impl CorruptedSharing {
    pub fn shares(&self) -> Vec<Share> {
        let mut shares = self.sharing.shares();
        shares[self.corrupted].y += &self.offset;
        shares
    }
}

impl Arbitrary for CorruptedSharing {
    fn arbitrary(g: &mut Gen) -> Self {
        let threshold = usize::from(u8::arbitrary(g) % 3) + 1;
        let share_count = threshold + 2 + usize::from(u8::arbitrary(g) % 2);

        let sharing = Sharing {
            coefficients: (0..threshold).map(|_| coefficient(g)).collect(),
            xs: distinct_indices(g, share_count),
            threshold,
        };

        let magnitude = i64::from(u16::arbitrary(g)) + 1;
        let offset = if bool::arbitrary(g) {
            BigInt::from(magnitude)
        } else {
            BigInt::from(-magnitude)
        };

        Self {
            corrupted: usize::arbitrary(g) % share_count,
            sharing,
            offset,
        }
    }
}

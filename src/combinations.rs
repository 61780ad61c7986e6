//! Lazy, restartable k-combination enumeration
//!
//! [`Combinations`] describes every k-element subset of a slice without
//! materialising them. Each call to [`Combinations::iter`] walks the subsets from the
//! beginning, in lexicographic order of the items' positions in the slice:
//!
//! ```rust
//! use sharecheck::combinations::Combinations;
//!
//! let letters = ['a', 'b', 'c', 'd'];
//! let combinations = Combinations::new(&letters, 2);
//!
//! let positions: Vec<Vec<usize>> = combinations
//!     .iter()
//!     .map(|subset| subset.positions().to_vec())
//!     .collect();
//!
//! assert_eq!(
//!     positions,
//!     vec![vec![0, 1], vec![0, 2], vec![0, 3], vec![1, 2], vec![1, 3], vec![2, 3]]
//! );
//!
//! // Restartable: a second pass sees the same subsets again
//! assert_eq!(combinations.iter().count(), 6);
//! ```

use std::iter::FusedIterator;

/// Every `k`-element subset of a slice
pub struct Combinations<'a, T> {
    items: &'a [T],
    k: usize,
}

impl<T> Clone for Combinations<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Combinations<'_, T> {}

impl<'a, T> Combinations<'a, T> {
    /// Describes the `k`-element subsets of `items`
    ///
    /// `k = 0` has exactly one (empty) subset; `k > items.len()` has none.
    #[must_use]
    pub fn new(items: &'a [T], k: usize) -> Self {
        Self { items, k }
    }

    /// Starts a fresh pass over the subsets
    #[must_use]
    pub fn iter(&self) -> Iter<'a, T> {
        let done = self.k > self.items.len();
        Iter {
            items: self.items,
            indices: if done { Vec::new() } else { (0..self.k).collect() },
            started: false,
            done,
        }
    }
}

impl<'a, T> IntoIterator for &Combinations<'a, T> {
    type Item = Subset<'a, T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One k-element subset, borrowing its items from the enumerated slice
#[derive(Debug)]
pub struct Subset<'a, T> {
    positions: Vec<usize>,
    items: Vec<&'a T>,
}

impl<'a, T> Subset<'a, T> {
    /// Positions of the subset's items in the enumerated slice, ascending
    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// The subset's items, in position order
    #[must_use]
    pub fn items(&self) -> &[&'a T] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Iterator over the subsets of one [`Combinations`] pass
pub struct Iter<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl<T> Iter<'_, T> {
    /// Moves `indices` to the next combination in lexicographic order
    ///
    /// Returns false once the last combination has been produced.
    fn advance(&mut self) -> bool {
        let n = self.items.len();
        let k = self.indices.len();

        // Rightmost position that can still move right
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] < n - k + i) else {
            return false;
        };

        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = Subset<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if self.started {
            if !self.advance() {
                self.done = true;
                return None;
            }
        } else {
            self.started = true;
        }

        let slice = self.items;
        let items = self.indices.iter().map(|&i| &slice[i]).collect();
        Some(Subset {
            positions: self.indices.clone(),
            items,
        })
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

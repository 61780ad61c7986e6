//! Domain types for share-set auditing
//!
//! This module contains validated newtypes and the value types that flow
//! through the reconstruction pipeline:
//! - [`Threshold`] - Minimum shares required for reconstruction (k >= 1)
//! - [`ShareCount`] - Declared total number of shares (n >= 1)
//! - [`SchemeParams`] - Validated threshold and share count pair
//! - [`Base`] - Radix of an encoded share value (2..=62)
//! - [`Share`] - A decoded `(x, y)` point on the sharing polynomial

mod base;
mod config;
mod share;
mod share_count;
mod threshold;

pub use base::Base;
pub use config::SchemeParams;
pub use share::Share;
pub use share_count::ShareCount;
pub use threshold::Threshold;

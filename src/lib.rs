// Library behind the sharecheck binary and its WASM bindings

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod combinations;
pub mod commands;
pub mod consensus;
pub mod domain;
pub mod error;
pub mod input;
pub mod interpolation;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use consensus::{AnalysisOptions, ConsensusResult, TieBreak, analyze};
pub use domain::Share;
pub use interpolation::{Division, interpolate_at_zero};

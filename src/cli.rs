use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::consensus::{AnalysisOptions, TieBreak};
use crate::interpolation::Division;

/// Test cases analyzed when no files are given
pub const DEFAULT_TEST_CASES: [&str; 2] = ["testcase1.json", "testcase2.json"];

#[derive(Parser)]
#[command(name = "sharecheck")]
#[command(about = "Recover a threshold-shared secret by majority vote and flag corrupted shares")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One block of lines per test case
    #[default]
    Text,
    /// A JSON array with one entry per test case
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze test case files and report the secret and invalid shares of each
    Analyze {
        /// Test case files (defaults to testcase1.json and testcase2.json)
        files: Vec<PathBuf>,

        /// How to choose between secrets reconstructed by the same number of subsets
        #[arg(long, value_enum, default_value_t = TieBreak::FirstSeen)]
        tie_break: TieBreak,

        /// How the Lagrange terms are divided
        #[arg(long, value_enum, default_value_t = Division::Truncating)]
        division: Division,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Decode a single value written in the given base and print it in decimal
    Decode {
        /// Base of the value (2-62)
        #[arg(short, long)]
        base: String,

        /// Digits of the value
        digits: String,
    },
}

impl Commands {
    /// Analysis options selected on the command line, if this is an analysis
    #[must_use]
    pub fn analysis_options(&self) -> Option<AnalysisOptions> {
        match self {
            Self::Analyze {
                tie_break,
                division,
                ..
            } => Some(AnalysisOptions {
                tie_break: *tie_break,
                division: *division,
            }),
            Self::Decode { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_defaults() {
        let cli = Cli::try_parse_from(["sharecheck", "analyze"]).unwrap();
        assert_eq!(
            cli.command.analysis_options(),
            Some(AnalysisOptions::default())
        );
        match cli.command {
            Commands::Analyze { files, format, .. } => {
                assert!(files.is_empty());
                assert_eq!(format, Format::Text);
            }
            Commands::Decode { .. } => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_analyze_flags() {
        let cli = Cli::try_parse_from([
            "sharecheck",
            "analyze",
            "--tie-break",
            "decimal-order",
            "--division",
            "exact",
            "--format",
            "json",
            "a.json",
            "b.json",
        ])
        .unwrap();

        assert_eq!(
            cli.command.analysis_options(),
            Some(AnalysisOptions {
                tie_break: TieBreak::DecimalOrder,
                division: Division::Exact,
            })
        );
        match cli.command {
            Commands::Analyze { files, format, .. } => {
                assert_eq!(files, vec![PathBuf::from("a.json"), PathBuf::from("b.json")]);
                assert_eq!(format, Format::Json);
            }
            Commands::Decode { .. } => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_unknown_tie_break_rejected() {
        assert!(Cli::try_parse_from(["sharecheck", "analyze", "--tie-break", "random"]).is_err());
    }

    #[test]
    fn test_decode_args() {
        let cli = Cli::try_parse_from(["sharecheck", "decode", "--base", "16", "ff"]).unwrap();
        match cli.command {
            Commands::Decode { base, digits } => {
                assert_eq!(base, "16");
                assert_eq!(digits, "ff");
            }
            Commands::Analyze { .. } => panic!("expected decode"),
        }
    }
}

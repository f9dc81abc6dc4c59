//! CLI argument definitions

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Command-line arguments
#[derive(Parser)]
#[command(name = "levenshtein-bound")]
#[command(about = "Bounded Levenshtein edit distance between two strings")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Compute the edit distance between two strings
    Distance {
        /// Source string (leading/trailing whitespace is ignored)
        source: String,

        /// Target string (leading/trailing whitespace is ignored)
        target: String,

        /// Maximum distance of interest; larger distances are reported as exceeded
        #[arg(short = 'm', long, allow_negative_numbers = true)]
        max_distance: Option<i64>,

        /// Implementation to run
        #[arg(long, value_enum, default_value = "bounded")]
        variant: Variant,
    },

    /// Exit with status 0 if the strings are within a distance, 1 otherwise
    Within {
        /// Source string
        source: String,

        /// Target string
        target: String,

        /// Maximum distance
        #[arg(short = 'm', long, allow_negative_numbers = true)]
        max_distance: i64,
    },

    /// Run every implementation on the same pair and print the results
    Compare {
        /// Source string
        source: String,

        /// Target string
        target: String,

        /// Threshold for the bounded engine
        #[arg(short = 'm', long, allow_negative_numbers = true)]
        max_distance: Option<i64>,
    },
}

/// Distance implementation selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Full dynamic programming matrix
    Matrix,
    /// Two rolling rows sized to the source
    TwoRow,
    /// Two rolling rows sized to the shorter operand, with early exit
    Bounded,
}

impl Variant {
    /// Every variant, cheapest last.
    pub const ALL: [Variant; 3] = [Variant::Matrix, Variant::TwoRow, Variant::Bounded];

    /// Display name used in command output.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Matrix => "matrix",
            Variant::TwoRow => "two-row",
            Variant::Bounded => "bounded",
        }
    }

    /// Returns `true` if the variant honors a threshold.
    pub fn supports_threshold(self) -> bool {
        matches!(self, Variant::Bounded)
    }
}

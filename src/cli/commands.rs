//! CLI command implementations

use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use colored::Colorize;

use crate::distance::variants::{matrix_distance, two_row_distance};
use crate::distance::{distance, Distance, Threshold};

use super::args::{Commands, Variant};

/// Execute a CLI command
pub fn execute(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Distance {
            source,
            target,
            max_distance,
            variant,
        } => cmd_distance(&source, &target, max_distance, variant),
        Commands::Within {
            source,
            target,
            max_distance,
        } => cmd_within(&source, &target, max_distance),
        Commands::Compare {
            source,
            target,
            max_distance,
        } => cmd_compare(&source, &target, max_distance),
    }
}

/// Run one implementation on a pair of strings.
///
/// Only the bounded engine accepts a threshold; asking another variant for
/// one is an error rather than a silently ignored flag.
pub fn run_variant(
    variant: Variant,
    source: &str,
    target: &str,
    threshold: Threshold,
) -> Result<Distance> {
    if !threshold.is_unbounded() && !variant.supports_threshold() {
        bail!(
            "The {} variant does not support --max-distance",
            variant.name()
        );
    }

    Ok(match variant {
        Variant::Matrix => Distance::Exact(matrix_distance(source, target)),
        Variant::TwoRow => Distance::Exact(two_row_distance(source, target)),
        Variant::Bounded => distance(source, target, threshold),
    })
}

/// Run every implementation, passing the threshold only where it applies.
pub fn compare(source: &str, target: &str, threshold: Threshold) -> Result<Vec<(Variant, Distance)>> {
    Variant::ALL
        .into_iter()
        .map(|variant| {
            let threshold = if variant.supports_threshold() {
                threshold
            } else {
                Threshold::Unbounded
            };
            run_variant(variant, source, target, threshold).map(|result| (variant, result))
        })
        .collect()
}

fn parse_threshold(max_distance: Option<i64>) -> Result<Threshold> {
    Threshold::from_limit(max_distance).context("Invalid --max-distance")
}

fn cmd_distance(
    source: &str,
    target: &str,
    max_distance: Option<i64>,
    variant: Variant,
) -> Result<ExitCode> {
    let threshold = parse_threshold(max_distance)?;
    let result = run_variant(variant, source, target, threshold)?;

    println!("{}", result);
    Ok(ExitCode::SUCCESS)
}

fn cmd_within(source: &str, target: &str, max_distance: i64) -> Result<ExitCode> {
    let threshold = parse_threshold(Some(max_distance))?;

    match distance(source, target, threshold) {
        Distance::Exact(d) => {
            println!("{} (distance {} <= {})", "within".green(), d, threshold);
            Ok(ExitCode::SUCCESS)
        }
        Distance::Exceeded(bound) => {
            println!("{} (distance >= {} > {})", "exceeded".red(), bound, threshold);
            Ok(ExitCode::from(1))
        }
    }
}

fn cmd_compare(source: &str, target: &str, max_distance: Option<i64>) -> Result<ExitCode> {
    let threshold = parse_threshold(max_distance)?;
    let results = compare(source, target, threshold)?;

    println!("{} {:?} vs {:?}", "Comparing".bold(), source.trim(), target.trim());
    for (variant, result) in &results {
        println!("  {:<8} {}", variant.name().cyan(), result);
    }

    let exact: Vec<usize> = results.iter().filter_map(|(_, r)| r.exact()).collect();
    if exact.windows(2).any(|pair| pair[0] != pair[1]) {
        bail!("Implementations disagree: {:?}", results);
    }

    Ok(ExitCode::SUCCESS)
}

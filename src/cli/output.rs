//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, WordMatchArgs};
use crate::error::Result;
use crate::rank::ScoredWord;

/// Result structure for ranking a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankOutput {
    pub query: String,
    pub limit: usize,
    pub results: Vec<ScoredWord>,
    pub duration_ms: u64,
}

/// Result structure for the distance command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceOutput {
    pub first: String,
    pub second: String,
    pub distance: usize,
}

/// Write a ranking in the selected format.
pub fn write_rank_output<W: Write>(
    out: &mut W,
    output: &RankOutput,
    args: &WordMatchArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => write_rank_human(out, output, args),
        OutputFormat::Json => write_json(out, output, args),
    }
}

/// Write a distance in the selected format.
pub fn write_distance_output<W: Write>(
    out: &mut W,
    output: &DistanceOutput,
    args: &WordMatchArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                writeln!(
                    out,
                    "distance({:?}, {:?}) = {}",
                    output.first, output.second, output.distance
                )?;
            } else {
                writeln!(out, "{}", output.distance)?;
            }
            Ok(())
        }
        OutputFormat::Json => write_json(out, output, args),
    }
}

fn write_rank_human<W: Write>(
    out: &mut W,
    output: &RankOutput,
    args: &WordMatchArgs,
) -> Result<()> {
    if args.verbosity() > 1 {
        writeln!(
            out,
            "Query: {:?} ({} results in {} ms)",
            output.query,
            output.results.len(),
            output.duration_ms
        )?;
    }

    if output.results.is_empty() {
        if args.verbosity() > 0 {
            writeln!(out, "No matches.")?;
        }
        return Ok(());
    }

    let width = output.results.len().to_string().len();
    for (rank, hit) in output.results.iter().enumerate() {
        writeln!(
            out,
            "{:>width$}. {} ({})",
            rank + 1,
            hit.word,
            hit.distance,
            width = width
        )?;
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T, args: &WordMatchArgs) -> Result<()> {
    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

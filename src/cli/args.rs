//! Command line argument parsing for the wordmatch CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// wordmatch - rank dictionary words by edit distance to a query
#[derive(Parser, Debug, Clone)]
#[command(name = "wordmatch")]
#[command(about = "Rank dictionary words by edit distance to a query")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordMatchArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "WORDMATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordMatchArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rank a dictionary against a query
    Rank(RankArgs),

    /// Print the edit distance between two strings
    Distance(DistanceArgs),

    /// Read queries from stdin and rank each one
    Interactive(InteractiveArgs),
}

/// Arguments for ranking a single query
#[derive(Parser, Debug, Clone)]
pub struct RankArgs {
    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Dictionary file, one word per line
    #[arg(short, long, value_name = "DICTIONARY", env = "WORDMATCH_DICTIONARY")]
    pub dictionary: PathBuf,

    /// Maximum number of results to return (default from config, 10)
    #[arg(short = 'k', long = "limit", allow_negative_numbers = true)]
    pub limit: Option<i64>,

    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Arguments for the distance command
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    /// First string
    #[arg(value_name = "FIRST")]
    pub first: String,

    /// Second string
    #[arg(value_name = "SECOND")]
    pub second: String,
}

/// Arguments for the interactive command
#[derive(Parser, Debug, Clone)]
pub struct InteractiveArgs {
    /// Dictionary file, one word per line
    #[arg(short, long, value_name = "DICTIONARY", env = "WORDMATCH_DICTIONARY")]
    pub dictionary: PathBuf,

    /// Maximum number of results per query (default from config, 10)
    #[arg(short = 'k', long = "limit", allow_negative_numbers = true)]
    pub limit: Option<i64>,

    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Ranking engine selection shared by rank and interactive
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// Score the dictionary on a worker pool
    #[arg(long)]
    pub parallel: bool,

    /// Number of worker threads (implies --parallel)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Abort a ranking that takes longer than this many milliseconds
    #[arg(long, value_name = "MILLIS")]
    pub timeout_ms: Option<u64>,
}

impl EngineArgs {
    /// Whether the parallel engine was requested.
    pub fn use_parallel(&self) -> bool {
        self.parallel || self.threads.is_some()
    }
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable numbered list
    Human,
    /// JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_args() {
        let args = WordMatchArgs::try_parse_from([
            "wordmatch",
            "rank",
            "cat",
            "--dictionary",
            "/path/to/words.txt",
            "-k",
            "3",
            "--threads",
            "4",
        ])
        .unwrap();

        if let Command::Rank(rank_args) = args.command {
            assert_eq!(rank_args.query, "cat");
            assert_eq!(rank_args.dictionary, PathBuf::from("/path/to/words.txt"));
            assert_eq!(rank_args.limit, Some(3));
            assert!(rank_args.engine.use_parallel());
            assert_eq!(rank_args.engine.threads, Some(4));
        } else {
            panic!("Expected Rank command");
        }
    }

    #[test]
    fn test_negative_limit_parses() {
        let args = WordMatchArgs::try_parse_from([
            "wordmatch", "rank", "cat", "-d", "words.txt", "-k", "-1",
        ])
        .unwrap();

        if let Command::Rank(rank_args) = args.command {
            assert_eq!(rank_args.limit, Some(-1));
            assert!(!rank_args.engine.use_parallel());
        } else {
            panic!("Expected Rank command");
        }
    }

    #[test]
    fn test_distance_args() {
        let args =
            WordMatchArgs::try_parse_from(["wordmatch", "distance", "kitten", "sitting"]).unwrap();

        if let Command::Distance(distance_args) = args.command {
            assert_eq!(distance_args.first, "kitten");
            assert_eq!(distance_args.second, "sitting");
        } else {
            panic!("Expected Distance command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = WordMatchArgs::try_parse_from(["wordmatch", "distance", "a", "b"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args =
            WordMatchArgs::try_parse_from(["wordmatch", "-vv", "distance", "a", "b"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args =
            WordMatchArgs::try_parse_from(["wordmatch", "--quiet", "distance", "a", "b"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args = WordMatchArgs::try_parse_from([
            "wordmatch", "--format", "json", "--pretty", "distance", "a", "b",
        ])
        .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
    }

    #[test]
    fn test_missing_dictionary_is_an_error() {
        // Only meaningful when the environment does not supply one.
        if std::env::var_os("WORDMATCH_DICTIONARY").is_none() {
            assert!(WordMatchArgs::try_parse_from(["wordmatch", "rank", "cat"]).is_err());
        }
    }
}

//! Command implementations for the wordmatch CLI.

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use log::debug;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::WordMatchConfig;
use crate::dictionary::Dictionary;
use crate::distance::levenshtein_distance;
use crate::error::Result;
use crate::parallel::ParallelRanker;
use crate::rank::{RankEngine, RankOptions, Ranker, ScoredWord, limit_from_k};

/// Execute a CLI command.
pub fn execute_command(args: WordMatchArgs) -> Result<()> {
    let config = load_config(&args)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.command {
        Command::Rank(rank_args) => rank_query(rank_args, &config, &args, &mut out),
        Command::Distance(distance_args) => show_distance(distance_args, &args, &mut out),
        Command::Interactive(interactive_args) => {
            let stdin = io::stdin();
            run_interactive(interactive_args, &config, &args, stdin.lock(), &mut out)
        }
    }
}

/// Load the configuration file if one was given.
fn load_config(args: &WordMatchArgs) -> Result<WordMatchConfig> {
    match &args.config {
        Some(path) => {
            debug!("loading configuration from {}", path.display());
            WordMatchConfig::load_from_file(path)
        }
        None => Ok(WordMatchConfig::default()),
    }
}

/// Either ranking engine, chosen from the command line.
enum Engine {
    Sequential(Ranker),
    Parallel(ParallelRanker),
}

impl Engine {
    fn build(engine_args: &EngineArgs, config: &WordMatchConfig) -> Result<Self> {
        if engine_args.use_parallel() {
            let mut parallel_config = config.parallel_config();
            if let Some(threads) = engine_args.threads {
                parallel_config.thread_pool_size = Some(threads);
            }
            Ok(Engine::Parallel(ParallelRanker::new(parallel_config)?))
        } else {
            Ok(Engine::Sequential(Ranker::new(config.ranker.clone())))
        }
    }

    fn rank(
        &self,
        query: &str,
        dictionary: &Dictionary,
        options: &RankOptions,
    ) -> Result<Vec<ScoredWord>> {
        match self {
            Engine::Sequential(ranker) => {
                ranker.rank_with_options(query, dictionary.words(), options)
            }
            Engine::Parallel(ranker) => {
                ranker.rank_with_options(query, dictionary.words(), options)
            }
        }
    }
}

/// Resolve ranking options from flags and configuration.
fn rank_options(
    limit: Option<i64>,
    engine_args: &EngineArgs,
    config: &WordMatchConfig,
) -> Result<RankOptions> {
    let limit = match limit {
        Some(k) => limit_from_k(k)?,
        None => config.ranker.default_limit,
    };

    let mut options = RankOptions::new(limit);
    if let Some(millis) = engine_args.timeout_ms {
        options = options.with_timeout(Duration::from_millis(millis));
    }
    Ok(options)
}

fn rank_once(
    engine: &Engine,
    query: &str,
    dictionary: &Dictionary,
    options: &RankOptions,
) -> Result<RankOutput> {
    let start_time = Instant::now();
    let results = engine.rank(query, dictionary, options)?;

    Ok(RankOutput {
        query: query.to_string(),
        limit: options.limit,
        results,
        duration_ms: start_time.elapsed().as_millis() as u64,
    })
}

/// Rank a single query.
fn rank_query<W: Write>(
    args: &RankArgs,
    config: &WordMatchConfig,
    cli_args: &WordMatchArgs,
    out: &mut W,
) -> Result<()> {
    let options = rank_options(args.limit, &args.engine, config)?;
    let dictionary = Dictionary::load_from_file(&args.dictionary)?;
    let engine = Engine::build(&args.engine, config)?;

    let output = rank_once(&engine, &args.query, &dictionary, &options)?;
    write_rank_output(out, &output, cli_args)
}

/// Print the distance between two strings.
fn show_distance<W: Write>(args: &DistanceArgs, cli_args: &WordMatchArgs, out: &mut W) -> Result<()> {
    let output = DistanceOutput {
        first: args.first.clone(),
        second: args.second.clone(),
        distance: levenshtein_distance(&args.first, &args.second),
    };
    write_distance_output(out, &output, cli_args)
}

/// Rank every query line read from `input` until EOF or an empty line.
pub fn run_interactive<R: BufRead, W: Write>(
    args: &InteractiveArgs,
    config: &WordMatchConfig,
    cli_args: &WordMatchArgs,
    input: R,
    out: &mut W,
) -> Result<()> {
    let options = rank_options(args.limit, &args.engine, config)?;
    let dictionary = Dictionary::load_from_file(&args.dictionary)?;
    let engine = Engine::build(&args.engine, config)?;
    let prompt = cli_args.output_format == OutputFormat::Human && cli_args.verbosity() > 0;

    let mut lines = input.lines();
    loop {
        if prompt {
            write!(out, "query> ")?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let query = line.trim_end_matches(['\r', '\n']);
        if query.is_empty() {
            break;
        }

        let output = rank_once(&engine, query, &dictionary, &options)?;
        write_rank_output(out, &output, cli_args)?;
    }

    if prompt {
        writeln!(out)?;
    }
    Ok(())
}

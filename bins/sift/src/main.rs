//! sift - filter and rank lines by a typed query
//!
//! Reads candidates from stdin (or a file), keeps the ones matching every
//! query token and prints them, optionally sorted and highlighted.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use sift_cli::output::{match_summary, Status};
use sift_cli::render::render_highlighted;
use sift_match::{
    edit_distance, expand_template, force_utf8, fuzzy_score, highlight, latin1_to_utf8,
    locale_compare, parse_char, rank, Budget, MatchingMethod, SortingMethod, TokenSet,
};
use sift_telemetry::Timer;
use std::cmp::Ordering;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

mod config;

use config::Config;

/// Filter and rank lines by a typed query
#[derive(Parser)]
#[command(name = "sift")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (defaults to .sift.toml, sift.toml or .config/sift.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the candidates matching a query
    Filter(FilterArgs),

    /// Print the fuzzy score of each candidate (lower is better)
    Score {
        /// Pattern to score against
        pattern: String,

        /// Candidates to score
        #[arg(required = true)]
        candidates: Vec<String>,

        /// Match case exactly
        #[arg(short, long)]
        case_sensitive: bool,
    },

    /// Print the edit distance between two strings
    Distance {
        a: String,
        b: String,

        /// Match case exactly
        #[arg(short, long)]
        case_sensitive: bool,
    },

    /// Collate two strings; prints -1, 0 or 1
    Compare {
        a: String,
        b: String,

        /// Compare only the first N characters
        #[arg(short, default_value_t = usize::MAX)]
        n: usize,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Query; tokens separated by spaces must all match
    #[arg(default_value = "")]
    query: String,

    /// Read candidates from a file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Candidate separator: a character, an escape like \t or \x7c
    #[arg(long, default_value = "\\n", value_parser = parse_char)]
    sep: char,

    /// Input is ISO-8859-1 instead of UTF-8
    #[arg(long)]
    latin1: bool,

    /// Matching method (normal, glob, regex, fuzzy)
    #[arg(short, long)]
    method: Option<MatchingMethod>,

    /// Match case exactly
    #[arg(short, long)]
    case_sensitive: bool,

    /// Match the whole query as one token
    #[arg(long)]
    no_tokenize: bool,

    /// Sort results by relevance
    #[arg(short, long)]
    sort: bool,

    /// Sort key (levenshtein, fzf)
    #[arg(long)]
    sorting_method: Option<SortingMethod>,

    /// Highlight matched text
    #[arg(long)]
    highlight: bool,

    /// Output template; supports {line}, {index} and {score}
    #[arg(long, default_value = "{line}")]
    format: String,

    /// Print results as a JSON array
    #[arg(long, conflicts_with_all = ["highlight", "format"])]
    json: bool,

    /// Print at most N results
    #[arg(short, long)]
    limit: Option<usize>,

    /// Evaluate at most N candidates
    #[arg(long)]
    max_candidates: Option<usize>,

    /// Stop evaluating candidates after this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            Status::error(&format!("{:#}", e));
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = Config::load(cli.config.as_deref())?;

    let mut log = config.schema.log.clone().with_verbosity(cli.verbose);
    log.json |= cli.log_json;
    sift_telemetry::init_with_config(log)?;

    if let Some(path) = &config.path {
        tracing::debug!(path = %path.display(), "Loaded config");
    }

    match cli.command {
        Commands::Filter(args) => filter(args, &config, cli.verbose > 0),

        Commands::Score {
            pattern,
            candidates,
            case_sensitive,
        } => {
            let mut out = BufWriter::new(io::stdout().lock());
            for candidate in &candidates {
                let score = fuzzy_score(&pattern, candidate, case_sensitive);
                writeln!(out, "{}\t{}", score, candidate)?;
            }
            out.flush()?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Distance { a, b, case_sensitive } => {
            println!("{}", edit_distance(&a, &b, case_sensitive));
            Ok(ExitCode::SUCCESS)
        }

        Commands::Compare { a, b, n } => {
            let value = match locale_compare(&a, &b, n) {
                Ordering::Less => -1,
                Ordering::Equal => 0,
                Ordering::Greater => 1,
            };
            println!("{}", value);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn filter(args: FilterArgs, config: &Config, verbose: bool) -> anyhow::Result<ExitCode> {
    let mut matcher = config.schema.matching;
    if let Some(method) = args.method {
        matcher.method = method;
    }
    if let Some(sorting_method) = args.sorting_method {
        matcher.sorting_method = sorting_method;
    }
    matcher.case_sensitive |= args.case_sensitive;
    matcher.tokenize &= !args.no_tokenize;
    matcher.sort |= args.sort;

    let raw = read_input(args.input.as_ref())?;
    let candidates = split_candidates(&raw, args.sep, args.latin1);
    sift_telemetry::timed_span!("filter", candidates = candidates.len());

    let mut budget = Budget::unlimited();
    if let Some(n) = args.max_candidates {
        budget = budget.with_max_candidates(n);
    }
    if let Some(ms) = args.timeout_ms {
        budget = budget.with_timeout(Duration::from_millis(ms));
    }

    let timer = Timer::start("rank");
    let tokens = TokenSet::compile(&args.query, &matcher);
    let outcome = rank(&tokens, &args.query, &candidates, &budget);
    let elapsed = timer.stop();

    let shown = args
        .limit
        .map_or(outcome.results.len(), |n| n.min(outcome.results.len()));
    let results = &outcome.results[..shown];

    let mut out = BufWriter::new(io::stdout().lock());
    if args.json {
        serde_json::to_writer(&mut out, results)?;
        writeln!(out)?;
    } else {
        let theme = config.schema.highlight.theme();
        for result in results {
            let line = if args.highlight {
                render_highlighted(result.item, &highlight(&tokens, result.item, &theme))
            } else {
                result.item.to_string()
            };
            let index = result.index.to_string();
            let score = result.score.to_string();
            let text = expand_template(
                &args.format,
                &[("{line}", &line), ("{index}", &index), ("{score}", &score)],
            );
            writeln!(out, "{}", text)?;
        }
    }
    out.flush()?;

    if verbose {
        Status::info(&match_summary(
            outcome.results.len(),
            outcome.evaluated,
            candidates.len(),
            elapsed,
        ));
    }
    if !outcome.complete {
        Status::warning("Stopped early; some candidates were not evaluated");
    }

    if outcome.results.is_empty() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut raw = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut raw)
                .context("Failed to read stdin")?;
            Ok(raw)
        }
    }
}

/// Decodes raw input and splits it into candidates.
///
/// A trailing separator does not produce an empty last candidate.
fn split_candidates(raw: &[u8], sep: char, latin1: bool) -> Vec<String> {
    let text = if latin1 {
        latin1_to_utf8(raw)
    } else {
        force_utf8(raw).into_owned()
    };

    let mut candidates: Vec<String> = text.split(sep).map(str::to_string).collect();
    if candidates.last().is_some_and(String::is_empty) {
        candidates.pop();
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines() {
        assert_eq!(split_candidates(b"a\nb\n", '\n', false), ["a", "b"]);
        assert_eq!(split_candidates(b"a\n\nb", '\n', false), ["a", "", "b"]);
        assert!(split_candidates(b"", '\n', false).is_empty());
    }

    #[test]
    fn test_split_custom_separator() {
        assert_eq!(split_candidates(b"x|y|z", '|', false), ["x", "y", "z"]);
        assert_eq!(split_candidates(b"a\0b\0", '\0', false), ["a", "b"]);
    }

    #[test]
    fn test_split_repairs_encoding() {
        assert_eq!(split_candidates(b"ok\n\xFFbad\n", '\n', false), ["ok", "\u{FFFD}bad"]);
        assert_eq!(split_candidates(b"caf\xE9\n", '\n', true), ["café"]);
    }

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

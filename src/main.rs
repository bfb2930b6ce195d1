use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use console::{style, Term};
use eight_puzzle_solver::scramble::scramble;
use eight_puzzle_solver::{search, Heuristic, Search, State, Strategy};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;

/// Solve the 8-puzzle by graph search.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Start state, read row by row with `_` for the blank, e.g. `1_3425786`
    #[arg(required_unless_present = "scramble", conflicts_with = "scramble")]
    puzzle: Option<String>,

    /// Start from the goal scrambled by this many random moves
    #[arg(long, value_name = "STEPS")]
    scramble: Option<usize>,

    /// Seed for `--scramble`
    #[arg(long, requires = "scramble")]
    seed: Option<u64>,

    #[arg(short, long, value_enum, default_value_t = StrategyArg::Manhattan)]
    strategy: StrategyArg,

    /// Print the board after every move of the solution
    #[arg(long)]
    show: bool,

    /// Hide progress spinners
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Bfs,
    Dfs,
    Hamming,
    Manhattan,
    LinearConflict,
    All,
}

impl StrategyArg {
    fn strategies(self) -> Vec<Strategy> {
        match self {
            StrategyArg::Bfs => vec![Strategy::Bfs],
            StrategyArg::Dfs => vec![Strategy::Dfs],
            StrategyArg::Hamming => vec![Strategy::AStar(Heuristic::Hamming)],
            StrategyArg::Manhattan => vec![Strategy::AStar(Heuristic::Manhattan)],
            StrategyArg::LinearConflict => vec![Strategy::AStar(Heuristic::LinearConflict)],
            StrategyArg::All => Strategy::ALL.to_vec(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let start = match (&args.puzzle, args.scramble) {
        (Some(puzzle), _) => puzzle
            .parse::<State>()
            .context("Failed to parse the puzzle")?,
        (None, steps) => {
            let mut rng = match args.seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_entropy(),
            };
            scramble(&mut rng, steps.unwrap_or_default())
        }
    };
    eprintln!("{start:#}");

    let progress = MultiProgress::with_draw_target(if args.quiet {
        ProgressDrawTarget::hidden()
    } else {
        ProgressDrawTarget::stderr()
    });
    let spinner_style =
        ProgressStyle::with_template("{spinner} {prefix}: {pos} expanded ({per_sec})")
            .context("Invalid progress template")?;

    let jobs = args
        .strategy
        .strategies()
        .into_iter()
        .map(|strategy| {
            let pb = progress.add(ProgressBar::new_spinner().with_style(spinner_style.clone()));
            pb.set_prefix(strategy.name());
            (strategy, pb)
        })
        .collect::<Vec<_>>();

    // Searches share nothing, so each strategy gets its own worker.
    let results = jobs
        .into_par_iter()
        .map(|(strategy, pb)| {
            let started = Instant::now();
            let found = search(strategy, start, || pb.inc(1));
            pb.finish_and_clear();
            (strategy, found, started.elapsed())
        })
        .collect::<Vec<_>>();

    let term = Term::stdout();
    for (strategy, found, elapsed) in &results {
        report(&term, *strategy, found, *elapsed)?;
    }

    if args.show {
        if let Some(path) = results.iter().find_map(|(_, found, _)| found.path.as_ref()) {
            let mut state = start;
            for &dir in path {
                state.go(dir).with_context(|| format!("Cannot move {dir} from {state}"))?;
                term.write_line(&format!("{dir}\n{state:#}"))?;
            }
        }
    }

    Ok(())
}

fn report(term: &Term, strategy: Strategy, found: &Search, elapsed: Duration) -> Result<()> {
    let stats = &found.stats;
    let counts = format!(
        "{} expanded, {} generated, frontier peak {}, {elapsed:.2?}",
        stats.expanded, stats.generated, stats.max_frontier,
    );
    match &found.path {
        Some(path) => {
            term.write_line(&format!(
                "{} {}: {} moves ({counts})",
                style("solved").green().bold(),
                strategy.name(),
                path.len(),
            ))?;
            let moves = path.iter().map(|dir| dir.label()).collect::<Vec<_>>();
            term.write_line(&moves.join(" "))?;
        }
        None => term.write_line(&format!(
            "{} {}: ({counts})",
            style("no solution").red().bold(),
            strategy.name(),
        ))?,
    }
    Ok(())
}

//! `tileslide`: solve one sliding-tile instance from the command line.
//!
//! Without `--initial`/`--goal` the arrangements are prompted for on stdin.
//!
//! Exit codes: 0 solved, 1 exhausted, 2 invalid input or I/O failure.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use tileslide_harness::config::RunConfig;
use tileslide_harness::input::{parse_arrangement, prompt_arrangement, InputError};
use tileslide_harness::render::render_solution;
use tileslide_harness::report::write_report_dir;
use tileslide_harness::runner::{run, RunOutput};
use tileslide_harness::trace::ConsoleTrace;
use tileslide_search::observer::NoopObserver;
use tileslide_search::policy::{ReinsertionPolicy, SearchPolicy};

#[derive(Parser, Debug)]
#[command(version, about = "Best-first search for sliding-tile puzzles")]
struct Args {
    #[arg(long, help = "Initial arrangement, e.g. \"1 2 3 4 5 6 7 0 8\" (0 is the blank).")]
    initial: Option<String>,
    #[arg(long, help = "Goal arrangement, same format as --initial.")]
    goal: Option<String>,
    #[arg(long, help = "Board side length. Inferred from the value count when omitted.")]
    side: Option<usize>,
    #[arg(
        long,
        default_value = "best-child-only",
        help = "Reinsertion policy: best-child-only or all-children."
    )]
    policy: ReinsertionPolicy,
    #[arg(long, help = "Print every expansion as it happens.")]
    trace: bool,
    #[arg(long, help = "Write search_graph.json, report.json and graph_digest.txt here.")]
    report_dir: Option<PathBuf>,
    #[arg(long, help = "Print the run report as JSON instead of boards.")]
    json: bool,
}

impl Args {
    fn config(&self) -> RunConfig {
        RunConfig {
            side: self.side,
            policy: SearchPolicy {
                reinsertion: self.policy,
            },
            trace: self.trace,
            report_dir: self.report_dir.clone(),
        }
    }
}

fn read_arrangements(args: &Args, config: &RunConfig) -> Result<(Vec<u32>, Vec<u32>), InputError> {
    let expected = config.expected_len();
    let stdin = std::io::stdin();
    let mut reader = stdin.lock();
    let mut stdout = std::io::stdout();

    let initial = match &args.initial {
        Some(line) => parse_arrangement(line, expected)?,
        None => prompt_arrangement(&mut reader, &mut stdout, "initial state:", expected)?,
    };
    // A goal must match the initial length even when the side is inferred.
    let expected = expected.or(Some(initial.len()));
    let goal = match &args.goal {
        Some(line) => parse_arrangement(line, expected)?,
        None => prompt_arrangement(&mut reader, &mut stdout, "goal state:", expected)?,
    };
    Ok((initial, goal))
}

fn execute(initial: &[u32], goal: &[u32], config: &RunConfig) -> Result<RunOutput, String> {
    if !config.trace {
        return run(initial, goal, config, &mut NoopObserver).map_err(|e| e.to_string());
    }
    let mut trace = ConsoleTrace::new(std::io::stdout().lock());
    let out = run(initial, goal, config, &mut trace).map_err(|e| e.to_string())?;
    trace.into_inner().map_err(|e| format!("writing trace: {e}"))?;
    Ok(out)
}

fn print_output(out: &RunOutput, json: bool) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    if json {
        let text = serde_json::to_string_pretty(&out.report.to_json()).map_err(std::io::Error::other)?;
        return writeln!(stdout, "{text}");
    }
    match out.result.outcome.solution() {
        Some(solution) => {
            write!(stdout, "{}", render_solution(solution))?;
            writeln!(stdout, "solved in {} moves", solution.g_cost)
        }
        None => writeln!(stdout, "no solution found"),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    let config = args.config();

    let (initial, goal) = match read_arrangements(&args, &config) {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    let out = match execute(&initial, &goal, &config) {
        Ok(out) => out,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    if let Some(dir) = &config.report_dir {
        if let Err(e) = write_report_dir(dir, &out.report, &out.result.graph) {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
        log::info!("report written to {}", dir.display());
    }

    if let Err(e) = print_output(&out, args.json) {
        eprintln!("error: {e}");
        return ExitCode::from(2);
    }

    if out.report.solved {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

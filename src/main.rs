pub mod divisors;
mod exec;
mod timing;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::exec::{run_parallel, run_sequential, FactorizeError, WorkerPool};
use crate::timing::{create_spinner, timed};

#[derive(Parser, Debug)]
#[command(name = "factorize")]
#[command(
    about = "Compute the divisor set of each number in a batch, sequentially or across CPU cores",
    long_about = None
)]
struct Args {
    /// Numbers to process (runs the built-in demonstration when omitted)
    #[arg(value_name = "NUMBERS", allow_negative_numbers = true)]
    numbers: Vec<i64>,

    /// Execution strategy to run
    #[arg(short, long, value_enum, default_value_t = Strategy::Both)]
    strategy: Strategy,

    /// Number of worker threads (defaults to number of CPU cores)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Disable the spinner shown while a batch is running
    #[arg(short, long)]
    quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Strategy {
    Sequential,
    Parallel,
    Both,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let workers = WorkerPool::new(args.threads);

    if args.numbers.is_empty() {
        return run_demo(&args, &workers);
    }

    if args.strategy != Strategy::Parallel {
        let results = run_batch("run_sequential", &args.numbers, args.quiet, || {
            run_sequential(&args.numbers)
        })?;
        print_results(&args.numbers, &results);
    }

    if args.strategy != Strategy::Sequential {
        println!("Using {} worker threads", workers.num_workers());
        let results = run_batch("run_parallel", &args.numbers, args.quiet, || {
            run_parallel(&args.numbers, &workers)
        })?;
        print_results(&args.numbers, &results);
    }

    Ok(())
}

/// Times one batch call, keeping a spinner alive on stderr while it runs.
fn run_batch(
    name: &str,
    numbers: &[i64],
    quiet: bool,
    f: impl FnOnce() -> Result<Vec<Vec<u64>>, FactorizeError>,
) -> Result<Vec<Vec<u64>>, FactorizeError> {
    let spinner = if !quiet {
        Some(create_spinner(format!("{} is working.....", name)))
    } else {
        None
    };

    let result = timed(name, numbers, f);

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    result
}

fn print_results(numbers: &[i64], results: &[Vec<u64>]) {
    for (n, divisors) in numbers.iter().zip(results) {
        println!("{}: {:?}", n, divisors);
    }
}

/// Small batch with known divisor sets, used to verify both strategies.
const VERIFY_BATCH: [i64; 4] = [128, 255, 99999, 10651060];

/// Larger batch for the sequential-vs-parallel wall-time comparison. Big
/// enough that the pool pays for itself; the sequential run wins on small
/// batches where worker startup dominates.
const COMPARISON_BATCH: [i64; 52] = [
    35463257, 23423452, 123213213, 23432432, 4234234, 312312315, 43534534,
    34123123, 4354534, 23123, 324324, 23123, 432423, 234435, 74645, 1236543,
    123213, 4323545, 21312, 54634, 213123, 565464, 234234555, 563653, 32132,
    5345345, 345345, 234234, 234324, 53435435, 123123, 123123, 232344,
    6546346534, 321312, 5465465, 21312, 43534, 123123, 645645, 123123,
    123123, 54353, 123123, 453453, 12312, 43242, 545, 23423, 64562, 12321,
    564324,
];

fn expected_verify_divisors() -> Vec<Vec<u64>> {
    vec![
        vec![1, 2, 4, 8, 16, 32, 64, 128],
        vec![1, 3, 5, 15, 17, 51, 85, 255],
        vec![1, 3, 9, 41, 123, 271, 369, 813, 2439, 11111, 33333, 99999],
        vec![
            1, 2, 4, 5, 7, 10, 14, 20, 28, 35, 70, 140, 76079, 152158,
            304316, 380395, 532553, 760790, 1065106, 1521580, 2130212,
            2662765, 5325530, 10651060,
        ],
    ]
}

/// Verifies both strategies against known results, then races them over the
/// comparison batch so their timing lines can be compared side by side.
fn run_demo(args: &Args, workers: &WorkerPool) -> Result<()> {
    let expected = expected_verify_divisors();

    let sequential = timed("run_sequential", &VERIFY_BATCH, || {
        run_sequential(&VERIFY_BATCH)
    })?;
    anyhow::ensure!(
        sequential == expected,
        "sequential strategy returned unexpected divisor sets"
    );
    println!("Sequential strategy verification is OK");

    let parallel = timed("run_parallel", &VERIFY_BATCH, || {
        run_parallel(&VERIFY_BATCH, workers)
    })?;
    anyhow::ensure!(
        parallel == expected,
        "parallel strategy returned unexpected divisor sets"
    );
    println!("Parallel strategy verification is OK");

    println!(
        "\nComparing strategies on {} numbers using {} worker threads",
        COMPARISON_BATCH.len(),
        workers.num_workers()
    );

    run_batch("run_sequential", &COMPARISON_BATCH, args.quiet, || {
        run_sequential(&COMPARISON_BATCH)
    })?;
    run_batch("run_parallel", &COMPARISON_BATCH, args.quiet, || {
        run_parallel(&COMPARISON_BATCH, workers)
    })?;

    Ok(())
}

use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

/// Runs `f` and reports its wall-clock duration on stdout, one line per call:
///
/// ```text
/// function 'run_parallel([128, 255])' took 0.004217 s
/// ```
///
/// The wrapped result passes through unchanged. An `Err` short-circuits
/// before the report is printed, so a failed batch produces no output.
pub fn timed<T, E>(
    name: &str,
    args: &[i64],
    f: impl FnOnce() -> Result<T, E>,
) -> Result<T, E> {
    let start = Instant::now();
    let result = f()?;
    println!(
        "function '{}({:?})' took {} s",
        name,
        args,
        start.elapsed().as_secs_f64()
    );
    Ok(result)
}

pub fn create_spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed_precise}]")
            .unwrap(),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

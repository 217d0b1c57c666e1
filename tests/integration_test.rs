use std::process::{Command, Output};

fn run_factorize(args: &[&str]) -> Output {
    Command::new("cargo")
        .args(["run", "--"])
        .args(args)
        .output()
        .expect("Failed to execute factorize")
}

#[test]
fn test_explicit_batch_runs_both_strategies() {
    let output = run_factorize(&["-q", "128", "255", "99999", "10651060"]);

    if !output.status.success() {
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("factorize failed");
    }

    let stdout = String::from_utf8_lossy(&output.stdout);

    // One timing report per strategy, naming the call and its arguments.
    assert!(stdout
        .contains("function 'run_sequential([128, 255, 99999, 10651060])' took"));
    assert!(stdout
        .contains("function 'run_parallel([128, 255, 99999, 10651060])' took"));

    // Divisor sets are printed per input, in input order, by both runs.
    assert_eq!(
        stdout
            .matches("128: [1, 2, 4, 8, 16, 32, 64, 128]")
            .count(),
        2
    );
    assert_eq!(
        stdout.matches("255: [1, 3, 5, 15, 17, 51, 85, 255]").count(),
        2
    );
    assert_eq!(
        stdout
            .matches("99999: [1, 3, 9, 41, 123, 271, 369, 813, 2439, 11111, 33333, 99999]")
            .count(),
        2
    );
}

#[test]
fn test_single_strategy_selection() {
    let output = run_factorize(&["-q", "--strategy", "sequential", "128"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("function 'run_sequential([128])' took"));
    assert!(!stdout.contains("run_parallel"));
}

#[test]
fn test_thread_override_is_reported() {
    let output = run_factorize(&["-q", "--strategy", "parallel", "-j", "2", "255"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Using 2 worker threads"));
    assert!(stdout.contains("255: [1, 3, 5, 15, 17, 51, 85, 255]"));
}

#[test]
fn test_negative_input_aborts_with_no_output() {
    let output = run_factorize(&["-q", "128", "-1", "255"]);
    assert!(!output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("took"), "no timing report on a failed batch");
    assert!(!stdout.contains("128:"), "no partial results on a failed batch");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid argument -1"));
}

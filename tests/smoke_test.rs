/// Smoke tests to verify the binary runs without panicking
use std::process::Command;

fn wavefill() -> Command {
    Command::new(env!("CARGO_BIN_EXE_wavefill"))
}

#[test]
fn binary_shows_help() {
    let output = wavefill().arg("--help").output().expect("Failed to execute wavefill");

    assert!(
        output.status.success(),
        "Binary failed to run --help: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("wavefill"), "Help output should mention wavefill");
}

#[test]
fn binary_shows_version() {
    let output = wavefill().arg("--version").output().expect("Failed to execute wavefill");

    assert!(
        output.status.success(),
        "Binary failed to run --version: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn invalid_subcommand_fails_gracefully() {
    let output = wavefill().arg("nonexistent-command").output().expect("Failed to execute wavefill");

    // Should fail with error, not panic
    assert!(
        !output.status.success(),
        "Invalid subcommand should return error status"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains("panicked at"),
        "Invalid subcommand should not cause panic"
    );
}

#[test]
fn invalid_colour_is_rejected() {
    let output = wavefill()
        .args(["dump", "--color", "not-a-colour"])
        .output()
        .expect("Failed to execute wavefill");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid colour"), "stderr: {}", stderr);
}

#[test]
fn dump_after_one_period() {
    let output = wavefill()
        .args(["dump", "--ticks", "80", "--cols", "40", "--rows", "10", "--count", "2"])
        .env("XDG_CONFIG_HOME", env!("CARGO_TARGET_TMPDIR"))
        .output()
        .expect("Failed to execute wavefill");

    assert!(
        output.status.success(),
        "dump failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("wave 0 speed 5 accumulated_move 0 left_edge -400"));
    assert!(stdout.contains("wave 1 "));
    assert!(!stdout.contains("wave 2 "));
}

#[test]
fn print_draws_a_frame() {
    let output = wavefill()
        .args(["print", "--cols", "30", "--rows", "8", "--ticks", "5"])
        .env("XDG_CONFIG_HOME", env!("CARGO_TARGET_TMPDIR"))
        .output()
        .expect("Failed to execute wavefill");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 8);
}

#[test]
fn log_file_receives_engine_records() {
    let log_path = std::path::Path::new(env!("CARGO_TARGET_TMPDIR")).join("wavefill-smoke.log");
    let _ = std::fs::remove_file(&log_path);

    let output = wavefill()
        .args(["dump", "--ticks", "3", "-v", "--log"])
        .arg(&log_path)
        .env("XDG_CONFIG_HOME", env!("CARGO_TARGET_TMPDIR"))
        .output()
        .expect("Failed to execute wavefill");

    assert!(output.status.success());
    let logged = std::fs::read_to_string(&log_path).expect("log file should exist");
    assert!(logged.contains("wave engine started"), "log: {}", logged);
    assert!(!logged.contains("generated"), "debug records leaked at -v: {}", logged);
}

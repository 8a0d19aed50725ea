use std::fs;

use article_board::cli::Cli;
use clap::Parser;
use tempfile::TempDir;

#[test]
fn config_flag_selects_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("board.toml");
    fs::write(&path, "[api]\nlatency_ms = 42\n").unwrap();

    let cli = Cli::parse_from(["article-board", "--config", path.to_str().unwrap()]);
    assert_eq!(cli.config_path(), path);
    let config = cli.load_config().unwrap();
    assert_eq!(config.api.latency_ms, 42);
}

#[test]
fn flags_win_over_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("board.toml");
    fs::write(&path, "[api]\nlatency_ms = 42\nfailure_rate = 0.9\n").unwrap();

    let cli = Cli::parse_from([
        "article-board",
        "--config",
        path.to_str().unwrap(),
        "--failure-rate",
        "0",
        "--auto-retry",
    ]);
    let config = cli.load_config().unwrap();
    assert_eq!(config.api.latency_ms, 42);
    assert_eq!(config.api.failure_rate, 0.0);
    assert!(config.retry.auto);
}

#[test]
fn unknown_flag_is_rejected() {
    assert!(Cli::try_parse_from(["article-board", "--bogus"]).is_err());
}

//! Tests for the `coinlist` binary.

mod common;

use std::process::{Command, Output};

use common::mock_feed::{MockFeed, MockResponse};
use tempfile::TempDir;

fn coinlist_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_coinlist"));
    // Keep the user's real config out of the way
    cmd.arg("--config")
        .arg(config_dir.path().join("config.toml"))
        .env_remove("COINLIST_LOG");
    cmd
}

async fn run_blocking(mut cmd: Command) -> Output {
    tokio::task::spawn_blocking(move || cmd.output().expect("Failed to execute command"))
        .await
        .unwrap()
}

#[test]
fn test_help_lists_options() {
    let dir = TempDir::new().unwrap();
    let output = coinlist_cmd(&dir).arg("--help").output().unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--filter"));
    assert!(stdout.contains("--search"));
    assert!(stdout.contains("--once"));
}

#[test]
fn test_unknown_filter_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let output = coinlist_cmd(&dir)
        .args(["--filter", "stable", "--once"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown filter 'stable'"));
}

#[test]
fn test_invalid_url_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let output = coinlist_cmd(&dir)
        .args(["--url", "not a url", "--once"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Invalid feed URL"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_once_prints_filtered_listing() {
    let feed = MockFeed::start().await;
    feed.enqueue_response(MockResponse::json(
        r#"[
            {"name":"Bitcoin","symbol":"BTC","type":"coin","is_active":true,"is_new":false},
            {"name":"Ethereum","symbol":"ETH","type":"coin","is_active":true,"is_new":true},
            {"name":"Ripple","symbol":"XRP","type":"coin","is_active":false,"is_new":false}
        ]"#,
    ))
    .await;

    let dir = TempDir::new().unwrap();
    let mut cmd = coinlist_cmd(&dir);
    cmd.args(["--url", &feed.url(), "--filter", "active", "--once"]);
    let output = run_blocking(cmd).await;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Bitcoin"));
    assert!(stdout.contains("Ethereum"));
    assert!(!stdout.contains("Ripple"));
    assert!(stdout.trim_end().ends_with("2 coins"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_once_reports_server_error() {
    let feed = MockFeed::start().await;
    feed.enqueue_response(MockResponse::error(500, "maintenance"))
        .await;

    let dir = TempDir::new().unwrap();
    let mut cmd = coinlist_cmd(&dir);
    cmd.args(["--url", &feed.url(), "--once"]);
    let output = run_blocking(cmd).await;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Server error: maintenance"));
}

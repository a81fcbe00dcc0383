use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn todowatch() -> Command {
    Command::cargo_bin("todowatch").expect("binary should build")
}

#[test]
fn test_no_args_shows_help() {
    todowatch()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"))
        .stderr(predicate::str::contains("watch"))
        .stderr(predicate::str::contains("list"))
        .stderr(predicate::str::contains("providers"));
}

#[test]
fn test_help_lists_global_flags() {
    todowatch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--provider"))
        .stdout(predicate::str::contains("--base-url"))
        .stdout(predicate::str::contains("--interval-ms"));
}

#[test]
fn test_providers_lists_known_sources() {
    todowatch()
        .arg("providers")
        .assert()
        .success()
        .stdout(predicate::str::contains("jsonplaceholder"))
        .stdout(predicate::str::contains("dummyjson"))
        .stdout(predicate::str::contains("jsonplaceholder.typicode.com"))
        .stdout(predicate::str::contains("dummyjson.com"));
}

#[test]
fn test_unknown_provider_is_rejected() {
    let data_dir = TempDir::new().unwrap();
    todowatch()
        .arg("--data-dir")
        .arg(data_dir.path())
        .arg("--provider")
        .arg("gopher")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown provider"));
}

#[test]
fn test_list_reports_fetch_failure_for_unreachable_endpoint() {
    let data_dir = TempDir::new().unwrap();
    // Loopback discard port: connect fails without touching any real endpoint.
    todowatch()
        .arg("--data-dir")
        .arg(data_dir.path())
        .arg("--base-url")
        .arg("http://127.0.0.1:9/todos")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_list_help_shows_filter_values() {
    todowatch()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--filter"))
        .stdout(predicate::str::contains("completed"))
        .stdout(predicate::str::contains("incomplete"))
        .stdout(predicate::str::contains("--format"));
}

//! Command-line behavior: arguments, exit codes and diagnostics.

mod common;

use assert_cmd::Command;
use common::*;
use predicates::prelude::*;
use tempfile::TempDir;

fn glob_site() -> Command {
    let mut cmd = Command::cargo_bin("glob-site").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn no_arguments_is_usage_error() {
    glob_site()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("required"));
}

#[test]
fn missing_output_argument_is_usage_error() {
    let input = TempDir::new().unwrap();
    glob_site()
        .arg(input.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("<OUTPUT>"));
}

#[test]
fn help_succeeds() {
    glob_site()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("content.txt"));
}

#[test]
fn print_config_needs_no_directories() {
    glob_site()
        .arg("--print-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("escape_html = true"));
}

#[test]
fn builds_site_and_reports_pages() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    add_entries_in_order(input.path(), &[("apple", "Hello"), ("banana", "Hi")]);

    glob_site()
        .arg(input.path())
        .arg(output.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("001 apple → 1.html"))
        .stdout(predicate::str::contains("Generated 2 pages, 0 images"));

    assert!(output.path().join("1.html").is_file());
    assert!(output.path().join("2.html").is_file());
    assert!(output.path().join("index.html").is_file());
    assert!(output.path().join("style.css").is_file());
}

#[test]
fn missing_content_warns_and_continues() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    add_entry(input.path(), "apple", "Hello");
    std::fs::create_dir_all(input.path().join("drafts")).unwrap();

    glob_site()
        .arg(input.path())
        .arg(output.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Unable to find content at"));

    assert!(output.path().join("1.html").is_file());
    assert!(!output.path().join("2.html").exists());
}

#[test]
fn multiple_images_warn() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let dir = add_entry(input.path(), "apple", "Hello");
    add_image(&dir, "jpg");
    add_image(&dir, "png");

    glob_site()
        .arg(input.path())
        .arg(output.path())
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Multiple images found for apple. Ignoring png",
        ));
}

#[test]
fn unreadable_input_exits_with_error() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    glob_site()
        .arg(input.path().join("missing"))
        .arg(output.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot list input directory"));
}

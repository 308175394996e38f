//! CLI tests for the `enhancer` binary.
//!
//! Spawns the binary and verifies stdout and exit codes for the apply, show,
//! validate and init commands.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use enhancer::Item;
use enhancer::exit_codes;
use enhancer::io::item_store::load_item;
use enhancer::test_support::{item, shield, sword, write_item_fixture};

fn run_enhancer(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_enhancer"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("spawn enhancer")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

#[test]
fn apply_fail_prints_demoted_item() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_item_fixture(temp.path(), "item.json", &shield()).expect("fixture");

    let output = run_enhancer(temp.path(), &["apply", "item.json", "fail"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let printed: Item = serde_json::from_str(&stdout(&output)).expect("item json");
    assert_eq!(printed, item("An Iron Shield", 5, 18));
    // Without --write the file is untouched.
    assert_eq!(
        load_item(&temp.path().join("item.json"), 100).expect("reload"),
        shield()
    );
}

#[test]
fn apply_write_persists_and_summary_lists_steps() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_item_fixture(temp.path(), "item.json", &sword()).expect("fixture");

    let output = run_enhancer(
        temp.path(),
        &["apply", "item.json", "succeed", "repair", "--write", "--summary"],
    );
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let text = stdout(&output);
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("succeed: enhancement 10 -> 11, durability 5 -> 5")
    );
    assert_eq!(
        lines.next(),
        Some("repair: enhancement 11 -> 11, durability 5 -> 100")
    );
    assert_eq!(
        load_item(&temp.path().join("item.json"), 100).expect("reload"),
        item("A Wooden Sword", 100, 11)
    );
}

#[test]
fn apply_write_with_get_is_refused() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_item_fixture(temp.path(), "item.json", &sword()).expect("fixture");

    let output = run_enhancer(temp.path(), &["apply", "item.json", "get", "--write"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("display projection"));
}

#[test]
fn show_prints_display_name() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_item_fixture(temp.path(), "item.json", &item("Sword", 60, 5)).expect("fixture");

    let output = run_enhancer(temp.path(), &["show", "item.json"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "[+5] Sword\n");
}

#[test]
fn config_display_name_changes_printed_name_only() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_item_fixture(temp.path(), "item.json", &sword()).expect("fixture");
    fs::write(
        temp.path().join("enhancer.toml"),
        "[output]\npretty = false\ndisplay_name = true\n",
    )
    .expect("write config");

    let output = run_enhancer(temp.path(), &["apply", "item.json", "succeed", "--write"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        stdout(&output),
        "{\"name\":\"[+11] A Wooden Sword\",\"durability\":5,\"enhancement\":11}\n"
    );
    assert_eq!(
        load_item(&temp.path().join("item.json"), 100)
            .expect("reload")
            .name,
        "A Wooden Sword"
    );
}

#[test]
fn validate_rejects_out_of_range_item() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(
        temp.path().join("item.json"),
        r#"{"name":"Probe","durability":5,"enhancement":25}"#,
    )
    .expect("write item");

    let output = run_enhancer(temp.path(), &["validate", "item.json"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
}

#[test]
fn validate_reports_depleted_item() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_item_fixture(temp.path(), "item.json", &item("Probe", -5, 16)).expect("fixture");

    let output = run_enhancer(temp.path(), &["validate", "item.json"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        stdout(&output),
        "valid: name=Probe durability=-5 enhancement=16 (depleted)\n"
    );
}

#[test]
fn init_then_apply_uses_sample_item() {
    let temp = tempfile::tempdir().expect("tempdir");

    let output = run_enhancer(temp.path(), &["init"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(temp.path().join("enhancer.toml").is_file());

    let output = run_enhancer(temp.path(), &["apply", "item.json", "succeed", "fail"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let printed: Item = serde_json::from_str(&stdout(&output)).expect("item json");
    assert_eq!(printed, item("A Wooden Sword", 95, 1));

    let output = run_enhancer(temp.path(), &["init"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
}

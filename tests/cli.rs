// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! End-to-end CLI tests.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Build a cmlint command rooted in a scratch directory so config discovery
/// never picks up a stray cmlint.toml from the development tree.
fn cmlint(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cmlint").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn lints_clean_message() {
    let dir = TempDir::new().unwrap();
    cmlint(&dir)
        .args(["lint", "-m", "feat(editor): add multi-cursor support"])
        .assert()
        .success();
}

#[test]
fn reports_all_failures_for_mixed_case_message() {
    let dir = TempDir::new().unwrap();
    cmlint(&dir)
        .args(["lint", "-m", "Feat(editor): Add Support."])
        .assert()
        .failure()
        .stdout(
            predicate::str::contains("type-case")
                .and(predicate::str::contains("subject-case"))
                .and(predicate::str::contains("subject-full-stop")),
        );
}

#[test]
fn rejects_unknown_scope() {
    let dir = TempDir::new().unwrap();
    cmlint(&dir)
        .args(["lint", "-m", "fix(unknown-scope): patch bug"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("scope-enum"));
}

#[test]
fn skips_wip_message() {
    let dir = TempDir::new().unwrap();
    cmlint(&dir)
        .args(["lint", "-m", "chore: wip save progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped"));
}

#[test]
fn skips_merge_commit() {
    let dir = TempDir::new().unwrap();
    cmlint(&dir)
        .args(["lint", "-m", "Merge branch 'main' into feature/x"])
        .assert()
        .success();
}

#[test]
fn rejects_short_subject() {
    let dir = TempDir::new().unwrap();
    cmlint(&dir)
        .args(["lint", "-m", "fix(core): a"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("subject-min-length"));
}

#[test]
fn lints_message_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("COMMIT_EDITMSG");
    std::fs::write(&path, "feat(core): add thing\n\nSome body text.\n").unwrap();

    cmlint(&dir)
        .args(["lint"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn lints_message_from_stdin() {
    let dir = TempDir::new().unwrap();
    cmlint(&dir)
        .args(["lint", "--stdin"])
        .write_stdin("docs(readme): update installation steps")
        .assert()
        .success();
}

#[test]
fn batch_of_files_fails_when_any_has_errors() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.txt");
    let bad = dir.path().join("bad.txt");
    std::fs::write(&good, "feat(core): add thing").unwrap();
    std::fs::write(&bad, "bogus: nope").unwrap();

    cmlint(&dir)
        .args(["lint"])
        .arg(&good)
        .arg(&bad)
        .assert()
        .failure()
        .stdout(predicate::str::contains("type-enum"));
}

#[test]
fn no_input_is_an_error() {
    let dir = TempDir::new().unwrap();
    cmlint(&dir)
        .args(["lint"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no input"));
}

#[test]
fn json_output_reports_status() {
    let dir = TempDir::new().unwrap();
    let output = cmlint(&dir)
        .args(["--format", "json", "lint", "-m", "fix(core): a"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["status"], "error");
    assert_eq!(json["valid"], false);
    assert!(json["outcomes"]
        .as_array()
        .unwrap()
        .iter()
        .any(|o| o["name"] == "subject-min-length" && o["passed"] == false));
}

#[test]
fn strict_mode_fails_on_warnings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("cmlint.toml"),
        "[rules]\nsubject-case = { severity = \"warning\", case = \"lower-case\" }\n",
    )
    .unwrap();

    // Warning only: passes normally, fails under --strict.
    cmlint(&dir)
        .args(["lint", "-m", "feat(core): Mixed Case Subject"])
        .assert()
        .success();
    // The exit message must not claim error severity; the only failure
    // here is a warning promoted by --strict.
    cmlint(&dir)
        .args(["lint", "--strict", "-m", "feat(core): Mixed Case Subject"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 message(s) failed"))
        .stderr(predicate::str::contains("with errors").not());
}

#[test]
fn config_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("cmlint.toml"),
        "[rules]\nsubject-max-length = { max = 20 }\n",
    )
    .unwrap();

    cmlint(&dir)
        .args(["lint", "-m", "feat(core): this subject is well beyond twenty"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("subject-max-length"));
}

#[test]
fn malformed_config_fails_before_linting() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("cmlint.toml"),
        "[rules]\nsubject-sparkle = { severity = \"error\" }\n",
    )
    .unwrap();

    cmlint(&dir)
        .args(["lint", "-m", "feat(core): perfectly fine message"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn disabled_default_ignores_lints_wip() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("cmlint.toml"), "default_ignores = false\n").unwrap();

    cmlint(&dir)
        .args(["lint", "-m", "chore: wip save progress"])
        .assert()
        .success();

    // Still linted: an invalid wip message now fails instead of skipping.
    cmlint(&dir)
        .args(["lint", "-m", "wip: stuff"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("type-enum"));
}

#[test]
fn custom_ignore_predicate_skips() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("cmlint.toml"),
        "[[ignores]]\ncontains = \"fixup!\"\n",
    )
    .unwrap();

    cmlint(&dir)
        .args(["lint", "-m", "fixup! whatever this was"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped"));
}

#[test]
fn prompt_prints_schema_json() {
    let dir = TempDir::new().unwrap();
    let output = cmlint(&dir)
        .arg("prompt")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(json["questions"]["isBreaking"]["description"].is_string());
    assert_eq!(
        json["questions"]["type"]["choices"].as_array().unwrap().len(),
        14
    );
}

#[test]
fn init_writes_config_and_respects_force() {
    let dir = TempDir::new().unwrap();

    cmlint(&dir).arg("init").assert().success();
    assert!(dir.path().join("cmlint.toml").exists());

    cmlint(&dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    cmlint(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn version_prints() {
    let dir = TempDir::new().unwrap();
    cmlint(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cmlint"));
}

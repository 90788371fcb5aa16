use predicates::prelude::*;
use test_support::{cmd_bin, fixture_env_json};

#[test]
fn interactive_reads_stdin_and_skips_blank_lines() {
  let mut cmd = cmd_bin("gh-profile-explorer");
  cmd
    .env("GPE_TEST_PROFILE_JSON", fixture_env_json("octocat/profile.json"))
    .env("GPE_TEST_REPOS_JSON", "[]")
    .env("GPE_TEST_EVENTS_JSON", "[]")
    .arg("--interactive")
    .write_stdin("\n   \n  octocat  \n")
    .assert()
    .success()
    .stdout(predicate::str::starts_with("The Octocat (@octocat)\n"))
    .stdout(predicate::str::contains("No recent activity found"))
    .stderr(predicate::str::contains("Try: octocat..."))
    .stderr(predicate::str::contains("Try: torvalds..."));
}

#[test]
fn interactive_with_empty_stdin_runs_nothing() {
  let mut cmd = cmd_bin("gh-profile-explorer");
  cmd
    .env("GPE_TEST_PROFILE_STATUS", "404")
    .args(["--interactive", "--format", "json"])
    .write_stdin("")
    .assert()
    .success()
    .stdout("[]\n");
}

use predicates::prelude::*;
use test_support::{cmd_bin, fixture_env_json};

const BIN: &str = "gh-profile-explorer";

fn live_octocat() -> assert_cmd::Command {
  let mut cmd = cmd_bin(BIN);
  cmd
    .env("GPE_TEST_PROFILE_JSON", fixture_env_json("octocat/profile.json"))
    .env("GPE_TEST_REPOS_JSON", fixture_env_json("octocat/repos.json"))
    .env("GPE_TEST_EVENTS_JSON", fixture_env_json("octocat/events.json"));
  cmd
}

#[test]
fn not_found_prints_only_the_error() {
  let mut cmd = cmd_bin(BIN);
  cmd
    .env("GPE_TEST_PROFILE_STATUS", "404")
    .arg("ghost-user-that-does-not-exist")
    .assert()
    .code(1)
    .stdout("Error: No profile found with this username\n");
}

#[test]
fn other_profile_failures_use_the_generic_message() {
  let mut cmd = cmd_bin(BIN);
  cmd
    .env("GPE_TEST_PROFILE_STATUS", "500")
    .arg("octocat")
    .assert()
    .code(1)
    .stdout("Error: Error fetching profile data. Please try again.\n");
}

#[test]
fn invalid_login_is_not_found() {
  let mut cmd = cmd_bin(BIN);
  cmd
    .env("GPE_TEST_PROFILE_JSON", fixture_env_json("octocat/profile.json"))
    .arg("not a login!")
    .assert()
    .code(1)
    .stdout("Error: No profile found with this username\n");
}

#[test]
fn live_listings_render_every_section() {
  let out = live_octocat().arg("octocat").output().unwrap();
  assert!(out.status.success());
  let text = String::from_utf8_lossy(&out.stdout);

  assert!(text.starts_with("The Octocat (@octocat)\n"), "got:\n{}", text);
  assert!(text.contains("No bio available"));
  assert!(text.contains("Followers 15.3K"));
  assert!(text.contains("Spoon-Knife  ⭐ 12.9K  🍴 148.5K  💻 HTML  📅 Jan 22, 2025"));
  assert!(text.contains("This repo is for demonstration purposes only."));
  assert!(text.contains("No description available"));
  assert!(text.contains("HTML: 1 repos (33.3%)"));
  assert!(text.contains("📝 Pushed 2 commit(s)\n     Jan 21, 2025 • octocat/Hello-World"));
  assert!(text.contains("🐛 reopened issue"));
  assert!(text.contains("📋 Member"));
  assert!(!text.contains("octocat-awesome-project"));
}

#[test]
fn failing_repository_listing_falls_back_to_mock_data() {
  let mut cmd = cmd_bin(BIN);
  cmd
    .env("GPE_TEST_PROFILE_JSON", fixture_env_json("octocat/profile.json"))
    .env("GPE_TEST_EVENTS_JSON", "[]")
    .env("RUST_LOG", "warn")
    .arg("octocat")
    .assert()
    .success()
    .stdout(predicate::str::contains("octocat-awesome-project  ⭐ 245  🍴 32"))
    .stdout(predicate::str::contains("JavaScript: 3 repos (50.0%)"))
    .stdout(predicate::str::contains("No recent activity found"))
    .stderr(predicate::str::contains("using mock data"));
}

#[test]
fn failing_event_listing_uses_dated_mock_events() {
  let mut cmd = cmd_bin(BIN);
  cmd
    .env("GPE_TEST_PROFILE_JSON", fixture_env_json("octocat/profile.json"))
    .env("GPE_TEST_REPOS_JSON", "[]")
    .args(["--now-override", "2025-03-20T12:00:00Z", "octocat"])
    .assert()
    .success()
    .stdout(predicate::str::contains("No repositories found"))
    .stdout(predicate::str::contains("Mar 18, 2025 • octocat/awesome-project"))
    .stdout(predicate::str::contains("🚀 Published release"));
}

#[test]
fn tz_flag_shifts_displayed_dates() {
  let mut cmd = cmd_bin(BIN);
  cmd
    .env("GPE_TEST_PROFILE_JSON", fixture_env_json("octocat/profile.json"))
    .env("GPE_TEST_REPOS_JSON", "[]")
    .env(
      "GPE_TEST_EVENTS_JSON",
      r#"[{"type":"WatchEvent","created_at":"2025-01-01T03:00:00Z","repo":{"name":"a/b"}}]"#,
    )
    .args(["--tz", "America/New_York", "octocat"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Dec 31, 2024 • a/b"));
}

#[test]
fn bad_tz_is_a_usage_error() {
  let mut cmd = cmd_bin(BIN);
  cmd
    .env("GPE_TEST_PROFILE_STATUS", "404")
    .args(["--tz", "Mars/Olympus", "octocat"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Unknown --tz"));
}

#[test]
fn missing_username_is_a_usage_error() {
  let mut cmd = cmd_bin(BIN);
  cmd
    .env("GPE_TEST_PROFILE_STATUS", "404")
    .assert()
    .failure()
    .stderr(predicate::str::contains("--interactive"));
}

#[test]
fn out_flag_writes_the_report_to_a_file() {
  let td = test_support::tempdir();
  let target = test_support::utf8_join(td.path(), "reports/octocat.txt");

  live_octocat()
    .args(["--out", target.as_str(), "octocat"])
    .assert()
    .success()
    .stdout("");

  let written = std::fs::read_to_string(&target).unwrap();
  assert!(written.starts_with("The Octocat (@octocat)"));
}

#[test]
fn several_usernames_keep_going_after_an_error() {
  let mut cmd = cmd_bin(BIN);
  cmd
    .env("GPE_TEST_PROFILE_JSON", fixture_env_json("octocat/profile.json"))
    .env("GPE_TEST_REPOS_JSON", "[]")
    .env("GPE_TEST_EVENTS_JSON", "[]")
    .args(["bad.name", "octocat"])
    .assert()
    .code(1)
    .stdout(predicate::str::starts_with("Error: No profile found with this username\n"))
    .stdout(predicate::str::contains("The Octocat (@octocat)"));
}

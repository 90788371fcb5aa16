// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Deterministic stand-in repositories and events used when a live listing cannot be retrieved
// role: fallback/mock-data
// inputs: username; "now" instant for event spacing
// outputs: Records parsed from JSON shaped exactly like the GitHub users API
// invariants: 6 repositories; 7 events at fixed day offsets before now; same constructors as live data
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde_json::json;

use crate::model::{EventRecord, RepositoryRecord};

/// Days before "now" for each mock event, newest first.
pub const EVENT_DAY_OFFSETS: [i64; 7] = [2, 5, 7, 10, 12, 15, 18];

pub fn mock_repositories_json(username: &str) -> serde_json::Value {
  let u = username;

  json!([
    {
      "name": format!("{u}-awesome-project"),
      "description": "An awesome project with modern web technologies",
      "stargazers_count": 245,
      "forks_count": 32,
      "language": "JavaScript",
      "created_at": "2023-01-15T10:30:00Z",
      "updated_at": "2024-12-01T10:30:00Z",
      "html_url": format!("https://github.com/{u}/awesome-project")
    },
    {
      "name": format!("{u}-react-dashboard"),
      "description": "Modern React dashboard with beautiful UI",
      "stargazers_count": 189,
      "forks_count": 28,
      "language": "TypeScript",
      "created_at": "2022-08-22T14:20:00Z",
      "updated_at": "2024-11-15T14:20:00Z",
      "html_url": format!("https://github.com/{u}/react-dashboard")
    },
    {
      "name": format!("{u}-python-ml"),
      "description": "Machine learning projects and experiments",
      "stargazers_count": 156,
      "forks_count": 45,
      "language": "Python",
      "created_at": "2022-03-10T09:15:00Z",
      "updated_at": "2024-10-20T09:15:00Z",
      "html_url": format!("https://github.com/{u}/python-ml")
    },
    {
      "name": format!("{u}-mobile-app"),
      "description": "Cross-platform mobile application",
      "stargazers_count": 98,
      "forks_count": 15,
      "language": "Dart",
      "created_at": "2023-06-05T16:45:00Z",
      "updated_at": "2024-09-10T16:45:00Z",
      "html_url": format!("https://github.com/{u}/mobile-app")
    },
    {
      "name": format!("{u}-api-server"),
      "description": "RESTful API server with Node.js",
      "stargazers_count": 67,
      "forks_count": 12,
      "language": "JavaScript",
      "created_at": "2021-11-18T12:30:00Z",
      "updated_at": "2024-08-05T12:30:00Z",
      "html_url": format!("https://github.com/{u}/api-server")
    },
    {
      "name": format!("{u}-data-viz"),
      "description": "Data visualization with D3.js",
      "stargazers_count": 43,
      "forks_count": 8,
      "language": "JavaScript",
      "created_at": "2023-02-28T11:20:00Z",
      "updated_at": "2024-07-12T11:20:00Z",
      "html_url": format!("https://github.com/{u}/data-viz")
    }
  ])
}

pub fn mock_events_json(username: &str, now: DateTime<Utc>) -> serde_json::Value {
  let u = username;
  let at = |days: i64| (now - Duration::days(days)).to_rfc3339_opts(SecondsFormat::Millis, true);
  let [d0, d1, d2, d3, d4, d5, d6] = EVENT_DAY_OFFSETS;

  json!([
    {
      "type": "PushEvent",
      "created_at": at(d0),
      "repo": { "name": format!("{u}/awesome-project") },
      "payload": { "commits": [{}, {}, {}] }
    },
    {
      "type": "CreateEvent",
      "created_at": at(d1),
      "repo": { "name": format!("{u}/new-feature-branch") },
      "payload": { "ref_type": "branch" }
    },
    {
      "type": "WatchEvent",
      "created_at": at(d2),
      "repo": { "name": format!("{u}/react-dashboard") },
      "payload": {}
    },
    {
      "type": "PullRequestEvent",
      "created_at": at(d3),
      "repo": { "name": format!("{u}/python-ml") },
      "payload": { "action": "opened" }
    },
    {
      "type": "IssuesEvent",
      "created_at": at(d4),
      "repo": { "name": format!("{u}/mobile-app") },
      "payload": { "action": "closed" }
    },
    {
      "type": "ForkEvent",
      "created_at": at(d5),
      "repo": { "name": format!("{u}/api-server") },
      "payload": {}
    },
    {
      "type": "ReleaseEvent",
      "created_at": at(d6),
      "repo": { "name": format!("{u}/data-viz") },
      "payload": {}
    }
  ])
}

pub fn mock_repositories(username: &str) -> Vec<RepositoryRecord> {
  RepositoryRecord::list_from_json(&mock_repositories_json(username)).unwrap_or_default()
}

pub fn mock_events(username: &str, now: DateTime<Utc>) -> Vec<EventRecord> {
  EventRecord::list_from_json(&mock_events_json(username, now)).unwrap_or_default()
}

// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: GitHub users API seam (profile, repositories, events) with HTTP and env-fixture backends
// role: collaborator/github-api
// inputs: username; API base URL; env GPE_TEST_* fixtures for tests
// outputs: Raw serde_json::Value bodies or a typed FetchError
// side_effects: Network calls to the configured users endpoint (HTTP backend only)
// invariants:
// - Never panic; every failure maps to a FetchError variant
// - 404 maps to NotFound; other non-2xx to Status; I/O and TLS to Transport; undecodable bodies to Malformed
// - Fixture backend is chosen whenever any GPE_TEST_* variable is present
// errors: Returned to the search session, which decides what the user sees
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "https://api.github.com/users/";
pub const MAX_REPOS: usize = 100;
pub const MAX_EVENTS: usize = 30;

const ENV_PROFILE_JSON: &str = "GPE_TEST_PROFILE_JSON";
const ENV_PROFILE_STATUS: &str = "GPE_TEST_PROFILE_STATUS";
const ENV_REPOS_JSON: &str = "GPE_TEST_REPOS_JSON";
const ENV_EVENTS_JSON: &str = "GPE_TEST_EVENTS_JSON";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
  #[error("not found")]
  NotFound,
  #[error("unexpected HTTP status {0}")]
  Status(u16),
  #[error("transport error: {0}")]
  Transport(String),
  #[error("malformed response: {0}")]
  Malformed(String),
}

// --- Trait seam for the users API ---
pub trait GithubApi: Sync {
  fn get_profile_json(&self, username: &str) -> Result<serde_json::Value, FetchError>;
  fn list_repositories_json(&self, username: &str) -> Result<serde_json::Value, FetchError>;
  fn list_events_json(&self, username: &str) -> Result<serde_json::Value, FetchError>;
}

pub struct GithubHttpApi {
  base: String,
  agent: ureq::Agent,
}

impl GithubHttpApi {
  pub fn new(base: &str) -> Self {
    let base = if base.ends_with('/') {
      base.to_string()
    } else {
      format!("{}/", base)
    };

    Self {
      base,
      agent: ureq::Agent::config_builder().build().into(),
    }
  }

  pub fn profile_url(&self, username: &str) -> String {
    format!("{}{}", self.base, username)
  }

  pub fn repositories_url(&self, username: &str) -> String {
    format!("{}{}/repos?sort=updated&per_page={}", self.base, username, MAX_REPOS)
  }

  pub fn events_url(&self, username: &str) -> String {
    format!("{}{}/events?per_page={}", self.base, username, MAX_EVENTS)
  }

  fn get_json(&self, url: &str) -> Result<serde_json::Value, FetchError> {
    tracing::debug!(url, "GET");

    let resp = self
      .agent
      .get(url)
      .header("Accept", "application/vnd.github+json")
      .header("User-Agent", "gh-profile-explorer")
      .call();

    match resp {
      Ok(mut r) => r
        .body_mut()
        .read_json::<serde_json::Value>()
        .map_err(|e| FetchError::Malformed(e.to_string())),
      Err(ureq::Error::StatusCode(404)) => Err(FetchError::NotFound),
      Err(ureq::Error::StatusCode(code)) => Err(FetchError::Status(code)),
      Err(e) => Err(FetchError::Transport(e.to_string())),
    }
  }
}

impl GithubApi for GithubHttpApi {
  fn get_profile_json(&self, username: &str) -> Result<serde_json::Value, FetchError> {
    self.get_json(&self.profile_url(username))
  }

  fn list_repositories_json(&self, username: &str) -> Result<serde_json::Value, FetchError> {
    self.get_json(&self.repositories_url(username))
  }

  fn list_events_json(&self, username: &str) -> Result<serde_json::Value, FetchError> {
    self.get_json(&self.events_url(username))
  }
}

/// Fixture backend: bodies come from GPE_TEST_* variables. A missing variable reads as a
/// transport failure, so tests can exercise the mock fallback by leaving it unset.
pub struct GithubEnvApi;

impl GithubEnvApi {
  fn body_from_env(key: &str) -> Result<serde_json::Value, FetchError> {
    let Ok(s) = std::env::var(key) else {
      return Err(FetchError::Transport(format!("{} not set", key)));
    };

    serde_json::from_str::<serde_json::Value>(&s).map_err(|e| FetchError::Malformed(e.to_string()))
  }
}

impl GithubApi for GithubEnvApi {
  fn get_profile_json(&self, _username: &str) -> Result<serde_json::Value, FetchError> {
    if let Ok(code) = std::env::var(ENV_PROFILE_STATUS) {
      return match code.trim().parse::<u16>() {
        Ok(404) => Err(FetchError::NotFound),
        Ok(other) => Err(FetchError::Status(other)),
        Err(_) => Err(FetchError::Transport(format!("{} is not a status code", ENV_PROFILE_STATUS))),
      };
    }

    Self::body_from_env(ENV_PROFILE_JSON)
  }

  fn list_repositories_json(&self, _username: &str) -> Result<serde_json::Value, FetchError> {
    Self::body_from_env(ENV_REPOS_JSON)
  }

  fn list_events_json(&self, _username: &str) -> Result<serde_json::Value, FetchError> {
    Self::body_from_env(ENV_EVENTS_JSON)
  }
}

fn env_wants_mock() -> bool {
  [ENV_PROFILE_JSON, ENV_PROFILE_STATUS, ENV_REPOS_JSON, ENV_EVENTS_JSON]
    .iter()
    .any(|k| std::env::var_os(k).is_some())
}

pub fn build_api(base: &str) -> Box<dyn GithubApi> {
  if env_wants_mock() {
    tracing::debug!("using GPE_TEST_* fixture backend");
    Box::new(GithubEnvApi)
  } else {
    Box::new(GithubHttpApi::new(base))
  }
}

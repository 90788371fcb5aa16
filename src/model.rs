// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Define raw GitHub records (profile, repository, event) and the view models derived from them
// role: model/types
// inputs: Untrusted serde_json::Value bodies from the GitHub users API (or mock JSON of the same shape)
// outputs: Immutable records with defaulted counters; Serialize view models consumed by renderers
// invariants: Record construction never fails; counters are non-negative; empty strings read as absent
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde::Serialize;

use crate::ext::serde_json::JsonFetch;

// --- Raw records ---

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileRecord {
  pub login: Option<String>,
  pub name: Option<String>,
  pub bio: Option<String>,
  pub avatar_url: Option<String>,
  pub public_repos: u64,
  pub followers: u64,
  pub following: u64,
  pub public_gists: u64,
}

impl ProfileRecord {
  pub fn from_json(v: &serde_json::Value) -> Self {
    Self {
      login: v.fetch("login").text(),
      name: v.fetch("name").text(),
      bio: v.fetch("bio").text(),
      avatar_url: v.fetch("avatar_url").text(),
      public_repos: v.fetch("public_repos").count(),
      followers: v.fetch("followers").count(),
      following: v.fetch("following").count(),
      public_gists: v.fetch("public_gists").count(),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryRecord {
  pub name: Option<String>,
  pub description: Option<String>,
  pub stars: u64,
  pub forks: u64,
  pub language: Option<String>,
  pub created_at: Option<String>,
  pub updated_at: Option<String>,
  pub url: Option<String>,
}

impl RepositoryRecord {
  pub fn from_json(v: &serde_json::Value) -> Self {
    Self {
      name: v.fetch("name").text(),
      description: v.fetch("description").text(),
      stars: v.fetch("stargazers_count").count(),
      forks: v.fetch("forks_count").count(),
      language: v.fetch("language").text(),
      created_at: v.fetch("created_at").text(),
      updated_at: v.fetch("updated_at").text(),
      url: v.fetch("html_url").text(),
    }
  }

  /// Parse a repository listing. A body that is not an array yields `None`.
  pub fn list_from_json(v: &serde_json::Value) -> Option<Vec<Self>> {
    v.as_array().map(|arr| arr.iter().map(Self::from_json).collect())
  }
}

/// Event types known to the timeline. Anything else lands in `Other` (a non-empty
/// type string) or `Missing` (absent, null, non-string or empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
  Push,
  Create,
  Watch,
  Fork,
  Issues,
  PullRequest,
  Release,
  Gollum,
  Delete,
  Public,
  Other(String),
  Missing,
}

impl EventKind {
  pub fn parse(raw: Option<&str>) -> Self {
    match raw {
      Some("PushEvent") => Self::Push,
      Some("CreateEvent") => Self::Create,
      Some("WatchEvent") => Self::Watch,
      Some("ForkEvent") => Self::Fork,
      Some("IssuesEvent") => Self::Issues,
      Some("PullRequestEvent") => Self::PullRequest,
      Some("ReleaseEvent") => Self::Release,
      Some("GollumEvent") => Self::Gollum,
      Some("DeleteEvent") => Self::Delete,
      Some("PublicEvent") => Self::Public,
      Some(other) if !other.is_empty() => Self::Other(other.to_string()),
      _ => Self::Missing,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
  pub kind: EventKind,
  pub created_at: Option<String>,
  pub repo_name: Option<String>,
  pub payload: serde_json::Value,
}

impl EventRecord {
  pub fn from_json(v: &serde_json::Value) -> Self {
    let raw_type = v.fetch("type").to::<String>();

    Self {
      kind: EventKind::parse(raw_type.as_deref()),
      created_at: v.fetch("created_at").text(),
      repo_name: v.fetch("repo.name").text(),
      payload: v
        .fetch("payload")
        .raw()
        .cloned()
        .unwrap_or_else(|| serde_json::json!({})),
    }
  }

  /// Parse an event listing. A body that is not an array yields `None`.
  pub fn list_from_json(v: &serde_json::Value) -> Option<Vec<Self>> {
    v.as_array().map(|arr| arr.iter().map(Self::from_json).collect())
  }
}

// --- View models ---

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProfileSummary {
  pub login: String,
  pub name: String,
  pub bio: String,
  pub avatar_url: String,
  pub public_repos: String,
  pub followers: String,
  pub following: String,
  pub public_gists: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RepoCard {
  pub name: String,
  pub description: String,
  pub stars: String,
  pub forks: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub language: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub updated: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "cards", rename_all = "snake_case")]
pub enum RankedRepositories {
  NoRepositories,
  Ranked(Vec<RepoCard>),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LanguageSlice {
  pub language: String,
  pub count: u64,
  pub percentage: f64,
  pub tooltip: String,
  pub color: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LanguageHistogram {
  /// True when no repository declared a language and the fixed fallback was used.
  pub canned: bool,
  pub slices: Vec<LanguageSlice>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GrowthSeries {
  pub labels: Vec<String>,
  pub totals: Vec<u64>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RepoStatsChart {
  pub labels: Vec<String>,
  pub stars: Vec<u64>,
  pub forks: Vec<u64>,
  /// True when no repository had stars or forks and demo data filled the chart.
  pub substituted: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TimelineEntry {
  pub icon: String,
  pub title: String,
  pub meta_line: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "entries", rename_all = "snake_case")]
pub enum Timeline {
  NoActivity,
  Entries(Vec<TimelineEntry>),
}

/// The three mutually exclusive display states around a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiState {
  Loading,
  ProfileShown,
  ErrorShown(String),
}

impl UiState {
  pub fn label(&self) -> &'static str {
    match self {
      Self::Loading => "loading",
      Self::ProfileShown => "profile-shown",
      Self::ErrorShown(_) => "error-shown",
    }
  }
}

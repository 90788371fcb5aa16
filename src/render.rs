// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Present dashboard view models as terminal text or as one JSON document per search
// role: presentation/renderers
// inputs: UiState transitions and view models pushed by the search session
// outputs: TextRenderer → String buffer; JsonRenderer → DashboardDocument values
// invariants: Renderers never read presentation state back into the core; an error state hides profile sections
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde::Serialize;

use crate::charts::ChartSet;
use crate::model::{ProfileSummary, RankedRepositories, Timeline, UiState};

const BAR_WIDTH: usize = 20;

/// Receives each view model as soon as the session has it.
pub trait Renderer {
  /// Called once at the start of every search.
  fn begin(&mut self, _username: &str) {}
  fn state(&mut self, state: &UiState);
  fn profile(&mut self, summary: &ProfileSummary);
  fn repositories(&mut self, ranked: &RankedRepositories);
  fn charts(&mut self, charts: &ChartSet);
  fn timeline(&mut self, timeline: &Timeline);
}

// --- Text ---

#[derive(Debug, Default)]
pub struct TextRenderer {
  out: String,
}

impl TextRenderer {
  pub fn new() -> Self {
    Self::default()
  }

  /// Drain everything rendered so far.
  pub fn take(&mut self) -> String {
    std::mem::take(&mut self.out)
  }

  fn line(&mut self, text: impl AsRef<str>) {
    self.out.push_str(text.as_ref());
    self.out.push('\n');
  }

  fn bar(part: u64, whole: u64) -> String {
    if whole == 0 {
      return String::new();
    }
    let cells = ((part as f64 / whole as f64) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(cells.max(1))
  }
}

impl Renderer for TextRenderer {
  fn state(&mut self, state: &UiState) {
    if let UiState::ErrorShown(message) = state {
      self.line(message);
    }
  }

  fn profile(&mut self, p: &ProfileSummary) {
    if p.login.is_empty() || p.login == p.name {
      self.line(&p.name);
    } else {
      self.line(format!("{} (@{})", p.name, p.login));
    }
    self.line(format!("  {}", p.bio));
    self.line(format!(
      "  Repositories {} · Followers {} · Following {} · Gists {}",
      p.public_repos, p.followers, p.following, p.public_gists
    ));
    if !p.avatar_url.is_empty() {
      self.line(format!("  Avatar {}", p.avatar_url));
    }
  }

  fn repositories(&mut self, ranked: &RankedRepositories) {
    self.line("\nTop repositories");

    let cards = match ranked {
      RankedRepositories::NoRepositories => {
        self.line("  No repositories found");
        return;
      }
      RankedRepositories::Ranked(cards) => cards,
    };

    for c in cards {
      let mut head = format!("  {}  ⭐ {}  🍴 {}", c.name, c.stars, c.forks);
      if let Some(lang) = &c.language {
        head.push_str(&format!("  💻 {}", lang));
      }
      if let Some(updated) = &c.updated {
        head.push_str(&format!("  📅 {}", updated));
      }
      self.line(head);
      self.line(format!("      {}", c.description));
      if let Some(url) = &c.url {
        self.line(format!("      {}", url));
      }
    }
  }

  fn charts(&mut self, charts: &ChartSet) {
    let langs = &charts.languages;
    let visible: u64 = langs.slices.iter().map(|s| s.count).sum();

    self.line("\nLanguages");
    for s in &langs.slices {
      self.line(format!("  {:<12} {:<20} {}", s.language, Self::bar(s.count, visible), s.tooltip));
    }

    let stats = &charts.repo_stats;
    self.line("\nStars and forks");
    for ((label, stars), forks) in stats.labels.iter().zip(&stats.stars).zip(&stats.forks) {
      self.line(format!("  {:<18} ⭐ {:>6}  🍴 {:>6}", label, stars, forks));
    }

    let growth = &charts.growth;
    let top = growth.totals.last().copied().unwrap_or(0);
    self.line("\nRepository growth");
    for (year, total) in growth.labels.iter().zip(&growth.totals) {
      self.line(format!("  {} {:<20} {}", year, Self::bar(*total, top), total));
    }
  }

  fn timeline(&mut self, timeline: &Timeline) {
    self.line("\nRecent activity");

    match timeline {
      Timeline::NoActivity => self.line("  No recent activity found"),
      Timeline::Entries(entries) => {
        for e in entries {
          self.line(format!("  {} {}", e.icon, e.title));
          self.line(format!("     {}", e.meta_line));
        }
      }
    }
  }
}

// --- JSON ---

/// One search as it ended up on screen.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardDocument {
  pub username: String,
  pub state: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub profile: Option<ProfileSummary>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub repositories: Option<RankedRepositories>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub charts: Option<ChartSet>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub timeline: Option<Timeline>,
}

impl DashboardDocument {
  fn new(username: &str) -> Self {
    Self {
      username: username.to_string(),
      state: UiState::Loading.label().to_string(),
      error: None,
      profile: None,
      repositories: None,
      charts: None,
      timeline: None,
    }
  }
}

#[derive(Debug, Default)]
pub struct JsonRenderer {
  current: Option<DashboardDocument>,
  done: Vec<DashboardDocument>,
}

impl JsonRenderer {
  pub fn new() -> Self {
    Self::default()
  }

  /// All documents, the in-progress one last.
  pub fn into_documents(mut self) -> Vec<DashboardDocument> {
    if let Some(doc) = self.current.take() {
      self.done.push(doc);
    }
    self.done
  }

  fn doc(&mut self) -> &mut DashboardDocument {
    self.current.get_or_insert_with(|| DashboardDocument::new(""))
  }
}

impl Renderer for JsonRenderer {
  fn begin(&mut self, username: &str) {
    if let Some(prev) = self.current.replace(DashboardDocument::new(username)) {
      self.done.push(prev);
    }
  }

  fn state(&mut self, state: &UiState) {
    let doc = self.doc();
    doc.state = state.label().to_string();

    if let UiState::ErrorShown(message) = state {
      doc.error = Some(message.clone());
      doc.profile = None;
      doc.repositories = None;
      doc.charts = None;
      doc.timeline = None;
    }
  }

  fn profile(&mut self, summary: &ProfileSummary) {
    self.doc().profile = Some(summary.clone());
  }

  fn repositories(&mut self, ranked: &RankedRepositories) {
    self.doc().repositories = Some(ranked.clone());
  }

  fn charts(&mut self, charts: &ChartSet) {
    self.doc().charts = Some(charts.clone());
  }

  fn timeline(&mut self, timeline: &Timeline) {
    self.doc().timeline = Some(timeline.clone());
  }
}

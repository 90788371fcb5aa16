// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Run one profile search end to end: fetch, fall back, derive view models, hand them to a renderer
// role: processing/orchestrator
// inputs: GithubApi backend, a Renderer behind a Mutex shared by overlapping searches, username, display zone, optional "now"
// outputs: SearchOutcome; renderer calls in the order state(Loading) → profile → repositories/charts → timeline
// side_effects: Network through the GithubApi seam; renderer writes
// invariants:
// - Profile failure ends the search before any repository or event request is made
// - Repository/event failures never reach the user; mock data for the same username replaces them
// - Results are applied only while their ticket is the newest issued by the session
// errors: Profile NotFound and other failures become ErrorShown messages; nothing is propagated
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::activity::build_timeline;
use crate::charts::ChartSet;
use crate::format::DisplayZone;
use crate::github_api::{FetchError, GithubApi};
use crate::mock::{mock_events, mock_repositories};
use crate::model::{
  EventRecord, ProfileRecord, ProfileSummary, RankedRepositories, RepositoryRecord, Timeline, UiState,
};
use crate::profile::build_profile_summary;
use crate::ranking::rank_repositories;
use crate::render::Renderer;
use crate::util::lock;

pub const NOT_FOUND_MESSAGE: &str = "No profile found with this username";
pub const FETCH_FAILED_MESSAGE: &str = "Error fetching profile data. Please try again.";

static RE_LOGIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,38})$").unwrap());

/// Trim input; `None` for blank input, which starts no search.
pub fn normalize_username(raw: &str) -> Option<&str> {
  let t = raw.trim();
  (!t.is_empty()).then_some(t)
}

pub fn is_plausible_login(username: &str) -> bool {
  RE_LOGIN.is_match(username)
}

/// Identifies one search. Only the newest ticket may update the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
  Shown,
  Error(String),
  /// A newer search began before this one could show its results.
  Stale,
}

/// Everything currently on display. Replaced piecewise as results arrive.
#[derive(Debug, Default)]
pub struct DashboardView {
  pub username: Option<String>,
  pub profile: Option<ProfileSummary>,
  pub repositories: Option<RankedRepositories>,
  pub charts: Option<ChartSet>,
  pub timeline: Option<Timeline>,
}

impl DashboardView {
  /// Install a new chart set, returning the one it replaces so the caller can drop it.
  pub fn replace_charts(&mut self, next: ChartSet) -> Option<ChartSet> {
    self.charts.replace(next)
  }

  /// Start over for a new username. Charts stay until a new set replaces them or the
  /// search ends in an error.
  fn reset(&mut self, username: &str) {
    self.username = Some(username.to_string());
    self.profile = None;
    self.repositories = None;
    self.timeline = None;
  }
}

/// Shared by every search of a run. Searches may overlap (interactive mode starts one per
/// input line); each result is applied under the renderer lock and only if its ticket is
/// still the newest, so a slow earlier search never overwrites a later one.
pub struct SearchSession<'a> {
  api: &'a dyn GithubApi,
  zone: DisplayZone,
  now: Option<DateTime<Utc>>,
  generation: AtomicU64,
  view: Mutex<DashboardView>,
}

/// Repository-side results, computed off the render thread.
struct RepositoryPanel {
  ranked: RankedRepositories,
  charts: ChartSet,
}

impl<'a> SearchSession<'a> {
  pub fn new(api: &'a dyn GithubApi, zone: DisplayZone, now: Option<DateTime<Utc>>) -> Self {
    Self {
      api,
      zone,
      now,
      generation: AtomicU64::new(0),
      view: Mutex::new(DashboardView::default()),
    }
  }

  pub fn view(&self) -> MutexGuard<'_, DashboardView> {
    lock(&self.view)
  }

  /// Issue a ticket for a new search; every earlier ticket becomes stale.
  fn begin(&self) -> SearchTicket {
    SearchTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
  }

  fn is_current(&self, ticket: SearchTicket) -> bool {
    self.generation.load(Ordering::SeqCst) == ticket.0
  }

  /// Run `f` against the renderer and the view if `ticket` is still the newest.
  /// Lock order is renderer, then view.
  fn apply<R, F>(&self, ticket: SearchTicket, renderer: &Mutex<R>, f: F) -> bool
  where
    R: Renderer + ?Sized,
    F: FnOnce(&mut R, &mut DashboardView),
  {
    let mut r = lock(renderer);

    if !self.is_current(ticket) {
      return false;
    }

    let mut view = lock(&self.view);
    f(&mut *r, &mut *view);
    true
  }

  pub fn search<R>(&self, username: &str, renderer: &Mutex<R>) -> SearchOutcome
  where
    R: Renderer + ?Sized,
  {
    let ticket = self.begin();

    // Phase 1: loading state and a fresh view
    let started = self.apply(ticket, renderer, |r, view| {
      view.reset(username);
      r.begin(username);
      r.state(&UiState::Loading);
    });

    if !started {
      return SearchOutcome::Stale;
    }

    // Phase 2: profile lookup; the only failure the user sees
    let profile = match self.fetch_profile(username) {
      Ok(p) => p,
      Err(e) => {
        let message = match e {
          FetchError::NotFound => NOT_FOUND_MESSAGE,
          other => {
            tracing::warn!(username, error = %other, "profile fetch failed");
            FETCH_FAILED_MESSAGE
          }
        };

        let shown = self.apply(ticket, renderer, |r, view| {
          if view.charts.take().is_some() {
            tracing::debug!(username, "disposed previous chart set");
          }
          r.state(&UiState::ErrorShown(format!("Error: {}", message)));
        });

        return if shown {
          SearchOutcome::Error(message.to_string())
        } else {
          SearchOutcome::Stale
        };
      }
    };

    let summary = build_profile_summary(&profile);
    let shown = self.apply(ticket, renderer, |r, view| {
      r.profile(&summary);
      r.state(&UiState::ProfileShown);
      view.profile = Some(summary.clone());
    });

    if !shown {
      tracing::debug!(username, "dropping stale profile result");
      return SearchOutcome::Stale;
    }

    // Phase 3: repositories and events side by side, each with its own fallback
    let (panel, timeline) = rayon::join(
      || self.repository_panel(username),
      || self.timeline(username),
    );

    let shown = self.apply(ticket, renderer, |r, view| {
      r.repositories(&panel.ranked);
      r.charts(&panel.charts);
      r.timeline(&timeline);

      view.repositories = Some(panel.ranked);
      if view.replace_charts(panel.charts).is_some() {
        tracing::debug!(username, "disposed previous chart set");
      }
      view.timeline = Some(timeline);
    });

    if !shown {
      tracing::debug!(username, "dropping stale repository and event results");
      return SearchOutcome::Stale;
    }

    SearchOutcome::Shown
  }

  fn fetch_profile(&self, username: &str) -> Result<ProfileRecord, FetchError> {
    if !is_plausible_login(username) {
      tracing::debug!(username, "not a valid login; skipping lookup");
      return Err(FetchError::NotFound);
    }

    // a body of the wrong shape still renders, with every field defaulted
    let body = self.api.get_profile_json(username)?;
    Ok(ProfileRecord::from_json(&body))
  }

  fn repository_panel(&self, username: &str) -> RepositoryPanel {
    let repos = self.repositories_or_mock(username);

    RepositoryPanel {
      ranked: rank_repositories(&repos, self.zone),
      charts: ChartSet::build(&repos),
    }
  }

  fn timeline(&self, username: &str) -> Timeline {
    build_timeline(&self.events_or_mock(username), self.zone)
  }

  fn repositories_or_mock(&self, username: &str) -> Vec<RepositoryRecord> {
    let fetched = self.api.list_repositories_json(username).and_then(|v| {
      RepositoryRecord::list_from_json(&v).ok_or_else(|| FetchError::Malformed("repository listing is not an array".into()))
    });

    match fetched {
      Ok(repos) => repos,
      Err(e) => {
        tracing::warn!(username, error = %e, "problem fetching repositories, using mock data");
        mock_repositories(username)
      }
    }
  }

  fn events_or_mock(&self, username: &str) -> Vec<EventRecord> {
    let fetched = self.api.list_events_json(username).and_then(|v| {
      EventRecord::list_from_json(&v).ok_or_else(|| FetchError::Malformed("event listing is not an array".into()))
    });

    match fetched {
      Ok(events) => events,
      Err(e) => {
        tracing::warn!(username, error = %e, "problem fetching events, using mock data");
        mock_events(username, self.now.unwrap_or_else(Utc::now))
      }
    }
  }
}

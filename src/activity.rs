// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Turn activity events into timeline entries (icon, short title, date and repo line)
// role: view-model/timeline
// inputs: EventRecord list in API order (newest first)
// outputs: Timeline (at most MAX_TIMELINE_ENTRIES entries, or the NoActivity sentinel)
// invariants: Never fails; every EventKind has one arm; payload sub-fields fall back to fixed defaults
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use crate::ext::serde_json::JsonFetch;
use crate::format::{format_optional_date, DisplayZone};
use crate::model::{EventKind, EventRecord, Timeline, TimelineEntry};

pub const MAX_TIMELINE_ENTRIES: usize = 20;

const GENERIC_TITLE: &str = "Repository activity";
const UNKNOWN_REPO: &str = "Unknown repo";

pub fn icon_for(kind: &EventKind) -> &'static str {
  match kind {
    EventKind::Push => "📝",
    EventKind::Create => "🆕",
    EventKind::Watch => "⭐",
    EventKind::Fork => "🍴",
    EventKind::Issues => "🐛",
    EventKind::PullRequest => "🔀",
    EventKind::Release => "🚀",
    EventKind::Gollum => "📚",
    EventKind::Delete => "🗑️",
    EventKind::Public => "🌍",
    EventKind::Other(_) | EventKind::Missing => "📋",
  }
}

pub fn describe(event: &EventRecord) -> String {
  let payload = &event.payload;
  let action = || payload.fetch("action").text().unwrap_or_else(|| "Updated".to_string());

  match &event.kind {
    EventKind::Push => {
      let commits = payload.fetch("commits").array_len().unwrap_or(1);
      format!("Pushed {} commit(s)", commits)
    }
    EventKind::Create => {
      let ref_type = payload.fetch("ref_type").text().unwrap_or_else(|| "repository".to_string());
      format!("Created {}", ref_type)
    }
    EventKind::Watch => "Starred repository".to_string(),
    EventKind::Fork => "Forked repository".to_string(),
    EventKind::Issues => format!("{} issue", action()),
    EventKind::PullRequest => format!("{} pull request", action()),
    EventKind::Release => "Published release".to_string(),
    EventKind::Gollum => "Updated wiki".to_string(),
    EventKind::Delete => "Deleted branch or tag".to_string(),
    EventKind::Public => "Made repository public".to_string(),
    EventKind::Other(raw) => {
      let stripped = raw.replacen("Event", "", 1);
      if stripped.is_empty() {
        GENERIC_TITLE.to_string()
      } else {
        stripped
      }
    }
    EventKind::Missing => GENERIC_TITLE.to_string(),
  }
}

pub fn timeline_entry(event: &EventRecord, zone: DisplayZone) -> TimelineEntry {
  let date = format_optional_date(event.created_at.as_deref(), zone);
  let repo = event.repo_name.as_deref().unwrap_or(UNKNOWN_REPO);

  TimelineEntry {
    icon: icon_for(&event.kind).to_string(),
    title: describe(event),
    meta_line: format!("{} • {}", date, repo),
  }
}

pub fn build_timeline(events: &[EventRecord], zone: DisplayZone) -> Timeline {
  if events.is_empty() {
    return Timeline::NoActivity;
  }

  Timeline::Entries(
    events
      .iter()
      .take(MAX_TIMELINE_ENTRIES)
      .map(|e| timeline_entry(e, zone))
      .collect(),
  )
}

// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Rank repositories by stars and build the repository card grid
// role: view-model/repositories
// inputs: Repository records in API order (sorted by last update)
// outputs: RankedRepositories (top cards or the NoRepositories sentinel)
// invariants: At most MAX_DISPLAYED_REPOS cards; non-increasing stars; stable on ties; input untouched
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use crate::format::{format_date, format_number, DisplayZone};
use crate::model::{RankedRepositories, RepoCard, RepositoryRecord};

pub const MAX_DISPLAYED_REPOS: usize = 12;

const UNNAMED: &str = "Unnamed Repository";
const NO_DESCRIPTION: &str = "No description available";

/// Stable descending sort by stars; returns borrowed records, at most `limit` of them.
pub fn top_by_stars<'a, I>(repos: I, limit: usize) -> Vec<&'a RepositoryRecord>
where
  I: IntoIterator<Item = &'a RepositoryRecord>,
{
  let mut ranked: Vec<&RepositoryRecord> = repos.into_iter().collect();
  ranked.sort_by(|a, b| b.stars.cmp(&a.stars));
  ranked.truncate(limit);
  ranked
}

pub fn rank_repositories(repos: &[RepositoryRecord], zone: DisplayZone) -> RankedRepositories {
  if repos.is_empty() {
    return RankedRepositories::NoRepositories;
  }

  let cards = top_by_stars(repos, MAX_DISPLAYED_REPOS)
    .into_iter()
    .map(|r| repo_card(r, zone))
    .collect();

  RankedRepositories::Ranked(cards)
}

fn repo_card(r: &RepositoryRecord, zone: DisplayZone) -> RepoCard {
  RepoCard {
    name: r.name.clone().unwrap_or_else(|| UNNAMED.to_string()),
    description: r.description.clone().unwrap_or_else(|| NO_DESCRIPTION.to_string()),
    stars: format_number(r.stars),
    forks: format_number(r.forks),
    language: r.language.clone(),
    updated: r.updated_at.as_deref().map(|ts| format_date(ts, zone)),
    url: r.url.clone(),
  }
}

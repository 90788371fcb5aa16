// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Derive chart data (language histogram, star/fork bars, cumulative growth) from repository records
// role: view-model/charts
// inputs: Full repository listing (up to 100 records), unranked
// outputs: ChartSet owned by the caller; one value per chart
// invariants:
// - Language histogram: at most 8 slices, descending, stable; canned 6-language distribution only when no language is declared
// - Tooltip percentages are relative to the visible (top-8) total, one decimal
// - Growth totals are non-decreasing; last total equals the number of repositories with a parseable creation date
// - Star/fork bars: at most 10; demo repositories substitute when nothing has stars or forks
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use crate::mock::mock_repositories;
use crate::model::{GrowthSeries, LanguageHistogram, LanguageSlice, RepoStatsChart, RepositoryRecord};
use crate::ranking::top_by_stars;

pub const MAX_LANGUAGES: usize = 8;
pub const MAX_STAT_BARS: usize = 10;
const STAT_LABEL_CHARS: usize = 15;

pub const CHART_COLORS: [&str; 8] = [
  "#4facfe", "#00f2fe", "#43e97b", "#38f9d7", "#ffecd2", "#fcb69f", "#a8edea", "#fed6e3",
];

pub const CANNED_LANGUAGES: [(&str, u64); 6] = [
  ("JavaScript", 8),
  ("Python", 5),
  ("TypeScript", 4),
  ("HTML", 3),
  ("CSS", 2),
  ("Java", 2),
];

/// All charts for one dashboard. Built fresh for every repository listing; the
/// previous set is handed back by `DashboardView::replace_charts` when replaced.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartSet {
  pub languages: LanguageHistogram,
  pub repo_stats: RepoStatsChart,
  pub growth: GrowthSeries,
}

impl ChartSet {
  pub fn build(repos: &[RepositoryRecord]) -> Self {
    Self {
      languages: language_histogram(repos),
      repo_stats: repo_stats_chart(repos),
      growth: growth_series(repos),
    }
  }
}

pub fn language_histogram(repos: &[RepositoryRecord]) -> LanguageHistogram {
  // first-seen order is kept so the stable sort breaks ties by it
  let mut counts: Vec<(String, u64)> = Vec::new();
  let mut index: HashMap<&str, usize> = HashMap::new();

  for lang in repos.iter().filter_map(|r| r.language.as_deref()) {
    match index.get(lang) {
      Some(&i) => counts[i].1 += 1,
      None => {
        index.insert(lang, counts.len());
        counts.push((lang.to_string(), 1));
      }
    }
  }

  let canned = counts.is_empty();

  if canned {
    counts = CANNED_LANGUAGES.iter().map(|(l, c)| (l.to_string(), *c)).collect();
  }

  counts.sort_by(|a, b| b.1.cmp(&a.1));
  counts.truncate(MAX_LANGUAGES);

  let visible_total: u64 = counts.iter().map(|(_, c)| c).sum();

  let slices = counts
    .into_iter()
    .enumerate()
    .map(|(i, (language, count))| {
      let percentage = if visible_total == 0 {
        0.0
      } else {
        count as f64 * 100.0 / visible_total as f64
      };

      LanguageSlice {
        tooltip: format!("{}: {} repos ({:.1}%)", language, count, percentage),
        color: CHART_COLORS[i % CHART_COLORS.len()].to_string(),
        language,
        count,
        percentage,
      }
    })
    .collect();

  LanguageHistogram { canned, slices }
}

/// Cumulative repository count by creation year (UTC), oldest year first.
pub fn growth_series(repos: &[RepositoryRecord]) -> GrowthSeries {
  let mut per_year: BTreeMap<i32, u64> = BTreeMap::new();

  for ts in repos.iter().filter_map(|r| r.created_at.as_deref()) {
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
      *per_year.entry(dt.with_timezone(&Utc).year()).or_insert(0) += 1;
    }
  }

  let mut running = 0u64;
  let mut labels = Vec::with_capacity(per_year.len());
  let mut totals = Vec::with_capacity(per_year.len());

  for (year, n) in per_year {
    running += n;
    labels.push(year.to_string());
    totals.push(running);
  }

  GrowthSeries { labels, totals }
}

pub fn repo_stats_chart(repos: &[RepositoryRecord]) -> RepoStatsChart {
  let active = repos.iter().filter(|r| r.stars > 0 || r.forks > 0);
  let mut top: Vec<RepositoryRecord> = top_by_stars(active, MAX_STAT_BARS).into_iter().cloned().collect();

  let substituted = top.is_empty();

  if substituted {
    top = mock_repositories("demo").into_iter().take(6).collect();
  }

  RepoStatsChart {
    labels: top.iter().map(|r| stat_label(r.name.as_deref())).collect(),
    stars: top.iter().map(|r| r.stars).collect(),
    forks: top.iter().map(|r| r.forks).collect(),
    substituted,
  }
}

fn stat_label(name: Option<&str>) -> String {
  let name = name.unwrap_or("Unnamed");

  if name.chars().count() > STAT_LABEL_CHARS {
    let head: String = name.chars().take(STAT_LABEL_CHARS).collect();
    format!("{}...", head)
  } else {
    name.to_string()
  }
}

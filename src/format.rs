// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Human-readable number and date formatting for cards, charts and the timeline
// role: formatting/helpers
// inputs: Counters (u64); RFC3339 timestamps as received from the API; a display zone
// outputs: Strings such as "1.5K", "2.3M", "Dec 1, 2024", or the "Unknown date" placeholder
// invariants: Pure; never panics; one decimal with half-up rounding for K/M; en-US short month names
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;

pub const UNKNOWN_DATE: &str = "Unknown date";

/// Zone used when turning API timestamps into calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayZone {
  Utc,
  Local,
  Named(Tz),
}

impl DisplayZone {
  /// Accepts "utc", "local" (any case) or an IANA zone name like "Europe/Berlin".
  pub fn parse(raw: &str) -> Option<Self> {
    let s = raw.trim();

    if s.eq_ignore_ascii_case("utc") {
      return Some(Self::Utc);
    }

    if s.eq_ignore_ascii_case("local") {
      return Some(Self::Local);
    }

    s.parse::<Tz>().ok().map(Self::Named)
  }
}

/// Compact counter: 999 → "999", 1500 → "1.5K", 2_300_000 → "2.3M".
pub fn format_number(n: u64) -> String {
  if n >= 1_000_000 {
    return one_decimal(n, 1_000_000, 'M');
  }

  if n >= 1_000 {
    return one_decimal(n, 1_000, 'K');
  }

  n.to_string()
}

// tenths rounded half-up: 1050 → "1.1K"; u128 so u64::MAX cannot overflow
fn one_decimal(n: u64, unit: u64, suffix: char) -> String {
  let step = u128::from(unit / 10);
  let tenths = (u128::from(n) + step / 2) / step;
  format!("{}.{}{}", tenths / 10, tenths % 10, suffix)
}

/// "{Mon} {day}, {year}" in the given zone; "Unknown date" when unparseable.
pub fn format_date(raw: &str, zone: DisplayZone) -> String {
  let Ok(parsed) = DateTime::parse_from_rfc3339(raw.trim()) else {
    return UNKNOWN_DATE.to_string();
  };

  const PATTERN: &str = "%b %-d, %Y";

  match zone {
    DisplayZone::Utc => parsed.with_timezone(&Utc).format(PATTERN).to_string(),
    DisplayZone::Local => parsed.with_timezone(&Local).format(PATTERN).to_string(),
    DisplayZone::Named(tz) => parsed.with_timezone(&tz).format(PATTERN).to_string(),
  }
}

/// Same as `format_date` for optional timestamps.
pub fn format_optional_date(raw: Option<&str>, zone: DisplayZone) -> String {
  raw.map(|r| format_date(r, zone)).unwrap_or_else(|| UNKNOWN_DATE.to_string())
}

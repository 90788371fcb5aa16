// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Utilities for output writing, "now" overrides, the interactive hint, poison-tolerant locking, and man page rendering
// role: utilities/helpers
// inputs: Output target ("-" or a path); override strings; clap CommandFactory
// outputs: Written reports, parsed instants, hint lines, man page text
// side_effects: write_output creates parent directories and writes files
// invariants:
// - write_output with "-" writes to stdout only
// - search_hint cycles through SUGGESTED_USERNAMES in order
// errors: IO errors bubble with context
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use anyhow::{Context, Result};
use chrono::{DateTime, Local, Utc};
use clap::CommandFactory;

pub const SUGGESTED_USERNAMES: [&str; 5] = ["octocat", "torvalds", "gaearon", "sindresorhus", "addyosmani"];

/// Placeholder shown before the n-th interactive prompt.
pub fn search_hint(n: usize) -> String {
  format!("Try: {}...", SUGGESTED_USERNAMES[n % SUGGESTED_USERNAMES.len()])
}

/// Lock a mutex, taking the data back if another thread panicked while holding it.
pub fn lock<T: ?Sized>(m: &Mutex<T>) -> MutexGuard<'_, T> {
  m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Parse the hidden `--now-override` value: RFC3339, or a naive local timestamp.
pub fn parse_now_override(s: Option<&str>) -> Option<DateTime<Utc>> {
  s.and_then(|raw| {
    chrono::DateTime::parse_from_rfc3339(raw)
      .ok()
      .map(|dt| dt.with_timezone(&Utc))
      .or_else(|| {
        chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
          .ok()
          .and_then(|ndt| ndt.and_local_timezone(Local).single())
          .map(|dt| dt.with_timezone(&Utc))
      })
  })
}

/// Write a finished report to stdout ("-") or to a file, creating parent directories.
pub fn write_output(out: &str, content: &str) -> Result<()> {
  if out == "-" {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(content.as_bytes()).context("writing report to stdout")?;
    return stdout.flush().context("flushing stdout");
  }

  let path = Path::new(out);

  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
  }

  std::fs::write(path, content).with_context(|| format!("writing {}", path.display()))
}

/// Render a section-1 man page for a clap `CommandFactory` implementor.
/// Returns the troff content as a UTF-8 string.
pub fn render_man_page<T: CommandFactory>() -> anyhow::Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}

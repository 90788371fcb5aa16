use std::io::BufRead;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod activity;
mod charts;
mod cli;
mod ext;
mod format;
mod github_api;
mod mock;
mod model;
mod profile;
mod ranking;
mod render;
mod search;
mod util;

use crate::cli::{normalize, Cli, EffectiveConfig, OutputFormat};
use crate::render::{DashboardDocument, JsonRenderer, Renderer, TextRenderer};
use crate::search::{normalize_username, SearchOutcome, SearchSession};

fn init_tracing() {
  // stderr only; stdout carries the report
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  let _ = fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

fn main() -> Result<ExitCode> {
  let cli = Cli::parse();

  if cli.gen_man {
    let page = util::render_man_page::<Cli>()?;
    print!("{}", page);
    return Ok(ExitCode::SUCCESS);
  }

  init_tracing();

  // Phase 1: normalize CLI
  let cfg = normalize(cli)?;
  tracing::debug!(config = ?cfg, "effective configuration");

  // Phase 2: pick the backend and open a session
  let api = github_api::build_api(&cfg.api_base);
  let now = util::parse_now_override(cfg.now_override.as_deref());
  let session = SearchSession::new(api.as_ref(), cfg.zone, now);

  // Phase 3: run every search, rendering in the requested format
  let any_error = match cfg.format {
    OutputFormat::Text => run_text(&cfg, &session)?,
    OutputFormat::Json => run_json(&cfg, &session)?,
  };

  Ok(if any_error { ExitCode::from(1) } else { ExitCode::SUCCESS })
}

/// Command-line usernames run one after another. With --interactive, every stdin line then
/// starts its own search without waiting for earlier ones; a newer search supersedes any
/// still in flight. `after_search` runs once each search returns. Reports whether any
/// search ended in the error state.
fn run_searches<R, F>(cfg: &EffectiveConfig, session: &SearchSession<'_>, renderer: &Mutex<R>, after_search: F) -> Result<bool>
where
  R: Renderer + Send,
  F: Fn(&Mutex<R>) -> Result<()> + Sync,
{
  let any_error = AtomicBool::new(false);

  let run_one = |username: &str| -> Result<()> {
    if let SearchOutcome::Error(_) = session.search(username, renderer) {
      any_error.store(true, Ordering::Relaxed);
    }
    after_search(renderer)
  };

  for u in &cfg.usernames {
    run_one(u)?;
  }

  if cfg.interactive {
    std::thread::scope(|s| -> Result<()> {
      let run_one = &run_one;
      let mut pending = Vec::new();
      let mut prompts = 0usize;
      eprintln!("{}", util::search_hint(prompts));

      for line in std::io::stdin().lock().lines() {
        let line = line.context("reading username from stdin")?;
        let Some(username) = normalize_username(&line) else {
          continue;
        };

        let username = username.to_string();
        pending.push(s.spawn(move || run_one(&username)));
        prompts += 1;
        eprintln!("{}", util::search_hint(prompts));
      }

      for handle in pending {
        handle.join().map_err(|_| anyhow!("search thread panicked"))??;
      }

      Ok(())
    })?;
  }

  Ok(any_error.load(Ordering::Relaxed))
}

fn run_text(cfg: &EffectiveConfig, session: &SearchSession<'_>) -> Result<bool> {
  let renderer = Mutex::new(TextRenderer::new());
  let report = Mutex::new(String::new());
  let streaming = cfg.interactive && cfg.out == "-";

  let any_error = run_searches(cfg, session, &renderer, |r| {
    let chunk = util::lock(r).take();

    if streaming {
      return util::write_output("-", &chunk);
    }

    let mut report = util::lock(&report);
    if !report.is_empty() && !chunk.is_empty() {
      report.push('\n');
    }
    report.push_str(&chunk);
    Ok(())
  })?;

  if !streaming {
    let report = report.into_inner().unwrap_or_else(PoisonError::into_inner);
    util::write_output(&cfg.out, &report)?;
  }

  Ok(any_error)
}

fn run_json(cfg: &EffectiveConfig, session: &SearchSession<'_>) -> Result<bool> {
  let renderer = Mutex::new(JsonRenderer::new());
  let any_error = run_searches(cfg, session, &renderer, |_| Ok(()))?;

  let docs = renderer.into_inner().unwrap_or_else(PoisonError::into_inner).into_documents();
  let value = documents_to_json(docs)?;
  let mut text = serde_json::to_string_pretty(&value).context("serializing dashboard")?;
  text.push('\n');
  util::write_output(&cfg.out, &text)?;

  Ok(any_error)
}

/// One object for a single search, an array otherwise.
fn documents_to_json(mut docs: Vec<DashboardDocument>) -> Result<serde_json::Value> {
  let value = if docs.len() == 1 {
    serde_json::to_value(docs.remove(0))
  } else {
    serde_json::to_value(docs)
  };

  value.context("serializing dashboard")
}

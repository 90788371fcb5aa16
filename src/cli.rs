use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;

use crate::format::DisplayZone;
use crate::github_api::DEFAULT_API_BASE;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
  Text,
  Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "gh-profile-explorer",
    version,
    about = "Look up public GitHub profiles: summary card, top repositories, chart data and recent activity",
    long_about = None
)]
pub struct Cli {
  /// GitHub usernames to look up, in order
  pub usernames: Vec<String>,

  /// Output format
  #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
  pub format: OutputFormat,

  /// Output file (default stdout "-")
  #[arg(long, default_value = "-")]
  pub out: String,

  /// Read usernames from stdin, one per line, after any given on the command line
  #[arg(long)]
  pub interactive: bool,

  /// Zone for displayed dates: "utc", "local" or an IANA name such as "Europe/Berlin"
  #[arg(long, default_value = "utc")]
  pub tz: String,

  /// Base URL of the GitHub users endpoint
  #[arg(long, env = "GPE_API_BASE", default_value = DEFAULT_API_BASE)]
  pub api_base: String,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,

  /// Override the "now" instant used to date mock events (hidden; tests only)
  #[arg(long = "now-override", hide = true)]
  pub now_override: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EffectiveConfig {
  pub usernames: Vec<String>,
  pub format: OutputFormat,
  pub out: String,
  pub interactive: bool,
  pub tz: String,
  #[serde(skip)]
  pub zone: DisplayZone,
  pub api_base: String,
  pub now_override: Option<String>,
}

pub fn normalize(cli: Cli) -> Result<EffectiveConfig> {
  let Some(zone) = DisplayZone::parse(&cli.tz) else {
    bail!("Unknown --tz {:?}: use utc, local, or an IANA zone name", cli.tz)
  };

  // blank arguments start no search
  let usernames: Vec<String> = cli
    .usernames
    .iter()
    .map(|u| u.trim())
    .filter(|u| !u.is_empty())
    .map(str::to_string)
    .collect();

  if usernames.is_empty() && !cli.interactive {
    bail!("Provide at least one USERNAME, or use --interactive");
  }

  if cli.api_base.trim().is_empty() {
    bail!("--api-base must not be empty");
  }

  Ok(EffectiveConfig {
    usernames,
    format: cli.format,
    out: cli.out,
    interactive: cli.interactive,
    tz: cli.tz.trim().to_string(),
    zone,
    api_base: cli.api_base.trim().to_string(),
    now_override: cli.now_override,
  })
}

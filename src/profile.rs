// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Build the profile summary card from a (possibly sparse) profile record
// role: view-model/profile
// inputs: ProfileRecord
// outputs: ProfileSummary with every field present
// invariants: Never fails; name falls back to login then "N/A"; bio falls back to "No bio available"; counters formatted
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use crate::format::format_number;
use crate::model::{ProfileRecord, ProfileSummary};

/// A display field that takes the first present candidate, else a literal.
struct TextDefault {
  fallback: &'static str,
  candidates: fn(&ProfileRecord) -> [Option<&str>; 2],
}

impl TextDefault {
  fn resolve(&self, p: &ProfileRecord) -> String {
    (self.candidates)(p)
      .into_iter()
      .flatten()
      .next()
      .unwrap_or(self.fallback)
      .to_string()
  }
}

const NAME: TextDefault = TextDefault {
  fallback: "N/A",
  candidates: |p| [p.name.as_deref(), p.login.as_deref()],
};

const BIO: TextDefault = TextDefault {
  fallback: "No bio available",
  candidates: |p| [p.bio.as_deref(), None],
};

const AVATAR: TextDefault = TextDefault {
  fallback: "",
  candidates: |p| [p.avatar_url.as_deref(), None],
};

const LOGIN: TextDefault = TextDefault {
  fallback: "",
  candidates: |p| [p.login.as_deref(), None],
};

pub fn build_profile_summary(p: &ProfileRecord) -> ProfileSummary {
  ProfileSummary {
    login: LOGIN.resolve(p),
    name: NAME.resolve(p),
    bio: BIO.resolve(p),
    avatar_url: AVATAR.resolve(p),
    public_repos: format_number(p.public_repos),
    followers: format_number(p.followers),
    following: format_number(p.following),
    public_gists: format_number(p.public_gists),
  }
}

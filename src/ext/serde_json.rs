// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Lenient field extraction from untrusted GitHub JSON via dotted paths
// role: extension/serde_json
// outputs: JsonFetch trait and JsonFetched wrapper (typed, text and counter reads)
// invariants: No panics; missing paths yield None; counters never go negative; empty strings read as absent
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde::de::DeserializeOwned;

/// Wrapper around a JSON location to allow typed extraction via a clear second step.
pub struct JsonFetched<'a> {
  inner: Option<&'a serde_json::Value>,
}

impl<'a> JsonFetched<'a> {
  /// Attempt to deserialize the fetched value as `T`.
  pub fn to<T>(&self) -> Option<T>
  where
    T: DeserializeOwned,
  {
    self.inner.and_then(|v| serde_json::from_value::<T>(v.clone()).ok())
  }

  /// A non-empty string, or `None` for missing, null, non-string or `""`.
  pub fn text(&self) -> Option<String> {
    self
      .inner
      .and_then(|v| v.as_str())
      .filter(|s| !s.is_empty())
      .map(str::to_string)
  }

  /// A non-negative counter. Anything that is not a non-negative number reads as 0;
  /// fractional values are truncated.
  pub fn count(&self) -> u64 {
    let Some(v) = self.inner else { return 0 };

    if let Some(n) = v.as_u64() {
      return n;
    }

    match v.as_f64() {
      Some(f) if f.is_finite() && f >= 0.0 => f.trunc() as u64,
      _ => 0,
    }
  }

  /// Length of an array at this location, if it is one.
  pub fn array_len(&self) -> Option<usize> {
    self.inner.and_then(|v| v.as_array()).map(Vec::len)
  }

  /// Borrow the raw value when present.
  pub fn raw(&self) -> Option<&'a serde_json::Value> {
    self.inner
  }
}

/// Extension to fetch nested values via dotted paths like "repo.name".
pub trait JsonFetch {
  fn fetch(&self, path: &str) -> JsonFetched<'_>;
}

impl JsonFetch for serde_json::Value {
  fn fetch(&self, path: &str) -> JsonFetched<'_> {
    if path.is_empty() {
      return JsonFetched { inner: Some(self) };
    }

    let mut cur = self;

    for key in path.split('.') {
      match cur.get(key) {
        Some(next) => cur = next,
        None => return JsonFetched { inner: None },
      }
    }

    JsonFetched { inner: Some(cur) }
  }
}

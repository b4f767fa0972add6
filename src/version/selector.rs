//! Strict `major.minor.patch` latest version selection
//!
//! Only candidates made of exactly three dot-separated unsigned integers take
//! part. Anything else ("1.0", "1.0.0.0", "v1.0.0", "1.0.0-beta") is skipped
//! before comparison, so it can never win.

use std::sync::LazyLock;

use regex::Regex;
use semver::Version;
use tracing::debug;

static STRICT_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)$").expect("strict version pattern is valid")
});

/// Parse a version string that has exactly three integer segments.
///
/// Segments are compared numerically once parsed, so "10.0.0" > "2.0.0".
/// Returns None for any other shape, or for segments that overflow u64.
pub fn parse_strict(version: &str) -> Option<Version> {
    let captures = STRICT_VERSION.captures(version)?;
    let segment = |i: usize| captures.get(i)?.as_str().parse::<u64>().ok();

    Some(Version::new(segment(1)?, segment(2)?, segment(3)?))
}

/// Select the greatest strictly formatted version among `candidates`.
///
/// A non-empty `preferred_prefix` first narrows the candidates to those
/// starting with it; `None` or `""` leaves them untouched.
///
/// Returns the empty string when nothing qualifies.
pub fn select_latest<S: AsRef<str>>(candidates: &[S], preferred_prefix: Option<&str>) -> String {
    let prefix = preferred_prefix.filter(|p| !p.is_empty());

    candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|candidate| prefix.is_none_or(|p| candidate.starts_with(p)))
        .filter_map(|candidate| match parse_strict(candidate) {
            Some(parsed) => Some((candidate, parsed)),
            None => {
                debug!("Ignoring non-conforming version {:?}", candidate);
                None
            }
        })
        .max_by(|(_, a), (_, b)| a.cmp(b))
        .map(|(original, _)| original.to_string())
        .unwrap_or_default()
}

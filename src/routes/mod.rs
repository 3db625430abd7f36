//! Route Table Index
//!
//! Organizes the application's view table into capability-segregated modules.
//! Each module lists the path patterns for one access level; a view's
//! capability is declared here and nowhere else, so the route guard is the
//! single place access is decided and individual views cannot drift into
//! re-implementing their own checks.
//!
//! The three modules map directly to the defined capability levels.

use crate::models::Capability;

/// Views accessible to all visitors (anonymous included).
pub mod public;

/// Views requiring a validated session: contest details and the participant
/// and creator dashboards.
pub mod authenticated;

/// Views restricted exclusively to identities with the 'admin' role.
pub mod admin;

/// required_capability
///
/// Resolves the capability a path requires by matching it against the three
/// route tables. Admin patterns are consulted first, then authenticated, so a
/// broader pattern can never shadow a stricter gate.
///
/// A path matching no pattern resolves to `Public`: the not-found view is an
/// open page, and gating it would leak which paths exist.
pub fn required_capability(path: &str) -> Capability {
    if matches_any(path, admin::admin_views()) {
        Capability::Admin
    } else if matches_any(path, authenticated::authenticated_views()) {
        Capability::Authenticated
    } else {
        Capability::Public
    }
}

fn matches_any(path: &str, patterns: &'static [&'static str]) -> bool {
    patterns.iter().any(|pattern| matches(path, pattern))
}

/// matches
///
/// Segment-wise pattern match. A `{param}` segment matches exactly one path
/// segment of any content; everything else matches literally. Trailing
/// slashes are ignored on both sides.
fn matches(path: &str, pattern: &str) -> bool {
    let path_segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    let pattern_segments: Vec<&str> = pattern.trim_matches('/').split('/').collect();

    path_segments.len() == pattern_segments.len()
        && pattern_segments
            .iter()
            .zip(&path_segments)
            .all(|(pat, seg)| is_param(pat) || pat == seg)
}

fn is_param(segment: &str) -> bool {
    segment.starts_with('{') && segment.ends_with('}')
}

use crate::models::{Identity, Role};

// Landing paths consumed by the navigation UI. Fixed strings; the route table
// in `routes/` gates the trees that hang off them.
pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const PARTICIPANT_DASHBOARD: &str = "/dashboard";
pub const CREATOR_DASHBOARD: &str = "/creator-dashboard";
pub const ADMIN_DASHBOARD: &str = "/admin-dashboard";

/// landing_path
///
/// Pure mapping from the session's identity to that role's dashboard landing
/// path. This is the single source of truth consulted both by navigation
/// menus (which dashboard link to show) and by post-login redirects (where to
/// send a freshly authenticated identity with no resume destination).
///
/// Total by construction: every role maps to exactly one fixed path, an
/// unrecognized role tag falls back to the participant landing, and no
/// identity at all routes to the login view.
pub fn landing_path(identity: Option<&Identity>) -> &'static str {
    match identity {
        None => LOGIN_PATH,
        Some(identity) => role_landing(identity.role),
    }
}

/// role_landing
///
/// The role half of the mapping, usable where an identity has already been
/// established (e.g. immediately after login).
pub fn role_landing(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_DASHBOARD,
        Role::Creator => CREATOR_DASHBOARD,
        // Unknown tags get participant treatment rather than an error; see
        // the Role docs.
        Role::User | Role::Unknown => PARTICIPANT_DASHBOARD,
    }
}

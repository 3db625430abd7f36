/// Admin View Table
///
/// Views exclusively accessible to identities with the 'admin' role: user
/// moderation and contest moderation.
///
/// Access Control:
/// The guard evaluates the `Admin` capability as the authenticated check plus
/// the admin role predicate, so everything here is implicitly behind login as
/// well. A creator or participant reaching these paths is redirected to login
/// with an "admin access required" reason rather than the plain login prompt.
pub fn admin_views() -> &'static [&'static str] {
    &[
        "/admin-dashboard",
        // Manage users: role changes and account moderation.
        "/admin-dashboard/users",
        // Manage contests: approve, reject, or delete published contests.
        "/admin-dashboard/contests",
    ]
}

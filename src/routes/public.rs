/// Public View Table
///
/// Views accessible to any visitor, anonymous or logged-in: the landing page,
/// the contest catalogue, and the auth entry points. These render without
/// consulting the session at all, so they stay available even during the
/// session store's restore window.
///
/// Note: these patterns exist for documentation and testing; resolution
/// treats any unmatched path as public, so this list is not load-bearing for
/// the guard. It is load-bearing for the tests that pin the truth table.
pub fn public_views() -> &'static [&'static str] {
    &[
        // Home: banner, popular contests, winner showcase.
        "/",
        // Full contest catalogue with client-side search and sorting.
        "/all-contests",
        // Auth entry points. The login view additionally receives the resume
        // path and deny reason when reached through a guard redirect.
        "/login",
        "/register",
    ]
}

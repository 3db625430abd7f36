/// Authenticated View Table
///
/// Views requiring any validated session: contest details (entry fees and
/// registration live there, so it sits behind login) and the participant and
/// creator dashboard trees.
///
/// Access Control Strategy:
/// None of these views check the session themselves. They are reachable only
/// through a navigation that passed the route guard with the `Authenticated`
/// capability, which guarantees an identity is present by the time they
/// render.
pub fn authenticated_views() -> &'static [&'static str] {
    &[
        // Contest detail page, including the registration/payment call to
        // action. Gated so the entry flow always has an identity to bill.
        "/contests/{id}",
        // --- Participant dashboard ---
        "/dashboard",
        "/dashboard/participated",
        "/dashboard/winnings",
        "/dashboard/profile",
        // --- Creator dashboard ---
        "/creator-dashboard",
        "/creator-dashboard/add-contest",
        "/creator-dashboard/my-contests",
        "/creator-dashboard/submissions",
        "/creator-dashboard/submissions/{contestId}",
        "/creator-dashboard/edit/{contestId}",
    ]
}

use std::sync::Arc;

use contest_hub::{
    AppShell, DenyReason, Identity, MockSessionStorage, NavigationOutcome, Role, SessionStore,
    StorageState,
};

// --- Test Utilities ---

fn identity(id: &str, role: Role) -> Identity {
    Identity {
        id: id.to_string(),
        name: "Demo User".to_string(),
        email: "demo@contesthub.test".to_string(),
        photo_url: None,
        role,
    }
}

async fn restored_shell() -> AppShell {
    let storage = Arc::new(MockSessionStorage::new()) as StorageState;
    let session = Arc::new(SessionStore::new(storage));
    session.restore().await;
    AppShell::new(session)
}

// --- Resume After Redirect ---

#[tokio::test]
async fn test_denied_destination_is_resumed_after_login() {
    let shell = restored_shell().await;

    // Anonymous visitor tries a gated contest page.
    let outcome = shell.handle_navigation("/contests/42").await;
    assert_eq!(
        outcome,
        NavigationOutcome::RedirectedToLogin {
            reason: DenyReason::LoginRequired
        }
    );

    // Login succeeds: navigation resumes where it was interrupted, not at
    // the role landing.
    let target = shell
        .handle_login_success(identity("u-1", Role::User), "tok".to_string())
        .await;
    assert_eq!(target, "/contests/42");

    // And the resumed navigation now renders.
    assert_eq!(
        shell.handle_navigation(&target).await,
        NavigationOutcome::Rendered("/contests/42".to_string())
    );
}

#[tokio::test]
async fn test_login_without_prior_redirect_lands_on_role_dashboard() {
    let shell = restored_shell().await;

    let target = shell
        .handle_login_success(identity("c-1", Role::Creator), "tok".to_string())
        .await;
    assert_eq!(target, "/creator-dashboard");
}

#[tokio::test]
async fn test_resume_is_consumed_by_one_login() {
    let shell = restored_shell().await;

    shell.handle_navigation("/dashboard/winnings").await;
    let first = shell
        .handle_login_success(identity("u-1", Role::User), "tok".to_string())
        .await;
    assert_eq!(first, "/dashboard/winnings");

    // A later login (fresh session, no denied navigation in between) must
    // fall back to the role landing, not replay the stale destination.
    shell.handle_logout().await;
    let second = shell
        .handle_login_success(identity("u-1", Role::User), "tok".to_string())
        .await;
    assert_eq!(second, "/dashboard");
}

#[tokio::test]
async fn test_abandoned_redirect_does_not_replay_on_a_later_login() {
    let shell = restored_shell().await;

    // A denial stashes the destination...
    shell.handle_navigation("/dashboard/winnings").await;

    // ...but the visitor walks away from the login view and browses on.
    assert_eq!(
        shell.handle_navigation("/all-contests").await,
        NavigationOutcome::Rendered("/all-contests".to_string())
    );

    // A voluntary login later must land on the role dashboard, not replay
    // the abandoned destination.
    let target = shell
        .handle_login_success(identity("u-1", Role::User), "tok".to_string())
        .await;
    assert_eq!(target, "/dashboard");
}

#[tokio::test]
async fn test_rendering_the_login_view_keeps_the_pending_resume() {
    let shell = restored_shell().await;

    shell.handle_navigation("/dashboard/winnings").await;

    // The redirect's own destination is the login view; rendering it is part
    // of the interrupted navigation, not an abandonment of it.
    assert_eq!(
        shell.handle_navigation("/login").await,
        NavigationOutcome::Rendered("/login".to_string())
    );

    let target = shell
        .handle_login_success(identity("u-1", Role::User), "tok".to_string())
        .await;
    assert_eq!(target, "/dashboard/winnings");
}

// --- The Insufficient-Role Round Trip ---

#[tokio::test]
async fn test_creator_login_does_not_open_an_admin_gate() {
    let shell = restored_shell().await;

    // Anonymous visitor requests an admin view.
    assert_eq!(
        shell.handle_navigation("/admin-dashboard/users").await,
        NavigationOutcome::RedirectedToLogin {
            reason: DenyReason::LoginRequired
        }
    );

    // A creator logs in; the resume destination is replayed...
    let target = shell
        .handle_login_success(identity("c-1", Role::Creator), "tok".to_string())
        .await;
    assert_eq!(target, "/admin-dashboard/users");

    // ...and denied again, this time with the distinct admin reason.
    assert_eq!(
        shell.handle_navigation(&target).await,
        NavigationOutcome::RedirectedToLogin {
            reason: DenyReason::AdminRequired
        }
    );
}

// --- Startup & Logout ---

#[tokio::test]
async fn test_gated_navigation_before_restore_is_checking_access() {
    let storage = Arc::new(MockSessionStorage::new()) as StorageState;
    let session = Arc::new(SessionStore::new(storage));
    let shell = AppShell::new(session.clone());

    // restore() has not run yet: no guess, no redirect.
    assert_eq!(
        shell.handle_navigation("/dashboard").await,
        NavigationOutcome::CheckingAccess
    );

    // Public views are unaffected by the restore window.
    assert_eq!(
        shell.handle_navigation("/all-contests").await,
        NavigationOutcome::Rendered("/all-contests".to_string())
    );

    session.restore().await;
    assert_eq!(
        shell.handle_navigation("/dashboard").await,
        NavigationOutcome::RedirectedToLogin {
            reason: DenyReason::LoginRequired
        }
    );
}

#[tokio::test]
async fn test_logout_sends_visitor_home() {
    let shell = restored_shell().await;
    shell
        .handle_login_success(identity("u-1", Role::User), "tok".to_string())
        .await;

    assert_eq!(shell.handle_logout().await, "/");
    assert_eq!(
        shell.handle_navigation("/dashboard").await,
        NavigationOutcome::RedirectedToLogin {
            reason: DenyReason::LoginRequired
        }
    );
}

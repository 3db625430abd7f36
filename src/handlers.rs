use std::sync::{Arc, Mutex};

use crate::guard::{self, Access};
use crate::models::{DenyReason, Identity, RouteIntent};
use crate::navigation;
use crate::routes;
use crate::session::SessionStore;

/// NavigationOutcome
///
/// What the application shell does with one navigation event, as decided by
/// the route guard.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationOutcome {
    /// The view at this path renders.
    Rendered(String),
    /// The session is still restoring; show the neutral checking state and
    /// replay the navigation once `restore()` completes.
    CheckingAccess,
    /// The visitor was sent to the login view. The denied destination is
    /// stashed in the shell for resumption after a successful login.
    RedirectedToLogin { reason: DenyReason },
}

/// AppShell
///
/// The event-level surface of the access core: every UI event that touches
/// authorization (a navigation, a login success, a logout click) goes through
/// here. Views delegate to the shell instead of inspecting the session
/// themselves, keeping the route guard the single enforcement point.
///
/// The session store is injected rather than reached through a global, so the
/// shell can be exercised in tests without mounting an application.
pub struct AppShell {
    session: Arc<SessionStore>,
    /// The destination denied by the most recent login redirect, replayed by
    /// the next successful login and dropped as soon as the visitor renders
    /// any other view. The Rust rendition of the login view's
    /// "where did the visitor come from" state, which likewise exists only
    /// on the redirect navigation itself.
    resume: Mutex<Option<String>>,
}

impl AppShell {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self {
            session,
            resume: Mutex::new(None),
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// handle_navigation
    ///
    /// Resolves the capability the requested path requires, asks the guard,
    /// and translates the verdict into a shell outcome. On a denial the
    /// requested path is stashed so a subsequent login can resume it; the
    /// stash lives only as long as the redirect it belongs to, so any later
    /// navigation that renders (other than the login view the redirect
    /// points at) discards it. A voluntary login minutes later must land on
    /// the role dashboard, not replay a long-abandoned destination.
    pub async fn handle_navigation(&self, path: &str) -> NavigationOutcome {
        let intent = RouteIntent::new(path, routes::required_capability(path));

        match guard::evaluate(&intent, &self.session.snapshot()) {
            Access::Granted => {
                if intent.requested_path != navigation::LOGIN_PATH {
                    self.resume.lock().unwrap().take();
                }
                NavigationOutcome::Rendered(intent.requested_path)
            }
            Access::CheckingAccess => NavigationOutcome::CheckingAccess,
            Access::Denied(redirect) => {
                *self.resume.lock().unwrap() = Some(redirect.resume);
                NavigationOutcome::RedirectedToLogin {
                    reason: redirect.reason,
                }
            }
        }
    }

    /// handle_login_success
    ///
    /// Called by the login view once the external auth service has returned
    /// an identity/credential pair. Stores the pair, then returns where the
    /// application should navigate: the stashed resume destination when the
    /// login was reached through a guard redirect, otherwise the fresh
    /// identity's role landing.
    ///
    /// The returned path goes back through `handle_navigation` like any other
    /// navigation, so a resume destination the new identity still cannot
    /// access (a creator resuming an admin page) is denied again there.
    pub async fn handle_login_success(&self, identity: Identity, credential: String) -> String {
        let landing = navigation::role_landing(identity.role).to_string();
        self.session.login(identity, credential).await;

        self.resume.lock().unwrap().take().unwrap_or(landing)
    }

    /// handle_logout
    ///
    /// Clears the session and sends the visitor home. Safe to call from any
    /// state; logging out twice is a no-op.
    pub async fn handle_logout(&self) -> String {
        self.session.logout().await;
        navigation::HOME_PATH.to_string()
    }
}

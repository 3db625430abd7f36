use crate::models::{Capability, DenyReason, Identity, LoginRedirect, Role, RouteIntent, SessionState};
use crate::navigation;

/// Access
///
/// The guard's verdict for one navigation attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Access {
    /// The requested view may render.
    Granted,
    /// The session store has not finished restoring; render a neutral
    /// "checking access" state instead of guessing. Prevents the flash of a
    /// redirect (or of protected content) during startup.
    CheckingAccess,
    /// The requirement is unmet; redirect to login, carrying the denied
    /// destination and a reason.
    Denied(LoginRedirect),
}

/// evaluate
///
/// The single enforcement point for view access. Views declare a capability
/// through the route table and never branch on the session themselves; this
/// function is the only place the capability/session combination is decided.
///
/// Total over every capability and session state:
/// - `Public` views consult no session state and always render, even while
///   the store is still restoring.
/// - Gated views during the restoring window yield `CheckingAccess`.
/// - `Authenticated` requires any identity; `Admin` is that same check plus a
///   role predicate, composed so the two gates cannot drift apart.
pub fn evaluate(intent: &RouteIntent, session: &SessionState) -> Access {
    match intent.required_capability {
        Capability::Public => Access::Granted,
        Capability::Authenticated => require_identity(intent, session, |_| true),
        Capability::Admin => {
            require_identity(intent, session, |identity| identity.role == Role::Admin)
        }
    }
}

/// require_identity
///
/// The shared authenticated check. An `Admin` gate is exactly this check with
/// a stricter predicate; both deny outcomes preserve the requested path so it
/// can be resumed after login.
fn require_identity(
    intent: &RouteIntent,
    session: &SessionState,
    permitted: impl Fn(&Identity) -> bool,
) -> Access {
    match session {
        SessionState::Restoring => Access::CheckingAccess,
        SessionState::Anonymous => deny(intent, DenyReason::LoginRequired),
        SessionState::Authenticated { identity, .. } => {
            if permitted(identity) {
                Access::Granted
            } else {
                deny(intent, DenyReason::AdminRequired)
            }
        }
    }
}

fn deny(intent: &RouteIntent, reason: DenyReason) -> Access {
    tracing::debug!(
        path = %intent.requested_path,
        capability = ?intent.required_capability,
        reason = ?reason,
        "navigation denied"
    );
    Access::Denied(LoginRedirect {
        to: navigation::LOGIN_PATH.to_string(),
        resume: intent.requested_path.clone(),
        reason,
    })
}

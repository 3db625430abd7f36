use serde::{Deserialize, Serialize};

// --- Core Session Schemas ---

/// Role
///
/// The closed set of role tags issued by the external auth service. The backend
/// stores roles as open strings, so anything outside the known domain lands on
/// the `Unknown` variant instead of failing deserialization. Authorization
/// decisions treat `Unknown` exactly like an ordinary participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Ordinary participant: browses contests, registers, pays entry fees.
    #[default]
    User,
    /// Contest creator: publishes and manages their own contests.
    Creator,
    /// Administrator: moderates users and contests platform-wide.
    Admin,
    /// Any role tag this client version does not recognize. Soaks up new
    /// server-side roles without breaking old clients.
    #[serde(other)]
    Unknown,
}

/// Identity
///
/// The authenticated user's record as issued by the external auth service and
/// persisted verbatim between reloads. The `id` is an opaque stable identifier
/// assigned by the service; this client never derives meaning from its shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Avatar URL, absent for accounts created without one.
    #[serde(rename = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub role: Role,
}

/// SessionState
///
/// The three observable states of the session store. `Restoring` exists so
/// consumers can distinguish "we do not know yet" from "definitely anonymous"
/// during startup; the route guard renders a neutral state in that window
/// instead of guessing.
///
/// Identity and credential live inside one variant, so a session is always
/// either fully authenticated or fully anonymous; a partial pair is not
/// representable.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// Persisted storage has not been consulted yet.
    #[default]
    Restoring,
    /// No authenticated identity; the visitor browses as a guest.
    Anonymous,
    /// A full identity/credential pair is present.
    Authenticated {
        identity: Identity,
        /// Opaque bearer token, meaningful only to the external API. The
        /// client stores and forwards it but never inspects or parses it.
        credential: String,
    },
}

impl SessionState {
    /// Returns the identity when authenticated, `None` otherwise (including
    /// during the restoring window).
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            SessionState::Authenticated { identity, .. } => Some(identity),
            _ => None,
        }
    }

    pub fn is_restoring(&self) -> bool {
        matches!(self, SessionState::Restoring)
    }
}

// --- Navigation Schemas ---

/// Capability
///
/// The access level a view declares it requires. Views declare; the route
/// guard enforces. Nothing else in the application re-implements these checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Open to anonymous visitors.
    Public,
    /// Requires any authenticated identity.
    Authenticated,
    /// Requires an authenticated identity with the admin role.
    Admin,
}

/// DenyReason
///
/// Why a navigation was refused. Kept distinct so the login view can surface
/// "please log in" and "admin access required" differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// The view needs an authenticated session and none is present.
    LoginRequired,
    /// The session is authenticated but lacks the admin role.
    AdminRequired,
}

/// RouteIntent
///
/// One navigation attempt: the path the visitor asked for and the capability
/// the target view declared. Transient: it lives for exactly one guard
/// decision and is never persisted.
#[derive(Debug, Clone)]
pub struct RouteIntent {
    pub requested_path: String,
    pub required_capability: Capability,
}

impl RouteIntent {
    pub fn new(requested_path: impl Into<String>, required_capability: Capability) -> Self {
        Self {
            requested_path: requested_path.into(),
            required_capability,
        }
    }
}

/// LoginRedirect
///
/// The deny outcome of a guard decision. `resume` preserves the originally
/// requested destination so navigation can continue where it was interrupted
/// once the visitor satisfies the requirement.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginRedirect {
    /// Where the visitor is sent instead (always the login path today).
    pub to: String,
    /// The denied destination, replayed after a successful login.
    pub resume: String,
    pub reason: DenyReason,
}

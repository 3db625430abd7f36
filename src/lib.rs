//! ContestHub access core.
//!
//! The client-side access-control core of the ContestHub contest platform:
//! the session store (identity/credential pair, persisted between launches),
//! the route guard (capability checks with resumable login redirects), and
//! the role router (role tag to dashboard landing). Contest data, payments,
//! and the authentication protocol itself live behind external services and
//! are not modeled here.

// --- Module Structure ---

// Core access-control components.
pub mod config;
pub mod guard;
pub mod handlers;
pub mod models;
pub mod navigation;
pub mod session;
pub mod storage;

// Module for the capability-segregated view table (Public, Authenticated, Admin).
pub mod routes;

// --- Public Re-exports ---

// Makes the core types easily accessible to the binary entry point and tests.
pub use config::{AppConfig, Env};
pub use guard::Access;
pub use handlers::{AppShell, NavigationOutcome};
pub use models::{Capability, DenyReason, Identity, LoginRedirect, Role, RouteIntent, SessionState};
pub use session::SessionStore;
pub use storage::{FileSessionStorage, MockSessionStorage, SessionStorage, StorageState};

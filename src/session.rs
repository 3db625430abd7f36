use std::sync::RwLock;

use crate::models::{Identity, SessionState};
use crate::storage::StorageState;

/// SessionStore
///
/// The single process-wide holder of the current identity/credential pair.
/// Every other access-control component (route guard, role router, navbar
/// link derivation) is a read-only consumer of this store; the only mutation
/// paths are `restore`, `login` and `logout`.
///
/// The store starts in `SessionState::Restoring` and stays there until
/// `restore()` has consulted persisted storage. Consumers must not assume a
/// definite anonymous/authenticated answer before that point; the route guard
/// renders a neutral "checking access" state for that window.
pub struct SessionStore {
    storage: StorageState,
    state: RwLock<SessionState>,
}

impl SessionStore {
    /// new
    ///
    /// Creates a store over the given storage backend, in the `Restoring`
    /// state. Call `restore()` before serving navigation decisions.
    pub fn new(storage: StorageState) -> Self {
        Self {
            storage,
            state: RwLock::new(SessionState::Restoring),
        }
    }

    /// restore
    ///
    /// Attempts to rebuild the session from persisted storage at application
    /// start. The session becomes `Authenticated` only when both entries are
    /// present and the identity record parses; every other shape (nothing
    /// persisted, a half-written pair, malformed JSON) falls back to
    /// `Anonymous`.
    ///
    /// Corrupt or partial entries are purged here so the same failure does
    /// not resurface on the next start. Never fails and never surfaces an
    /// error to the user.
    pub async fn restore(&self) {
        let entries = self.storage.load().await;

        let restored = match (entries.credential, entries.identity_json) {
            (Some(credential), Some(identity_json)) => {
                match serde_json::from_str::<Identity>(&identity_json) {
                    Ok(identity) => Some((identity, credential)),
                    Err(e) => {
                        tracing::warn!(error = %e, "persisted identity is unparseable, discarding session");
                        self.storage.clear().await;
                        None
                    }
                }
            }
            (None, None) => None,
            // One entry without the other violates the set-together /
            // cleared-together invariant; trust neither.
            _ => {
                tracing::warn!("partial session pair in storage, discarding session");
                self.storage.clear().await;
                None
            }
        };

        let mut state = self.state.write().unwrap();
        *state = match restored {
            Some((identity, credential)) => {
                tracing::info!(user = %identity.id, role = ?identity.role, "session restored");
                SessionState::Authenticated {
                    identity,
                    credential,
                }
            }
            None => SessionState::Anonymous,
        };
    }

    /// login
    ///
    /// Replaces the current session with the given pair and persists both
    /// entries. The in-memory swap happens under one write lock, so no reader
    /// can observe a new identity with a stale credential or vice versa.
    ///
    /// A persistence failure is logged and otherwise ignored: the session
    /// stays valid in memory for this run and simply will not survive a
    /// restart. An identity that cannot be serialized additionally clears
    /// the persisted entries, so a restart cannot resurrect the pair this
    /// login just replaced.
    pub async fn login(&self, identity: Identity, credential: String) {
        {
            let mut state = self.state.write().unwrap();
            *state = SessionState::Authenticated {
                identity: identity.clone(),
                credential: credential.clone(),
            };
        }

        match serde_json::to_string(&identity) {
            Ok(identity_json) => {
                if let Err(e) = self.storage.save(&credential, &identity_json).await {
                    tracing::warn!(error = %e, "failed to persist session");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "identity failed to serialize, clearing persisted session");
                self.storage.clear().await;
            }
        }

        tracing::info!(user = %identity.id, role = ?identity.role, "logged in");
    }

    /// logout
    ///
    /// Clears the identity and credential together and removes the persisted
    /// copies. Idempotent: calling it on an already-anonymous session leaves
    /// the session anonymous.
    pub async fn logout(&self) {
        {
            let mut state = self.state.write().unwrap();
            if *state == SessionState::Anonymous {
                return;
            }
            *state = SessionState::Anonymous;
        }

        self.storage.clear().await;
        tracing::info!("logged out");
    }

    /// snapshot
    ///
    /// A consistent copy of the current state for read-only consumers. Taken
    /// under the read lock, so it can never mix fields from two sessions.
    pub fn snapshot(&self) -> SessionState {
        self.state.read().unwrap().clone()
    }
}

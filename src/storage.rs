use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::fs;

// Entry names carried over from the browser client's localStorage keys, so a
// persisted session written by the web build reads back identically here.
const TOKEN_ENTRY: &str = "contestHub-token";
const IDENTITY_ENTRY: &str = "contestHub-user";

/// StoredEntries
///
/// The raw, unvalidated contents of the two persisted session entries. Each
/// side is independently optional so callers can tell "nothing persisted"
/// apart from a half-written pair, which must be purged rather than trusted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredEntries {
    pub credential: Option<String>,
    pub identity_json: Option<String>,
}

impl StoredEntries {
    /// True when neither entry exists, i.e. a clean anonymous start.
    pub fn is_empty(&self) -> bool {
        self.credential.is_none() && self.identity_json.is_none()
    }
}

// 1. SessionStorage Contract
/// SessionStorage
///
/// Defines the abstract contract for the durable key-value store holding the
/// session pair. This trait allows us to swap the concrete implementation,
/// from the real file-backed store (FileSessionStorage) to the in-memory mock
/// (MockSessionStorage) during testing, without affecting the SessionStore.
///
/// Invariant expected of all implementations: `save` and `clear` act on both
/// entries in one call, never on one alone. The SessionStore relies on this to
/// keep "identity and credential are set and cleared together" true on disk
/// as well as in memory.
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Reads whatever is currently persisted. Infallible by design: an
    /// unreadable entry is reported as absent, since the caller's recovery
    /// (treat as anonymous) is the same either way.
    async fn load(&self) -> StoredEntries;

    /// Persists the credential and the serialized identity record together.
    async fn save(&self, credential: &str, identity_json: &str) -> Result<(), String>;

    /// Removes both entries. Idempotent; missing entries are not an error.
    async fn clear(&self);
}

// 2. The Real Implementation (File-Backed)
/// FileSessionStorage
///
/// The concrete implementation persisting each entry as a small file under the
/// configured storage directory. The two-file layout mirrors the two
/// localStorage keys of the original web client.
#[derive(Clone)]
pub struct FileSessionStorage {
    dir: PathBuf,
}

impl FileSessionStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn entry_path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    async fn read_entry(&self, name: &str) -> Option<String> {
        match fs::read_to_string(self.entry_path(name)).await {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                // An unreadable entry gets the same treatment as a missing
                // one; the session store will fall back to anonymous.
                tracing::warn!(entry = name, error = %e, "failed to read session entry");
                None
            }
        }
    }

    async fn remove_entry(&self, name: &str) {
        if let Err(e) = fs::remove_file(self.entry_path(name)).await {
            if e.kind() != ErrorKind::NotFound {
                tracing::warn!(entry = name, error = %e, "failed to remove session entry");
            }
        }
    }
}

#[async_trait]
impl SessionStorage for FileSessionStorage {
    async fn load(&self) -> StoredEntries {
        StoredEntries {
            credential: self.read_entry(TOKEN_ENTRY).await,
            identity_json: self.read_entry(IDENTITY_ENTRY).await,
        }
    }

    async fn save(&self, credential: &str, identity_json: &str) -> Result<(), String> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| e.to_string())?;

        fs::write(self.entry_path(TOKEN_ENTRY), credential)
            .await
            .map_err(|e| e.to_string())?;
        fs::write(self.entry_path(IDENTITY_ENTRY), identity_json)
            .await
            .map_err(|e| e.to_string())
    }

    async fn clear(&self) {
        self.remove_entry(TOKEN_ENTRY).await;
        self.remove_entry(IDENTITY_ENTRY).await;
    }
}

// 3. The Mock Implementation (For Unit Tests)
/// MockSessionStorage
///
/// An in-memory implementation of `SessionStorage` used exclusively for
/// testing. Entries can be seeded (including deliberately corrupt or partial
/// pairs) and save failures can be simulated, isolating SessionStore tests
/// from the filesystem.
#[derive(Clone, Default)]
pub struct MockSessionStorage {
    entries: Arc<Mutex<StoredEntries>>,
    /// When true, `save` returns a simulated failure.
    should_fail: bool,
}

impl MockSessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_failing() -> Self {
        Self {
            entries: Arc::new(Mutex::new(StoredEntries::default())),
            should_fail: true,
        }
    }

    /// Seeds the store with arbitrary raw entries, valid or not. `None`
    /// leaves that side absent, which lets tests model half-written pairs.
    pub fn with_entries(credential: Option<&str>, identity_json: Option<&str>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(StoredEntries {
                credential: credential.map(str::to_string),
                identity_json: identity_json.map(str::to_string),
            })),
            should_fail: false,
        }
    }

    /// Snapshot of the current entries, for asserting persistence effects.
    pub fn stored(&self) -> StoredEntries {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionStorage for MockSessionStorage {
    async fn load(&self) -> StoredEntries {
        self.entries.lock().unwrap().clone()
    }

    async fn save(&self, credential: &str, identity_json: &str) -> Result<(), String> {
        if self.should_fail {
            return Err("Mock Storage Error: Simulation requested".to_string());
        }

        let mut entries = self.entries.lock().unwrap();
        entries.credential = Some(credential.to_string());
        entries.identity_json = Some(identity_json.to_string());
        Ok(())
    }

    async fn clear(&self) {
        let mut entries = self.entries.lock().unwrap();
        entries.credential = None;
        entries.identity_json = None;
    }
}

/// StorageState
///
/// The concrete type used to share the storage backend with the SessionStore.
pub type StorageState = Arc<dyn SessionStorage>;

use std::env;
use std::path::PathBuf;

/// AppConfig
///
/// Holds the application's configuration state, immutable once loaded. The
/// only infrastructure this client owns is the directory where the session
/// pair is persisted between launches; everything else (API base URL, auth
/// provider) belongs to the out-of-scope network layer.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Directory holding the persisted session entries (token + identity).
    pub storage_dir: PathBuf,
    /// Runtime environment marker. Controls log formatting and fallbacks.
    pub env: Env,
}

/// Env
///
/// Defines the runtime context, used to switch between development
/// conveniences (pretty logs, default storage location) and production
/// behavior (JSON logs, explicit configuration).
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for AppConfig {
    /// default
    ///
    /// Provides a safe, non-panicking AppConfig instance primarily used for
    /// test setup, without requiring any environment variables to be set.
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("./.contesthub-test"),
            env: Env::Local,
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// The canonical function for initializing configuration at startup. Reads
    /// all parameters from environment variables and implements the fail-fast
    /// principle.
    ///
    /// # Panics
    /// Panics if `CONTESTHUB_STORAGE_DIR` is unset in production. Starting
    /// without a known storage location would silently drop every session on
    /// restart, so the process refuses to come up instead.
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        let storage_dir = match env {
            Env::Production => PathBuf::from(
                env::var("CONTESTHUB_STORAGE_DIR")
                    .expect("FATAL: CONTESTHUB_STORAGE_DIR must be set in production."),
            ),
            // Local development persists next to the working directory.
            Env::Local => PathBuf::from(
                env::var("CONTESTHUB_STORAGE_DIR").unwrap_or_else(|_| ".contesthub".to_string()),
            ),
        };

        Self { storage_dir, env }
    }
}

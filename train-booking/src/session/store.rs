//! String-keyed local store for the session blob.
//!
//! One file per key under a state directory, values stored verbatim. The
//! session blob is a JSON document under [`USER_DATA_KEY`]; the profile
//! photo is an opaque URI under [`PROFILE_PHOTO_KEY`]. The store has a
//! single writer during the booking workflow; concurrent writers from
//! separate processes can lose an update, accepted for the single-user,
//! single-device model.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Utc;

use super::error::SessionError;
use super::types::UserSession;

/// Key holding the serialized session blob.
pub const USER_DATA_KEY: &str = "USER_DATA";

/// Key holding the profile photo URI.
pub const PROFILE_PHOTO_KEY: &str = "PROFILE_PHOTO";

/// Default session validity window: 24 hours from login.
const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Configuration for the session store.
#[derive(Debug, Clone)]
pub struct SessionStoreConfig {
    /// Directory the key files live in.
    pub dir: PathBuf,
    /// How long a session remains valid after login.
    pub session_ttl: Duration,
}

impl SessionStoreConfig {
    /// Create a new config rooted at the given directory, with the
    /// default 24-hour session window.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            session_ttl: DEFAULT_SESSION_TTL,
        }
    }

    /// Set a custom session validity window.
    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = ttl;
        self
    }
}

/// Disk-backed key-value store for the current user's local state.
#[derive(Debug, Clone)]
pub struct SessionStore {
    config: SessionStoreConfig,
}

impl SessionStore {
    /// Create a new store with the given config.
    pub fn new(config: SessionStoreConfig) -> Self {
        Self { config }
    }

    /// Directory the store writes into.
    pub fn dir(&self) -> &Path {
        &self.config.dir
    }

    /// Read the raw value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Store a raw value under `key`, creating the directory if needed.
    pub fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        if !self.config.dir.exists() {
            std::fs::create_dir_all(&self.config.dir)?;
        }
        std::fs::write(self.key_path(key), value)?;
        Ok(())
    }

    /// Remove the value stored under `key`. Removing an absent key is not
    /// an error.
    pub fn remove(&self, key: &str) -> Result<(), SessionError> {
        match std::fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Persist the session blob.
    pub fn save_session(&self, session: &UserSession) -> Result<(), SessionError> {
        let json = serde_json::to_string(session)?;
        self.set(USER_DATA_KEY, &json)
    }

    /// Load the current session.
    ///
    /// Returns `None` when no session is stored. A session past its
    /// validity window is destroyed and `None` is returned.
    pub fn load_session(&self) -> Result<Option<UserSession>, SessionError> {
        let Some(json) = self.get(USER_DATA_KEY)? else {
            return Ok(None);
        };

        let session: UserSession = serde_json::from_str(&json)?;

        if session.is_expired(Utc::now(), self.config.session_ttl) {
            tracing::debug!("stored session expired, removing");
            self.remove(USER_DATA_KEY)?;
            return Ok(None);
        }

        Ok(Some(session))
    }

    /// Destroy the current session (logout). The profile photo is kept.
    pub fn clear_session(&self) -> Result<(), SessionError> {
        self.remove(USER_DATA_KEY)
    }

    /// Stored profile photo URI, if any.
    pub fn profile_photo(&self) -> Result<Option<String>, SessionError> {
        self.get(PROFILE_PHOTO_KEY)
    }

    /// Store the profile photo URI.
    pub fn set_profile_photo(&self, uri: &str) -> Result<(), SessionError> {
        self.set(PROFILE_PHOTO_KEY, uri)
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.config.dir.join(key)
    }
}

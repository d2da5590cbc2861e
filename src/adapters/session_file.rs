//! File-backed session store.
//!
//! Credentials persist as JSON under the user config directory. The file is
//! read once at construction into a cached flag; [`SessionStore::is_logged_in`]
//! answers from that cache so gate evaluations stay synchronous and free of
//! I/O.

use crate::adapters::ApiClient;
use crate::error::ApiResult;
use crate::traits::SessionStore;
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

/// Persisted session credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionCredentials {
    pub access_token: Option<String>,
    pub user_id: Option<String>,
    /// Unix timestamp after which the token is no longer valid.
    pub expires_at: Option<i64>,
}

impl SessionCredentials {
    /// Whether the expiry timestamp has passed. Tokens without an expiry
    /// never expire locally.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => Utc::now().timestamp() >= expires_at,
            None => false,
        }
    }

    /// Whether these credentials constitute an active session.
    pub fn is_active(&self) -> bool {
        self.access_token.is_some() && !self.is_expired()
    }
}

/// Session store persisting credentials to a JSON file.
pub struct SessionFileStore {
    path: PathBuf,
    active: AtomicBool,
    token: RwLock<Option<String>>,
    api: Option<ApiClient>,
}

impl SessionFileStore {
    /// Open the store at the default config location, loading any persisted
    /// session. Returns `None` when no config directory can be determined.
    pub fn from_default_path() -> Option<Self> {
        let path = dirs::config_dir()?.join("plaza").join("session.json");
        Some(Self::with_path(path))
    }

    /// Open the store at `path`, loading any persisted session.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let credentials = Self::read_file(&path);
        let active = credentials.is_active();
        if active {
            tracing::debug!(path = %path.display(), "persisted session loaded");
        }
        Self {
            path,
            active: AtomicBool::new(active),
            token: RwLock::new(credentials.access_token),
            api: None,
        }
    }

    /// Attach an API client used for best-effort remote invalidation on
    /// logout.
    pub fn with_api(mut self, api: ApiClient) -> Self {
        self.api = Some(api);
        self
    }

    fn read_file(path: &Path) -> SessionCredentials {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(credentials) => credentials,
                Err(err) => {
                    tracing::warn!(error = %err, "session file unreadable, treating as logged out");
                    SessionCredentials::default()
                }
            },
            Err(_) => SessionCredentials::default(),
        }
    }

    /// Persist `credentials` and update the cached flag. Used by the login
    /// flow once the remote exchange succeeds.
    pub fn install(&self, credentials: &SessionCredentials) -> ApiResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(credentials)?;
        std::fs::write(&self.path, contents)?;

        self.active.store(credentials.is_active(), Ordering::SeqCst);
        if let Ok(mut token) = self.token.write() {
            *token = credentials.access_token.clone();
        }
        Ok(())
    }

    /// Remove the persisted session and drop the cached flag.
    pub fn clear(&self) -> ApiResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }
        self.active.store(false, Ordering::SeqCst);
        if let Ok(mut token) = self.token.write() {
            *token = None;
        }
        Ok(())
    }

    /// The cached access token, if a session is active.
    pub fn access_token(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }
}

#[async_trait]
impl SessionStore for SessionFileStore {
    fn is_logged_in(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    async fn logout(&self) -> ApiResult<()> {
        let token = self.access_token();
        self.clear()?;

        // Remote invalidation is best-effort: the local session is already
        // gone, a network failure must not resurrect it.
        if let (Some(api), Some(token)) = (&self.api, token) {
            let api = api.clone().with_auth(&token);
            if let Err(err) = api.invalidate_session().await {
                tracing::warn!(error = %err, "remote session invalidation failed");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn valid_credentials() -> SessionCredentials {
        SessionCredentials {
            access_token: Some("token-abc".to_string()),
            user_id: Some("u-1".to_string()),
            expires_at: Some(Utc::now().timestamp() + 3600),
        }
    }

    #[test]
    fn test_missing_file_is_logged_out() {
        let dir = tempdir().expect("tempdir");
        let store = SessionFileStore::with_path(dir.path().join("session.json"));
        assert!(!store.is_logged_in());
        assert!(store.access_token().is_none());
    }

    #[test]
    fn test_install_then_reload() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("session.json");

        let store = SessionFileStore::with_path(&path);
        store.install(&valid_credentials()).expect("install");
        assert!(store.is_logged_in());
        assert_eq!(store.access_token().as_deref(), Some("token-abc"));

        // A fresh store sees the persisted session
        let reloaded = SessionFileStore::with_path(&path);
        assert!(reloaded.is_logged_in());
    }

    #[test]
    fn test_expired_credentials_are_logged_out() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("session.json");

        let store = SessionFileStore::with_path(&path);
        let expired = SessionCredentials {
            expires_at: Some(Utc::now().timestamp() - 10),
            ..valid_credentials()
        };
        store.install(&expired).expect("install");
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_corrupt_file_is_logged_out() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json at all").expect("write");

        let store = SessionFileStore::with_path(&path);
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_credentials_without_expiry_are_active() {
        let credentials = SessionCredentials {
            access_token: Some("t".to_string()),
            user_id: None,
            expires_at: None,
        };
        assert!(!credentials.is_expired());
        assert!(credentials.is_active());
    }

    #[tokio::test]
    async fn test_logout_clears_persisted_session() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("session.json");

        let store = SessionFileStore::with_path(&path);
        store.install(&valid_credentials()).expect("install");
        assert!(store.is_logged_in());

        store.logout().await.expect("logout");
        assert!(!store.is_logged_in());
        assert!(!path.exists());

        // Idempotent: logging out again is fine
        store.logout().await.expect("second logout");
    }
}

//! Persisted auth session.
//!
//! The bearer token and the staff profile live in one JSON file with an
//! explicit lifecycle: load on startup, save on login, clear on logout.
//! The token is injected into the API [`Client`](marketdesk_api::Client)
//! by whoever owns it; nothing here is global state.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::MarketdeskError;

/// The staff member the session belongs to.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Everything persisted between runs.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub profile: Option<Profile>,
}

/// File-backed session storage.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted session; `None` when none has been saved.
    pub fn load(&self) -> Result<Option<Session>, MarketdeskError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(MarketdeskError::Session(e.to_string())),
        };
        let session = serde_json::from_str(&raw)
            .map_err(|e| MarketdeskError::Session(format!("corrupt session file: {}", e)))?;
        Ok(Some(session))
    }

    /// Persists the session, creating parent directories as needed.
    pub fn save(&self, session: &Session) -> Result<(), MarketdeskError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| MarketdeskError::Session(e.to_string()))?;
        }
        let raw = serde_json::to_string_pretty(session)
            .map_err(|e| MarketdeskError::Session(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| MarketdeskError::Session(e.to_string()))
    }

    /// Removes the persisted session. Clearing an absent session is fine.
    pub fn clear(&self) -> Result<(), MarketdeskError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(MarketdeskError::Session(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> SessionStore {
        let path = std::env::temp_dir().join(format!(
            "marketdesk-session-{}-{}.json",
            name,
            std::process::id()
        ));
        let store = SessionStore::new(path);
        let _ = store.clear();
        store
    }

    #[test]
    fn load_without_saved_session_is_none() {
        let store = temp_store("fresh");
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn save_load_clear_round_trip() {
        let store = temp_store("cycle");
        let session = Session {
            token: "staff-token".to_string(),
            profile: Some(Profile {
                id: 1,
                name: "Admin".to_string(),
                email: "admin@example.com".to_string(),
            }),
        };

        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        // Idempotent.
        store.clear().unwrap();
    }

    #[test]
    fn corrupt_file_is_a_session_error() {
        let store = temp_store("corrupt");
        fs::write(store.path(), "{{{{").unwrap();
        assert!(store.load().is_err());
        store.clear().unwrap();
    }
}

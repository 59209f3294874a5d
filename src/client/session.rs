use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

use crate::constants::{KEY_USER_EMAIL, KEY_USER_ID, KEY_USER_NAME, KEY_USER_PHONE, KEY_USER_TYPE};
use crate::models::{Doctor, Patient, Role};

use super::ApiClient;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("session storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("session storage corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// File-backed key/value store mirroring the browser's localStorage
///
/// Values live in one JSON file and are rewritten on every mutation. There
/// is no expiry; keys survive until logout or a failed profile refresh.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl SessionStore {
    /// Open the store, loading any previously persisted values
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let path = path.into();
        let values = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, values })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), SessionError> {
        self.values.insert(key.to_string(), value.into());
        self.save()
    }

    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.values.clear();
        self.save()
    }

    fn save(&self) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let bytes = serde_json::to_vec_pretty(&self.values)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

/// Profile of the signed-in account
#[derive(Debug, Clone)]
pub enum Profile {
    Patient(Patient),
    Doctor(Doctor),
}

impl Profile {
    pub fn role(&self) -> Role {
        match self {
            Profile::Patient(_) => Role::Patient,
            Profile::Doctor(_) => Role::Doctor,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            Profile::Patient(p) => p.id,
            Profile::Doctor(d) => d.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Profile::Patient(p) => &p.name,
            Profile::Doctor(d) => &d.name,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Profile::Patient(p) => &p.email,
            Profile::Doctor(d) => &d.email,
        }
    }

    pub fn phone(&self) -> &str {
        match self {
            Profile::Patient(p) => &p.phone,
            Profile::Doctor(d) => &d.phone,
        }
    }
}

/// Explicit session state replacing the web client's global auth context.
///
/// Contract: [`Session::hydrate`] reads the persisted identity keys and
/// refreshes the full profile from the gateway; any failure wipes the
/// stored state and leaves the caller unauthenticated. [`Session::remember`]
/// persists after a successful login or signup; [`Session::logout`] clears
/// every key. There is no other state transition.
#[derive(Debug)]
pub struct Session {
    store: SessionStore,
}

impl Session {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SessionError> {
        Ok(Self {
            store: SessionStore::open(path)?,
        })
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Restore the signed-in account from storage
    ///
    /// Returns `None` when nothing usable is stored or the profile fetch
    /// fails; in both cases the persisted identity keys are wiped, so a
    /// stale session cannot keep resurrecting itself.
    pub async fn hydrate(&mut self, api: &ApiClient) -> Option<Profile> {
        let role = self
            .store
            .get(KEY_USER_TYPE)
            .and_then(|v| v.parse::<Role>().ok());
        let id = self
            .store
            .get(KEY_USER_ID)
            .and_then(|v| v.parse::<i64>().ok());
        let (role, id) = match (role, id) {
            (Some(role), Some(id)) => (role, id),
            _ => {
                // A truly empty store is just anonymous; anything partial
                // or garbled gets wiped in full.
                if !self.store.is_empty() {
                    self.forget();
                }
                return None;
            }
        };

        let fetched = match role {
            Role::Patient => api.get_patient(id).await.map(Profile::Patient),
            Role::Doctor => api.get_doctor(id).await.map(Profile::Doctor),
        };

        match fetched {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::warn!("Failed to refresh stored profile, signing out: {}", e);
                self.forget();
                None
            }
        }
    }

    /// Persist the identity keys for a signed-in account
    pub fn remember(&mut self, profile: &Profile) -> Result<(), SessionError> {
        self.store.set(KEY_USER_TYPE, profile.role().as_str())?;
        self.store.set(KEY_USER_ID, profile.id().to_string())?;
        self.store.set(KEY_USER_EMAIL, profile.email())?;
        self.store.set(KEY_USER_NAME, profile.name())?;
        self.store.set(KEY_USER_PHONE, profile.phone())?;
        Ok(())
    }

    /// Sign out, clearing every persisted identity key
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.store.clear()
    }

    fn forget(&mut self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!("Failed to clear session storage: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    fn sample_patient() -> Patient {
        Patient {
            id: 42,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "0123456789".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_store_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        {
            let mut store = SessionStore::open(&path).unwrap();
            store.set("userType", "patient").unwrap();
            store.set("userId", "42").unwrap();
        }

        let store = SessionStore::open(&path).unwrap();
        assert_eq!(store.get("userType"), Some("patient"));
        assert_eq!(store.get("userId"), Some("42"));
        assert_eq!(store.get("userEmail"), None);
    }

    #[test]
    fn test_remember_then_logout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        let mut session = Session::open(&path).unwrap();
        session
            .remember(&Profile::Patient(sample_patient()))
            .unwrap();

        assert_eq!(session.store().get(KEY_USER_TYPE), Some("patient"));
        assert_eq!(session.store().get(KEY_USER_ID), Some("42"));
        assert_eq!(session.store().get(KEY_USER_EMAIL), Some("ada@example.com"));
        assert_eq!(session.store().get(KEY_USER_NAME), Some("Ada"));
        assert_eq!(session.store().get(KEY_USER_PHONE), Some("0123456789"));

        session.logout().unwrap();
        assert_eq!(session.store().get(KEY_USER_TYPE), None);
        assert_eq!(session.store().get(KEY_USER_ID), None);
    }

    #[tokio::test]
    async fn test_hydrate_with_empty_store_is_anonymous() {
        let dir = TempDir::new().unwrap();
        let mut session = Session::open(dir.path().join("session.json")).unwrap();

        // No stored keys: hydrate must not touch the network at all, so a
        // dead base URL is safe here.
        let api = ApiClient::new("http://127.0.0.1:1");
        assert!(session.hydrate(&api).await.is_none());
    }

    #[tokio::test]
    async fn test_hydrate_clears_partial_identity_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        // A role plus secondary keys but no id can never hydrate; the
        // leftovers must not survive to the next startup.
        let mut session = Session::open(&path).unwrap();
        session.store.set(KEY_USER_TYPE, "patient").unwrap();
        session.store.set(KEY_USER_EMAIL, "ada@example.com").unwrap();
        session.store.set(KEY_USER_NAME, "Ada").unwrap();

        let api = ApiClient::new("http://127.0.0.1:1");
        assert!(session.hydrate(&api).await.is_none());
        assert_eq!(session.store().get(KEY_USER_TYPE), None);
        assert_eq!(session.store().get(KEY_USER_EMAIL), None);
        assert_eq!(session.store().get(KEY_USER_NAME), None);
        assert!(session.store().is_empty());
    }

    #[tokio::test]
    async fn test_hydrate_clears_garbage_role() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        let mut session = Session::open(&path).unwrap();
        session.store.set(KEY_USER_TYPE, "astronaut").unwrap();
        session.store.set(KEY_USER_ID, "42").unwrap();

        let api = ApiClient::new("http://127.0.0.1:1");
        assert!(session.hydrate(&api).await.is_none());
        assert_eq!(session.store().get(KEY_USER_TYPE), None);
        assert_eq!(session.store().get(KEY_USER_ID), None);
    }
}

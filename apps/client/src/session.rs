//! Process-wide session over the persisted `"user"` record.
//!
//! The key-value file is read once when the session is opened; afterwards
//! reads come from memory and writes go to both.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use serde_json::Value;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::user::CurrentUser;

pub const USER_KEY: &str = "user";

type Store = BTreeMap<String, Value>;

#[derive(Debug)]
pub struct Session {
    path: PathBuf,
    current: RwLock<Option<CurrentUser>>,
}

impl Session {
    /// Opens the session stored at `path`. A missing or unreadable file
    /// opens as signed out.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let current = load_user(&path);
        Self {
            path,
            current: RwLock::new(current),
        }
    }

    pub fn current(&self) -> Option<CurrentUser> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Records `user` as signed in and persists it.
    pub fn sign_in(&self, user: CurrentUser) -> Result<(), AppError> {
        let value = serde_json::to_value(&user).map_err(|e| AppError::Session(e.to_string()))?;

        let mut store = existing_store(&self.path);
        store.insert(USER_KEY.to_string(), value);
        write_store(&self.path, &store)?;

        info!("Saved user {} to {}", user.user_id, self.path.display());
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(user);
        Ok(())
    }

    /// Forgets the signed-in user, in memory and on disk.
    pub fn clear(&self) -> Result<(), AppError> {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = None;

        if !self.path.exists() {
            return Ok(());
        }
        let mut store = existing_store(&self.path);
        if store.remove(USER_KEY).is_some() {
            write_store(&self.path, &store)?;
            info!("Cleared user from {}", self.path.display());
        }
        Ok(())
    }
}

fn load_user(path: &Path) -> Option<CurrentUser> {
    if !path.exists() {
        return None;
    }
    let store = match read_store(path) {
        Ok(store) => store,
        Err(e) => {
            warn!("Ignoring unreadable session file {}: {e}", path.display());
            return None;
        }
    };
    let value = store.get(USER_KEY)?.clone();
    match serde_json::from_value(value) {
        Ok(user) => Some(user),
        Err(e) => {
            warn!("Ignoring malformed user record in {}: {e}", path.display());
            None
        }
    }
}

/// The store to update in place. An unreadable one is replaced, with a warning.
fn existing_store(path: &Path) -> Store {
    if !path.exists() {
        return Store::new();
    }
    read_store(path).unwrap_or_else(|e| {
        warn!("Overwriting unreadable session file {}: {e}", path.display());
        Store::new()
    })
}

fn read_store(path: &Path) -> Result<Store, AppError> {
    let bytes = fs::read(path).map_err(|e| AppError::Session(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| AppError::Session(e.to_string()))
}

/// Writes through a sibling temp file so a crash never leaves half a store.
fn write_store(path: &Path, store: &Store) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| AppError::Session(e.to_string()))?;
        }
    }
    let json =
        serde_json::to_vec_pretty(store).map_err(|e| AppError::Session(e.to_string()))?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).map_err(|e| AppError::Session(e.to_string()))?;
    fs::rename(&tmp, path).map_err(|e| AppError::Session(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn user() -> CurrentUser {
        CurrentUser {
            user_id: "u-42".to_string(),
            fname: "Sidi".to_string(),
            lname: "Ahmed".to_string(),
            score: 7.0,
        }
    }

    #[test]
    fn test_missing_file_opens_signed_out() {
        let dir = tempdir().unwrap();
        let session = Session::open(dir.path().join("storage.json"));
        assert!(session.current().is_none());
    }

    #[test]
    fn test_sign_in_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        Session::open(&path).sign_in(user()).unwrap();

        let reopened = Session::open(&path);
        assert_eq!(reopened.current(), Some(user()));
    }

    #[test]
    fn test_user_is_stored_under_user_key() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        Session::open(&path).sign_in(user()).unwrap();

        let raw: Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(raw[USER_KEY]["userId"], "u-42");
        assert_eq!(raw[USER_KEY]["fname"], "Sidi");
    }

    #[test]
    fn test_clear_removes_user_and_keeps_other_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, r#"{"theme":"dark"}"#).unwrap();

        let session = Session::open(&path);
        session.sign_in(user()).unwrap();
        session.clear().unwrap();

        assert!(session.current().is_none());
        assert!(Session::open(&path).current().is_none());
        let raw: Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(raw["theme"], "dark");
    }

    #[test]
    fn test_clear_without_file_is_ok() {
        let dir = tempdir().unwrap();
        let session = Session::open(dir.path().join("storage.json"));
        assert!(session.clear().is_ok());
    }

    #[test]
    fn test_corrupt_file_opens_signed_out() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();

        assert!(Session::open(&path).current().is_none());
    }

    #[test]
    fn test_sign_in_over_corrupt_file_replaces_it() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();

        let session = Session::open(&path);
        session.sign_in(user()).unwrap();

        let raw: Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(raw[USER_KEY]["userId"], "u-42");
        assert_eq!(Session::open(&path).current(), Some(user()));
    }

    #[test]
    fn test_malformed_user_record_opens_signed_out() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, r#"{"user":{"fname":"NoId"}}"#).unwrap();

        assert!(Session::open(&path).current().is_none());
    }
}

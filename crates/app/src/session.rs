//! Saved session handling.
//!
//! The storefront kept the signed-in user in browser storage; the CLI
//! analogue is a small JSON file. All reads and writes go through
//! [`SessionStore`] so sign-in state changes in exactly one place.

use std::{fs, io, path::PathBuf};

use thiserror::Error;
use waybill::access::Session;

/// Failures loading or saving the session file.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    /// Filesystem failure.
    #[error("session file error: {0}")]
    Io(#[from] io::Error),

    /// The file exists but does not hold a session.
    #[error("session file does not parse: {0}")]
    Json(#[from] serde_json::Error),
}

/// File-backed store for the signed-in session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store backed by the given path.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the saved session, if any.
    ///
    /// A missing file is the signed-out state, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };

        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Persist the session (sign-in or role update).
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be written.
    pub fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        fs::write(&self.path, serde_json::to_string_pretty(session)?)?;

        Ok(())
    }

    /// Remove the saved session (sign-out). Idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), SessionStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

//! Session persistence via OS keyring
//!
//! The access token and account identifier form a [`Session`] that is
//! loaded once at startup and handed to the gateway client at construction
//! time. Persistence goes through the operating system's native credential
//! store (Keychain on macOS, Secret Service on Linux, Windows Credential
//! Manager on Windows); the session is serialized to JSON before storage.
//!
//! The keyring is stateless; [`CredentialStore`] is a zero-field struct
//! that acts as a namespaced accessor.

use serde::{Deserialize, Serialize};

use crate::error::{DeskboardError, Result};

/// Keyring service name under which the session is stored
const KEYRING_SERVICE: &str = "deskboard";

/// Keyring user entry holding the serialized session
const KEYRING_USER: &str = "session";

/// Credentials for the remote conversation gateway
///
/// Overwritten wholesale on each `login`; there is no partial update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Access token sent in the `api_access_token` header
    pub access_token: String,
    /// Account identifier interpolated into every gateway path
    pub account_id: String,
}

/// Stateless accessor for the OS native keyring
///
/// # Examples
///
/// ```no_run
/// use deskboard::credentials::{CredentialStore, Session};
///
/// # fn example() -> deskboard::error::Result<()> {
/// let store = CredentialStore;
/// store.save(&Session {
///     access_token: "my_token".to_string(),
///     account_id: "74".to_string(),
/// })?;
/// let loaded = store.load()?;
/// assert!(loaded.is_some());
/// # Ok(())
/// # }
/// ```
pub struct CredentialStore;

impl CredentialStore {
    fn entry() -> Result<keyring::Entry> {
        keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER)
            .map_err(|e| DeskboardError::Keyring(e).into())
    }

    /// Persist the session, replacing any previously stored one
    ///
    /// # Errors
    ///
    /// Returns [`DeskboardError::Serialization`] if JSON serialization
    /// fails or [`DeskboardError::Keyring`] if the OS credential store
    /// rejects the write.
    pub fn save(&self, session: &Session) -> Result<()> {
        let json_str = serde_json::to_string(session)?;
        let entry = Self::entry()?;
        entry
            .set_password(&json_str)
            .map_err(DeskboardError::Keyring)?;
        tracing::debug!("Stored session for account {}", session.account_id);
        Ok(())
    }

    /// Load the stored session
    ///
    /// Returns `Ok(None)` when no session has been saved yet, allowing
    /// callers to distinguish "not logged in" from a genuine keyring
    /// error.
    pub fn load(&self) -> Result<Option<Session>> {
        let entry = Self::entry()?;
        match entry.get_password() {
            Ok(json_str) => {
                let session: Session = serde_json::from_str(&json_str)?;
                Ok(Some(session))
            }
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(DeskboardError::Keyring(e).into()),
        }
    }

    /// Delete the stored session
    ///
    /// A no-op when nothing is stored, so it is safe to call without
    /// checking first.
    pub fn clear(&self) -> Result<()> {
        let entry = Self::entry()?;
        match entry.delete_password() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(DeskboardError::Keyring(e).into()),
        }
    }
}

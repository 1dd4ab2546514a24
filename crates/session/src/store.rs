//! The session store and its lifecycle.

use eticket_auth::Principal;

use crate::storage::{SessionStorage, StorageError, TOKEN_KEY, USER_KEY};

/// Snapshot of the current session state.
///
/// `is_loading` is true only between application start and the completion of
/// the initial storage read; consumers that would otherwise flash a redirect
/// wait for it to turn false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub principal: Option<Principal>,
    pub is_loading: bool,
}

impl Session {
    fn initial() -> Self {
        Self {
            token: None,
            principal: None,
            is_loading: true,
        }
    }

    fn cleared() -> Self {
        Self {
            token: None,
            principal: None,
            is_loading: false,
        }
    }

    /// True once the initial load resolved to an authenticated principal.
    pub fn is_authenticated(&self) -> bool {
        self.principal.is_some()
    }
}

/// Single source of truth for the authenticated principal and bearer token.
///
/// # Lifecycle
///
/// - Initialized unauthenticated with `is_loading = true`.
/// - [`SessionStore::load`] populates it once from persisted storage.
/// - [`SessionStore::establish`] is the login flow's single write path.
/// - [`SessionStore::clear`] is sign-out.
///
/// No other code path mutates the session, and no other component reads the
/// persisted keys directly.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    state: Session,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            state: Session::initial(),
        }
    }

    /// Resolve the session from persisted storage.
    ///
    /// Runs the read at most once: later calls return the already-resolved
    /// state. Malformed or unreadable storage degrades to unauthenticated and
    /// is logged, never surfaced — a corrupted session must look exactly like
    /// a signed-out visitor.
    pub async fn load(&mut self) -> &Session {
        if !self.state.is_loading {
            return &self.state;
        }

        let token = match self.storage.get(TOKEN_KEY).await {
            Ok(token) => token,
            Err(err) => {
                tracing::warn!(error = %err, "token read failed, treating as signed out");
                None
            }
        };

        let principal = match self.storage.get(USER_KEY).await {
            Ok(Some(blob)) => match serde_json::from_str::<Principal>(&blob) {
                Ok(principal) => Some(principal),
                Err(err) => {
                    tracing::warn!(error = %err, "persisted principal rejected, treating as signed out");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(error = %err, "principal read failed, treating as signed out");
                None
            }
        };

        // A token without a parseable principal cannot authorize anything.
        self.state = Session {
            token: if principal.is_some() { token } else { None },
            principal,
            is_loading: false,
        };
        &self.state
    }

    /// Current session state, synchronously.
    pub fn get(&self) -> &Session {
        &self.state
    }

    /// Owned copy of the current state for consumers that outlive the borrow.
    pub fn snapshot(&self) -> Session {
        self.state.clone()
    }

    /// Write a freshly issued token and principal (the login flow's entry
    /// point into this store).
    pub fn establish(&mut self, token: String, principal: Principal) -> Result<(), StorageError> {
        let blob = serde_json::to_string(&principal)
            .map_err(|err| StorageError::Io(std::io::Error::other(err)))?;
        self.storage.put(TOKEN_KEY, &token)?;
        self.storage.put(USER_KEY, &blob)?;
        self.state = Session {
            token: Some(token),
            principal: Some(principal),
            is_loading: false,
        };
        Ok(())
    }

    /// Remove both persisted keys and reset to the unauthenticated shape.
    ///
    /// Infallible from the caller's point of view: removal errors are logged
    /// and the in-memory state is cleared regardless, so the visitor is
    /// signed out even if the storage medium misbehaves.
    pub fn clear(&mut self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(err) = self.storage.remove(key) {
                tracing::warn!(key, error = %err, "failed to remove persisted session key");
            }
        }
        self.state = Session::cleared();
    }

    /// Storage handle, for tests asserting on persisted effects.
    #[cfg(test)]
    pub(crate) fn storage(&self) -> &S {
        &self.storage
    }
}

//! `eticket-session` — the session store: single source of truth for "who is
//! currently using the application", backed by persisted local storage.
//!
//! Storage access is confined to [`storage`]; everything else goes through
//! [`SessionStore`] so the current-user concept has exactly one
//! implementation.

pub mod storage;
pub mod store;

pub use storage::{FileStorage, MemoryStorage, SessionStorage, StorageError, TOKEN_KEY, USER_KEY};
pub use store::{Session, SessionStore};

//! Application configuration.
//!
//! Values that the original deployment hardcoded (asset host, storage
//! location, redirect targets) are configuration here, with environment
//! overrides for the binary.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Well-known path the unauthenticated are redirected to.
pub const LOGIN_PATH: &str = "/auth/login";

/// Well-known path used for wrong-role redirects and sign-out.
pub const HOME_PATH: &str = "/";

/// Process-wide configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL prefixed onto relative avatar paths.
    pub asset_host: String,

    /// Directory holding the persisted session keys.
    pub session_dir: PathBuf,
}

impl AppConfig {
    /// Configuration from environment variables, falling back to defaults.
    ///
    /// `ETICKET_ASSET_HOST` and `ETICKET_SESSION_DIR` override the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            asset_host: std::env::var("ETICKET_ASSET_HOST").unwrap_or(defaults.asset_host),
            session_dir: std::env::var("ETICKET_SESSION_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.session_dir),
        }
    }

    /// Resolve a relative avatar path against the configured asset host.
    pub fn avatar_url(&self, relative: &str) -> String {
        let base = self.asset_host.trim_end_matches('/');
        let rel = relative.trim_start_matches('/');
        format!("{base}/{rel}")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            asset_host: "http://localhost:8000/storage/".to_string(),
            session_dir: PathBuf::from(".eticket"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_url_joins_without_duplicate_slash() {
        let config = AppConfig {
            asset_host: "http://localhost:8000/storage/".to_string(),
            session_dir: PathBuf::from("."),
        };
        assert_eq!(
            config.avatar_url("avatars/a.png"),
            "http://localhost:8000/storage/avatars/a.png"
        );
        assert_eq!(
            config.avatar_url("/avatars/a.png"),
            "http://localhost:8000/storage/avatars/a.png"
        );
    }
}

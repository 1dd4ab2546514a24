//! Authenticated visitor identity as known to the client.

use serde::{Deserialize, Serialize};

use eticket_core::UserId;

use crate::Role;

/// A fully resolved principal for authorization decisions.
///
/// Constructed by the session layer from the persisted `user` blob. Because
/// [`Role`] is a closed enumeration, a principal carrying an unknown role
/// cannot exist past that parse boundary; the session layer degrades such
/// blobs to "no principal" instead (fail-closed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: UserId,
    pub display_name: String,
    pub role: Role,
    /// Relative avatar path, resolved against the configured asset host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Principal {
    pub fn new(id: UserId, display_name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            role,
            avatar_url: None,
        }
    }

    pub fn with_avatar(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn principal_round_trips_through_json() {
        let principal = Principal::new(UserId::new(), "Ada Lovelace", Role::Organizer)
            .with_avatar("avatars/ada.png");
        let json = serde_json::to_string(&principal).unwrap();
        let back: Principal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, principal);
    }

    #[test]
    fn principal_with_unknown_role_fails_to_parse() {
        let json = format!(
            r#"{{"id":"{}","display_name":"X","role":"superuser"}}"#,
            UserId::new()
        );
        assert!(serde_json::from_str::<Principal>(&json).is_err());
    }

    #[test]
    fn missing_avatar_is_absent_not_error() {
        let json = format!(
            r#"{{"id":"{}","display_name":"X","role":"user"}}"#,
            UserId::new()
        );
        let principal: Principal = serde_json::from_str(&json).unwrap();
        assert_eq!(principal.avatar_url, None);
    }
}

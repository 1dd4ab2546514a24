//! Role model used for route authorization.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use eticket_core::DomainError;

/// Role of an authenticated visitor.
///
/// This is a closed enumeration: unknown role strings are rejected at the
/// parse boundary rather than carried through as opaque data. The absence of
/// a principal denotes the implicit anonymous role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Organizer,
    Admin,
}

impl Role {
    /// Every known role, in declaration order.
    pub const ALL: [Role; 3] = [Role::User, Role::Organizer, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Organizer => "organizer",
            Role::Admin => "admin",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "organizer" => Ok(Role::Organizer),
            "admin" => Ok(Role::Admin),
            other => Err(DomainError::unknown_role(other)),
        }
    }
}

/// Set of roles permitted to view a protected screen.
///
/// Compact bit representation; cheap to copy into route tables. An empty set
/// would make a route unreachable by anyone, so route-table tests assert
/// non-emptiness rather than this type enforcing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoleSet(u8);

impl RoleSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn single(role: Role) -> Self {
        Self(Self::bit(role))
    }

    pub fn of(roles: &[Role]) -> Self {
        roles.iter().fold(Self::empty(), |set, role| set.with(*role))
    }

    pub const fn with(self, role: Role) -> Self {
        Self(self.0 | Self::bit(role))
    }

    pub const fn contains(&self, role: Role) -> bool {
        self.0 & Self::bit(role) != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        Role::ALL.into_iter().filter(|role| self.contains(*role))
    }

    const fn bit(role: Role) -> u8 {
        match role {
            Role::User => 0b001,
            Role::Organizer => 0b010,
            Role::Admin => 0b100,
        }
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<T: IntoIterator<Item = Role>>(iter: T) -> Self {
        iter.into_iter().fold(Self::empty(), |set, role| set.with(role))
    }
}

impl core::fmt::Display for RoleSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for role in self.iter() {
            if !first {
                f.write_str(",")?;
            }
            f.write_str(role.as_str())?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_known_strings() {
        assert_eq!("user".parse::<Role>().unwrap(), Role::User);
        assert_eq!("organizer".parse::<Role>().unwrap(), Role::Organizer);
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
    }

    #[test]
    fn role_rejects_unknown_strings() {
        for bad in ["", "superadmin", "ADMIN", "Admin ", "guest"] {
            let err = bad.parse::<Role>().unwrap_err();
            match err {
                DomainError::UnknownRole(_) => {}
                other => panic!("expected UnknownRole, got {other:?}"),
            }
        }
    }

    #[test]
    fn role_serde_round_trips_lowercase() {
        let json = serde_json::to_string(&Role::Organizer).unwrap();
        assert_eq!(json, "\"organizer\"");
        let role: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(role, Role::Organizer);
    }

    #[test]
    fn role_serde_rejects_unknown_value() {
        assert!(serde_json::from_str::<Role>("\"root\"").is_err());
    }

    #[test]
    fn role_set_membership() {
        let set = RoleSet::of(&[Role::User, Role::Admin]);
        assert!(set.contains(Role::User));
        assert!(set.contains(Role::Admin));
        assert!(!set.contains(Role::Organizer));
        assert!(!set.is_empty());
        assert!(RoleSet::empty().is_empty());
    }

    #[test]
    fn role_set_iterates_in_declaration_order() {
        let set = RoleSet::of(&[Role::Admin, Role::User]);
        let roles: Vec<Role> = set.iter().collect();
        assert_eq!(roles, vec![Role::User, Role::Admin]);
    }
}

//! Role-link registry: which navigation entries each role is offered.
//!
//! Static configuration, never mutated at runtime. Slice order is display
//! order in the navigation bar and is preserved exactly as written here.

use eticket_auth::Role;
use eticket_core::config::HOME_PATH;

/// One entry in the primary navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

const fn link(label: &'static str, path: &'static str) -> NavLink {
    NavLink { label, path }
}

/// Links for unauthenticated visitors.
const PUBLIC_LINKS: &[NavLink] = &[
    link("Accueil", "/"),
    link("À propos", "/about"),
    link("Contact", "/contact"),
];

const USER_LINKS: &[NavLink] = &[
    link("Accueil", "/"),
    link("Événements", "/events"),
    link("Mes tickets", "/user/tickets"),
    link("Profil", "/user/profile"),
    link("Contact", "/contact"),
];

const ORGANIZER_LINKS: &[NavLink] = &[
    link("Tableau de bord", "/organizer/dashboard"),
    link("Événements", "/organizer/events"),
    link("Profil", "/organizer/profile"),
    link("Contact", "/contact"),
];

const ADMIN_LINKS: &[NavLink] = &[
    link("Tableau de bord", "/admin"),
    link("Utilisateurs", "/admin/users"),
    link("Événements", "/admin/events"),
    link("Transactions", "/admin/transactions"),
];

/// Navigation entries visible to a role; `None` is the anonymous visitor.
pub fn links_for(role: Option<Role>) -> &'static [NavLink] {
    match role {
        None => PUBLIC_LINKS,
        Some(Role::User) => USER_LINKS,
        Some(Role::Organizer) => ORGANIZER_LINKS,
        Some(Role::Admin) => ADMIN_LINKS,
    }
}

/// Where the logo click lands a visitor, by role.
pub fn home_path_for(role: Option<Role>) -> &'static str {
    match role {
        None => HOME_PATH,
        Some(Role::User) => "/user/profile",
        Some(Role::Organizer) => "/organizer/dashboard",
        Some(Role::Admin) => "/admin",
    }
}

//! `eticket-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from storage and rendering: the
//! session layer parses persisted data into a [`Principal`], and the route
//! guard here turns `(principal, allowed roles)` into a display decision.

pub mod guard;
pub mod principal;
pub mod roles;

pub use guard::{authorize, Access};
pub use principal::Principal;
pub use roles::{Role, RoleSet};

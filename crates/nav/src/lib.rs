//! `eticket-nav` — navigation: the role-link registry and the shell that
//! renders it around the current session.

pub mod registry;
pub mod shell;

pub use registry::{home_path_for, links_for, NavLink};
pub use shell::NavigationShell;

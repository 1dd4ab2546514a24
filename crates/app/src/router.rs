//! Declarative route table and resolution.
//!
//! Each entry maps a path pattern to a screen, optionally gated by an
//! allowed-role set. The guard decision is re-derived from the current
//! session on every resolution; nothing is cached across principal changes.

use eticket_auth::{authorize, Access, Role, RoleSet};
use eticket_core::{DomainError, DomainResult};
use eticket_session::Session;

use crate::screen::Screen;

/// One route-table entry.
///
/// Patterns are absolute slash-separated paths; a `:name` segment matches any
/// single segment and is captured as a parameter. Matching is first-win, so
/// static segments must be listed ahead of parameter patterns that would
/// shadow them (`/organizer/events/create` before `/organizer/events/:id`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub pattern: &'static str,
    pub screen: Screen,
    pub allowed_roles: Option<RoleSet>,
}

impl Route {
    pub const fn public(pattern: &'static str, screen: Screen) -> Self {
        Self {
            pattern,
            screen,
            allowed_roles: None,
        }
    }

    pub const fn protected(pattern: &'static str, screen: Screen, allowed: RoleSet) -> Self {
        Self {
            pattern,
            screen,
            allowed_roles: Some(allowed),
        }
    }
}

/// A matched screen plus its captured path parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenMatch {
    pub screen: Screen,
    pub params: Vec<(&'static str, String)>,
}

/// Outcome of resolving a path against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The visitor may see this screen.
    Render(ScreenMatch),
    /// Protected path requested before the initial session load resolved;
    /// render nothing yet instead of flashing a redirect.
    Loading,
    /// Unauthenticated visitor on a protected path.
    RedirectToLogin,
    /// Authenticated visitor without a permitted role.
    RedirectToHome,
    /// No entry matched.
    NotFound,
}

/// The route table.
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Check the table for configuration errors.
    ///
    /// A protected route with an empty allowed-role set would be unreachable
    /// by every authenticated principal; that is a bug in the table, caught
    /// here by tests rather than handled at resolution time.
    pub fn validate(&self) -> DomainResult<()> {
        for route in &self.routes {
            if !route.pattern.starts_with('/') {
                return Err(DomainError::validation(format!(
                    "route pattern must be absolute: {}",
                    route.pattern
                )));
            }
            if let Some(allowed) = route.allowed_roles {
                if allowed.is_empty() {
                    return Err(DomainError::validation(format!(
                        "route {} declares an empty allowed-role set",
                        route.pattern
                    )));
                }
            }
        }
        Ok(())
    }

    /// Resolve a requested path against the current session.
    pub fn resolve(&self, path: &str, session: &Session) -> Resolution {
        let Some((route, params)) = self.match_path(path) else {
            return Resolution::NotFound;
        };

        let Some(allowed) = route.allowed_roles else {
            return Resolution::Render(ScreenMatch {
                screen: route.screen,
                params,
            });
        };

        if session.is_loading {
            return Resolution::Loading;
        }

        match authorize(session.principal.as_ref(), allowed) {
            Access::Render => Resolution::Render(ScreenMatch {
                screen: route.screen,
                params,
            }),
            Access::RedirectToLogin => Resolution::RedirectToLogin,
            Access::RedirectToHome => Resolution::RedirectToHome,
        }
    }

    fn match_path(&self, path: &str) -> Option<(&Route, Vec<(&'static str, String)>)> {
        let segments = segments_of(path);
        self.routes.iter().find_map(|route| {
            match_pattern(route.pattern, &segments).map(|params| (route, params))
        })
    }
}

fn segments_of(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn match_pattern(pattern: &'static str, segments: &[&str]) -> Option<Vec<(&'static str, String)>> {
    let pattern_segments: Vec<&'static str> =
        pattern.split('/').filter(|s| !s.is_empty()).collect();
    if pattern_segments.len() != segments.len() {
        return None;
    }

    let mut params = Vec::new();
    for (expected, actual) in pattern_segments.iter().zip(segments) {
        if let Some(name) = expected.strip_prefix(':') {
            params.push((name, (*actual).to_string()));
        } else if expected != actual {
            return None;
        }
    }
    Some(params)
}

/// The application's route table.
pub fn default_routes() -> Router {
    const USER: RoleSet = RoleSet::single(Role::User);
    const ORGANIZER: RoleSet = RoleSet::single(Role::Organizer);
    const ADMIN: RoleSet = RoleSet::single(Role::Admin);

    Router::new(vec![
        // Public
        Route::public("/", Screen::Index),
        Route::public("/events", Screen::Events),
        Route::public("/events/:id", Screen::EventDetail),
        Route::public("/auth/login", Screen::Login),
        Route::public("/auth/register", Screen::Register),
        Route::public("/auth/forgot-password", Screen::ForgotPassword),
        Route::public("/about", Screen::About),
        Route::public("/contact", Screen::Contact),
        Route::public("/privacy", Screen::Privacy),
        Route::public("/refunds", Screen::Refunds),
        Route::public("/terms", Screen::Terms),
        Route::public("/cookies", Screen::Cookies),
        // User
        Route::protected("/user/tickets", Screen::UserTickets, USER),
        Route::protected("/user/profile", Screen::UserProfile, USER),
        // Organizer (static segments ahead of :id patterns)
        Route::protected("/organizer/dashboard", Screen::OrganizerDashboard, ORGANIZER),
        Route::protected("/organizer/events/create", Screen::CreateEvent, ORGANIZER),
        Route::protected("/organizer/events", Screen::OrganizerEvents, ORGANIZER),
        Route::protected("/organizer/profile", Screen::OrganizerProfile, ORGANIZER),
        Route::protected(
            "/organizer/events/:id/tickets/create",
            Screen::CreateTicketCategories,
            ORGANIZER,
        ),
        Route::protected(
            "/organizer/events/:id/tickets",
            Screen::ListTicketCategories,
            ORGANIZER,
        ),
        Route::protected("/organizer/events/:id/edit", Screen::EditEvent, ORGANIZER),
        // Admin
        Route::protected("/admin", Screen::AdminDashboard, ADMIN),
        Route::protected("/admin/events", Screen::AdminEvents, ADMIN),
        Route::protected("/admin/transactions", Screen::AdminTransactions, ADMIN),
        Route::protected("/admin/users", Screen::AdminUsers, ADMIN),
    ])
}

//! Route guard: the decision gate for protected screens.

use crate::{Principal, RoleSet};

/// Outcome of a route-guard check.
///
/// Denials are normal control-flow results, not errors: the caller commits a
/// redirect, never surfaces an error page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The principal may see the screen.
    Render,
    /// No principal; send the visitor to the sign-in screen.
    RedirectToLogin,
    /// Authenticated but wrong role; send the visitor home.
    RedirectToHome,
}

/// Authorize a principal against a screen's allowed-role set.
///
/// - No IO
/// - No panics
/// - Total over its inputs; re-evaluated on every render, never cached
pub fn authorize(principal: Option<&Principal>, allowed: RoleSet) -> Access {
    let Some(principal) = principal else {
        return Access::RedirectToLogin;
    };

    if allowed.contains(principal.role) {
        Access::Render
    } else {
        tracing::debug!(
            role = %principal.role,
            allowed = %allowed,
            "wrong-role access, redirecting home"
        );
        Access::RedirectToHome
    }
}

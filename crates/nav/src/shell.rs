//! Navigation shell: composes the session store and the link registry into
//! the rendered header, and owns the sign-out action.

use eticket_core::config::HOME_PATH;
use eticket_core::AppConfig;
use eticket_session::{Session, SessionStorage, SessionStore};

use crate::registry::{self, NavLink};

/// Owner of the session lifecycle and the header's view of it.
///
/// The shell is the only component allowed to touch the session store; every
/// other consumer works from [`NavigationShell::session`] snapshots so the
/// "current user" concept has a single implementation.
#[derive(Debug)]
pub struct NavigationShell<S> {
    store: SessionStore<S>,
    config: AppConfig,
}

impl<S: SessionStorage> NavigationShell<S> {
    pub fn new(store: SessionStore<S>, config: AppConfig) -> Self {
        Self { store, config }
    }

    /// Run the one-time session load from persisted storage.
    pub async fn resolve_session(&mut self) -> &Session {
        self.store.load().await
    }

    /// Current session state.
    pub fn session(&self) -> &Session {
        self.store.get()
    }

    /// Mutable access for the login screen's `establish` write.
    pub fn store_mut(&mut self) -> &mut SessionStore<S> {
        &mut self.store
    }

    /// Links visible to the current visitor, in display order.
    pub fn links(&self) -> &'static [NavLink] {
        let role = self.session().principal.as_ref().map(|p| p.role);
        registry::links_for(role)
    }

    /// Where the logo click should land the current visitor.
    pub fn home_path(&self) -> &'static str {
        let role = self.session().principal.as_ref().map(|p| p.role);
        registry::home_path_for(role)
    }

    /// Absolute avatar URL for the current principal, if one is set.
    pub fn avatar_src(&self) -> Option<String> {
        let principal = self.session().principal.as_ref()?;
        let relative = principal.avatar_url.as_deref()?;
        Some(self.config.avatar_url(relative))
    }

    /// Initials fallback shown when no avatar image is available.
    ///
    /// Empty display name renders an empty badge, not an error.
    pub fn initials(&self) -> String {
        match self.session().principal.as_ref() {
            Some(principal) => initials_of(&principal.display_name),
            None => String::new(),
        }
    }

    /// Sign the visitor out and report where to navigate.
    ///
    /// The store is cleared before the navigation target is handed back, so
    /// the caller cannot commit the navigation ahead of the clear. Idempotent:
    /// signing out while signed out still navigates home.
    pub fn sign_out(&mut self) -> &'static str {
        if self.session().is_authenticated() {
            tracing::info!("signing out");
        }
        self.store.clear();
        HOME_PATH
    }
}

/// First letter of each whitespace-separated token, upper-cased.
pub fn initials_of(display_name: &str) -> String {
    display_name
        .split_whitespace()
        .filter_map(|token| token.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use eticket_auth::{Principal, Role};
    use eticket_core::UserId;
    use eticket_session::{MemoryStorage, TOKEN_KEY, USER_KEY};

    fn shell_with(principal: Option<&Principal>) -> NavigationShell<MemoryStorage> {
        let mut storage = MemoryStorage::new();
        if let Some(principal) = principal {
            storage.seed(TOKEN_KEY, "tok");
            storage.seed(USER_KEY, &serde_json::to_string(principal).unwrap());
        }
        NavigationShell::new(SessionStore::new(storage), AppConfig::default())
    }

    async fn loaded_shell(principal: Option<&Principal>) -> NavigationShell<MemoryStorage> {
        let mut shell = shell_with(principal);
        shell.resolve_session().await;
        shell
    }

    #[tokio::test]
    async fn anonymous_visitor_sees_public_links() {
        let shell = loaded_shell(None).await;
        assert_eq!(shell.links(), registry::links_for(None));
        assert_eq!(shell.home_path(), "/");
    }

    #[tokio::test]
    async fn authenticated_visitor_sees_role_links() {
        let admin = Principal::new(UserId::new(), "Ada Min", Role::Admin);
        let shell = loaded_shell(Some(&admin)).await;
        assert_eq!(shell.links(), registry::links_for(Some(Role::Admin)));
        assert_eq!(shell.home_path(), "/admin");
    }

    #[tokio::test]
    async fn avatar_src_resolves_against_asset_host() {
        let principal =
            Principal::new(UserId::new(), "Ava Tar", Role::User).with_avatar("avatars/ava.png");
        let shell = loaded_shell(Some(&principal)).await;
        assert_eq!(
            shell.avatar_src().as_deref(),
            Some("http://localhost:8000/storage/avatars/ava.png")
        );
    }

    #[tokio::test]
    async fn avatar_src_is_none_without_avatar_or_principal() {
        let plain = Principal::new(UserId::new(), "No Avatar", Role::User);
        assert_eq!(loaded_shell(Some(&plain)).await.avatar_src(), None);
        assert_eq!(loaded_shell(None).await.avatar_src(), None);
    }

    #[tokio::test]
    async fn initials_fall_back_from_display_name() {
        let principal = Principal::new(UserId::new(), "ada byron lovelace", Role::User);
        let shell = loaded_shell(Some(&principal)).await;
        assert_eq!(shell.initials(), "ABL");
    }

    #[tokio::test]
    async fn initials_of_handles_edge_shapes() {
        assert_eq!(initials_of(""), "");
        assert_eq!(initials_of("   "), "");
        assert_eq!(initials_of("Plato"), "P");
        assert_eq!(initials_of("  jean  claude  "), "JC");
        assert_eq!(initials_of("étienne durand"), "ÉD");
    }

    #[tokio::test]
    async fn sign_out_clears_and_navigates_home() {
        let admin = Principal::new(UserId::new(), "Ada Min", Role::Admin);
        let mut shell = loaded_shell(Some(&admin)).await;

        let target = shell.sign_out();
        assert_eq!(target, "/");
        assert_eq!(shell.session().principal, None);
        assert_eq!(shell.session().token, None);
        // Back to the anonymous link set on the very next render.
        assert_eq!(shell.links(), registry::links_for(None));
    }

    #[tokio::test]
    async fn sign_out_is_idempotent() {
        let admin = Principal::new(UserId::new(), "Ada Min", Role::Admin);
        let mut shell = loaded_shell(Some(&admin)).await;

        assert_eq!(shell.sign_out(), "/");
        let cleared = shell.session().clone();
        assert_eq!(shell.sign_out(), "/");
        assert_eq!(shell.session(), &cleared);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Initials are the upper-cased first letters of the tokens.
            #[test]
            fn initials_match_token_count(name in "([a-zA-Zéàü]{1,8} ){0,5}[a-zA-Zéàü]{0,8}") {
                let tokens = name.split_whitespace().count();
                let initials = initials_of(&name);
                prop_assert_eq!(initials.chars().count(), tokens);
                prop_assert!(initials.chars().all(|c| !c.is_lowercase()));
            }
        }
    }
}

//! Authentication provider seam
//!
//! The application ships without a wired identity provider. Call sites take
//! an `Arc<dyn AuthProvider>` so that a real integration (Auth0, OIDC) can
//! be slotted in later without touching them; until then the stub variant
//! reports every caller as unauthenticated.

use crate::user::{UserContext, UserRole};

/// Which provider implementation to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthProviderKind {
    /// No identity provider wired in; everyone is unauthenticated.
    #[default]
    Disabled,
}

impl AuthProviderKind {
    pub fn from_env_value(_value: &str) -> Self {
        // Only one variant exists today; unknown values fall back to it.
        AuthProviderKind::Disabled
    }
}

/// Identity source for UI call sites.
pub trait AuthProvider: Send + Sync {
    /// Full identity state for the current caller.
    fn user_context(&self) -> UserContext;

    fn roles(&self) -> Vec<UserRole> {
        self.user_context().roles
    }

    /// True when the caller holds at least one of the given roles.
    fn has_role(&self, roles: &[UserRole]) -> bool {
        let held = self.roles();
        roles.iter().any(|r| held.contains(r))
    }

    fn organization_id(&self) -> Option<String> {
        self.user_context().organization_id
    }

    fn is_authenticated(&self) -> bool {
        self.user_context().is_authenticated
    }
}

/// Default no-op provider: always unauthenticated, no roles, no org.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubAuthProvider;

impl AuthProvider for StubAuthProvider {
    fn user_context(&self) -> UserContext {
        UserContext::default()
    }
}

/// Construct the provider selected by configuration.
pub fn provider_for(kind: AuthProviderKind) -> std::sync::Arc<dyn AuthProvider> {
    match kind {
        AuthProviderKind::Disabled => std::sync::Arc::new(StubAuthProvider),
    }
}

//! User models

use serde::{Deserialize, Serialize};

/// Role assigned to a user within an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    OrgAdmin,
    Developer,
    Auditor,
}

/// Identity state exposed to UI call sites.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserContext {
    pub roles: Vec<UserRole>,
    pub organization_id: Option<String>,
    pub is_authenticated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&UserRole::OrgAdmin).unwrap(),
            "\"org_admin\""
        );
    }

    #[test]
    fn test_default_context_is_unauthenticated() {
        let ctx = UserContext::default();
        assert!(!ctx.is_authenticated);
        assert!(ctx.roles.is_empty());
        assert!(ctx.organization_id.is_none());
    }
}

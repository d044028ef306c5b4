use serde::{Deserialize, Serialize};

/// Subject of the authenticated session, as issued by the identity provider.
/// Every item belongs to exactly one `UserId`; queries never cross it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_subject_unchanged() {
        let user_id = UserId::new("warehouse-clerk-123");

        assert_eq!(user_id.as_str(), "warehouse-clerk-123");
        assert_eq!(user_id.to_string(), "warehouse-clerk-123");
    }

    #[test]
    fn should_compare_owners_by_subject() {
        let owner: UserId = "clerk-a".to_string().into();

        assert_eq!(owner, UserId::new("clerk-a"));
        assert_ne!(owner, UserId::new("clerk-b"));
    }
}

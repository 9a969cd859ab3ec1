//! Session collaborator — supplies the authenticated subject for the wizard.
//!
//! The wizard never reads ambient/global auth state. The presentation layer
//! injects a `SessionProvider`, and the controller consults it at
//! construction and again at submit time.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Identifier of the authenticated user the wizard runs on behalf of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectId(pub i64);

impl std::fmt::Display for SubjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SubjectId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Access to the active authentication session.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// The currently authenticated subject, if any.
    async fn current_subject(&self) -> Option<SubjectId>;

    /// Tear down the session. Called when the profile service reports the
    /// session as unauthenticated; the caller is expected to redirect to
    /// authentication afterwards.
    async fn invalidate(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_id_display_and_serde() {
        let id = SubjectId(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        let parsed: SubjectId = serde_json::from_str("42").unwrap();
        assert_eq!(parsed, id);
    }
}

//! Profile service collaborator — the remote store for completed profiles.
//!
//! Transport-agnostic: the wizard core only depends on this trait. An HTTP
//! implementation (with its own retry/backoff) lives with the application,
//! not here.

use async_trait::async_trait;

use crate::error::SaveError;
use crate::session::SubjectId;
use crate::wizard::model::CompositeProfile;

/// Remote profile store.
///
/// `fetch_existing` is consulted once, at wizard construction, to support
/// resume. `save` is called only by `submit()`, at most once per attempt.
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Fetch a previously saved composite profile for `subject`.
    ///
    /// `Ok(None)` means the subject has never completed onboarding — an
    /// expected outcome, not an error.
    async fn fetch_existing(
        &self,
        subject: SubjectId,
    ) -> Result<Option<CompositeProfile>, SaveError>;

    /// Persist the aggregated profile. The composite carries its owning
    /// subject by the time this is called.
    async fn save(&self, profile: &CompositeProfile) -> Result<(), SaveError>;
}

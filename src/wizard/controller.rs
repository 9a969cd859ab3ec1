//! WizardController — orchestrates step navigation, record aggregation, and
//! the submit/resume protocol.
//!
//! The controller owns the single `WizardState` for one onboarding session.
//! Step capabilities push full replacement records through `update_step`;
//! the controller applies the record and recomputes completeness, so there
//! are no subscription chains between the form layer and the state. All
//! failures are explicit return values; the presentation layer decides
//! messaging.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::error::{
    Result, SaveError, SessionError, SubmissionError, ValidationError, WizardError,
};
use crate::service::ProfileService;
use crate::session::{SessionProvider, SubjectId};

use super::model::{
    CareerGoals, CompositeProfile, Education, PersonalDetails, Skills, WorkExperience,
};
use super::state::{SubmissionStatus, WizardState, WizardStep};
use super::validate::{self, Limits};

/// A full-replacement update for one step's sub-record.
///
/// Capabilities emit these on every edit, not only on confirmation, so the
/// controller can gate "next" live.
#[derive(Debug, Clone)]
pub enum StepPatch {
    PersonalDetails(PersonalDetails),
    Education(Education),
    WorkExperience(WorkExperience),
    Skills(Skills),
    CareerGoals(CareerGoals),
}

impl StepPatch {
    /// The step this patch belongs to.
    pub fn step(&self) -> WizardStep {
        match self {
            Self::PersonalDetails(_) => WizardStep::PersonalDetails,
            Self::Education(_) => WizardStep::Education,
            Self::WorkExperience(_) => WizardStep::WorkExperience,
            Self::Skills(_) => WizardStep::Skills,
            Self::CareerGoals(_) => WizardStep::CareerGoals,
        }
    }
}

/// Returned by a successful `submit()`. The caller should mark the
/// subject's onboarding-completed flag and tear the wizard down.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub subject: SubjectId,
    pub completed_at: DateTime<Utc>,
}

/// Drives one onboarding session from first step to submission.
pub struct WizardController {
    service: Arc<dyn ProfileService>,
    session: Arc<dyn SessionProvider>,
    subject: SubjectId,
    limits: Limits,
    state: Arc<RwLock<WizardState>>,
}

impl std::fmt::Debug for WizardController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WizardController")
            .field("subject", &self.subject)
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}

impl WizardController {
    /// Start a wizard session: resolve the subject and prefill from any
    /// previously saved composite.
    ///
    /// Fails with [`SessionError::NotAuthenticated`] when no subject is
    /// present — no step is ever shown in that case. A missing saved
    /// composite is expected and seeds defaults silently; a fetch failure
    /// is logged and also falls back to defaults.
    pub async fn connect(
        service: Arc<dyn ProfileService>,
        session: Arc<dyn SessionProvider>,
    ) -> Result<Self> {
        let subject = session
            .current_subject()
            .await
            .ok_or(SessionError::NotAuthenticated)?;

        let composite = match service.fetch_existing(subject).await {
            Ok(Some(existing)) => {
                tracing::info!(%subject, "resuming onboarding from saved profile");
                existing
            }
            Ok(None) => CompositeProfile::default(),
            Err(e) => {
                tracing::warn!(%subject, error = %e, "failed to fetch saved profile, starting fresh");
                CompositeProfile::default()
            }
        };

        Ok(Self {
            service,
            session,
            subject,
            limits: Limits::default(),
            state: Arc::new(RwLock::new(WizardState::resumed_from(composite))),
        })
    }

    /// Override the default completeness bounds.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn subject(&self) -> SubjectId {
        self.subject
    }

    pub async fn current_step(&self) -> WizardStep {
        self.state.read().await.step
    }

    pub async fn submission_status(&self) -> SubmissionStatus {
        self.state.read().await.submission.clone()
    }

    /// Snapshot of the composite being assembled.
    pub async fn composite(&self) -> CompositeProfile {
        self.state.read().await.composite.clone()
    }

    pub async fn progress_percent(&self) -> f32 {
        self.state.read().await.progress_percent()
    }

    /// Whether the current step's record is complete enough to advance.
    pub async fn can_advance(&self) -> bool {
        let state = self.state.read().await;
        validate::step_complete(state.step, &state.composite, &self.limits)
    }

    /// Replace one step's sub-record with the capability's latest emission.
    ///
    /// Last write wins; writes are accepted for any step, not only the one
    /// currently shown. Returns whether that step is now complete.
    pub async fn update_step(&self, patch: StepPatch) -> bool {
        let step = patch.step();
        let mut state = self.state.write().await;
        match patch {
            StepPatch::PersonalDetails(record) => state.composite.personal_details = record,
            StepPatch::Education(record) => state.composite.education = record,
            StepPatch::WorkExperience(record) => state.composite.work_experience = record,
            StepPatch::Skills(record) => state.composite.skills = record,
            StepPatch::CareerGoals(record) => state.composite.career_goals = record,
        }
        let complete = validate::step_complete(step, &state.composite, &self.limits);
        tracing::debug!(%step, complete, "step record updated");
        complete
    }

    /// Move forward one step. Gated on the current step's completeness;
    /// a no-op at Review (the review screen's forward action is `submit`).
    pub async fn advance(&self) -> Result<WizardStep> {
        let mut state = self.state.write().await;
        let Some(next) = state.step.next() else {
            return Ok(state.step);
        };
        let missing = validate::step_missing(state.step, &state.composite, &self.limits);
        if !missing.is_empty() {
            return Err(ValidationError::StepIncomplete {
                step: state.step,
                missing,
            }
            .into());
        }
        state.step = next;
        tracing::debug!(step = %next, "advanced");
        Ok(next)
    }

    /// Move back one step. Never gated; a no-op at the first step.
    pub async fn retreat(&self) -> WizardStep {
        let mut state = self.state.write().await;
        if let Some(prev) = state.step.previous() {
            state.step = prev;
            tracing::debug!(step = %prev, "retreated");
        }
        state.step
    }

    /// From Review, jump back to an earlier step to edit it.
    pub async fn jump_to(&self, target: WizardStep) -> Result<WizardStep> {
        let mut state = self.state.write().await;
        if state.step != WizardStep::Review {
            return Err(ValidationError::NotAtReview {
                current: state.step,
            }
            .into());
        }
        if !target.is_data_step() {
            return Err(ValidationError::InvalidJump { target }.into());
        }
        state.step = target;
        Ok(target)
    }

    /// Submit the composite to the profile service, exactly once.
    ///
    /// Preconditions, all checked before any network call: no submission
    /// in flight, wizard at Review, subject still authenticated, every
    /// data step complete. On transport failure the composite is left
    /// untouched at Review so the user can retry with identical data.
    pub async fn submit(&self) -> Result<SubmitOutcome> {
        let payload = {
            let mut state = self.state.write().await;
            if state.submission.is_in_flight() {
                return Err(SubmissionError::AlreadyInFlight.into());
            }
            if state.step != WizardStep::Review {
                return Err(ValidationError::NotAtReview {
                    current: state.step,
                }
                .into());
            }
            let subject = self
                .session
                .current_subject()
                .await
                .ok_or(SessionError::NotAuthenticated)?;
            let incomplete = validate::incomplete_steps(&state.composite, &self.limits);
            if !incomplete.is_empty() {
                return Err(ValidationError::CompositeIncomplete { steps: incomplete }.into());
            }
            state.composite.subject = Some(subject);
            state.submission = SubmissionStatus::Submitting;
            state.composite.clone()
        };

        // Lock released: the in-flight guard above rejects a second submit
        // while this save is outstanding.
        let result = self.service.save(&payload).await;

        let mut state = self.state.write().await;
        match result {
            Ok(()) => {
                state.submission = SubmissionStatus::Succeeded;
                let completed_at = Utc::now();
                tracing::info!(subject = %self.subject, "onboarding submitted");
                Ok(SubmitOutcome {
                    subject: payload.subject.unwrap_or(self.subject),
                    completed_at,
                })
            }
            Err(SaveError::Unauthenticated) => {
                state.submission = SubmissionStatus::Failed(SaveError::Unauthenticated);
                drop(state);
                tracing::warn!(subject = %self.subject, "profile service rejected session");
                self.session.invalidate().await;
                Err(SessionError::Expired.into())
            }
            Err(e) => {
                state.submission = SubmissionStatus::Failed(e.clone());
                tracing::warn!(subject = %self.subject, error = %e, "profile submission failed");
                Err(WizardError::Submission(SubmissionError::Transport(e)))
            }
        }
    }
}

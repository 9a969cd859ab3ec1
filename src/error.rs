//! Error types for the onboarding wizard.

use crate::wizard::state::WizardStep;

/// Top-level error type for wizard operations.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),
}

/// Local completeness failures. These never reach the profile service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Step {step} is incomplete: missing {}", .missing.join(", "))]
    StepIncomplete {
        step: WizardStep,
        missing: Vec<String>,
    },

    #[error("Profile is not submit-ready: {} incomplete step(s)", .steps.len())]
    CompositeIncomplete { steps: Vec<WizardStep> },

    #[error("Operation requires the review step, but the wizard is at {current}")]
    NotAtReview { current: WizardStep },

    #[error("Cannot jump from review to {target}")]
    InvalidJump { target: WizardStep },
}

/// Session/authentication failures. Fatal to the current wizard instance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("No authenticated subject; redirect to authentication")]
    NotAuthenticated,

    #[error("Session expired; re-authentication required")]
    Expired,
}

/// Submission failures surfaced by `submit()`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("A submission is already in flight")]
    AlreadyInFlight,

    #[error("Profile service rejected the submission: {0}")]
    Transport(#[from] SaveError),
}

/// Failure taxonomy of the remote profile service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveError {
    #[error("Subject is not authenticated")]
    Unauthenticated,

    #[error("Server-side validation rejected the profile: {0}")]
    Validation(String),

    #[error("Network failure: {0}")]
    Network(String),

    #[error("Unknown service failure: {0}")]
    Unknown(String),
}

/// Result type alias for the wizard.
pub type Result<T> = std::result::Result<T, WizardError>;

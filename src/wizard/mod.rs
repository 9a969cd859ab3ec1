//! Onboarding wizard — sequential six-step profile collection.
//!
//! The wizard walks a user through personal details, education, work
//! experience, skills, and career goals, then a review step from which the
//! aggregated [`model::CompositeProfile`] is submitted to the profile
//! service exactly once. Rendering, routing, and transport stay outside;
//! the core here is the step state machine, the completeness validators,
//! and the submit/resume protocol.

pub mod controller;
pub mod model;
pub mod state;
pub mod validate;

pub use controller::{StepPatch, SubmitOutcome, WizardController};
pub use model::{
    CareerGoals, CompositeProfile, CurrentRole, Education, EducationLevel, ExperienceLevel,
    JobRole, JobRoleId, PersonalDetails, Skills, Timeframe, WorkExperience, WorkPreference,
    catalog,
};
pub use state::{SubmissionStatus, WizardState, WizardStep};
pub use validate::Limits;

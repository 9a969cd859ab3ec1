//! Wizard state machine — tracks which step the user is on and the
//! submission lifecycle.

use serde::{Deserialize, Serialize};

use crate::error::SaveError;

use super::model::CompositeProfile;

/// The six wizard steps.
///
/// Progresses linearly: PersonalDetails → Education → WorkExperience →
/// Skills → CareerGoals → Review. Successful submission from Review exits
/// the wizard; there is no numbered terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    PersonalDetails,
    Education,
    WorkExperience,
    Skills,
    CareerGoals,
    Review,
}

impl WizardStep {
    pub const COUNT: u8 = 6;

    /// 1-based position, matching the "Step N of 6" presentation.
    pub fn index(&self) -> u8 {
        match self {
            Self::PersonalDetails => 1,
            Self::Education => 2,
            Self::WorkExperience => 3,
            Self::Skills => 4,
            Self::CareerGoals => 5,
            Self::Review => 6,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::PersonalDetails),
            2 => Some(Self::Education),
            3 => Some(Self::WorkExperience),
            4 => Some(Self::Skills),
            5 => Some(Self::CareerGoals),
            6 => Some(Self::Review),
            _ => None,
        }
    }

    /// The next step in the linear progression, if any.
    pub fn next(&self) -> Option<WizardStep> {
        Self::from_index(self.index() + 1)
    }

    /// The previous step, if any.
    pub fn previous(&self) -> Option<WizardStep> {
        Self::from_index(self.index() - 1)
    }

    /// Whether this step carries a data record (everything except Review).
    pub fn is_data_step(&self) -> bool {
        !matches!(self, Self::Review)
    }

    /// All five data-bearing steps, in wizard order.
    pub fn data_steps() -> [WizardStep; 5] {
        [
            Self::PersonalDetails,
            Self::Education,
            Self::WorkExperience,
            Self::Skills,
            Self::CareerGoals,
        ]
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::PersonalDetails
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::PersonalDetails => "personal_details",
            Self::Education => "education",
            Self::WorkExperience => "work_experience",
            Self::Skills => "skills",
            Self::CareerGoals => "career_goals",
            Self::Review => "review",
        };
        write!(f, "{s}")
    }
}

/// Lifecycle of the single submission a wizard instance performs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    /// One save request is outstanding; further submits are rejected.
    Submitting,
    Succeeded,
    /// The last save attempt failed; the composite is intact and submit
    /// may be retried.
    Failed(SaveError),
}

impl SubmissionStatus {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// The whole mutable state of one onboarding session.
#[derive(Debug, Clone, Default)]
pub struct WizardState {
    /// Step currently shown to the user.
    pub step: WizardStep,
    /// Composite record assembled as steps complete.
    pub composite: CompositeProfile,
    pub submission: SubmissionStatus,
}

impl WizardState {
    /// Seed the state from a previously saved composite (resume). The user
    /// re-walks the wizard from step 1 with prefilled records.
    pub fn resumed_from(composite: CompositeProfile) -> Self {
        Self {
            step: WizardStep::PersonalDetails,
            composite,
            submission: SubmissionStatus::Idle,
        }
    }

    /// Completion percentage for the progress bar.
    pub fn progress_percent(&self) -> f32 {
        f32::from(self.step.index()) / f32::from(WizardStep::COUNT) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_walks_all_steps() {
        let expected = [
            WizardStep::Education,
            WizardStep::WorkExperience,
            WizardStep::Skills,
            WizardStep::CareerGoals,
            WizardStep::Review,
        ];
        let mut current = WizardStep::PersonalDetails;
        for expected_next in expected {
            let next = current.next().unwrap();
            assert_eq!(next, expected_next);
            current = next;
        }
        assert!(current.next().is_none());
    }

    #[test]
    fn previous_walks_back_to_first() {
        let mut current = WizardStep::Review;
        let mut hops = 0;
        while let Some(prev) = current.previous() {
            current = prev;
            hops += 1;
        }
        assert_eq!(current, WizardStep::PersonalDetails);
        assert_eq!(hops, 5);
    }

    #[test]
    fn index_roundtrip() {
        for index in 1..=6 {
            let step = WizardStep::from_index(index).unwrap();
            assert_eq!(step.index(), index);
        }
        assert!(WizardStep::from_index(0).is_none());
        assert!(WizardStep::from_index(7).is_none());
    }

    #[test]
    fn display_matches_serde() {
        for index in 1..=6 {
            let step = WizardStep::from_index(index).unwrap();
            let json = serde_json::to_string(&step).unwrap();
            assert_eq!(json, format!("\"{step}\""));
        }
    }

    #[test]
    fn review_is_not_a_data_step() {
        assert!(!WizardStep::Review.is_data_step());
        for step in WizardStep::data_steps() {
            assert!(step.is_data_step());
        }
    }

    #[test]
    fn default_state() {
        let state = WizardState::default();
        assert_eq!(state.step, WizardStep::PersonalDetails);
        assert_eq!(state.submission, SubmissionStatus::Idle);
        assert_eq!(state.composite, CompositeProfile::default());
    }

    #[test]
    fn progress_percent() {
        let mut state = WizardState::default();
        assert!((state.progress_percent() - 100.0 / 6.0).abs() < 0.01);
        state.step = WizardStep::Review;
        assert!((state.progress_percent() - 100.0).abs() < 0.01);
    }
}

//! Step records and the composite profile assembled across the wizard.
//!
//! Field names and enum tokens are pinned to the profile service's wire
//! shape; tests assert the exact spellings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::session::SubjectId;

/// The user's current role or job status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrentRole {
    Student,
    Employed,
    Unemployed,
    Freelancer,
    Entrepreneur,
    Retired,
    Other,
}

impl std::fmt::Display for CurrentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Student => "student",
            Self::Employed => "employed",
            Self::Unemployed => "unemployed",
            Self::Freelancer => "freelancer",
            Self::Entrepreneur => "entrepreneur",
            Self::Retired => "retired",
            Self::Other => "other",
        };
        write!(f, "{s}")
    }
}

/// Highest completed education level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EducationLevel {
    HighSchool,
    Associate,
    Bachelor,
    Master,
    Phd,
    Other,
}

impl std::fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::HighSchool => "high-school",
            Self::Associate => "associate",
            Self::Bachelor => "bachelor",
            Self::Master => "master",
            Self::Phd => "phd",
            Self::Other => "other",
        };
        write!(f, "{s}")
    }
}

/// Overall professional experience level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceLevel {
    NoExperience,
    EntryLevel,
    MidLevel,
    SeniorLevel,
    ExecutiveLevel,
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::NoExperience => "no-experience",
            Self::EntryLevel => "entry-level",
            Self::MidLevel => "mid-level",
            Self::SeniorLevel => "senior-level",
            Self::ExecutiveLevel => "executive-level",
        };
        write!(f, "{s}")
    }
}

/// Timeframe for achieving the selected career goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "0-6-months")]
    ZeroToSixMonths,
    #[serde(rename = "6-12-months")]
    SixToTwelveMonths,
    #[serde(rename = "1-2-years")]
    OneToTwoYears,
    #[serde(rename = "3-5-years")]
    ThreeToFiveYears,
    #[serde(rename = "5+-years")]
    FivePlusYears,
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::ZeroToSixMonths => "0-6-months",
            Self::SixToTwelveMonths => "6-12-months",
            Self::OneToTwoYears => "1-2-years",
            Self::ThreeToFiveYears => "3-5-years",
            Self::FivePlusYears => "5+-years",
        };
        write!(f, "{s}")
    }
}

/// Where the user prefers to work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkPreference {
    Remote,
    Hybrid,
    Onsite,
    Flexible,
}

impl std::fmt::Display for WorkPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Remote => "remote",
            Self::Hybrid => "hybrid",
            Self::Onsite => "onsite",
            Self::Flexible => "flexible",
        };
        write!(f, "{s}")
    }
}

/// Step 1 — basic personal details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDetails {
    /// Age in years. 0 means not yet entered.
    pub age: u32,
    pub location: String,
    pub current_role: Option<CurrentRole>,
}

/// Step 2 — education background.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub highest_education: Option<EducationLevel>,
    pub field_of_study: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<i32>,
    /// Unique, non-empty certification names. Order is not meaningful.
    pub certifications: Vec<String>,
}

impl Education {
    /// Add a certification. Blank and duplicate entries are rejected;
    /// returns whether the list changed.
    pub fn add_certification(&mut self, name: &str) -> bool {
        push_unique(&mut self.certifications, name)
    }

    /// Remove a certification by name; returns whether it was present.
    pub fn remove_certification(&mut self, name: &str) -> bool {
        let before = self.certifications.len();
        self.certifications.retain(|c| c != name);
        self.certifications.len() != before
    }
}

/// Stable identifier for one job role entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobRoleId(pub Uuid);

impl JobRoleId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for JobRoleId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for JobRoleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One past or present position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRole {
    /// Stable entry id. Removal is by id, never by position.
    #[serde(default)]
    pub id: JobRoleId,
    pub job_title: String,
    pub company_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub job_description: String,
}

/// Step 3 — work experience.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub experience_level: Option<ExperienceLevel>,
    pub job_roles: Vec<JobRole>,
}

impl WorkExperience {
    /// Append a role, assigning it a fresh stable id. Returns the id.
    pub fn add_role(&mut self, mut role: JobRole) -> JobRoleId {
        role.id = JobRoleId::new();
        let id = role.id;
        self.job_roles.push(role);
        id
    }

    /// Remove a role by id, preserving the order of the rest. Returns
    /// whether the id was present.
    pub fn remove_role(&mut self, id: JobRoleId) -> bool {
        let before = self.job_roles.len();
        self.job_roles.retain(|r| r.id != id);
        self.job_roles.len() != before
    }
}

/// Step 4 — skills inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skills {
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub skills_to_learn: Vec<String>,
}

impl Skills {
    pub fn add_technical_skill(&mut self, name: &str) -> bool {
        push_unique(&mut self.technical_skills, name)
    }

    pub fn add_soft_skill(&mut self, name: &str) -> bool {
        push_unique(&mut self.soft_skills, name)
    }

    pub fn add_skill_to_learn(&mut self, name: &str) -> bool {
        push_unique(&mut self.skills_to_learn, name)
    }

    /// Whether every list is empty.
    pub fn is_empty(&self) -> bool {
        self.technical_skills.is_empty()
            && self.soft_skills.is_empty()
            && self.skills_to_learn.is_empty()
    }
}

/// Step 5 — career goals and preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerGoals {
    /// Chosen from [`catalog::GOALS`].
    pub goals: Vec<String>,
    pub timeframe: Option<Timeframe>,
    /// Chosen from [`catalog::INDUSTRIES`].
    pub preferred_industries: Vec<String>,
    pub work_preference: Option<WorkPreference>,
}

impl CareerGoals {
    /// Toggle a goal selection; returns whether it is now selected.
    pub fn toggle_goal(&mut self, goal: &str) -> bool {
        toggle(&mut self.goals, goal)
    }

    /// Toggle an industry selection; returns whether it is now selected.
    pub fn toggle_industry(&mut self, industry: &str) -> bool {
        toggle(&mut self.preferred_industries, industry)
    }
}

/// The full aggregated profile assembled across all five data steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeProfile {
    /// Owning subject. Attached by the controller before submission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<SubjectId>,
    pub personal_details: PersonalDetails,
    pub education: Education,
    pub work_experience: WorkExperience,
    pub skills: Skills,
    pub career_goals: CareerGoals,
}

/// Fixed selection catalogs for the career-goals step.
pub mod catalog {
    /// Goals the user may select from.
    pub const GOALS: &[&str] = &[
        "Get promoted to senior position",
        "Switch to a new industry",
        "Learn new technologies",
        "Start my own business",
        "Increase salary",
        "Work for a Fortune 500 company",
        "Become a team leader",
        "Work remotely",
        "Get better work-life balance",
        "Expand professional network",
    ];

    /// Industries the user may select from.
    pub const INDUSTRIES: &[&str] = &[
        "Technology",
        "Finance",
        "Healthcare",
        "Education",
        "Retail",
        "Manufacturing",
        "Media & Entertainment",
        "Real Estate",
        "Transportation",
        "Energy",
        "Consulting",
        "Government",
        "Non-profit",
        "Agriculture",
        "Construction",
        "Telecommunications",
        "Hospitality",
        "Legal",
        "Marketing & Advertising",
        "Research & Development",
    ];
}

fn push_unique(list: &mut Vec<String>, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || list.iter().any(|v| v == value) {
        return false;
    }
    list.push(value.to_string());
    true
}

fn toggle(list: &mut Vec<String>, value: &str) -> bool {
    if let Some(pos) = list.iter().position(|v| v == value) {
        list.remove(pos);
        false
    } else {
        list.push(value.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_wire_tokens() {
        assert_eq!(
            serde_json::to_string(&EducationLevel::HighSchool).unwrap(),
            "\"high-school\""
        );
        assert_eq!(
            serde_json::to_string(&ExperienceLevel::EntryLevel).unwrap(),
            "\"entry-level\""
        );
        assert_eq!(
            serde_json::to_string(&Timeframe::ZeroToSixMonths).unwrap(),
            "\"0-6-months\""
        );
        assert_eq!(
            serde_json::to_string(&Timeframe::FivePlusYears).unwrap(),
            "\"5+-years\""
        );
        assert_eq!(
            serde_json::to_string(&CurrentRole::Employed).unwrap(),
            "\"employed\""
        );
        assert_eq!(
            serde_json::to_string(&WorkPreference::Onsite).unwrap(),
            "\"onsite\""
        );
    }

    #[test]
    fn display_matches_serde() {
        let timeframes = [
            Timeframe::ZeroToSixMonths,
            Timeframe::SixToTwelveMonths,
            Timeframe::OneToTwoYears,
            Timeframe::ThreeToFiveYears,
            Timeframe::FivePlusYears,
        ];
        for tf in timeframes {
            let json = serde_json::to_string(&tf).unwrap();
            assert_eq!(json, format!("\"{tf}\""));
        }
        let levels = [
            EducationLevel::HighSchool,
            EducationLevel::Associate,
            EducationLevel::Bachelor,
            EducationLevel::Master,
            EducationLevel::Phd,
            EducationLevel::Other,
        ];
        for level in levels {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{level}\""));
        }
    }

    #[test]
    fn composite_field_names_are_camel_case() {
        let composite = CompositeProfile {
            subject: Some(SubjectId(7)),
            personal_details: PersonalDetails {
                age: 30,
                location: "Berlin".to_string(),
                current_role: Some(CurrentRole::Employed),
            },
            ..Default::default()
        };
        let value = serde_json::to_value(&composite).unwrap();
        assert!(value.get("personalDetails").is_some());
        assert!(value.get("workExperience").is_some());
        assert!(value.get("careerGoals").is_some());
        assert_eq!(value["personalDetails"]["currentRole"], "employed");
        assert_eq!(value["subject"], 7);
    }

    #[test]
    fn default_composite_omits_subject() {
        let value = serde_json::to_value(CompositeProfile::default()).unwrap();
        assert!(value.get("subject").is_none());
    }

    #[test]
    fn certifications_behave_as_a_set() {
        let mut education = Education::default();
        assert!(education.add_certification("AWS SAA"));
        assert!(!education.add_certification("AWS SAA"));
        assert!(!education.add_certification("   "));
        assert!(education.add_certification("  CKA "));
        assert_eq!(education.certifications, vec!["AWS SAA", "CKA"]);
        assert!(education.remove_certification("AWS SAA"));
        assert!(!education.remove_certification("AWS SAA"));
        assert_eq!(education.certifications, vec!["CKA"]);
    }

    #[test]
    fn job_roles_are_removed_by_stable_id() {
        let mut experience = WorkExperience::default();
        let role = |title: &str| JobRole {
            id: JobRoleId::new(),
            job_title: title.to_string(),
            company_name: "Acme".to_string(),
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            job_description: "Things".to_string(),
        };
        let first = experience.add_role(role("Engineer"));
        let second = experience.add_role(role("Senior Engineer"));
        let third = experience.add_role(role("Lead"));
        assert_ne!(first, second);

        assert!(experience.remove_role(second));
        let titles: Vec<&str> = experience
            .job_roles
            .iter()
            .map(|r| r.job_title.as_str())
            .collect();
        assert_eq!(titles, vec!["Engineer", "Lead"]);

        // Stale id is a no-op
        assert!(!experience.remove_role(second));
        assert_eq!(experience.job_roles.len(), 2);
        assert!(experience.remove_role(third));
    }

    #[test]
    fn goal_toggle_selects_and_deselects() {
        let mut goals = CareerGoals::default();
        assert!(goals.toggle_goal("Increase salary"));
        assert!(goals.toggle_goal("Work remotely"));
        assert!(!goals.toggle_goal("Increase salary"));
        assert_eq!(goals.goals, vec!["Work remotely"]);

        assert!(goals.toggle_industry("Technology"));
        assert!(!goals.toggle_industry("Technology"));
        assert!(goals.preferred_industries.is_empty());
    }

    #[test]
    fn skills_is_empty() {
        let mut skills = Skills::default();
        assert!(skills.is_empty());
        skills.add_soft_skill("Communication");
        assert!(!skills.is_empty());
    }

    #[test]
    fn composite_serde_roundtrip() {
        let mut composite = CompositeProfile {
            subject: Some(SubjectId(12)),
            ..Default::default()
        };
        composite.skills.add_technical_skill("Rust");
        composite.work_experience.experience_level = Some(ExperienceLevel::MidLevel);
        composite.work_experience.add_role(JobRole {
            id: JobRoleId::new(),
            job_title: "Engineer".to_string(),
            company_name: "Acme".to_string(),
            start_date: NaiveDate::from_ymd_opt(2019, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2022, 6, 1).unwrap(),
            job_description: "Backend services".to_string(),
        });

        let json = serde_json::to_string(&composite).unwrap();
        let parsed: CompositeProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, composite);
    }

    #[test]
    fn catalogs_have_expected_sizes() {
        assert_eq!(catalog::GOALS.len(), 10);
        assert_eq!(catalog::INDUSTRIES.len(), 20);
    }
}

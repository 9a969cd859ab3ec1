//! Per-step completeness predicates.
//!
//! These gate the "next" action and are re-checked defensively at submit
//! time, before any network call. They are pure: no mutation, no IO. Field
//! syntax (date formats, input masks) belongs to the step capabilities, not
//! here — this module only answers "is this record complete enough to
//! advance".

use chrono::Datelike;

use super::model::{
    CareerGoals, CompositeProfile, Education, PersonalDetails, Skills, WorkExperience, catalog,
};
use super::state::WizardStep;

/// Tunable completeness bounds. Defaults mirror the intake form.
#[derive(Debug, Clone)]
pub struct Limits {
    pub min_age: u32,
    pub max_age: u32,
    /// Oldest accepted graduation year.
    pub graduation_year_floor: i32,
    /// Years past the current year a graduation may be planned.
    pub graduation_year_slack: i32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_age: 16,
            max_age: 100,
            graduation_year_floor: 1950,
            graduation_year_slack: 5,
        }
    }
}

/// Names of the requirements a record has not yet satisfied. Empty means
/// the step is complete.
pub fn personal_details_missing(record: &PersonalDetails, limits: &Limits) -> Vec<String> {
    let mut missing = Vec::new();
    if record.age < limits.min_age || record.age > limits.max_age {
        missing.push(format!("age ({}-{})", limits.min_age, limits.max_age));
    }
    if record.location.trim().is_empty() {
        missing.push("location".to_string());
    }
    if record.current_role.is_none() {
        missing.push("currentRole".to_string());
    }
    missing
}

pub fn education_missing(record: &Education, limits: &Limits) -> Vec<String> {
    let mut missing = Vec::new();
    if record.highest_education.is_none() {
        missing.push("highestEducation".to_string());
    }
    if record.field_of_study.trim().is_empty() {
        missing.push("fieldOfStudy".to_string());
    }
    if let Some(year) = record.graduation_year {
        let ceiling = chrono::Utc::now().year() + limits.graduation_year_slack;
        if year < limits.graduation_year_floor || year > ceiling {
            missing.push(format!(
                "graduationYear ({}-{ceiling})",
                limits.graduation_year_floor
            ));
        }
    }
    if !all_unique_non_empty(&record.certifications) {
        missing.push("unique non-empty certifications".to_string());
    }
    missing
}

pub fn work_experience_missing(record: &WorkExperience) -> Vec<String> {
    let mut missing = Vec::new();
    if record.experience_level.is_none() {
        missing.push("experienceLevel".to_string());
    }
    // Zero roles is fine; any role that exists must be fully filled in.
    for role in &record.job_roles {
        if role.job_title.trim().is_empty()
            || role.company_name.trim().is_empty()
            || role.job_description.trim().is_empty()
        {
            missing.push("complete job role entries".to_string());
            break;
        }
    }
    missing
}

pub fn skills_missing(record: &Skills) -> Vec<String> {
    let mut missing = Vec::new();
    let lists = [
        &record.technical_skills,
        &record.soft_skills,
        &record.skills_to_learn,
    ];
    if !lists.iter().all(|l| all_unique_non_empty(l)) {
        missing.push("unique non-empty skill entries".to_string());
    }
    if record.is_empty() {
        missing.push("at least one skill".to_string());
    }
    missing
}

pub fn career_goals_missing(record: &CareerGoals) -> Vec<String> {
    let mut missing = Vec::new();
    if record.goals.is_empty() {
        missing.push("goals".to_string());
    } else if !record.goals.iter().all(|g| catalog::GOALS.contains(&g.as_str())) {
        missing.push("goals from the catalog".to_string());
    }
    if record.timeframe.is_none() {
        missing.push("timeframe".to_string());
    }
    if record.preferred_industries.is_empty() {
        missing.push("preferredIndustries".to_string());
    } else if !record
        .preferred_industries
        .iter()
        .all(|i| catalog::INDUSTRIES.contains(&i.as_str()))
    {
        missing.push("industries from the catalog".to_string());
    }
    if record.work_preference.is_none() {
        missing.push("workPreference".to_string());
    }
    missing
}

/// Requirements the given step has not yet satisfied within `composite`.
/// Review is complete exactly when all five data steps are.
pub fn step_missing(step: WizardStep, composite: &CompositeProfile, limits: &Limits) -> Vec<String> {
    match step {
        WizardStep::PersonalDetails => {
            personal_details_missing(&composite.personal_details, limits)
        }
        WizardStep::Education => education_missing(&composite.education, limits),
        WizardStep::WorkExperience => work_experience_missing(&composite.work_experience),
        WizardStep::Skills => skills_missing(&composite.skills),
        WizardStep::CareerGoals => career_goals_missing(&composite.career_goals),
        WizardStep::Review => incomplete_steps(composite, limits)
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

/// Whether the given step's record is complete enough to advance past.
pub fn step_complete(step: WizardStep, composite: &CompositeProfile, limits: &Limits) -> bool {
    step_missing(step, composite, limits).is_empty()
}

/// Data steps that are not yet complete. Empty means the composite is
/// submit-ready.
pub fn incomplete_steps(composite: &CompositeProfile, limits: &Limits) -> Vec<WizardStep> {
    WizardStep::data_steps()
        .into_iter()
        .filter(|step| !step_missing(*step, composite, limits).is_empty())
        .collect()
}

fn all_unique_non_empty(list: &[String]) -> bool {
    list.iter().all(|v| !v.trim().is_empty())
        && list
            .iter()
            .enumerate()
            .all(|(i, v)| !list[..i].contains(v))
}

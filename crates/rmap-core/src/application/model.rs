//! Job application domain model.
//!
//! An [`Application`] is one job a user applied to. Its pipeline history is a
//! list of [`Stage`] events that is kept sorted by date after every mutation.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Stage vocabulary offered before the user has typed anything.
///
/// The first entry is the stage every new application is seeded with.
pub const PREDEFINED_STAGES: [&str; 13] = [
    "Applied",
    "Rejected",
    "Ghosted",
    "1st round",
    "2nd round",
    "3rd round",
    "4th round",
    "5th round",
    "6th round",
    "Withdrew",
    "Offer",
    "Accepted",
    "Declined",
];

/// Notes attached to the stage seeded at creation time.
pub const INITIAL_STAGE_NOTES: &str = "Initial application submission";

/// Returns the canonical first stage name.
pub fn initial_stage_name() -> &'static str {
    PREDEFINED_STAGES[0]
}

/// One point-in-time event in an application's lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    #[serde(default)]
    pub name: String,
    /// Calendar date, usually `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Stage {
    pub fn new(name: impl Into<String>, date: impl Into<String>, notes: Option<String>) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            notes,
        }
    }

    /// Parsed calendar value of `date`, or `None` when it cannot be read.
    ///
    /// Accepts plain dates (`2024-03-01`), RFC 3339 timestamps and naive
    /// `YYYY-MM-DDTHH:MM:SS` timestamps.
    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        parse_calendar_date(&self.date)
    }
}

/// A single job application record.
///
/// `id` is generated once and never changes. Fields other than `id` fall back
/// to empty values when missing from persisted data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    #[serde(default)]
    pub company_name: String,
    /// Acquisition source of the lead; see [`crate::application::Channel`].
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub application_date: String,
    #[serde(default)]
    pub stages: Vec<Stage>,
}

impl Application {
    /// Creates an application with no stages.
    pub fn new(
        id: impl Into<String>,
        company_name: impl Into<String>,
        channel: impl Into<String>,
        job_title: impl Into<String>,
        application_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            company_name: company_name.into(),
            channel: channel.into(),
            job_title: job_title.into(),
            application_date: application_date.into(),
            stages: Vec::new(),
        }
    }

    /// Appends a stage and restores date order.
    pub fn push_stage(&mut self, stage: Stage) {
        self.stages.push(stage);
        sort_stages(&mut self.stages);
    }

    /// Returns a date-ordered copy of the stages without touching `self`.
    pub fn sorted_stages(&self) -> Vec<Stage> {
        let mut stages = self.stages.clone();
        sort_stages(&mut stages);
        stages
    }

    /// The most recent stage, if any.
    pub fn latest_stage(&self) -> Option<&Stage> {
        self.stages.last()
    }
}

/// The persisted collection: every application, serialized as one unit.
pub type ApplicationData = Vec<Application>;

/// Sorts stages ascending by date.
///
/// The sort is stable, so stages sharing a date keep their insertion order.
/// Stages whose date cannot be parsed go after every dated stage.
pub fn sort_stages(stages: &mut [Stage]) {
    stages.sort_by_cached_key(|stage| {
        let parsed = stage.parsed_date();
        (parsed.is_none(), parsed)
    });
}

fn parse_calendar_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.naive_utc());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage(name: &str, date: &str) -> Stage {
        Stage::new(name, date, None)
    }

    #[test]
    fn test_initial_stage_is_applied() {
        assert_eq!(initial_stage_name(), "Applied");
    }

    #[test]
    fn test_push_stage_keeps_date_order() {
        let mut app = Application::new("a", "Acme", "LinkedIn", "Engineer", "2024-01-01");
        app.push_stage(stage("Offer", "2024-03-01"));
        app.push_stage(stage("Applied", "2024-01-01"));
        app.push_stage(stage("1st round", "2024-02-01"));

        let dates: Vec<&str> = app.stages.iter().map(|s| s.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-02-01", "2024-03-01"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_dates() {
        let mut stages = vec![
            stage("Interview", "2024-02-01"),
            stage("Applied", "2024-01-01"),
            stage("Interview", "2024-02-01"),
            stage("Take-home", "2024-02-01"),
        ];
        stages[0].notes = Some("first".to_string());
        sort_stages(&mut stages);

        let names: Vec<&str> = stages.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Applied", "Interview", "Interview", "Take-home"]);
        assert_eq!(stages[1].notes.as_deref(), Some("first"));
    }

    #[test]
    fn test_unparsable_dates_sort_last() {
        let mut stages = vec![
            stage("Mystery", "someday"),
            stage("Offer", "2024-05-01"),
            stage("Applied", "2024-01-01T09:30:00Z"),
        ];
        sort_stages(&mut stages);

        let names: Vec<&str> = stages.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Applied", "Offer", "Mystery"]);
    }

    #[test]
    fn test_sorted_stages_does_not_mutate() {
        let mut app = Application::new("a", "Acme", "", "Engineer", "2024-01-01");
        app.stages = vec![stage("Offer", "2024-03-01"), stage("Applied", "2024-01-01")];

        let sorted = app.sorted_stages();
        assert_eq!(sorted[0].name, "Applied");
        assert_eq!(app.stages[0].name, "Offer");
    }

    #[test]
    fn test_serializes_camel_case_and_omits_empty_notes() {
        let mut app = Application::new("id-1", "Acme", "Referral", "Engineer", "2024-01-01");
        app.stages.push(stage("Applied", "2024-01-01"));

        let json = serde_json::to_value(&app).unwrap();
        assert_eq!(json["companyName"], "Acme");
        assert_eq!(json["jobTitle"], "Engineer");
        assert_eq!(json["applicationDate"], "2024-01-01");
        assert!(json["stages"][0].get("notes").is_none());
    }

    #[test]
    fn test_missing_fields_deserialize_as_absent() {
        let app: Application = serde_json::from_str(r#"{"id":"x","companyName":"Acme"}"#).unwrap();
        assert_eq!(app.company_name, "Acme");
        assert!(app.channel.is_empty());
        assert!(app.stages.is_empty());
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let parsed = serde_json::from_str::<Application>(r#"{"companyName":"Acme"}"#);
        assert!(parsed.is_err());
    }
}

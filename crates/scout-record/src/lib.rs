//! Candidate and job records for scout.
//!
//! Records are owned by whatever system feeds scout (a dashboard, an export, a test
//! fixture). The ranking core only ever reads them. A [`Snapshot`] bundles the candidate
//! pool and the open jobs for a single invocation and can be loaded from JSON.

#![warn(missing_docs)]

mod error;
mod snapshot;

use serde::{Deserialize, Serialize};

pub use error::RecordError;
pub use snapshot::{CandidateSource, Snapshot};

/// A candidate profile as supplied by the dashboard.
///
/// Every tag is optional. An absent tag fails any active inclusion filter on that field
/// and never triggers an exclusion filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    /// Stable identifier, unique within a snapshot.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Current job title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Free-form location, e.g. "Austin, TX" or "Remote".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Current employer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Skills in display order.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Schools attended.
    #[serde(default)]
    pub schools: Vec<String>,
    /// Funding stage of the current employer, e.g. "Series B".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding_round: Option<String>,
    /// Industry of the current employer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// Likelihood to respond to outreach, e.g. "High".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likeliness_to_respond: Option<String>,
    /// Highest degree, e.g. "MS Computer Science".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    /// Headcount growth bucket of the current employer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_growth: Option<String>,
    /// Investors backing the current employer.
    #[serde(default)]
    pub investors: Vec<String>,
    /// Previous job titles.
    #[serde(default)]
    pub past_titles: Vec<String>,
    /// Tenure bucket at the current employer, e.g. "1-2 years".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_tenure: Option<String>,
    /// Total experience bucket, e.g. "5-10 years".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<String>,
    /// Graduation year, kept as text so it can be matched like any other tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<String>,
    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Profile links (LinkedIn, GitHub, portfolio).
    #[serde(default)]
    pub links: Vec<String>,
}

impl CandidateRecord {
    /// Creates a record with only an id and a name set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the current company.
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Replaces the skill list.
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    /// Title, or an empty string when absent.
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// Location, or an empty string when absent.
    pub fn location_text(&self) -> &str {
        self.location.as_deref().unwrap_or_default()
    }

    /// Text the keyword and semantic scorers read: name, title, location and skills.
    pub fn profile_text(&self) -> String {
        let mut parts = vec![
            self.name.as_str(),
            self.title_text(),
            self.location_text(),
        ];
        parts.extend(self.skills.iter().map(String::as_str));
        parts.join(" ")
    }
}

/// An open job posting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    /// Stable identifier, unique within a snapshot.
    pub id: String,
    /// Posting title, e.g. "Senior Product Manager".
    pub title: String,
    /// Location, or the literal "Remote".
    pub location: String,
    /// Hiring company.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Owning department.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl JobRecord {
    /// Creates a job with the given id, title and location.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            location: location.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_text_joins_scored_fields() {
        let c = CandidateRecord::new("c1", "Bo Ray")
            .with_title("Backend Engineer")
            .with_location("Austin")
            .with_company("Acme")
            .with_skills(["Go", "SQL"]);
        assert_eq!(c.profile_text(), "Bo Ray Backend Engineer Austin Go SQL");
    }

    #[test]
    fn profile_text_tolerates_missing_fields() {
        let c = CandidateRecord::new("c1", "Ann Lee");
        assert_eq!(c.profile_text(), "Ann Lee  ");
        assert_eq!(c.title_text(), "");
    }

    #[test]
    fn deserializes_camel_case_with_defaults() {
        let json = r#"{
            "id": "c7",
            "name": "Kim Park",
            "title": "Data Scientist",
            "likelinessToRespond": "High",
            "fundingRound": "Series A",
            "pastTitles": ["Analyst"]
        }"#;
        let c: CandidateRecord = serde_json::from_str(json).unwrap();
        assert_eq!(c.likeliness_to_respond.as_deref(), Some("High"));
        assert_eq!(c.funding_round.as_deref(), Some("Series A"));
        assert_eq!(c.past_titles, vec!["Analyst"]);
        assert!(c.industry.is_none());
        assert!(c.skills.is_empty());
    }

    #[test]
    fn job_defaults() {
        let job: JobRecord =
            serde_json::from_str(r#"{"id":"j1","title":"Lead Designer","location":"Remote"}"#)
                .unwrap();
        assert_eq!(job, JobRecord::new("j1", "Lead Designer", "Remote"));
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{CourtApplication, Hearing};

// ── Search index document ───────────────────────────────────────────

/// Whether a case document describes a prosecution case or a standalone
/// application indexed under its own id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaseType {
    Prosecution,
    Application,
}

/// The role a party summary plays on a case document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartyRole {
    Applicant,
    Respondent,
}

/// Denormalized application entry on a case document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationSummary {
    pub id: Uuid,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome_date: Option<NaiveDate>,
}

impl From<&CourtApplication> for ApplicationSummary {
    fn from(application: &CourtApplication) -> Self {
        Self {
            id: application.id,
            code: application.application_type.code.clone(),
            description: application.application_type.description.clone(),
            status: application.status.clone(),
            outcome_type: application.outcome.as_ref().map(|o| o.outcome_type.clone()),
            outcome_date: application.outcome.as_ref().and_then(|o| o.outcome_date),
        }
    }
}

/// Denormalized party entry on a case document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartySummary {
    pub name: String,
    pub role: PartyRole,
}

/// Denormalized hearing entry on a case document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HearingSummary {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hearing_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub court_centre: Option<String>,
}

impl From<&Hearing> for HearingSummary {
    fn from(hearing: &Hearing) -> Self {
        Self {
            id: hearing.id,
            hearing_type: Some(hearing.hearing_type.description.clone()),
            court_centre: Some(hearing.court_centre.name.clone()),
        }
    }
}

/// The denormalized aggregate assembled for a search index, keyed by case
/// id and built incrementally from application events. Never persisted by
/// the engine itself; callers merge it into the index store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseDocument {
    pub case_id: Uuid,
    pub case_type: CaseType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_status: Option<String>,
    #[serde(default)]
    pub applications: Vec<ApplicationSummary>,
    #[serde(default)]
    pub parties: Vec<PartySummary>,
    #[serde(default)]
    pub hearings: Vec<HearingSummary>,
}

impl CaseDocument {
    /// An empty document for a case id, before any merges.
    pub fn new(case_id: Uuid, case_type: CaseType) -> Self {
        Self {
            case_id,
            case_type,
            case_status: None,
            applications: Vec::new(),
            parties: Vec::new(),
            hearings: Vec::new(),
        }
    }
}

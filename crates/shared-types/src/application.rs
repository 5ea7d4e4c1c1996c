use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::PartyDetails;

// ── Application classification ──────────────────────────────────────

/// Classification of a court application's relationship to a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationLinkType {
    FirstHearing,
    Linked,
    Standalone,
}

/// The type of a court application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Application type code, e.g. "MC80528".
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub link_type: ApplicationLinkType,
    #[serde(default)]
    pub appeal_flag: bool,
}

// ── Respondents ─────────────────────────────────────────────────────

/// Who a court application is made against. A respondent resolves to a
/// defendant on the case, or to a person/organisation/prosecuting
/// authority that is not a case defendant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RespondentParty {
    Defendant { defendant_id: Uuid },
    Person(PersonName),
    Organisation { name: String },
    ProsecutingAuthority {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        code: Option<String>,
    },
}

/// Name parts of a person respondent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

// ── Outcome and court order ─────────────────────────────────────────

/// The decision recorded on a court application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationOutcome {
    pub outcome_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome_date: Option<NaiveDate>,
}

/// An offence attached to a court order. Carries the id of the
/// prosecution case the offence was charged under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourtOrderOffence {
    pub id: Uuid,
    pub prosecution_case_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A court order an application was made in respect of.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourtOrder {
    pub id: Uuid,
    #[serde(default)]
    pub offences: Vec<CourtOrderOffence>,
}

/// A prosecution case a court application is linked to, with the case
/// status the link itself carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedCase {
    pub prosecution_case_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_status: Option<String>,
}

// ── Application fragment ────────────────────────────────────────────

/// A court application fragment, one persisted JSON document per
/// application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourtApplication {
    pub id: Uuid,
    pub application_type: ApplicationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicant: Option<PartyDetails>,
    #[serde(default)]
    pub respondents: Vec<RespondentParty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<ApplicationOutcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub court_order: Option<CourtOrder>,
    #[serde(default)]
    pub case_links: Vec<LinkedCase>,
}

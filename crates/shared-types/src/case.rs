use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── Validation constants ────────────────────────────────────────────

/// Legal aid status values carried on defendant fragments.
pub const LEGAL_AID_STATUSES: &[&str] = &["PENDING", "GRANTED", "REFUSED", "WITHDRAWN"];

/// Check whether a legal aid status string is a known value.
pub fn is_valid_legal_aid_status(s: &str) -> bool {
    LEGAL_AID_STATUSES.contains(&s)
}

// ── Case fragment ───────────────────────────────────────────────────

/// The reference under which a prosecuting authority knows a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseIdentifier {
    /// Unique reference number, e.g. "25GD1234567".
    pub urn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prosecuting_authority_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prosecuting_authority_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prosecuting_authority_reference: Option<String>,
}

/// A prosecution case fragment, one persisted JSON document per case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProsecutionCase {
    pub id: Uuid,
    pub case_identifier: CaseIdentifier,
    #[serde(default)]
    pub defendants: Vec<Defendant>,
}

// ── Parties ─────────────────────────────────────────────────────────

/// The party behind a defendant or applicant: a person, an organisation,
/// or a prosecuting authority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PartyDetails {
    Person {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        first_name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        middle_name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        last_name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        date_of_birth: Option<NaiveDate>,
    },
    Organisation {
        name: String,
    },
    ProsecutingAuthority {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        code: Option<String>,
    },
}

impl PartyDetails {
    /// Date of birth for person parties, None otherwise.
    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        match self {
            PartyDetails::Person { date_of_birth, .. } => *date_of_birth,
            _ => None,
        }
    }
}

/// A defendant on a prosecution case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defendant {
    pub id: Uuid,
    /// Set when this defendant record is one of several for the same person.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_defendant_id: Option<Uuid>,
    pub party: PartyDetails,
    #[serde(default)]
    pub offences: Vec<Offence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_aid_status: Option<String>,
    /// Judicial results recorded against the defendant at case level.
    #[serde(default)]
    pub judicial_results: Vec<JudicialResult>,
}

// ── Offences ────────────────────────────────────────────────────────

/// Legal Aid Agency reference attached to an offence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaaReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_reference: Option<String>,
}

/// A single offence charged against a defendant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offence {
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_welsh: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legislation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legislation_welsh: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wording: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wording_welsh: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Count number on the indictment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conviction_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub laa_reference: Option<LaaReference>,
}

// ── Judicial results ────────────────────────────────────────────────

/// A judicial result recorded against a case, defendant or hearing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudicialResult {
    pub id: Uuid,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordered_date: Option<NaiveDate>,
    /// Set when the result was amended after being shared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amendment_date: Option<NaiveDate>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::JudicialResult;

// ── Listing lifecycle ───────────────────────────────────────────────

/// Lifecycle state of a hearing, controlling its visibility in aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingStatus {
    Initialised,
    SentForListing,
    Listed,
    Resulted,
    Adjourned,
    Vacated,
}

/// Which jurisdiction a hearing sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JurisdictionType {
    Magistrates,
    Crown,
}

// ── Hearing fragment ────────────────────────────────────────────────

/// The type of a hearing (first hearing, trial, sentence, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HearingType {
    pub id: Uuid,
    pub description: String,
}

/// The court centre and room a hearing is listed at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourtCentre {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<Uuid>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub welsh_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub welsh_room_name: Option<String>,
}

/// One sitting day of a hearing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HearingDay {
    pub sitting_day: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listed_duration_minutes: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listing_sequence: Option<i32>,
}

/// Whether and how a defendant attended a hearing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefendantAttendance {
    pub defendant_id: Uuid,
    /// AttendanceType stored as text (e.g. "IN_PERSON", "BY_VIDEO", "ABSENT").
    pub attendance_type: String,
}

/// A counsel appearing at a hearing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counsel {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Judicial results recorded against one defendant at a hearing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefendantJudicialResults {
    pub defendant_id: Uuid,
    #[serde(default)]
    pub judicial_results: Vec<JudicialResult>,
}

/// A hearing fragment, one persisted JSON document per hearing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hearing {
    pub id: Uuid,
    pub hearing_type: HearingType,
    pub court_centre: CourtCentre,
    pub jurisdiction_type: JurisdictionType,
    #[serde(default)]
    pub hearing_days: Vec<HearingDay>,
    pub listing_status: ListingStatus,
    /// When the hearing's results were shared/published. Null until shared;
    /// primary sort key for display ordering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub prosecution_case_ids: Vec<Uuid>,
    #[serde(default)]
    pub court_application_ids: Vec<Uuid>,
    #[serde(default)]
    pub defendant_attendance: Vec<DefendantAttendance>,
    #[serde(default)]
    pub prosecution_counsels: Vec<Counsel>,
    #[serde(default)]
    pub defence_counsels: Vec<Counsel>,
    #[serde(default)]
    pub applicant_counsels: Vec<Counsel>,
    #[serde(default)]
    pub respondent_counsels: Vec<Counsel>,
    /// True when the hearing exists only for a court application, distinct
    /// from the hearings of the underlying case.
    #[serde(default)]
    pub is_box_hearing: bool,
    #[serde(default)]
    pub defendant_judicial_results: Vec<DefendantJudicialResults>,
}

impl Hearing {
    /// The earliest sitting day across this hearing's hearing days.
    pub fn earliest_sitting_day(&self) -> Option<DateTime<Utc>> {
        self.hearing_days.iter().map(|d| d.sitting_day).min()
    }
}

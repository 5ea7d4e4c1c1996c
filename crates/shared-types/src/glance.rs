use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    ApplicationSummary, CaseIdentifier, CourtCentre, HearingDay, HearingType, JurisdictionType,
    ListingStatus,
};

// ── Hearings-at-a-glance view ───────────────────────────────────────

/// The hearings one defendant appears at, in first-seen order with no
/// duplicate hearing ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefendantHearingSummary {
    pub defendant_id: Uuid,
    pub defendant_name: String,
    pub hearing_ids: Vec<Uuid>,
}

/// A defendant (or application respondent shown alongside the
/// defendants) as displayed on one hearing. Respondents that are not
/// case defendants carry no defendant id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HearingDefendantView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defendant_id: Option<Uuid>,
    pub name: String,
    /// Age at the earliest sitting day, empty when unknown.
    #[serde(default)]
    pub age: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_aid_status: Option<String>,
    #[serde(default)]
    pub applications: Vec<ApplicationSummary>,
}

/// One hearing on the at-a-glance view, with its resolved defendant list
/// and derived fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HearingView {
    pub id: Uuid,
    pub hearing_type: HearingType,
    pub court_centre: CourtCentre,
    pub jurisdiction_type: JurisdictionType,
    #[serde(default)]
    pub hearing_days: Vec<HearingDay>,
    pub listing_status: ListingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_box_hearing: bool,
    /// True when any judicial result on the hearing or its defendants
    /// carries an amendment date.
    #[serde(default)]
    pub has_result_amended: bool,
    #[serde(default)]
    pub defendants: Vec<HearingDefendantView>,
}

/// The denormalized "case/hearing at a glance" aggregate for one case.
/// Computed freshly on every request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HearingsAtAGlance {
    pub case_id: Uuid,
    pub case_identifier: CaseIdentifier,
    pub defendant_hearings: Vec<DefendantHearingSummary>,
    pub hearings: Vec<HearingView>,
    /// Jurisdiction of the first hearing after sorting, absent when the
    /// case has no visible hearings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_hearing_jurisdiction_type: Option<JurisdictionType>,
}

//! Case-document projector — the event/index-side pipeline.
//!
//! A stateless fold of one court application into a caller-provided
//! accumulator of per-case search-index documents. The caller invokes it
//! once per relevant event and merges the accumulator into the index
//! store. Malformed application shapes are logged and skipped; event
//! processing stays resilient to legacy-shaped payloads.

use std::collections::BTreeMap;

use shared_types::{
    ApplicationLinkType, ApplicationSummary, CaseDocument, CaseType, CourtApplication,
    HearingSummary, PartyRole, PartySummary, RespondentParty,
};
use uuid::Uuid;

use crate::derive::{display_name, respondent_display_name};
use crate::merge::union_append;

/// Structural classification of a court application, evaluated once per
/// application before any merge logic runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationShape {
    /// Linked to cases but flagged FIRST_HEARING: indexed standalone
    /// under its own id, not under the linked cases.
    FirstHearingStandalone,
    /// Linked to one or more prosecution cases.
    LinkedCases,
    /// Made in respect of a court order whose offences carry the case ids.
    CourtOrder,
    /// No linked cases and no court order: indexed under its own id.
    Standalone,
}

impl ApplicationShape {
    /// Classify an application, or None when it matches no recognized
    /// shape (a Linked-typed application with neither case links nor a
    /// court order).
    pub fn classify(application: &CourtApplication) -> Option<Self> {
        let link_type = application.application_type.link_type;
        if !application.case_links.is_empty() {
            if link_type == ApplicationLinkType::FirstHearing {
                return Some(ApplicationShape::FirstHearingStandalone);
            }
            return Some(ApplicationShape::LinkedCases);
        }
        if application.court_order.is_some() {
            return Some(ApplicationShape::CourtOrder);
        }
        if link_type == ApplicationLinkType::Linked {
            return None;
        }
        Some(ApplicationShape::Standalone)
    }
}

/// Projects court applications into per-case [`CaseDocument`]s.
///
/// The default case status is the injected strategy distinguishing, for
/// example, an active-application projector from a concluded-application
/// projector. The linked-cases path ignores it and uses the status each
/// link carries.
pub struct CaseDocumentProjector {
    default_status: String,
}

impl CaseDocumentProjector {
    pub fn new(default_status: impl Into<String>) -> Self {
        Self {
            default_status: default_status.into(),
        }
    }

    /// Fold one application (plus any hearings supplied with the event)
    /// into the accumulator. The accumulator is left unchanged when the
    /// application matches no recognized shape.
    pub fn project(
        &self,
        acc: &mut BTreeMap<Uuid, CaseDocument>,
        application: &CourtApplication,
        hearings: &[HearingSummary],
    ) {
        let summary = ApplicationSummary::from(application);

        match ApplicationShape::classify(application) {
            Some(ApplicationShape::LinkedCases) => {
                for link in &application.case_links {
                    let doc = entry(acc, link.prosecution_case_id, CaseType::Prosecution);
                    merge_applications(doc, &summary);
                    doc.case_status = link.case_status.clone();
                }
            }
            Some(ApplicationShape::CourtOrder) => {
                let parties = resolve_parties(application);
                let offences = application
                    .court_order
                    .as_ref()
                    .map(|order| order.offences.as_slice())
                    .unwrap_or_default();
                for offence in offences {
                    let doc = entry(acc, offence.prosecution_case_id, CaseType::Prosecution);
                    merge_applications(doc, &summary);
                    merge_parties(doc, &parties);
                    merge_hearings(doc, hearings);
                    doc.case_status = Some(self.default_status.clone());
                }
            }
            Some(ApplicationShape::FirstHearingStandalone) | Some(ApplicationShape::Standalone) => {
                let parties = resolve_parties(application);
                let doc = entry(acc, application.id, CaseType::Application);
                merge_applications(doc, &summary);
                merge_parties(doc, &parties);
                merge_hearings(doc, hearings);
                doc.case_status = Some(self.default_status.clone());
            }
            None => {
                tracing::error!(
                    application_id = %application.id,
                    code = %application.application_type.code,
                    "court application matches no recognized shape; skipping event"
                );
            }
        }
    }

    /// Convenience wrapper folding into a fresh accumulator.
    pub fn project_new(
        &self,
        application: &CourtApplication,
        hearings: &[HearingSummary],
    ) -> BTreeMap<Uuid, CaseDocument> {
        let mut acc = BTreeMap::new();
        self.project(&mut acc, application, hearings);
        acc
    }
}

fn entry(
    acc: &mut BTreeMap<Uuid, CaseDocument>,
    case_id: Uuid,
    case_type: CaseType,
) -> &mut CaseDocument {
    acc.entry(case_id)
        .or_insert_with(|| CaseDocument::new(case_id, case_type))
}

fn merge_applications(doc: &mut CaseDocument, summary: &ApplicationSummary) {
    let existing = std::mem::take(&mut doc.applications);
    doc.applications = union_append(existing, vec![summary.clone()]);
}

fn merge_parties(doc: &mut CaseDocument, parties: &[PartySummary]) {
    let existing = std::mem::take(&mut doc.parties);
    doc.parties = union_append(existing, parties.to_vec());
}

fn merge_hearings(doc: &mut CaseDocument, hearings: &[HearingSummary]) {
    let existing = std::mem::take(&mut doc.hearings);
    doc.hearings = union_append(existing, hearings.to_vec());
}

/// Applicant and respondent summaries with resolvable display names.
/// Defendant respondents carry only an id and are resolved against the
/// case fragment by the query side, not here.
fn resolve_parties(application: &CourtApplication) -> Vec<PartySummary> {
    let mut parties = Vec::new();
    if let Some(applicant) = &application.applicant {
        let name = display_name(applicant);
        if !name.is_empty() {
            parties.push(PartySummary {
                name,
                role: PartyRole::Applicant,
            });
        }
    }
    for respondent in &application.respondents {
        if matches!(respondent, RespondentParty::Defendant { .. }) {
            continue;
        }
        let name = respondent_display_name(respondent);
        if !name.is_empty() {
            parties.push(PartySummary {
                name,
                role: PartyRole::Respondent,
            });
        }
    }
    parties
}

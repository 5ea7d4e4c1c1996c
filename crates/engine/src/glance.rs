//! Hearing aggregation builder — the query-side pipeline.
//!
//! Stateless per-call engine that:
//! 1. Fetches and decodes the prosecution case fragment (NotFound when absent)
//! 2. Fetches the case's link rows and decodes each referenced hearing exactly once
//! 3. Drops hearings still SENT_FOR_LISTING
//! 4. Merges linked court applications into shared hearings, or appends
//!    box-hearing views for hearings the case does not own
//! 5. Derives ages, amendment flags and display names
//! 6. Groups surviving hearings per defendant
//! 7. Sorts shared hearings first, most recent shared time leading
//! 8. Takes the leading hearing's jurisdiction

use std::collections::HashMap;

use shared_types::{
    AppError, ApplicationSummary, CaseDefendantHearingLink, CourtApplication,
    DefendantHearingSummary, Hearing, HearingDefendantView, HearingView, HearingsAtAGlance,
    ListingStatus, ProsecutionCase, RespondentParty,
};
use uuid::Uuid;

use crate::decode::decode_fragment;
use crate::derive::{
    age_at, display_name, has_amended_result, legal_aid_status, respondent_display_name,
};
use crate::merge::union_append;
use crate::store::FragmentStore;

/// Builds the "hearing/case at a glance" view for one case id.
pub struct HearingsAtAGlanceBuilder<'a, S: FragmentStore> {
    store: &'a S,
}

impl<'a, S: FragmentStore> HearingsAtAGlanceBuilder<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Assemble the aggregate for `case_id`.
    ///
    /// NotFound when the case fragment is absent, or when a link row
    /// references a hearing/application fragment that does not exist.
    /// Decode errors are surfaced, never skipped.
    pub fn build(&self, case_id: Uuid) -> Result<HearingsAtAGlance, AppError> {
        let case = self.fetch_case(case_id)?;
        let links = self.store.case_defendant_hearing_links(case_id)?;

        // Decode each referenced hearing exactly once, in discovery order.
        let mut hearings: HashMap<Uuid, Hearing> = HashMap::new();
        let mut discovery_order: Vec<Uuid> = Vec::new();
        for link in &links {
            if !hearings.contains_key(&link.hearing_id) {
                let hearing = self.fetch_hearing(link.hearing_id)?;
                hearings.insert(link.hearing_id, hearing);
                discovery_order.push(link.hearing_id);
            }
        }

        let mut views: Vec<HearingView> = discovery_order
            .iter()
            .map(|id| &hearings[id])
            .filter(|hearing| is_visible(hearing))
            .map(|hearing| base_view(hearing, &case, &links))
            .collect();

        self.merge_applications(case_id, &case, &mut views, &mut hearings)?;

        for view in &mut views {
            if let Some(hearing) = hearings.get(&view.id) {
                derive_view_fields(view, &case, hearing);
            }
        }

        let defendant_hearings = defendant_summaries(&case, &links, &hearings);
        let views = sort_hearings(views);
        let latest_hearing_jurisdiction_type = views.first().map(|v| v.jurisdiction_type);

        tracing::debug!(
            %case_id,
            hearings = views.len(),
            defendants = defendant_hearings.len(),
            "assembled hearings at a glance"
        );

        Ok(HearingsAtAGlance {
            case_id,
            case_identifier: case.case_identifier.clone(),
            defendant_hearings,
            hearings: views,
            latest_hearing_jurisdiction_type,
        })
    }

    /// Merge court applications linked to the case into the hearing views.
    ///
    /// An application sharing a hearing already in the case's hearing set
    /// merges into that view; otherwise its hearing is a box hearing and
    /// gets a view of its own, appended after the case hearings.
    fn merge_applications(
        &self,
        case_id: Uuid,
        case: &ProsecutionCase,
        views: &mut Vec<HearingView>,
        hearings: &mut HashMap<Uuid, Hearing>,
    ) -> Result<(), AppError> {
        for application_id in self.store.case_application_links(case_id)? {
            let application = self.fetch_application(application_id)?;
            let summary = ApplicationSummary::from(&application);

            for hearing_id in self.store.hearing_application_links(application_id)? {
                if let Some(view) = views.iter_mut().find(|v| v.id == hearing_id) {
                    merge_application_into_view(view, case, &application, &summary);
                    continue;
                }

                if !hearings.contains_key(&hearing_id) {
                    let hearing = self.fetch_hearing(hearing_id)?;
                    hearings.insert(hearing_id, hearing);
                }
                let hearing = &hearings[&hearing_id];
                if !is_visible(hearing) {
                    continue;
                }

                let mut view = base_view(hearing, case, &[]);
                view.is_box_hearing = true;
                merge_application_into_view(&mut view, case, &application, &summary);
                views.push(view);
            }
        }
        Ok(())
    }

    fn fetch_case(&self, case_id: Uuid) -> Result<ProsecutionCase, AppError> {
        let raw = self
            .store
            .case_fragment(case_id)?
            .ok_or_else(|| AppError::not_found(format!("Prosecution case {case_id} not found")))?;
        decode_fragment(&raw)
    }

    fn fetch_hearing(&self, hearing_id: Uuid) -> Result<Hearing, AppError> {
        let raw = self
            .store
            .hearing_fragment(hearing_id)?
            .ok_or_else(|| AppError::not_found(format!("Hearing {hearing_id} not found")))?;
        decode_fragment(&raw)
    }

    fn fetch_application(&self, application_id: Uuid) -> Result<CourtApplication, AppError> {
        let raw = self.store.application_fragment(application_id)?.ok_or_else(|| {
            AppError::not_found(format!("Court application {application_id} not found"))
        })?;
        decode_fragment(&raw)
    }
}

/// SENT_FOR_LISTING hearings are invisible to aggregates, applied
/// uniformly to case hearings, box hearings and defendant summaries.
fn is_visible(hearing: &Hearing) -> bool {
    hearing.listing_status != ListingStatus::SentForListing
}

/// Initial view of a hearing: its own fields plus the case defendants
/// linked to it, in case-fragment order. Derived fields filled later.
fn base_view(
    hearing: &Hearing,
    case: &ProsecutionCase,
    links: &[CaseDefendantHearingLink],
) -> HearingView {
    let defendants = case
        .defendants
        .iter()
        .filter(|d| {
            links
                .iter()
                .any(|l| l.defendant_id == d.id && l.hearing_id == hearing.id)
        })
        .map(|d| HearingDefendantView {
            defendant_id: Some(d.id),
            name: display_name(&d.party),
            age: String::new(),
            legal_aid_status: legal_aid_status(d),
            applications: Vec::new(),
        })
        .collect();

    HearingView {
        id: hearing.id,
        hearing_type: hearing.hearing_type.clone(),
        court_centre: hearing.court_centre.clone(),
        jurisdiction_type: hearing.jurisdiction_type,
        hearing_days: hearing.hearing_days.clone(),
        listing_status: hearing.listing_status,
        shared_time: hearing.shared_time,
        is_box_hearing: hearing.is_box_hearing,
        has_result_amended: false,
        defendants,
    }
}

/// Attach an application to the hearing's per-defendant lists.
///
/// Defendant respondents merge into their existing entry (or gain one).
/// Other respondents become synthetic entries after the case defendants,
/// in encounter order, deduplicated by resolved display name.
fn merge_application_into_view(
    view: &mut HearingView,
    case: &ProsecutionCase,
    application: &CourtApplication,
    summary: &ApplicationSummary,
) {
    for respondent in &application.respondents {
        match respondent {
            RespondentParty::Defendant { defendant_id } => {
                if let Some(entry) = view
                    .defendants
                    .iter_mut()
                    .find(|d| d.defendant_id == Some(*defendant_id))
                {
                    attach_application(entry, summary);
                    continue;
                }
                let (name, legal_aid_status) = case
                    .defendants
                    .iter()
                    .find(|d| d.id == *defendant_id)
                    .map(|d| (display_name(&d.party), legal_aid_status(d)))
                    .unwrap_or_default();
                view.defendants.push(HearingDefendantView {
                    defendant_id: Some(*defendant_id),
                    name,
                    age: String::new(),
                    legal_aid_status,
                    applications: vec![summary.clone()],
                });
            }
            other => {
                let name = respondent_display_name(other);
                if let Some(entry) = view
                    .defendants
                    .iter_mut()
                    .find(|d| d.defendant_id.is_none() && d.name == name)
                {
                    attach_application(entry, summary);
                    continue;
                }
                view.defendants.push(HearingDefendantView {
                    defendant_id: None,
                    name,
                    age: String::new(),
                    legal_aid_status: None,
                    applications: vec![summary.clone()],
                });
            }
        }
    }
}

fn attach_application(entry: &mut HearingDefendantView, summary: &ApplicationSummary) {
    let existing = std::mem::take(&mut entry.applications);
    entry.applications = union_append(existing, vec![summary.clone()]);
}

/// Fill per-defendant ages and the hearing's result-amended flag.
fn derive_view_fields(view: &mut HearingView, case: &ProsecutionCase, hearing: &Hearing) {
    let earliest = hearing.earliest_sitting_day().map(|t| t.date_naive());

    for entry in &mut view.defendants {
        let defendant = entry
            .defendant_id
            .and_then(|id| case.defendants.iter().find(|d| d.id == id));
        if let Some(defendant) = defendant {
            entry.age = age_at(defendant.party.date_of_birth(), earliest)
                .map(|a| a.to_string())
                .unwrap_or_default();
        }
    }

    let hearing_results = hearing
        .defendant_judicial_results
        .iter()
        .flat_map(|r| &r.judicial_results);
    let case_results = view
        .defendants
        .iter()
        .filter_map(|e| e.defendant_id)
        .filter_map(|id| case.defendants.iter().find(|d| d.id == id))
        .flat_map(|d| &d.judicial_results);
    view.has_result_amended = has_amended_result(hearing_results.chain(case_results));
}

/// One summary per case defendant, over surviving hearings only, with
/// ordered unique hearing ids in link-row encounter order. Link rows are
/// the sole grouping source: a defendant placed on a hearing view purely
/// as an application respondent does not pick the hearing up here.
fn defendant_summaries(
    case: &ProsecutionCase,
    links: &[CaseDefendantHearingLink],
    hearings: &HashMap<Uuid, Hearing>,
) -> Vec<DefendantHearingSummary> {
    case.defendants
        .iter()
        .map(|defendant| {
            let mut hearing_ids: Vec<Uuid> = Vec::new();
            for link in links.iter().filter(|l| l.defendant_id == defendant.id) {
                let visible = hearings.get(&link.hearing_id).is_some_and(is_visible);
                if visible && !hearing_ids.contains(&link.hearing_id) {
                    hearing_ids.push(link.hearing_id);
                }
            }
            DefendantHearingSummary {
                defendant_id: defendant.id,
                defendant_name: display_name(&defendant.party),
                hearing_ids,
            }
        })
        .collect()
}

/// Hearings with a shared time come first, most recent first; unshared
/// hearings follow in their original discovery order.
fn sort_hearings(views: Vec<HearingView>) -> Vec<HearingView> {
    let (mut shared, unshared): (Vec<_>, Vec<_>) =
        views.into_iter().partition(|v| v.shared_time.is_some());
    shared.sort_by(|a, b| b.shared_time.cmp(&a.shared_time));
    shared.extend(unshared);
    shared
}

//! Derived-field calculators: small pure functions consumed by the
//! aggregation builder. None of them touch the fragment store.

use chrono::NaiveDate;
use shared_types::{Defendant, JudicialResult, PartyDetails, RespondentParty};

/// Age in whole years at a reference date.
///
/// Calendar year difference, decremented by one when the birthday has
/// not yet occurred by the reference date. None when either date is
/// missing or the reference precedes the birth date.
pub fn age_at(date_of_birth: Option<NaiveDate>, reference: Option<NaiveDate>) -> Option<u32> {
    match (date_of_birth, reference) {
        (Some(dob), Some(on)) => on.years_since(dob),
        _ => None,
    }
}

/// Join non-empty person name parts with single spaces, as stored.
fn person_name(first: Option<&str>, middle: Option<&str>, last: Option<&str>) -> String {
    [first, middle, last]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve a display name for a party.
///
/// Priority chain: person full name, then organisation name, then
/// prosecuting-authority name (falling back to its code). No case
/// transformation is applied.
pub fn display_name(party: &PartyDetails) -> String {
    match party {
        PartyDetails::Person {
            first_name,
            middle_name,
            last_name,
            ..
        } => person_name(
            first_name.as_deref(),
            middle_name.as_deref(),
            last_name.as_deref(),
        ),
        PartyDetails::Organisation { name } => name.clone(),
        PartyDetails::ProsecutingAuthority { name, code } => name
            .clone()
            .or_else(|| code.clone())
            .unwrap_or_default(),
    }
}

/// Resolve a display name for an application respondent that is not a
/// case defendant. Defendant respondents resolve through the case
/// fragment instead and yield an empty string here.
pub fn respondent_display_name(respondent: &RespondentParty) -> String {
    match respondent {
        RespondentParty::Defendant { .. } => String::new(),
        RespondentParty::Person(name) => person_name(
            name.first_name.as_deref(),
            name.middle_name.as_deref(),
            name.last_name.as_deref(),
        ),
        RespondentParty::Organisation { name } => name.clone(),
        RespondentParty::ProsecutingAuthority { name, code } => name
            .clone()
            .or_else(|| code.clone())
            .unwrap_or_default(),
    }
}

/// Roll a defendant's legal aid position up to one display string.
///
/// The defendant-level status wins; otherwise the first offence carrying
/// an LAA reference contributes its status description.
pub fn legal_aid_status(defendant: &Defendant) -> Option<String> {
    if let Some(status) = &defendant.legal_aid_status {
        return Some(status.clone());
    }
    defendant
        .offences
        .iter()
        .filter_map(|o| o.laa_reference.as_ref())
        .find_map(|laa| laa.status_description.clone())
}

/// True iff any judicial result carries a non-null amendment date.
pub fn has_amended_result<'a, I>(results: I) -> bool
where
    I: IntoIterator<Item = &'a JudicialResult>,
{
    results.into_iter().any(|r| r.amendment_date.is_some())
}

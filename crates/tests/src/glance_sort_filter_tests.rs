//! Listing-status filtering and shared-time ordering.

use crate::common::*;
use engine::{HearingsAtAGlanceBuilder, InMemoryFragmentStore};
use pretty_assertions::assert_eq;
use shared_types::{JurisdictionType, ListingStatus};
use uuid::Uuid;

#[test]
fn sent_for_listing_hearings_are_excluded() {
    let defendant = person_defendant("ALEX", "WINTER", None);
    let case = prosecution_case(vec![defendant]);
    let visible = hearing(ListingStatus::Initialised, None);
    let hidden = hearing(ListingStatus::SentForListing, None);
    let store = seeded_store(&case, &[&visible, &hidden]);

    let glance = HearingsAtAGlanceBuilder::new(&store).build(case.id).unwrap();

    let ids: Vec<Uuid> = glance.hearings.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![visible.id]);
    // Hidden hearings also stay out of the defendant summaries
    assert_eq!(glance.defendant_hearings[0].hearing_ids, vec![visible.id]);
}

#[test]
fn sent_for_listing_excluded_regardless_of_reference_count() {
    let d1 = person_defendant("ALEX", "WINTER", None);
    let d2 = person_defendant("JO", "MARSH", None);
    let d3 = person_defendant("KIM", "REES", None);
    let case = prosecution_case(vec![d1, d2, d3]);
    let hidden = hearing(ListingStatus::SentForListing, Some("2024-04-01T09:00:00Z"));
    let store = seeded_store(&case, &[&hidden]);

    let glance = HearingsAtAGlanceBuilder::new(&store).build(case.id).unwrap();
    assert!(glance.hearings.is_empty());
    assert_eq!(glance.latest_hearing_jurisdiction_type, None);
    for summary in &glance.defendant_hearings {
        assert!(summary.hearing_ids.is_empty());
    }
}

#[test]
fn shared_hearings_order_most_recent_first() {
    let defendant = person_defendant("ALEX", "WINTER", None);
    let case = prosecution_case(vec![defendant]);
    // H1 shared an hour before H2
    let h1 = hearing(ListingStatus::Resulted, Some("2024-04-01T08:00:00Z"));
    let h2 = hearing(ListingStatus::Resulted, Some("2024-04-01T10:00:00Z"));
    let store = seeded_store(&case, &[&h1, &h2]);

    let glance = HearingsAtAGlanceBuilder::new(&store).build(case.id).unwrap();
    let ids: Vec<Uuid> = glance.hearings.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![h2.id, h1.id]);
}

#[test]
fn shared_hearing_precedes_unshared() {
    let defendant = person_defendant("ALEX", "WINTER", None);
    let case = prosecution_case(vec![defendant]);
    // H3 discovered first but never shared; a future shared time still wins
    let h3 = hearing(ListingStatus::Listed, None);
    let h1 = hearing(ListingStatus::Resulted, Some("2030-01-01T09:00:00Z"));
    let store = seeded_store(&case, &[&h3, &h1]);

    let glance = HearingsAtAGlanceBuilder::new(&store).build(case.id).unwrap();
    let ids: Vec<Uuid> = glance.hearings.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![h1.id, h3.id]);
}

#[test]
fn unshared_hearings_keep_discovery_order() {
    let defendant = person_defendant("ALEX", "WINTER", None);
    let case = prosecution_case(vec![defendant]);
    let h1 = hearing(ListingStatus::Listed, None);
    let h2 = hearing(ListingStatus::Listed, None);
    let h3 = hearing(ListingStatus::Listed, None);
    let store = seeded_store(&case, &[&h1, &h2, &h3]);

    let glance = HearingsAtAGlanceBuilder::new(&store).build(case.id).unwrap();
    let ids: Vec<Uuid> = glance.hearings.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![h1.id, h2.id, h3.id]);
}

#[test]
fn latest_jurisdiction_follows_sort_order() {
    let defendant = person_defendant("ALEX", "WINTER", None);
    let case = prosecution_case(vec![defendant.clone()]);

    let mut magistrates = hearing(ListingStatus::Resulted, Some("2024-04-02T09:00:00Z"));
    magistrates.jurisdiction_type = JurisdictionType::Magistrates;
    let crown = hearing(ListingStatus::Resulted, Some("2024-04-01T09:00:00Z"));

    let mut store = InMemoryFragmentStore::new();
    store.put_case(&case).unwrap();
    store.put_hearing(&crown).unwrap();
    store.put_hearing(&magistrates).unwrap();
    // Crown hearing discovered first, but the magistrates one shared later
    store.link_defendant_hearing(case.id, defendant.id, crown.id);
    store.link_defendant_hearing(case.id, defendant.id, magistrates.id);

    let glance = HearingsAtAGlanceBuilder::new(&store).build(case.id).unwrap();
    assert_eq!(
        glance.latest_hearing_jurisdiction_type,
        Some(JurisdictionType::Magistrates)
    );
}

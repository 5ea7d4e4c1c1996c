//! Court application merging: shared hearings, synthetic respondents and
//! box hearings.

use crate::common::*;
use engine::{HearingsAtAGlanceBuilder, InMemoryFragmentStore};
use pretty_assertions::assert_eq;
use shared_types::{
    ApplicationLinkType, ListingStatus, PersonName, ProsecutionCase, RespondentParty,
};
use uuid::Uuid;

fn store_with_application(
    case: &ProsecutionCase,
    hearings: &[&shared_types::Hearing],
    application: &shared_types::CourtApplication,
    application_hearing: Uuid,
) -> InMemoryFragmentStore {
    let mut store = seeded_store(case, hearings);
    store.put_application(application).unwrap();
    store.link_application_case(application.id, case.id);
    store.link_application_hearing(application.id, application_hearing);
    store
}

#[test]
fn application_on_shared_hearing_merges_into_defendant_entry() {
    let defendant = person_defendant("ALEX", "WINTER", None);
    let case = prosecution_case(vec![defendant.clone()]);
    let h1 = hearing(ListingStatus::Listed, None);

    let mut app = application(ApplicationLinkType::Linked);
    app.respondents = vec![RespondentParty::Defendant {
        defendant_id: defendant.id,
    }];

    let store = store_with_application(&case, &[&h1], &app, h1.id);
    let glance = HearingsAtAGlanceBuilder::new(&store).build(case.id).unwrap();

    // No box hearing appended; the application lands on the existing view
    assert_eq!(glance.hearings.len(), 1);
    let entry = &glance.hearings[0].defendants[0];
    assert_eq!(entry.defendant_id, Some(defendant.id));
    assert_eq!(entry.applications.len(), 1);
    assert_eq!(entry.applications[0].id, app.id);
}

#[test]
fn non_defendant_respondent_appends_synthetic_entry_after_defendants() {
    let defendant = person_defendant("ALEX", "WINTER", None);
    let case = prosecution_case(vec![defendant.clone()]);
    let h1 = hearing(ListingStatus::Listed, None);

    let mut app = application(ApplicationLinkType::Linked);
    app.respondents = vec![RespondentParty::Person(PersonName {
        first_name: Some("MORGAN".to_string()),
        middle_name: None,
        last_name: Some("LLOYD".to_string()),
    })];

    let store = store_with_application(&case, &[&h1], &app, h1.id);
    let glance = HearingsAtAGlanceBuilder::new(&store).build(case.id).unwrap();

    let defendants = &glance.hearings[0].defendants;
    assert_eq!(defendants.len(), 2);
    // Case defendant first, synthetic respondent after
    assert_eq!(defendants[0].defendant_id, Some(defendant.id));
    assert_eq!(defendants[1].defendant_id, None);
    assert_eq!(defendants[1].name, "MORGAN LLOYD");
    assert_eq!(defendants[1].age, "");
    assert_eq!(defendants[1].applications[0].id, app.id);
}

#[test]
fn organisation_respondent_resolves_by_name() {
    let defendant = person_defendant("ALEX", "WINTER", None);
    let case = prosecution_case(vec![defendant]);
    let h1 = hearing(ListingStatus::Listed, None);

    let mut app = application(ApplicationLinkType::Linked);
    app.respondents = vec![RespondentParty::Organisation {
        name: "ACME LTD".to_string(),
    }];

    let store = store_with_application(&case, &[&h1], &app, h1.id);
    let glance = HearingsAtAGlanceBuilder::new(&store).build(case.id).unwrap();
    assert_eq!(glance.hearings[0].defendants[1].name, "ACME LTD");
}

#[test]
fn application_on_other_hearing_becomes_box_hearing_view() {
    let defendant = person_defendant("ALEX", "WINTER", None);
    let case = prosecution_case(vec![defendant.clone()]);
    let case_hearing = hearing(ListingStatus::Listed, None);
    let other_hearing = hearing(ListingStatus::Listed, None);

    let mut app = application(ApplicationLinkType::Linked);
    app.respondents = vec![RespondentParty::Defendant {
        defendant_id: defendant.id,
    }];

    let mut store = seeded_store(&case, &[&case_hearing]);
    store.put_hearing(&other_hearing).unwrap();
    store.put_application(&app).unwrap();
    store.link_application_case(app.id, case.id);
    store.link_application_hearing(app.id, other_hearing.id);

    let glance = HearingsAtAGlanceBuilder::new(&store).build(case.id).unwrap();

    assert_eq!(glance.hearings.len(), 2);
    let box_view = glance
        .hearings
        .iter()
        .find(|v| v.id == other_hearing.id)
        .expect("box hearing view appended");
    assert!(box_view.is_box_hearing);
    assert_eq!(box_view.defendants[0].defendant_id, Some(defendant.id));
    assert_eq!(box_view.defendants[0].name, "ALEX WINTER");
    assert_eq!(box_view.defendants[0].applications[0].id, app.id);

    // Box hearings do not join the defendant link summaries
    assert_eq!(
        glance.defendant_hearings[0].hearing_ids,
        vec![case_hearing.id]
    );
}

#[test]
fn box_hearing_sent_for_listing_stays_hidden() {
    let defendant = person_defendant("ALEX", "WINTER", None);
    let case = prosecution_case(vec![defendant.clone()]);
    let case_hearing = hearing(ListingStatus::Listed, None);
    let hidden = hearing(ListingStatus::SentForListing, None);

    let mut app = application(ApplicationLinkType::Linked);
    app.respondents = vec![RespondentParty::Defendant {
        defendant_id: defendant.id,
    }];

    let mut store = seeded_store(&case, &[&case_hearing]);
    store.put_hearing(&hidden).unwrap();
    store.put_application(&app).unwrap();
    store.link_application_case(app.id, case.id);
    store.link_application_hearing(app.id, hidden.id);

    let glance = HearingsAtAGlanceBuilder::new(&store).build(case.id).unwrap();
    let ids: Vec<Uuid> = glance.hearings.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![case_hearing.id]);
}

#[test]
fn respondent_without_link_row_joins_view_but_not_summaries() {
    let d1 = person_defendant("ALEX", "WINTER", None);
    let d2 = person_defendant("JO", "MARSH", None);
    let case = prosecution_case(vec![d1.clone(), d2.clone()]);
    let h1 = hearing(ListingStatus::Listed, None);

    // Only d1 has a link row for the hearing; d2 arrives as an
    // application respondent
    let mut store = InMemoryFragmentStore::new();
    store.put_case(&case).unwrap();
    store.put_hearing(&h1).unwrap();
    store.link_defendant_hearing(case.id, d1.id, h1.id);

    let mut app = application(ApplicationLinkType::Linked);
    app.respondents = vec![RespondentParty::Defendant { defendant_id: d2.id }];
    store.put_application(&app).unwrap();
    store.link_application_case(app.id, case.id);
    store.link_application_hearing(app.id, h1.id);

    let glance = HearingsAtAGlanceBuilder::new(&store).build(case.id).unwrap();

    // The view gains an entry for d2, resolved from the case fragment
    let defendants = &glance.hearings[0].defendants;
    assert_eq!(defendants.len(), 2);
    assert_eq!(defendants[1].defendant_id, Some(d2.id));
    assert_eq!(defendants[1].name, "JO MARSH");
    assert_eq!(defendants[1].applications[0].id, app.id);

    // Summaries group by link rows only, so d2's stays empty
    let summary_of = |id| {
        glance
            .defendant_hearings
            .iter()
            .find(|s| s.defendant_id == id)
            .unwrap()
    };
    assert_eq!(summary_of(d1.id).hearing_ids, vec![h1.id]);
    assert!(summary_of(d2.id).hearing_ids.is_empty());
}

#[test]
fn repeated_application_links_merge_once() {
    let defendant = person_defendant("ALEX", "WINTER", None);
    let case = prosecution_case(vec![defendant.clone()]);
    let h1 = hearing(ListingStatus::Listed, None);

    let mut app = application(ApplicationLinkType::Linked);
    app.respondents = vec![RespondentParty::Defendant {
        defendant_id: defendant.id,
    }];

    let mut store = store_with_application(&case, &[&h1], &app, h1.id);
    // Duplicate hearing-application link rows
    store.link_application_hearing(app.id, h1.id);

    let glance = HearingsAtAGlanceBuilder::new(&store).build(case.id).unwrap();
    assert_eq!(glance.hearings[0].defendants[0].applications.len(), 1);
}

#[test]
fn two_applications_share_one_synthetic_respondent_entry() {
    let defendant = person_defendant("ALEX", "WINTER", None);
    let case = prosecution_case(vec![defendant]);
    let h1 = hearing(ListingStatus::Listed, None);

    let respondent = RespondentParty::Organisation {
        name: "ACME LTD".to_string(),
    };
    let mut app_a = application(ApplicationLinkType::Linked);
    app_a.respondents = vec![respondent.clone()];
    let mut app_b = application(ApplicationLinkType::Linked);
    app_b.respondents = vec![respondent];

    let mut store = store_with_application(&case, &[&h1], &app_a, h1.id);
    store.put_application(&app_b).unwrap();
    store.link_application_case(app_b.id, case.id);
    store.link_application_hearing(app_b.id, h1.id);

    let glance = HearingsAtAGlanceBuilder::new(&store).build(case.id).unwrap();
    let defendants = &glance.hearings[0].defendants;
    // One synthetic entry, both applications attached to it
    assert_eq!(defendants.len(), 2);
    assert_eq!(defendants[1].applications.len(), 2);
}

use std::collections::HashMap;

use shared_types::{
    AppError, CaseDefendantHearingLink, CourtApplication, CourtApplicationCaseLink, Hearing,
    HearingApplicationLink, ProsecutionCase,
};
use uuid::Uuid;

/// Read-only access to persisted fragments and link rows.
///
/// One JSON document per case, per hearing and per application, plus the
/// many-to-many link tables joining them. Implementations return raw
/// stored payloads; decoding is the engine's job. The engine never
/// writes through this trait, and no transactional read guarantee is
/// assumed — concurrent calls may observe different snapshots.
pub trait FragmentStore {
    /// Raw prosecution case payload, None when the case is absent.
    fn case_fragment(&self, case_id: Uuid) -> Result<Option<String>, AppError>;

    /// All case/defendant/hearing link rows for a case.
    fn case_defendant_hearing_links(
        &self,
        case_id: Uuid,
    ) -> Result<Vec<CaseDefendantHearingLink>, AppError>;

    /// Raw hearing payload, None when the hearing is absent.
    fn hearing_fragment(&self, hearing_id: Uuid) -> Result<Option<String>, AppError>;

    /// Ids of court applications linked to a case.
    fn case_application_links(&self, case_id: Uuid) -> Result<Vec<Uuid>, AppError>;

    /// Ids of hearings a court application is listed at.
    fn hearing_application_links(&self, application_id: Uuid) -> Result<Vec<Uuid>, AppError>;

    /// Raw court application payload, None when absent.
    fn application_fragment(&self, application_id: Uuid) -> Result<Option<String>, AppError>;
}

/// In-memory fragment store holding serialized JSON documents.
///
/// The reference implementation of [`FragmentStore`], and the backend
/// the test suite seeds. Link rows are kept in insertion order so
/// discovery order is deterministic.
#[derive(Debug, Default)]
pub struct InMemoryFragmentStore {
    cases: HashMap<Uuid, String>,
    hearings: HashMap<Uuid, String>,
    applications: HashMap<Uuid, String>,
    case_defendant_hearing: Vec<CaseDefendantHearingLink>,
    case_applications: Vec<CourtApplicationCaseLink>,
    hearing_applications: Vec<HearingApplicationLink>,
}

impl InMemoryFragmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a prosecution case fragment.
    pub fn put_case(&mut self, case: &ProsecutionCase) -> Result<(), AppError> {
        let raw = serde_json::to_string(case)?;
        self.cases.insert(case.id, raw);
        Ok(())
    }

    /// Store a hearing fragment.
    pub fn put_hearing(&mut self, hearing: &Hearing) -> Result<(), AppError> {
        let raw = serde_json::to_string(hearing)?;
        self.hearings.insert(hearing.id, raw);
        Ok(())
    }

    /// Store a court application fragment.
    pub fn put_application(&mut self, application: &CourtApplication) -> Result<(), AppError> {
        let raw = serde_json::to_string(application)?;
        self.applications.insert(application.id, raw);
        Ok(())
    }

    /// Store a raw (possibly malformed) case payload, for corruption tests.
    pub fn put_raw_case(&mut self, case_id: Uuid, raw: impl Into<String>) {
        self.cases.insert(case_id, raw.into());
    }

    /// Record that a defendant on a case appears at a hearing.
    pub fn link_defendant_hearing(&mut self, case_id: Uuid, defendant_id: Uuid, hearing_id: Uuid) {
        self.case_defendant_hearing.push(CaseDefendantHearingLink {
            case_id,
            defendant_id,
            hearing_id,
        });
    }

    /// Record that an application is linked to a case.
    pub fn link_application_case(&mut self, application_id: Uuid, case_id: Uuid) {
        self.case_applications.push(CourtApplicationCaseLink {
            application_id,
            case_id,
        });
    }

    /// Record that an application is listed at a hearing.
    pub fn link_application_hearing(&mut self, application_id: Uuid, hearing_id: Uuid) {
        self.hearing_applications.push(HearingApplicationLink {
            application_id,
            hearing_id,
        });
    }
}

impl FragmentStore for InMemoryFragmentStore {
    fn case_fragment(&self, case_id: Uuid) -> Result<Option<String>, AppError> {
        Ok(self.cases.get(&case_id).cloned())
    }

    fn case_defendant_hearing_links(
        &self,
        case_id: Uuid,
    ) -> Result<Vec<CaseDefendantHearingLink>, AppError> {
        Ok(self
            .case_defendant_hearing
            .iter()
            .filter(|link| link.case_id == case_id)
            .copied()
            .collect())
    }

    fn hearing_fragment(&self, hearing_id: Uuid) -> Result<Option<String>, AppError> {
        Ok(self.hearings.get(&hearing_id).cloned())
    }

    fn case_application_links(&self, case_id: Uuid) -> Result<Vec<Uuid>, AppError> {
        Ok(self
            .case_applications
            .iter()
            .filter(|link| link.case_id == case_id)
            .map(|link| link.application_id)
            .collect())
    }

    fn hearing_application_links(&self, application_id: Uuid) -> Result<Vec<Uuid>, AppError> {
        Ok(self
            .hearing_applications
            .iter()
            .filter(|link| link.application_id == application_id)
            .map(|link| link.hearing_id)
            .collect())
    }

    fn application_fragment(&self, application_id: Uuid) -> Result<Option<String>, AppError> {
        Ok(self.applications.get(&application_id).cloned())
    }
}

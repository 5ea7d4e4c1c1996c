use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Link rows are many-to-many association records with no payload beyond
// their composite key. The fragment store returns them verbatim; the
// engine never writes them.

/// Joins a case, one of its defendants, and a hearing that defendant
/// appears at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseDefendantHearingLink {
    pub case_id: Uuid,
    pub defendant_id: Uuid,
    pub hearing_id: Uuid,
}

/// Joins a court application to a hearing it is listed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HearingApplicationLink {
    pub application_id: Uuid,
    pub hearing_id: Uuid,
}

/// Joins a court application to a prosecution case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtApplicationCaseLink {
    pub application_id: Uuid,
    pub case_id: Uuid,
}

//! Case/hearing aggregation engine.
//!
//! Takes a case identifier, gathers every fragment linked to that case
//! (hearings, defendants, court applications and the link rows joining
//! them) and assembles a single deduplicated, sorted, denormalized view.
//! Two aggregation paths share the same building blocks:
//!
//! - [`glance::HearingsAtAGlanceBuilder`] — the query-side "hearing/case
//!   at a glance" view for one case id.
//! - [`projector::CaseDocumentProjector`] — the event-side fold that
//!   turns one court application into per-case search-index documents.
//!
//! Both are synchronous per-call computations over a read-only
//! [`store::FragmentStore`]; neither holds state between invocations.

pub mod decode;
pub mod derive;
pub mod glance;
pub mod merge;
pub mod projector;
pub mod store;

pub use glance::HearingsAtAGlanceBuilder;
pub use projector::{ApplicationShape, CaseDocumentProjector};
pub use store::{FragmentStore, InMemoryFragmentStore};

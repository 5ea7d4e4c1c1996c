pub mod error;

// Domain fragment types (canonical locations for all case progression types)
pub mod application;
pub mod case;
pub mod case_document;
pub mod glance;
pub mod hearing;
pub mod links;

pub use error::*;

// Re-export all domain types
pub use application::*;
pub use case::*;
pub use case_document::*;
pub use glance::*;
pub use hearing::*;
pub use links::*;

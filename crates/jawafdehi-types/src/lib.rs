pub mod error;
pub mod config;
pub mod language;

// Accountability API domain modules
pub mod case;
pub mod common;
pub mod document;
pub mod entity;
pub mod feedback;

pub use error::*;
pub use config::*;
pub use language::*;

pub use case::*;
pub use common::*;
pub use document::*;
pub use entity::*;
// feedback types are NOT glob re-exported: `ContactMethod` and
// `FeedbackType` read ambiguously next to the case types.
// Use jawafdehi_types::feedback::* explicitly instead.

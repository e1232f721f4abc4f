// Summary engine: poll, version projection and assembly

pub mod assembler;
pub mod poll;
pub mod projector;
pub mod service;

pub use assembler::assemble;
pub use poll::{placeholder_summary, poll};
pub use projector::{project_fields, visible_fields, ProjectionFacts, VersionedField};
pub use service::{SummaryError, SummaryService};

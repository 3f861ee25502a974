//! Data model: enums, languages, run configuration, and outcomes.

mod enums;
mod language;
mod results;
mod run;

pub use enums::{Device, ModelTier, OrderCriterion};
pub use language::Language;
pub use results::{BatchSummary, FileOutcome, FileStatus};
pub use run::RunConfig;

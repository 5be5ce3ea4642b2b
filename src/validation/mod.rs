//! Checks run over a timeseries dataset before it is ingested
//!
//! Every check returns `true` when the data passes and reports problems
//! through the [`Reporter`] it is given instead of failing.

mod regions;
mod reporter;
mod required;
mod run;
mod scenarios;
mod variables;


pub use regions::validate_region_mappings;
pub use reporter::{
    CapturedLog, DEFAULT_ERROR_LIMIT, ReportSink, Reporter, TracingSink, log_validation_errors,
};
pub use required::validate_required_variables;
pub use run::{Check, CheckOutcome, RunSummary, ValidationRun};
pub use scenarios::validate_allowed_scenarios;
pub use variables::validate_variables_and_units;

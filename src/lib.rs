pub mod error;
pub mod error_utils;
pub mod loader;
pub mod models;
pub mod validation;

pub use error::{ConfigError, ConfigurationError, DatasetError, ResolveError};
pub use loader::{get_region_mapping, read_config};
pub use models::{AllowedScenarios, RegionMapping, TimeseriesFrame, TimeseriesRecord, VariableConfig};
pub use validation::{
    ReportSink, Reporter, validate_allowed_scenarios, validate_region_mappings,
    validate_required_variables, validate_variables_and_units,
};

pub mod display;
pub mod region;
pub mod scenario;
pub mod settings;
pub mod timeseries;
pub mod variable;

pub use region::{RegionMapping, WORLD_REGION};
pub use scenario::AllowedScenarios;
pub use settings::{DEFAULT_SETTINGS_FILE, RunSettings};
pub use timeseries::{TimeseriesFrame, TimeseriesRecord};
pub use variable::{VariableConfig, VariableSpec};

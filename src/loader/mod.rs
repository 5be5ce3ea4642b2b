//! Loading configuration documents and region mappings from disk

mod config_loader;
mod file_scanner;
mod region_mapping;

pub use config_loader::{from_value, load_config, read_config};
pub use file_scanner::FileScanner;
pub use region_mapping::get_region_mapping;

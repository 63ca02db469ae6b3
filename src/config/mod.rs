pub mod category_map;
pub use category_map::CategoryMap;
mod config_loader;
pub use config_loader::ConfigLoader;
pub mod harvest_config;
pub use harvest_config::{ApiConfig, HarvestConfig};
pub mod loader_config;
pub use loader_config::LoaderConfig;

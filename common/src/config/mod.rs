mod arcade_config;
mod config_content_provider;
mod config_manager;
mod validate;

pub use arcade_config::{ApiConfig, ArcadeConfig, GameConfig, WatchConfig};
pub use config_content_provider::{
    ConfigContentProvider, FileContentConfigProvider, MemoryContentConfigProvider,
};
pub use config_manager::{ConfigManager, ConfigSerializer, YamlConfigSerializer};
pub use validate::Validate;

mod config_content_provider;
mod config_manager;
mod config_serializer;
mod lenient;
mod validate;

pub use config_content_provider::{
    ConfigContentProvider, FileContentConfigProvider, MemoryContentConfigProvider,
};
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use lenient::default_on_invalid;
pub use validate::Validate;

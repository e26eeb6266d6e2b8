mod main_config;

pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use main_config::{Config, PlayerDefaults};

pub type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

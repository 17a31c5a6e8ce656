use once_cell::sync::Lazy;
use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TableConfig {
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LogConfig {
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "/odata".to_string(),
            },
            table: TableConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: 5,
            page_size_options: vec![5, 10, 20],
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LogConfig {
    pub fn level(&self) -> log::Level {
        log::Level::from_str(&self.level).unwrap_or(log::Level::Info)
    }
}

/// Configuration embedded in the bundle
const EMBEDDED_CONFIG: &str = include_str!("../config.toml");

static CONFIG: Lazy<AppConfig> = Lazy::new(load_config);

pub fn app_config() -> &'static AppConfig {
    &CONFIG
}

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    let mut config: AppConfig = toml::from_str(contents)?;
    if config.table.page_size == 0 {
        config.table.page_size = TableConfig::default().page_size;
    }
    if !config.table.page_size_options.contains(&config.table.page_size) {
        config.table.page_size_options.push(config.table.page_size);
        config.table.page_size_options.sort_unstable();
    }
    Ok(config)
}

/// Parse the embedded config, falling back to defaults
pub fn load_config() -> AppConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Invalid embedded config.toml, using defaults: {}", e);
            AppConfig::default()
        }
    }
}

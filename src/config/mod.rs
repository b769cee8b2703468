use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

pub mod validator;

use crate::adapters::catalog::ComponentCatalog;
use crate::cli::Cli;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Default tracing filter when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Directory of component metadata files (JSON or YAML)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_dir: Option<String>,
    #[serde(default)]
    pub editor: EditorSettings,
}

/// Behaviour of the invoke editor
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct EditorSettings {
    /// Normalize curly and single quotes before parsing the argument buffer
    #[serde(default = "default_sanitize_quotes")]
    pub sanitize_quotes: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            sanitize_quotes: default_sanitize_quotes(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            metadata_dir: None,
            editor: EditorSettings::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_sanitize_quotes() -> bool {
    true
}

impl Settings {
    pub fn new() -> Result<Self, anyhow::Error> {
        Self::from_root(".")
    }

    /// Create settings from CLI arguments (config file, then env vars, then CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .add_source(File::from(cli.config.clone()).required(false))
            .add_source(Self::environment())
            .build()?;

        let mut settings: Settings = s.try_deserialize()?;
        settings.apply_cli_overrides(cli);
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_root(root: &str) -> Result<Self, anyhow::Error> {
        let config_path = std::path::Path::new(root).join("invoker");
        let s = Config::builder()
            .add_source(File::from(config_path).required(false))
            .add_source(Self::environment())
            .build()?;

        let settings: Settings = s.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load every metadata file from `metadata_dir` into a catalog.
    pub fn load_catalog(&self) -> Result<ComponentCatalog, anyhow::Error> {
        let mut catalog = ComponentCatalog::new();
        if let Some(dir) = &self.metadata_dir {
            let loaded = catalog.load_dir(dir)?;
            tracing::info!("Loaded {} components from {}", loaded, dir);
        }
        Ok(catalog)
    }

    fn environment() -> Environment {
        Environment::with_prefix("INVOKER")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(dir) = &cli.metadata_dir {
            self.metadata_dir = Some(dir.clone());
        }
        if let Some(level) = &cli.log_level {
            self.log_level = level.clone();
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }
}

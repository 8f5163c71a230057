//! Configuration management for acton-model-view
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `ACTON_` prefix, `__` for nesting)
//! 2. `./config.toml` (development)
//! 3. `~/.config/acton-model-view/{service}/config.toml` (user config, XDG)
//! 4. `/etc/acton-model-view/{service}/config.toml` (system config)
//! 5. Hardcoded defaults (fallback)
//!
//! Environment variable format: `ACTON_SECTION__FIELD_NAME`
//! - Example: `ACTON_TABLES__STRIPED=true`
//!
//! # Example Configuration
//!
//! ```toml
//! # config.toml
//! [labels]
//! missing_label = "raw_key"
//!
//! [tables]
//! responsive = true
//! bordered = false
//! striped = true
//!
//! [features]
//! compact_tables = true
//! ```
//!
//! # Usage
//!
//! ```rust
//! use acton_model_view::config::{MissingLabelPolicy, ModelViewConfig};
//!
//! let config = ModelViewConfig::default();
//! assert_eq!(config.labels.missing_label, MissingLabelPolicy::RawKey);
//! assert!(config.tables.responsive);
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// What to show when a key has no label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingLabelPolicy {
    /// Show the attribute key itself
    #[default]
    RawKey,
    /// Fail with [`KeyNotFound`](crate::error::ModelViewError::KeyNotFound)
    Error,
}

/// Label lookup settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelSettings {
    /// Behaviour for keys without a label
    pub missing_label: MissingLabelPolicy,
}

/// Default styling for table contexts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
    /// Wrap tables in a responsive container
    pub responsive: bool,

    /// Draw cell borders
    pub bordered: bool,

    /// Stripe alternating rows
    pub striped: bool,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            responsive: true,
            bordered: false,
            striped: false,
        }
    }
}

/// Complete acton-model-view configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ModelViewConfig {
    /// Label settings
    #[serde(default)]
    pub labels: LabelSettings,

    /// Table context defaults
    #[serde(default)]
    pub tables: TableSettings,

    /// Application feature flags
    #[serde(default)]
    pub features: HashMap<String, bool>,
}

impl ModelViewConfig {
    /// Whether the feature flag `name` is switched on
    #[must_use]
    pub fn feature(&self, name: &str) -> bool {
        self.features.get(name).copied().unwrap_or(false)
    }

    /// Load configuration for a specific service
    ///
    /// Searches for configuration in XDG-compliant locations with precedence:
    /// 1. Environment variables (`ACTON_*`, use `__` for nesting)
    /// 2. `./config.toml`
    /// 3. `~/.config/acton-model-view/{service_name}/config.toml`
    /// 4. `/etc/acton-model-view/{service_name}/config.toml`
    /// 5. Defaults
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - Configuration file cannot be read or parsed
    /// - Configuration values fail type conversion
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use acton_model_view::config::ModelViewConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = ModelViewConfig::load_for_service("my-app")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_for_service(service_name: &str) -> anyhow::Result<Self> {
        let mut figment = Figment::new()
            // 5. Start with defaults (lowest priority)
            .merge(Toml::string(&toml::to_string(&Self::default())?));

        // 4. System config: /etc/acton-model-view/{service_name}/config.toml
        let system_config = PathBuf::from("/etc/acton-model-view")
            .join(service_name)
            .join("config.toml");
        if system_config.exists() {
            figment = figment.merge(Toml::file(&system_config));
        }

        // 3. User config: ~/.config/acton-model-view/{service_name}/config.toml
        let user_config = Self::recommended_path(service_name);
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        // 2. Local config: ./config.toml
        let local_config = PathBuf::from("./config.toml");
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        // 1. Environment variables (highest priority, double underscore for nesting)
        figment = figment.merge(Env::prefixed("ACTON_").split("__").lowercase(true));

        let config: Self = figment.extract()?;
        tracing::debug!(service = service_name, ?config, "loaded model view configuration");
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - Configuration file at `path` contains invalid TOML
    /// - Configuration values fail type conversion
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use acton_model_view::config::ModelViewConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = ModelViewConfig::load_from("./config/production.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config = Figment::new()
            .merge(Toml::string(&toml::to_string(&Self::default())?))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("ACTON_").split("__").lowercase(true))
            .extract()?;

        Ok(config)
    }

    /// Get the recommended XDG config path for a service
    ///
    /// # Example
    ///
    /// ```rust
    /// use acton_model_view::config::ModelViewConfig;
    ///
    /// let path = ModelViewConfig::recommended_path("my-app");
    /// assert!(path.ends_with("config.toml"));
    /// ```
    #[must_use]
    pub fn recommended_path(service_name: &str) -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("./config.toml"),
            |config_dir| {
                config_dir
                    .join("acton-model-view")
                    .join(service_name)
                    .join("config.toml")
            },
        )
    }

    /// Create config directory for a service
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn create_config_dir(service_name: &str) -> anyhow::Result<PathBuf> {
        let config_path = Self::recommended_path(service_name);
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(config_path)
    }
}

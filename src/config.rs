use crate::error::{AgriError, Result};
use crate::reference;
use dialoguer::{Confirm, Input, Select};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub weather: WeatherConfig,
    /// District preselected when the dashboard opens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_district: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeatherConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_enabled() -> bool {
    true
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            enabled: default_enabled(),
        }
    }
}

impl Config {
    /// Load config from the override path or the standard locations.
    ///
    /// A missing file is not an error; defaults are used instead. An explicit
    /// override that does not exist is.
    pub fn load(config_override: Option<&PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(AgriError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                p.clone()
            }
            None => match Self::find_config_path() {
                Some(p) => p,
                None => {
                    tracing::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| AgriError::Config(format!("Failed to read config: {}", e)))?;

        let config = Self::parse(&config_str)?;
        tracing::debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Parse YAML after substituting `${VAR}` environment references.
    pub fn parse(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content)?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| AgriError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.weather.base_url.starts_with("http://")
            && !self.weather.base_url.starts_with("https://")
        {
            return Err(AgriError::Config(format!(
                "weather.base_url must be an http(s) URL: {}",
                self.weather.base_url
            )));
        }
        if self.weather.timeout_secs == 0 {
            return Err(AgriError::Config(
                "weather.timeout_secs must be greater than zero".into(),
            ));
        }
        if let Some(ref name) = self.default_district {
            reference::find_district(name)
                .map_err(|_| AgriError::Config(format!("Unknown default_district '{}'", name)))?;
        }
        Ok(())
    }

    /// Search for config.yaml in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        dirs::config_dir()
            .map(|dir| dir.join("agriadvisor").join("config.yaml"))
            .filter(|p| p.exists())
    }

    /// Path the config was (or would be) loaded from, for diagnostics.
    pub fn resolved_path(config_override: Option<&PathBuf>) -> Option<PathBuf> {
        match config_override {
            Some(p) => Some(p.clone()),
            None => Self::find_config_path(),
        }
    }

    /// Default path for writing new config files (~/.config/agriadvisor/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgriError::Config("Cannot determine config directory".into()))?
            .join("agriadvisor");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the new Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up agriadvisor!");
        println!();

        println!("Home district");
        let names = reference::district_names();
        let selection = Select::new()
            .with_prompt("  District shown when the dashboard opens")
            .items(&names)
            .default(0)
            .interact()
            .map_err(|e| AgriError::Config(format!("Input error: {}", e)))?;
        let default_district = names.get(selection).map(|n| n.to_string());

        println!();
        println!("Weather (Open-Meteo, no API key required)");
        let enabled = Confirm::new()
            .with_prompt("  Fetch live weather?")
            .default(true)
            .interact()
            .map_err(|e| AgriError::Config(format!("Input error: {}", e)))?;

        let base_url: String = Input::new()
            .with_prompt("  API base URL")
            .default(default_base_url())
            .interact_text()
            .map_err(|e| AgriError::Config(format!("Input error: {}", e)))?;

        let timeout_secs: u64 = Input::new()
            .with_prompt("  Request timeout (seconds)")
            .default(default_timeout_secs())
            .interact_text()
            .map_err(|e| AgriError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            weather: WeatherConfig {
                base_url,
                timeout_secs,
                enabled,
            },
            default_district,
        };
        config.validate()?;

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| AgriError::Config(format!("Failed to serialize config: {}", e)))?;

        let content = format!(
            "# agriadvisor configuration\n# Generated by `agriadvisor init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| AgriError::Config(format!("Invalid substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        Ok(result)
    }
}

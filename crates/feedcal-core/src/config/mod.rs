use config::Config;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// How parsed events are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Json,
    Text,
}

impl OutputFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, `FEEDCAL_*` environment variables and an
    /// optional `config.toml`, in that order of increasing precedence.
    ///
    /// ## Errors
    /// Returns an error if building or deserializing the configuration fails, or
    /// if the result does not pass [`Settings::validate`].
    pub fn load() -> CoreResult<Self> {
        let settings = Self::builder()
            .and_then(|builder| {
                builder
                    .add_source(
                        config::Environment::with_prefix("FEEDCAL")
                            .convert_case(config::Case::Snake)
                            .separator("_")
                            .ignore_empty(true)
                            .try_parsing(true),
                    )
                    .add_source(config::File::with_name("config.toml").required(false))
                    .build()
            })
            .and_then(|config| config.try_deserialize::<Self>())
            .map_err(|e| CoreError::ConfigError(e.to_string()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Builder pre-populated with every default, so each source is optional.
    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError>
    {
        Config::builder()
            .set_default("logging.level", "info")?
            .set_default("output.format", OutputFormat::Json.as_str())?
            .set_default("output.pretty", false)
    }

    /// ## Summary
    /// Rejects settings that would leave the application unable to start.
    ///
    /// ## Errors
    /// Returns [`CoreError::InvalidConfiguration`] when the log level is blank.
    pub fn validate(&self) -> CoreResult<()> {
        if self.logging.level.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> CoreResult<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(
        level = %settings.logging.level,
        format = %settings.output.format,
        "Configuration resolved"
    );
    Ok(settings)
}

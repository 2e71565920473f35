use anyhow::Result;
use clap::ArgMatches;
use clap::parser::ValueSource;
use config::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete configuration that merges CLI args, env vars, config files, and defaults
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CompassConfig {
    /// Build configuration
    pub build: BuildConfig,
    /// Site configuration (from compass-core)
    #[serde(flatten)]
    pub site: compass_core::SiteConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BuildConfig {
    /// Source directory containing the content tree
    pub source: String,
    /// Configuration file path
    pub config: String,
    /// Escalate duplicate-label warnings to errors
    pub strict: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source: "./docs".to_string(),
            config: "./compass.toml".to_string(),
            strict: false,
        }
    }
}

impl Default for CompassConfig {
    fn default() -> Self {
        Self {
            build: BuildConfig::default(),
            site: compass_core::SiteConfig::default(),
        }
    }
}

impl CompassConfig {
    /// Load configuration with cascading precedence:
    /// 1. CLI arguments (highest priority)
    /// 2. Environment variables (COMPASS_*)
    /// 3. Configuration file
    /// 4. Defaults (lowest priority)
    pub fn load(args: &ArgMatches) -> Result<Self> {
        let config_file = args
            .get_one::<String>("config")
            .unwrap_or(&"./compass.toml".to_string())
            .clone();

        let mut builder = ConfigBuilder::builder();

        // 1. Start with defaults
        let defaults = Self::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2. Add configuration file if it exists
        if Path::new(&config_file).exists() {
            builder = builder.add_source(File::with_name(&config_file.replace(".toml", "")));
        }

        // 3. Add environment variables with COMPASS_ prefix
        builder = builder.add_source(
            Environment::with_prefix("COMPASS")
                .prefix_separator("_")
                .separator("__"), // Use double underscore for nested keys
        );

        // 4. Override with CLI arguments (highest priority)
        // A clap default_value is not a user-provided argument; letting it
        // through here would clobber config-file and env values.
        let mut cli_overrides = std::collections::HashMap::new();

        if let Some(source) = args.get_one::<String>("source") {
            if args.value_source("source") != Some(ValueSource::DefaultValue) {
                cli_overrides.insert("build.source".to_string(), source.clone());
            }
        }
        if let Some(config) = args.get_one::<String>("config") {
            if args.value_source("config") != Some(ValueSource::DefaultValue) {
                cli_overrides.insert("build.config".to_string(), config.clone());
            }
        }
        // Only override with CLI args that are actually defined for this command
        if args
            .try_get_one::<bool>("strict")
            .unwrap_or(None)
            .unwrap_or(&false)
            == &true
        {
            cli_overrides.insert("build.strict".to_string(), "true".to_string());
        }

        if !cli_overrides.is_empty() {
            builder = builder.add_source(config::Config::try_from(&cli_overrides)?);
        }

        // Build and deserialize
        let config = builder.build()?;
        let compass_config: CompassConfig = config.try_deserialize()?;

        Ok(compass_config)
    }

    /// Get just the site configuration for passing to compass-core
    pub fn site_config(&self) -> &compass_core::SiteConfig {
        &self.site
    }

    /// Get the build configuration
    pub fn build_config(&self) -> &BuildConfig {
        &self.build
    }
}

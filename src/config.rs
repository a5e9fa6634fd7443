use crate::case::{Case, Converter};
use crate::cli::output::OutputFormat;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".casefmt.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub case: Case,

    #[serde(default)]
    pub strict_kebab: bool,

    #[serde(default)]
    pub output: OutputFormat,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            case: Case::default(),
            strict_kebab: false,
            output: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

/// A config file as written on disk. Unset keys leave earlier layers alone.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    case: Option<Case>,
    strict_kebab: Option<bool>,
    output: Option<OutputFormat>,
    log_level: Option<String>,
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub case: Option<Case>,
    pub strict_kebab: bool,
    pub output: Option<OutputFormat>,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        Self::load_from(
            Self::global_config_path().as_deref(),
            Path::new(LOCAL_CONFIG_FILE),
            overrides,
        )
    }

    pub fn load_from(global: Option<&Path>, local: &Path, overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                config = config.merge(Self::from_file(global_path)?);
            }
        }

        // Local config overrides global
        if local.exists() {
            config = config.merge(Self::from_file(local)?);
        }

        if let Some(case) = overrides.case {
            config.case = case;
        }
        if overrides.strict_kebab {
            config.strict_kebab = true;
        }
        if let Some(output) = overrides.output {
            config.output = output;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<ConfigFile> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: ConfigFile) -> Self {
        if let Some(case) = other.case {
            self.case = case;
        }
        if let Some(strict) = other.strict_kebab {
            self.strict_kebab = strict;
        }
        if let Some(output) = other.output {
            self.output = output;
        }
        if let Some(level) = other.log_level {
            self.log_level = level;
        }
        self
    }

    pub fn converter(&self) -> Converter {
        Converter::new(self.case).with_strict_kebab(self.strict_kebab)
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "casefmt").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

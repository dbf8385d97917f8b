use crate::env_util::{self, CONFIG_ENV, JSON_ENV, PLATFORM_ENV};
use crate::grammar::Platform;
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub platform: Platform,
    pub output: OutputFormat,
}

impl Settings {
    /// Loads the config file, then applies environment overrides.
    pub fn load() -> Result<Self> {
        let mut settings = match config_path() {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        settings.apply_env()?;
        Ok(settings)
    }

    /// A missing file yields defaults; an unreadable or malformed one is an error.
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = match fs_err::read_to_string(path) {
            Ok(source) => source,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };
        let settings = toml::from_str(&source)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(settings)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Some(platform) = env_util::env_platform_override(PLATFORM_ENV)
            .map_err(|violation| anyhow!("{PLATFORM_ENV}: {violation}"))?
        {
            self.platform = platform;
        }
        if env_util::env_flag_enabled(JSON_ENV) {
            self.output = OutputFormat::Json;
        }
        Ok(())
    }
}

pub fn config_path() -> Option<PathBuf> {
    env_util::env_path_override(CONFIG_ENV).or_else(|| {
        directories::ProjectDirs::from("", "", "winpath")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    })
}

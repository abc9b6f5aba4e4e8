use std::path::{Path, PathBuf};

use super::backends::BackendAvailability;
use super::logger::{EnumerationLogLevel, LoggerConfig};
use super::types::{SolverConfig, TypesConfig};
use crate::error::ConfigError;

/// File names looked up by [BuildConfig::from_current_dir], in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["latgen.toml", "Latgen.toml"];

/// Default log file used when `LATGEN_DEBUG_LOG` is set to `1` or `true`.
pub const DEFAULT_LOG_FILE: &str = "/tmp/latgen.log";

/// Build configuration shared by every enumerator of a run.
///
/// It is read once at the start of a run and passed explicitly, nothing is cached globally.
#[derive(Default, Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct BuildConfig {
    /// Optional backends present in the build.
    #[serde(default)]
    pub backends: BackendAvailability,

    /// Type universe settings.
    #[serde(default)]
    pub types: TypesConfig,

    /// Solver catalog settings.
    #[serde(default)]
    pub solver: SolverConfig,

    /// Enumeration logging.
    #[serde(default)]
    pub logger: LoggerConfig,
}

impl BuildConfig {
    /// Load the configuration from the current directory and apply the environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::from_current_dir()?.override_from_env())
    }

    /// Loads configuration from `latgen.toml` or `Latgen.toml` in the current directory or its
    /// parents.
    ///
    /// Traverses up the directory tree until a configuration file is found or the root is reached.
    /// Returns the default configuration if no file is found.
    pub fn from_current_dir() -> Result<Self, ConfigError> {
        let dir = std::env::current_dir()?;

        match Self::find_in_ancestors(&dir) {
            Some(path) => {
                log::debug!("Loading configuration from {}", path.display());
                Self::from_file_path(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// First configuration file found in `dir` or one of its parents.
    pub fn find_in_ancestors(dir: &Path) -> Option<PathBuf> {
        dir.ancestors()
            .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
            .find(|path| path.is_file())
    }

    /// Loads configuration from a specified file path.
    pub fn from_file_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Save the default configuration to the provided file path.
    pub fn save_default<P: AsRef<Path>>(path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(&Self::default())?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Overrides configuration fields based on environment variables.
    pub fn override_from_env(self) -> Self {
        self.override_from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [Self::override_from_env], reading variables through `var`.
    pub fn override_from_vars<F: Fn(&str) -> Option<String>>(mut self, var: F) -> Self {
        if let Some(val) = var("LATGEN_HAVE_EIGEN") {
            match parse_flag(&val) {
                Some(flag) => self.backends.eigen = flag,
                None => log::warn!("Ignoring LATGEN_HAVE_EIGEN={val}, expected a boolean"),
            }
        }

        if let Some(val) = var("LATGEN_HAVE_ISTL") {
            match parse_flag(&val) {
                Some(flag) => self.backends.istl = flag,
                None => log::warn!("Ignoring LATGEN_HAVE_ISTL={val}, expected a boolean"),
            }
        }

        if let Some(val) = var("LATGEN_DEBUG_LOG") {
            self.logger.level = EnumerationLogLevel::Full;

            match val.as_str() {
                "stdout" => self.logger.stdout = true,
                "stderr" => self.logger.stderr = true,
                "1" | "true" => self.logger.file = Some(DEFAULT_LOG_FILE.into()),
                "0" | "false" => self.logger.level = EnumerationLogLevel::Disabled,
                file_path => self.logger.file = Some(file_path.into()),
            }
        }

        self
    }
}

fn parse_flag(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

//! Configuration settings for the board service

use crate::error::InputError;
use crate::game_of_life::DEFAULT_MAX_ITERATIONS;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub storage: StorageConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Iteration budget for reaching a final state
    pub max_iterations: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one JSON file per board
    pub directory: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Largest viewport area drawn as a grid; bigger boards print a cell list
    #[serde(default = "default_max_render_cells")]
    pub max_render_cells: u64,
}

fn default_max_render_cells() -> u64 {
    10_000
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level(self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                max_iterations: DEFAULT_MAX_ITERATIONS,
            },
            storage: StorageConfig {
                directory: PathBuf::from("data/boards"),
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                max_render_cells: default_max_render_cells(),
            },
            logging: LoggingConfig {
                level: LogLevel::Warn,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.max_iterations == 0 {
            anyhow::bail!(InputError::ZeroIterationBudget);
        }

        if self.output.max_render_cells == 0 {
            anyhow::bail!("Render limit must be positive");
        }

        if self.storage.directory.as_os_str().is_empty() {
            anyhow::bail!("Storage directory must not be empty");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(max_iterations) = cli_overrides.max_iterations {
            self.simulation.max_iterations = max_iterations;
        }
        if let Some(ref directory) = cli_overrides.storage_dir {
            self.storage.directory = directory.clone();
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
        if let Some(max_render_cells) = cli_overrides.max_render_cells {
            self.output.max_render_cells = max_render_cells;
        }
        if cli_overrides.verbose {
            self.logging.level = LogLevel::Debug;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub max_iterations: Option<usize>,
    pub storage_dir: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub max_render_cells: Option<u64>,
    pub verbose: bool,
}

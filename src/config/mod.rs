//! Configuration management for the board service

pub mod settings;

pub use settings::{
    CliOverrides, LogLevel, LoggingConfig, OutputConfig, OutputFormat, Settings, SimulationConfig,
    StorageConfig,
};

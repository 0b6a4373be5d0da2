//! fieldpath Settings Crate
//!
//! Handles editor configuration: grid density, canvas size, robot footprint,
//! output format and field image, persisted as TOML or JSON.

pub mod config;
pub mod error;

pub use config::{
    CanvasSettings, Config, FieldImage, FieldSettings, GridSettings, OutputSettings,
    RobotSettings, CONFIG_FILE_NAME,
};
pub use error::{SettingsError, SettingsResult};

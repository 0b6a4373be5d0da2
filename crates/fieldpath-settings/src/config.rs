//! Configuration and settings management for fieldpath
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in the platform configuration directory.
//!
//! Configuration is organized into logical sections:
//! - Grid density
//! - Canvas size
//! - Robot footprint for the path overlay
//! - Output format of the generated program
//! - Field image selection

use fieldpath_core::is_valid_canvas_size;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SettingsError, SettingsResult};

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Grid settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Pixels per grid cell
    pub size: u32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self { size: 10 }
    }
}

/// Canvas settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Edge length of the square canvas in pixels
    pub size: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self { size: 2000.0 }
    }
}

/// Robot footprint used by the path overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotSettings {
    pub width_in: f64,
    pub height_in: f64,
}

impl Default for RobotSettings {
    fn default() -> Self {
        Self {
            width_in: 15.0,
            height_in: 15.0,
        }
    }
}

/// Generated program settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Output format name
    pub format: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: "libks-mtpoint".to_string(),
        }
    }
}

/// Field image selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldImage {
    /// Head-to-head match field
    #[default]
    V5rc,
    /// Skills challenge field
    V5rcSkills,
}

impl FieldImage {
    pub const ALL: [FieldImage; 2] = [FieldImage::V5rc, FieldImage::V5rcSkills];

    /// Location of the 2000×2000 field image.
    pub fn url(&self) -> &'static str {
        match self {
            Self::V5rc => "https://raw.githubusercontent.com/NoozAbooz/210K-HighStakes-2025/V1/website/path/V5RC-HighStakes-H2H-2000x2000.png",
            Self::V5rcSkills => "https://raw.githubusercontent.com/NoozAbooz/210K-HighStakes-2025/V1/website/path/V5RC-HighStakes-Skills-2000x2000.png",
        }
    }
}

impl std::fmt::Display for FieldImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::V5rc => write!(f, "v5rc"),
            Self::V5rcSkills => write!(f, "v5rc-skills"),
        }
    }
}

impl std::str::FromStr for FieldImage {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|image| image.to_string() == s)
            .ok_or_else(|| SettingsError::invalid("field.image", format!("unknown field '{}'", s)))
    }
}

/// Field settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    pub image: FieldImage,
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub grid: GridSettings,
    pub canvas: CanvasSettings,
    pub robot: RobotSettings,
    pub output: OutputSettings,
    pub field: FieldSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config location: `<config dir>/fieldpath/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform config directory".to_string())
        })?;
        path.push("fieldpath");
        path.push(CONFIG_FILE_NAME);
        Ok(path)
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match Self::format_of(path)? {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, or the defaults when the file does not exist yet.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Save config to file (JSON or TOML), creating the parent directory.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Self::format_of(path)? {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.grid.size == 0 {
            return Err(SettingsError::invalid("grid.size", "must be > 0"));
        }

        if !is_valid_canvas_size(self.canvas.size) {
            return Err(SettingsError::invalid("canvas.size", "must be > 0"));
        }

        if !(self.robot.width_in > 0.0 && self.robot.height_in > 0.0) {
            return Err(SettingsError::invalid("robot", "dimensions must be > 0"));
        }

        if self.output.format.trim().is_empty() {
            return Err(SettingsError::invalid("output.format", "must not be empty"));
        }

        Ok(())
    }

    fn format_of(path: &Path) -> SettingsResult<FileFormat> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(FileFormat::Json),
            Some("toml") => Ok(FileFormat::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

enum FileFormat {
    Json,
    Toml,
}

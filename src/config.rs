//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`ORIENT_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env, Serialized}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use orient3d_math::{EulerAngles, EulerConvention, MatrixLayout};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Composition order and roll sign
    #[serde(default)]
    pub convention: EulerConvention,
    /// Rotation axes for yaw, pitch and roll
    #[serde(default)]
    pub axes: AxesConfig,
    /// Report output configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Sample orientations to evaluate
    #[serde(default)]
    pub samples: SamplesConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`ORIENT_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // ORIENT_CONVENTION__NEGATE_ROLL=true -> convention.negate_roll = true
        figment = figment.merge(Env::prefixed("ORIENT_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Rotation axes, kept untyped so a malformed file is reported as an
/// invalid axis rather than a parse failure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxesConfig {
    /// Yaw axis
    pub yaw: Vec<f32>,
    /// Pitch axis
    pub pitch: Vec<f32>,
    /// Roll axis
    pub roll: Vec<f32>,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            yaw: vec![0.0, 1.0, 0.0],
            pitch: vec![1.0, 0.0, 0.0],
            roll: vec![0.0, 0.0, 1.0],
        }
    }
}

/// Report output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Storage order used when printing matrices
    pub layout: MatrixLayout,
    /// Digits after the decimal point
    pub precision: usize,
    /// Print the single-axis quaternions and matrices, not just the result
    pub show_components: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            layout: MatrixLayout::RowMajor,
            precision: 4,
            show_components: true,
        }
    }
}

/// One sample orientation, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleConfig {
    #[serde(default)]
    pub yaw: f32,
    #[serde(default)]
    pub pitch: f32,
    #[serde(default)]
    pub roll: f32,
}

impl SampleConfig {
    pub const fn new(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self { yaw, pitch, roll }
    }

    /// Convert to radians
    pub fn to_angles(&self) -> EulerAngles {
        EulerAngles::from_degrees(self.yaw, self.pitch, self.roll)
    }
}

/// Sample orientations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplesConfig {
    /// Orientations evaluated in order
    pub angles: Vec<SampleConfig>,
}

impl Default for SamplesConfig {
    fn default() -> Self {
        Self {
            angles: vec![
                SampleConfig::new(0.0, 45.0, 0.0),
                SampleConfig::new(0.0, 90.0, 0.0),
                SampleConfig::new(0.0, 0.0, 45.0),
                SampleConfig::new(0.0, 0.0, 90.0),
            ],
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

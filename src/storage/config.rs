//! User profile and application configuration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::preferences::WeightGoal;

/// Unit system preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Metric units (kg, cm, ml)
    #[default]
    Metric,
    /// Imperial units (lbs, in, fl oz)
    Imperial,
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Units::Metric => write!(f, "Metric"),
            Units::Imperial => write!(f, "Imperial"),
        }
    }
}

/// User profile with body measurements and objective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Profile picture location
    pub profile_image: Option<String>,
    /// Weight in kilograms (20-300)
    pub weight_kg: f32,
    /// Height in centimeters (50-250)
    pub height_cm: f32,
    /// Body weight objective
    pub weight_goal: WeightGoal,
    /// Unit preference
    pub units: Units,
    /// Profile creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl Default for UserProfile {
    fn default() -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            email: String::new(),
            profile_image: None,
            weight_kg: 70.0,
            height_cm: 175.0,
            weight_goal: WeightGoal::Maintain,
            units: Units::Metric,
            created_at: now,
            updated_at: now,
        }
    }
}

impl UserProfile {
    /// Create a new user profile with the given name and email.
    pub fn new(name: String, email: String) -> Self {
        Self {
            name,
            email,
            ..Default::default()
        }
    }

    /// Update body weight.
    pub fn set_weight(&mut self, weight_kg: f32) -> Result<(), ProfileError> {
        if !Self::validate_weight(weight_kg) {
            return Err(ProfileError::InvalidWeight(weight_kg));
        }
        self.weight_kg = weight_kg;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Update height.
    pub fn set_height(&mut self, height_cm: f32) -> Result<(), ProfileError> {
        if !Self::validate_height(height_cm) {
            return Err(ProfileError::InvalidHeight(height_cm));
        }
        self.height_cm = height_cm;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Validate weight value (20-300 kg).
    pub fn validate_weight(weight: f32) -> bool {
        (20.0..=300.0).contains(&weight)
    }

    /// Validate height value (50-250 cm).
    pub fn validate_height(height: f32) -> bool {
        (50.0..=250.0).contains(&height)
    }

    /// Body mass index.
    pub fn bmi(&self) -> f32 {
        let height_m = self.height_cm / 100.0;
        self.weight_kg / (height_m * height_m)
    }

    /// Convert weight to the user's preferred units.
    pub fn display_weight(&self) -> (f32, &'static str) {
        match self.units {
            Units::Metric => (self.weight_kg, "kg"),
            Units::Imperial => (self.weight_kg * 2.20462, "lbs"),
        }
    }

    /// Convert height to the user's preferred units.
    pub fn display_height(&self) -> (f32, &'static str) {
        match self.units {
            Units::Metric => (self.height_cm, "cm"),
            Units::Imperial => (self.height_cm / 2.54, "in"),
        }
    }

    /// Convert a water volume to the user's preferred units.
    pub fn convert_volume(&self, volume_ml: f64) -> (f64, &'static str) {
        match self.units {
            Units::Metric => (volume_ml, "ml"),
            Units::Imperial => (volume_ml * 0.033814, "fl oz"),
        }
    }
}

/// Profile validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    #[error("Weight must be between 20 and 300 kg, got {0}")]
    InvalidWeight(f32),

    #[error("Height must be between 50 and 250 cm, got {0}")]
    InvalidHeight(f32),
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Daily goal targets
    #[serde(default)]
    pub goals: GoalSettings,
    /// Tracker behaviour
    #[serde(default)]
    pub tracker: TrackerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            goals: GoalSettings::default(),
            tracker: TrackerSettings::default(),
        }
    }
}

impl AppConfig {
    /// Check that every goal is a positive, finite number and no quick-add
    /// amount is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let goals = [
            ("calorie_goal_kcal", self.goals.calorie_goal_kcal),
            ("calorie_burn_goal_kcal", self.goals.calorie_burn_goal_kcal),
            ("water_goal_ml", self.goals.water_goal_ml),
            ("step_goal", self.goals.step_goal),
        ];

        for (name, value) in goals {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidGoal { name, value });
            }
        }

        if let Some(index) = self.tracker.quick_add_ml.iter().position(|amount| *amount == 0) {
            return Err(ConfigError::InvalidQuickAdd { index });
        }

        Ok(())
    }
}

/// Daily goal targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalSettings {
    /// Calories to consume per day
    pub calorie_goal_kcal: f64,
    /// Calories to burn per day
    pub calorie_burn_goal_kcal: f64,
    /// Water to drink per day in milliliters
    pub water_goal_ml: f64,
    /// Steps per day
    pub step_goal: f64,
}

impl Default for GoalSettings {
    fn default() -> Self {
        Self {
            calorie_goal_kcal: 2000.0,
            calorie_burn_goal_kcal: 500.0,
            water_goal_ml: 2000.0,
            step_goal: 10_000.0,
        }
    }
}

/// Tracker-related settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerSettings {
    /// Water amounts offered as one-tap buttons
    pub quick_add_ml: Vec<u32>,
    /// Entries shown in the recent activity list
    pub recent_log_len: usize,
}

impl TrackerSettings {
    /// Water amount for a quick-add button, numbered from 1.
    pub fn quick_add_amount(&self, button: usize) -> Option<f64> {
        button
            .checked_sub(1)
            .and_then(|index| self.quick_add_ml.get(index))
            .map(|ml| f64::from(*ml))
    }
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            quick_add_ml: vec![250, 500, 1000],
            recent_log_len: crate::goals::DEFAULT_RECENT_LOG_LEN,
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "nutritrack", "NutriTrack")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load application configuration from a file.
///
/// A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::info!("No config at {:?}, using defaults", path);
        return Ok(AppConfig {
            data_dir: get_data_dir(),
            ..Default::default()
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.validate()?;
    config.data_dir = get_data_dir();

    tracing::info!("Loaded config from {:?}", path);
    Ok(config)
}

/// Save application configuration to the default location.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save application configuration to a file.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    config.validate()?;

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content = toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),

    #[error("Invalid goal {name}: {value} (must be greater than zero)")]
    InvalidGoal { name: &'static str, value: f64 },

    #[error("Quick-add amount #{} must be greater than zero", .index + 1)]
    InvalidQuickAdd { index: usize },
}

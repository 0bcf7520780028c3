//! Configuration storage.

pub mod config;

pub use config::{AppConfig, ConfigError, GoalSettings, ProfileError, TrackerSettings, Units, UserProfile};

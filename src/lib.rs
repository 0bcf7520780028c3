//! NutriTrack - Daily Nutrition & Hydration Goal Tracking
//!
//! The domain core of a nutrition and wellness app. Tracks calories, water
//! and steps against daily goals, validates the preferences form, and exposes
//! derived display metrics. Every operation is a pure transformation over
//! values owned by the caller; rendering, navigation and persistence belong
//! to the presentation layer.

pub mod goals;
pub mod preferences;
pub mod recipes;
pub mod storage;

// Re-export commonly used types
pub use goals::{DailyStats, GoalError, GoalEvent, GoalMetric, MetricKind, ProgressTier};
pub use preferences::{PreferenceField, Preferences};
pub use storage::config::{AppConfig, UserProfile};

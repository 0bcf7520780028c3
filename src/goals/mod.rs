//! Daily goals module.
//!
//! Tracks bounded progress toward daily targets:
//! - Calorie, water and step metrics capped at their goal
//! - Contribution log and recent-activity view
//! - Progress ratio, display tier and goal-completion events

pub mod daily;
pub mod tracker;
pub mod types;

// Re-exports for convenience
pub use daily::{DailyStats, MetricSummary};
pub use tracker::Contribution;
pub use types::{
    GoalError, GoalEvent, GoalMetric, LogEntry, MetricKind, ProgressTier, DEFAULT_RECENT_LOG_LEN,
    HIGH_TIER_THRESHOLD, LOW_TIER_THRESHOLD,
};

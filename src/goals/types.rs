//! Daily goal type definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ratio below which progress is classified as [`ProgressTier::Low`].
pub const LOW_TIER_THRESHOLD: f64 = 0.3;

/// Ratio at or above which progress is classified as [`ProgressTier::High`].
pub const HIGH_TIER_THRESHOLD: f64 = 0.7;

/// Number of log entries shown in the "recent activity" list.
pub const DEFAULT_RECENT_LOG_LEN: usize = 5;

/// Kind of quantity tracked against a daily goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Calories consumed
    Calories,
    /// Calories burned through activity
    CaloriesBurned,
    /// Water intake
    Water,
    /// Step count
    Steps,
}

impl MetricKind {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            MetricKind::Calories => "Calories",
            MetricKind::CaloriesBurned => "Calories Burned",
            MetricKind::Water => "Water",
            MetricKind::Steps => "Steps",
        }
    }

    /// Get unit of measurement.
    pub fn unit(&self) -> &'static str {
        match self {
            MetricKind::Calories | MetricKind::CaloriesBurned => "kcal",
            MetricKind::Water => "ml",
            MetricKind::Steps => "steps",
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One contribution event recorded against a metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Requested amount, before any clamping to the goal
    pub amount: f64,
    /// When the contribution was made
    pub timestamp: DateTime<Utc>,
}

/// A bounded, accumulating quantity tracked against a daily target.
///
/// `consumed` always stays within `[0, goal]`. Updates never mutate in
/// place; every operation returns a new value so the caller decides which
/// state to keep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGoalMetric")]
pub struct GoalMetric {
    kind: MetricKind,
    consumed: f64,
    goal: f64,
    log: Vec<LogEntry>,
}

/// Unchecked wire form of [`GoalMetric`].
#[derive(Deserialize)]
struct RawGoalMetric {
    kind: MetricKind,
    consumed: f64,
    goal: f64,
    #[serde(default)]
    log: Vec<LogEntry>,
}

impl TryFrom<RawGoalMetric> for GoalMetric {
    type Error = GoalError;

    fn try_from(raw: RawGoalMetric) -> Result<Self, Self::Error> {
        if let Some(entry) = raw
            .log
            .iter()
            .find(|entry| !entry.amount.is_finite() || entry.amount <= 0.0)
        {
            return Err(GoalError::InvalidAmount(entry.amount));
        }

        let mut metric = Self::with_consumed(raw.kind, raw.goal, raw.consumed)?;
        metric.log = raw.log;
        Ok(metric)
    }
}

impl GoalMetric {
    /// Create an empty metric for the period.
    pub fn new(kind: MetricKind, goal: f64) -> Result<Self, GoalError> {
        Self::with_consumed(kind, goal, 0.0)
    }

    /// Create a metric with an amount already logged.
    ///
    /// The starting amount is clamped into `[0, goal]`.
    pub fn with_consumed(kind: MetricKind, goal: f64, consumed: f64) -> Result<Self, GoalError> {
        if !goal.is_finite() || goal <= 0.0 {
            return Err(GoalError::DivisionByZero { goal });
        }
        if !consumed.is_finite() {
            return Err(GoalError::InvalidAmount(consumed));
        }

        Ok(Self {
            kind,
            consumed: consumed.clamp(0.0, goal),
            goal,
            log: Vec::new(),
        })
    }

    /// Kind of quantity tracked.
    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    /// Amount logged so far in the current period.
    pub fn consumed(&self) -> f64 {
        self.consumed
    }

    /// Target amount for the period.
    pub fn goal(&self) -> f64 {
        self.goal
    }

    /// Every contribution in chronological order.
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    /// Amount still needed to reach the goal.
    pub fn remaining(&self) -> f64 {
        (self.goal - self.consumed).max(0.0)
    }

    /// Whether the goal has been reached.
    pub fn is_complete(&self) -> bool {
        self.consumed >= self.goal
    }

    pub(crate) fn with_update(&self, consumed: f64, entry: LogEntry) -> Self {
        let mut log = self.log.clone();
        log.push(entry);
        Self {
            kind: self.kind,
            consumed,
            goal: self.goal,
            log,
        }
    }

    /// Same goal, nothing logged. Used when a new day begins.
    pub fn start_new_period(&self) -> Self {
        Self {
            kind: self.kind,
            consumed: 0.0,
            goal: self.goal,
            log: Vec::new(),
        }
    }
}

/// Coarse classification of a progress ratio for display styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressTier {
    /// Below 30% of the goal
    Low,
    /// 30% up to 70% of the goal
    Mid,
    /// 70% of the goal or more
    High,
}

impl ProgressTier {
    /// Classify a progress ratio.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < LOW_TIER_THRESHOLD {
            ProgressTier::Low
        } else if ratio < HIGH_TIER_THRESHOLD {
            ProgressTier::Mid
        } else {
            ProgressTier::High
        }
    }

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProgressTier::Low => "low",
            ProgressTier::Mid => "mid",
            ProgressTier::High => "high",
        }
    }
}

impl std::fmt::Display for ProgressTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Signal raised for the presentation layer to react to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GoalEvent {
    /// The contribution that carried the metric up to its goal.
    GoalCompleted {
        kind: MetricKind,
        goal: f64,
        completed_at: DateTime<Utc>,
    },
}

/// Goal tracking errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GoalError {
    #[error("Invalid amount: {0} (must be a finite number greater than zero)")]
    InvalidAmount(f64),

    #[error("Division by zero: goal must be greater than zero, got {goal}")]
    DivisionByZero { goal: f64 },

    #[error("Metric not tracked on the dashboard: {0}")]
    UnknownMetric(MetricKind),
}

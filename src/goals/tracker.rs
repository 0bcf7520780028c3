//! Contribution and progress operations on goal metrics.

use chrono::{DateTime, Utc};

use super::types::{GoalError, GoalEvent, GoalMetric, LogEntry, ProgressTier};

/// Result of logging a contribution.
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    /// Updated metric
    pub metric: GoalMetric,
    /// Set only when this contribution completed the goal
    pub event: Option<GoalEvent>,
}

impl GoalMetric {
    /// Log a contribution timestamped now.
    pub fn add_contribution(&self, amount: f64) -> Result<Contribution, GoalError> {
        self.add_contribution_at(amount, Utc::now())
    }

    /// Log a contribution with a caller-supplied timestamp.
    ///
    /// The consumed amount is capped at the goal and any excess is
    /// discarded, but the log records the full requested amount.
    pub fn add_contribution_at(
        &self,
        amount: f64,
        timestamp: DateTime<Utc>,
    ) -> Result<Contribution, GoalError> {
        if !amount.is_finite() || amount <= 0.0 {
            tracing::warn!("Rejected {} contribution of {}", self.kind(), amount);
            return Err(GoalError::InvalidAmount(amount));
        }

        let was_complete = self.is_complete();
        let consumed = (self.consumed() + amount).min(self.goal());
        let metric = self.with_update(consumed, LogEntry { amount, timestamp });

        tracing::debug!(
            "Logged {} {} of {}: {}/{}",
            amount,
            self.kind().unit(),
            self.kind(),
            consumed,
            self.goal()
        );

        let event = if !was_complete && metric.is_complete() {
            tracing::info!("{} goal of {} {} reached", self.kind(), self.goal(), self.kind().unit());
            Some(GoalEvent::GoalCompleted {
                kind: self.kind(),
                goal: self.goal(),
                completed_at: timestamp,
            })
        } else {
            None
        };

        Ok(Contribution { metric, event })
    }

    /// Fraction of the goal reached, in `[0, 1]`.
    pub fn progress_ratio(&self) -> Result<f64, GoalError> {
        if self.goal().is_nan() || self.goal() <= 0.0 {
            return Err(GoalError::DivisionByZero { goal: self.goal() });
        }
        Ok((self.consumed() / self.goal()).clamp(0.0, 1.0))
    }

    /// Progress as a whole-number percentage (0-100).
    pub fn percent(&self) -> Result<u8, GoalError> {
        Ok((self.progress_ratio()? * 100.0).round() as u8)
    }

    /// Display tier for the current progress.
    pub fn progress_tier(&self) -> Result<ProgressTier, GoalError> {
        self.progress_ratio().map(ProgressTier::from_ratio)
    }

    /// The last `n` log entries, oldest first.
    pub fn recent_log(&self, n: usize) -> &[LogEntry] {
        let log = self.log();
        &log[log.len().saturating_sub(n)..]
    }
}

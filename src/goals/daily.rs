//! Home dashboard aggregate of the day's tracked metrics.

use serde::{Deserialize, Serialize};

use super::types::{GoalError, GoalEvent, GoalMetric, MetricKind, ProgressTier};
use crate::storage::config::GoalSettings;

/// Today's calories, water and steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    pub calories: GoalMetric,
    pub water: GoalMetric,
    pub steps: GoalMetric,
}

/// Display-ready snapshot of one metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSummary {
    pub kind: MetricKind,
    pub unit: &'static str,
    pub consumed: f64,
    pub goal: f64,
    pub remaining: f64,
    pub ratio: f64,
    pub percent: u8,
    pub tier: ProgressTier,
}

impl MetricSummary {
    fn from_metric(metric: &GoalMetric) -> Result<Self, GoalError> {
        Ok(Self {
            kind: metric.kind(),
            unit: metric.kind().unit(),
            consumed: metric.consumed(),
            goal: metric.goal(),
            remaining: metric.remaining(),
            ratio: metric.progress_ratio()?,
            percent: metric.percent()?,
            tier: metric.progress_tier()?,
        })
    }
}

impl DailyStats {
    /// Start a fresh day from the configured goals.
    pub fn from_settings(settings: &GoalSettings) -> Result<Self, GoalError> {
        Ok(Self {
            calories: GoalMetric::new(MetricKind::Calories, settings.calorie_goal_kcal)?,
            water: GoalMetric::new(MetricKind::Water, settings.water_goal_ml)?,
            steps: GoalMetric::new(MetricKind::Steps, settings.step_goal)?,
        })
    }

    /// Look up a dashboard metric by kind.
    pub fn metric(&self, kind: MetricKind) -> Option<&GoalMetric> {
        match kind {
            MetricKind::Calories => Some(&self.calories),
            MetricKind::Water => Some(&self.water),
            MetricKind::Steps => Some(&self.steps),
            MetricKind::CaloriesBurned => None,
        }
    }

    fn metric_mut(&mut self, kind: MetricKind) -> Option<&mut GoalMetric> {
        match kind {
            MetricKind::Calories => Some(&mut self.calories),
            MetricKind::Water => Some(&mut self.water),
            MetricKind::Steps => Some(&mut self.steps),
            MetricKind::CaloriesBurned => None,
        }
    }

    /// Log a contribution against one of the dashboard metrics.
    pub fn contribute(
        &self,
        kind: MetricKind,
        amount: f64,
    ) -> Result<(Self, Option<GoalEvent>), GoalError> {
        let mut next = self.clone();
        let slot = next.metric_mut(kind).ok_or(GoalError::UnknownMetric(kind))?;
        let contribution = slot.add_contribution(amount)?;
        *slot = contribution.metric;

        Ok((next, contribution.event))
    }

    /// Snapshot of every metric in dashboard order.
    pub fn summary(&self) -> Result<Vec<MetricSummary>, GoalError> {
        [&self.calories, &self.water, &self.steps]
            .into_iter()
            .map(MetricSummary::from_metric)
            .collect()
    }

    /// Reset all metrics for a new day, keeping the goals.
    pub fn start_new_day(&self) -> Self {
        Self {
            calories: self.calories.start_new_period(),
            water: self.water.start_new_period(),
            steps: self.steps.start_new_period(),
        }
    }
}

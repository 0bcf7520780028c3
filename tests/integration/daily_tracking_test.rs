//! Integration tests for a day of tracking on the home dashboard.
//!
//! Tests the end-to-end flow:
//! 1. Load goals from a config file
//! 2. Build the dashboard and log contributions
//! 3. Read summaries, events and recent activity

use nutritrack::goals::{DailyStats, GoalEvent, GoalMetric, MetricKind, ProgressTier};
use nutritrack::storage::config::{load_config_from, save_config_to, AppConfig};
use tempfile::TempDir;

#[test]
fn test_water_scenario_caps_and_celebrates() {
    let metric = GoalMetric::with_consumed(MetricKind::Water, 2000.0, 1500.0).unwrap();

    let result = metric.add_contribution(1000.0).unwrap();

    assert_eq!(result.metric.consumed(), 2000.0);
    assert_eq!(result.metric.goal(), 2000.0);
    assert!(matches!(result.event, Some(GoalEvent::GoalCompleted { .. })));
    assert_eq!(result.metric.log().len(), 1);
    assert_eq!(result.metric.log()[0].amount, 1000.0);
}

#[test]
fn test_dashboard_day_from_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = AppConfig::default();
    config.goals.water_goal_ml = 1500.0;
    config.goals.step_goal = 8000.0;
    save_config_to(&config, &path).unwrap();

    let config = load_config_from(&path).unwrap();
    let mut stats = DailyStats::from_settings(&config.goals).unwrap();
    let mut events = Vec::new();

    let plan = [
        (MetricKind::Water, 250.0),
        (MetricKind::Calories, 650.0),
        (MetricKind::Water, 500.0),
        (MetricKind::Steps, 4000.0),
        (MetricKind::Water, 1000.0),
        (MetricKind::Water, 250.0),
        (MetricKind::Steps, 4500.0),
    ];

    for (kind, amount) in plan {
        let (next, event) = stats.contribute(kind, amount).unwrap();
        stats = next;
        events.extend(event);
    }

    // Water completes once, steps completes once, calories never
    assert_eq!(events.len(), 2);
    assert!(matches!(
        events[0],
        GoalEvent::GoalCompleted { kind: MetricKind::Water, .. }
    ));
    assert!(matches!(
        events[1],
        GoalEvent::GoalCompleted { kind: MetricKind::Steps, .. }
    ));

    let summary = stats.summary().unwrap();
    assert_eq!(summary[0].consumed, 650.0);
    assert_eq!(summary[0].tier, ProgressTier::Mid);
    assert_eq!(summary[1].consumed, 1500.0);
    assert_eq!(summary[1].percent, 100);
    assert_eq!(summary[2].remaining, 0.0);

    let recent = stats.water.recent_log(config.tracker.recent_log_len);
    let amounts: Vec<f64> = recent.iter().map(|entry| entry.amount).collect();
    assert_eq!(amounts, vec![250.0, 500.0, 1000.0, 250.0]);
}

#[test]
fn test_rejected_contribution_leaves_dashboard_unchanged() {
    let stats = DailyStats::from_settings(&AppConfig::default().goals).unwrap();
    let (stats, _) = stats.contribute(MetricKind::Water, 500.0).unwrap();

    assert!(stats.contribute(MetricKind::Water, -250.0).is_err());
    assert_eq!(stats.water.consumed(), 500.0);
    assert_eq!(stats.water.log().len(), 1);
}

#[test]
fn test_summary_serializes_for_display() {
    let stats = DailyStats::from_settings(&AppConfig::default().goals).unwrap();
    let (stats, _) = stats.contribute(MetricKind::Steps, 7500.0).unwrap();

    let json = serde_json::to_value(stats.summary().unwrap()).unwrap();
    assert_eq!(json[2]["kind"], "steps");
    assert_eq!(json[2]["tier"], "high");
    assert_eq!(json[2]["percent"], 75);
    assert_eq!(json[1]["unit"], "ml");
}

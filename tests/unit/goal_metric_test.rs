//! Unit tests for goal metric contributions and derived values.

use nutritrack::goals::{GoalError, GoalEvent, GoalMetric, MetricKind, ProgressTier};

fn metric(goal: f64, consumed: f64) -> GoalMetric {
    GoalMetric::with_consumed(MetricKind::Calories, goal, consumed).unwrap()
}

#[test]
fn test_clamping_formula() {
    let cases = [
        (2000.0, 0.0, 250.0),
        (2000.0, 1500.0, 499.0),
        (2000.0, 1500.0, 500.0),
        (2000.0, 1500.0, 501.0),
        (10_000.0, 9_999.0, 1e9),
        (1.5, 0.5, 0.25),
    ];

    for (goal, consumed, amount) in cases {
        let result = metric(goal, consumed).add_contribution(amount).unwrap();
        assert_eq!(result.metric.consumed(), (consumed + amount).min(goal));
        assert_eq!(result.metric.remaining(), goal - result.metric.consumed());
    }
}

#[test]
fn test_zero_amount_is_rejected() {
    let result = metric(2000.0, 100.0).add_contribution(0.0);
    assert_eq!(result, Err(GoalError::InvalidAmount(0.0)));
}

#[test]
fn test_goal_completed_fires_exactly_once() {
    let start = metric(2000.0, 1900.0);

    let first = start.add_contribution(200.0).unwrap();
    assert_eq!(first.metric.consumed(), 2000.0);
    match first.event {
        Some(GoalEvent::GoalCompleted { kind, goal, .. }) => {
            assert_eq!(kind, MetricKind::Calories);
            assert_eq!(goal, 2000.0);
        }
        None => panic!("expected completion event"),
    }

    let second = first.metric.add_contribution(50.0).unwrap();
    assert_eq!(second.metric.consumed(), 2000.0);
    assert!(second.event.is_none());
}

#[test]
fn test_metric_created_complete_never_fires() {
    let complete = metric(2000.0, 2000.0);
    let result = complete.add_contribution(10.0).unwrap();
    assert!(result.event.is_none());
    assert_eq!(result.metric.consumed(), 2000.0);
}

#[test]
fn test_metric_created_over_goal_never_fires() {
    let over = metric(2000.0, 3500.0);
    assert_eq!(over.consumed(), 2000.0);
    assert!(over.is_complete());

    let result = over.add_contribution(250.0).unwrap();
    assert!(result.event.is_none());
    assert_eq!(result.metric.consumed(), 2000.0);
    assert_eq!(result.metric.log().len(), 1);
}

#[test]
fn test_log_keeps_requested_amounts_in_order() {
    let mut current = GoalMetric::new(MetricKind::Water, 2000.0).unwrap();
    for amount in [250.0, 500.0, 1000.0, 1000.0] {
        current = current.add_contribution(amount).unwrap().metric;
    }

    let amounts: Vec<f64> = current.log().iter().map(|entry| entry.amount).collect();
    assert_eq!(amounts, vec![250.0, 500.0, 1000.0, 1000.0]);
    assert_eq!(current.consumed(), 2000.0);
    assert!(current.log().windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
}

#[test]
fn test_recent_log_on_short_log() {
    let current = GoalMetric::new(MetricKind::Water, 2000.0)
        .unwrap()
        .add_contribution(250.0)
        .unwrap()
        .metric;
    assert_eq!(current.recent_log(5).len(), 1);
    assert!(GoalMetric::new(MetricKind::Water, 2000.0).unwrap().recent_log(5).is_empty());
}

#[test]
fn test_tiers_follow_progress() {
    let tiers: Vec<ProgressTier> = [0.0, 599.0, 600.0, 1399.0, 1400.0, 2000.0]
        .into_iter()
        .map(|consumed| metric(2000.0, consumed).progress_tier().unwrap())
        .collect();

    assert_eq!(
        tiers,
        vec![
            ProgressTier::Low,
            ProgressTier::Low,
            ProgressTier::Mid,
            ProgressTier::Mid,
            ProgressTier::High,
            ProgressTier::High,
        ]
    );
}

#[test]
fn test_metric_serde_preserves_log() {
    let current = metric(2000.0, 0.0).add_contribution(300.0).unwrap().metric;
    let json = serde_json::to_string(&current).unwrap();
    let restored: GoalMetric = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, current);
}

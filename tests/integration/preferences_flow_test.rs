//! Integration tests for the preferences form.
//!
//! Covers editing, submission, reload and applying accepted values to the
//! dashboard goals.

use nutritrack::goals::DailyStats;
use nutritrack::preferences::{
    ActivityLevel, FieldState, MealPreference, NumericPreference, PreferenceError, PreferenceValues,
    Preferences, WeightGoal,
};
use nutritrack::recipes::recipes_for;
use nutritrack::storage::config::GoalSettings;

#[test]
fn test_non_numeric_calorie_intake_blocks_submit() {
    let prefs = Preferences::new()
        .update_field(NumericPreference::CalorieIntake, "abc")
        .update_field(NumericPreference::CalorieBurn, "400")
        .update_field(NumericPreference::WaterIntake, "2000");

    assert!(!prefs.calorie_intake.is_valid);
    assert!(!prefs.is_submittable());
    assert!(matches!(
        prefs.submit(),
        Err(PreferenceError::NotSubmittable { ref invalid }) if invalid == &vec!["calorie_intake"]
    ));
}

#[test]
fn test_categorical_choices_never_block() {
    let prefs = Preferences::new()
        .update_field(NumericPreference::CalorieIntake, "1800")
        .update_field(NumericPreference::CalorieBurn, "300")
        .update_field(NumericPreference::WaterIntake, "2500")
        .with_activity_level(ActivityLevel::Sedentary)
        .with_weight_goal(WeightGoal::Lose)
        .with_meal_preference(MealPreference::Pescatarian)
        .toggle_dietary_restriction("vegan")
        .toggle_dietary_restriction("vegan");

    assert!(prefs.is_submittable());
    assert!(prefs.dietary_restrictions.is_empty());
}

#[test]
fn test_submit_reload_and_apply_goals() {
    let prefs = Preferences::new()
        .update_field(NumericPreference::CalorieIntake, "2400")
        .update_field(NumericPreference::CalorieBurn, "600")
        .update_field(NumericPreference::WaterIntake, "3000")
        .toggle_dietary_restriction("gluten-free");

    let values = prefs.submit().unwrap();

    // Persisted by the caller, e.g. as JSON
    let saved = serde_json::to_string(&values).unwrap();
    let restored: PreferenceValues = serde_json::from_str(&saved).unwrap();

    let reloaded = Preferences::load(&restored);
    assert_eq!(reloaded.calorie_intake.state(), FieldState::Loaded);
    assert!(reloaded.is_submittable());
    assert!(reloaded.dietary_restrictions.contains("gluten-free"));

    let settings = restored.goal_settings(&GoalSettings::default());
    let stats = DailyStats::from_settings(&settings).unwrap();
    assert_eq!(stats.calories.goal(), 2400.0);
    assert_eq!(stats.water.goal(), 3000.0);
    assert_eq!(stats.steps.goal(), 10_000.0);

    assert_eq!(recipes_for(&reloaded.dietary_restrictions).len(), 3);
}

//! Nutrition preferences module.
//!
//! Holds the preferences form state: numeric targets with per-field
//! validation plus categorical choices and dietary restriction tags.

pub mod field;
pub mod types;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::storage::config::GoalSettings;

// Re-export types
pub use field::{update_field, validate_numeric_field, FieldState, PreferenceField};
pub use types::{ActivityLevel, MealPreference, WeightGoal, KNOWN_DIETARY_RESTRICTIONS};

/// Numeric fields on the preferences form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericPreference {
    CalorieIntake,
    CalorieBurn,
    WaterIntake,
}

impl NumericPreference {
    /// All numeric fields in form order.
    pub fn all() -> [NumericPreference; 3] {
        [
            NumericPreference::CalorieIntake,
            NumericPreference::CalorieBurn,
            NumericPreference::WaterIntake,
        ]
    }

    /// Stable field name.
    pub fn name(&self) -> &'static str {
        match self {
            NumericPreference::CalorieIntake => "calorie_intake",
            NumericPreference::CalorieBurn => "calorie_burn",
            NumericPreference::WaterIntake => "water_intake",
        }
    }

    /// Get display label.
    pub fn label(&self) -> &'static str {
        match self {
            NumericPreference::CalorieIntake => "Calorie Intake",
            NumericPreference::CalorieBurn => "Calorie Burn",
            NumericPreference::WaterIntake => "Water Intake",
        }
    }
}

/// Add `tag` if absent, remove it if present.
pub fn toggle_dietary_restriction(restrictions: &BTreeSet<String>, tag: &str) -> BTreeSet<String> {
    let mut toggled = restrictions.clone();
    if !toggled.remove(tag) {
        toggled.insert(tag.to_string());
    }
    toggled
}

/// Preferences form state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub calorie_intake: PreferenceField,
    pub calorie_burn: PreferenceField,
    pub water_intake: PreferenceField,
    pub activity_level: ActivityLevel,
    pub weight_goal: WeightGoal,
    pub meal_preference: MealPreference,
    pub dietary_restrictions: BTreeSet<String>,
}

/// Accepted preferences, ready to persist or apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceValues {
    pub calorie_intake: f64,
    pub calorie_burn: f64,
    pub water_intake: f64,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub weight_goal: WeightGoal,
    #[serde(default)]
    pub meal_preference: MealPreference,
    #[serde(default)]
    pub dietary_restrictions: BTreeSet<String>,
}

impl PreferenceValues {
    /// Daily goals implied by these preferences.
    ///
    /// Settings without a preference counterpart are taken from `base`.
    pub fn goal_settings(&self, base: &GoalSettings) -> GoalSettings {
        GoalSettings {
            calorie_goal_kcal: self.calorie_intake,
            calorie_burn_goal_kcal: self.calorie_burn,
            water_goal_ml: self.water_intake,
            ..base.clone()
        }
    }
}

impl Preferences {
    /// Create an empty form with default choices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the form from saved values. Fields come back untouched.
    pub fn load(values: &PreferenceValues) -> Self {
        Self {
            calorie_intake: PreferenceField::loaded(values.calorie_intake),
            calorie_burn: PreferenceField::loaded(values.calorie_burn),
            water_intake: PreferenceField::loaded(values.water_intake),
            activity_level: values.activity_level,
            weight_goal: values.weight_goal,
            meal_preference: values.meal_preference,
            dietary_restrictions: values.dietary_restrictions.clone(),
        }
    }

    /// Get a numeric field.
    pub fn field(&self, which: NumericPreference) -> &PreferenceField {
        match which {
            NumericPreference::CalorieIntake => &self.calorie_intake,
            NumericPreference::CalorieBurn => &self.calorie_burn,
            NumericPreference::WaterIntake => &self.water_intake,
        }
    }

    fn field_mut(&mut self, which: NumericPreference) -> &mut PreferenceField {
        match which {
            NumericPreference::CalorieIntake => &mut self.calorie_intake,
            NumericPreference::CalorieBurn => &mut self.calorie_burn,
            NumericPreference::WaterIntake => &mut self.water_intake,
        }
    }

    /// Apply an edit to one numeric field.
    pub fn update_field(&self, which: NumericPreference, raw_value: &str) -> Self {
        let mut next = self.clone();
        let field = next.field_mut(which);
        *field = field.update(raw_value);
        if !field.is_valid {
            tracing::debug!("{} rejected input {:?}", which.label(), raw_value);
        }
        next
    }

    /// Return one numeric field to its empty state.
    pub fn reset_field(&self, which: NumericPreference) -> Self {
        let mut next = self.clone();
        let field = next.field_mut(which);
        *field = field.reset();
        next
    }

    /// Replace the activity level.
    pub fn with_activity_level(&self, activity_level: ActivityLevel) -> Self {
        Self {
            activity_level,
            ..self.clone()
        }
    }

    /// Replace the weight goal.
    pub fn with_weight_goal(&self, weight_goal: WeightGoal) -> Self {
        Self {
            weight_goal,
            ..self.clone()
        }
    }

    /// Replace the meal preference.
    pub fn with_meal_preference(&self, meal_preference: MealPreference) -> Self {
        Self {
            meal_preference,
            ..self.clone()
        }
    }

    /// Toggle a dietary restriction tag.
    pub fn toggle_dietary_restriction(&self, tag: &str) -> Self {
        Self {
            dietary_restrictions: toggle_dietary_restriction(&self.dietary_restrictions, tag),
            ..self.clone()
        }
    }

    /// Numeric fields that currently fail validation, in form order.
    pub fn invalid_fields(&self) -> Vec<NumericPreference> {
        NumericPreference::all()
            .into_iter()
            .filter(|which| !self.field(*which).is_valid)
            .collect()
    }

    /// Whether every numeric field is valid.
    pub fn is_submittable(&self) -> bool {
        self.invalid_fields().is_empty()
    }

    /// Extract the accepted values, or list what blocks submission.
    pub fn submit(&self) -> Result<PreferenceValues, PreferenceError> {
        let invalid = self.invalid_fields();
        if !invalid.is_empty() {
            return Err(PreferenceError::NotSubmittable {
                invalid: invalid.iter().map(|which| which.name()).collect(),
            });
        }

        let value = |which: NumericPreference| {
            self.field(which).value().ok_or_else(|| PreferenceError::NotSubmittable {
                invalid: vec![which.name()],
            })
        };

        let values = PreferenceValues {
            calorie_intake: value(NumericPreference::CalorieIntake)?,
            calorie_burn: value(NumericPreference::CalorieBurn)?,
            water_intake: value(NumericPreference::WaterIntake)?,
            activity_level: self.activity_level,
            weight_goal: self.weight_goal,
            meal_preference: self.meal_preference,
            dietary_restrictions: self.dietary_restrictions.clone(),
        };

        tracing::info!(
            "Preferences accepted: {} kcal in, {} kcal out, {} ml water",
            values.calorie_intake,
            values.calorie_burn,
            values.water_intake
        );

        Ok(values)
    }
}

/// Preference submission errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreferenceError {
    #[error("Preferences not submittable, invalid fields: {}", .invalid.join(", "))]
    NotSubmittable { invalid: Vec<&'static str> },
}

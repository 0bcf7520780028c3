//! Categorical preference choices.

use serde::{Deserialize, Serialize};

/// Dietary restriction tags offered by the preferences form.
pub const KNOWN_DIETARY_RESTRICTIONS: [&str; 3] = ["vegetarian", "vegan", "gluten-free"];

/// Daily activity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Sedentary,
    #[default]
    Moderate,
    Active,
}

impl ActivityLevel {
    /// All choices in display order.
    pub fn all() -> [ActivityLevel; 3] {
        [ActivityLevel::Sedentary, ActivityLevel::Moderate, ActivityLevel::Active]
    }

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Moderate => "Moderate",
            ActivityLevel::Active => "Active",
        }
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Body weight objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightGoal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl WeightGoal {
    /// All choices in display order.
    pub fn all() -> [WeightGoal; 3] {
        [WeightGoal::Lose, WeightGoal::Maintain, WeightGoal::Gain]
    }

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            WeightGoal::Lose => "Lose",
            WeightGoal::Maintain => "Maintain",
            WeightGoal::Gain => "Gain",
        }
    }

    /// Match a free-text goal such as "lose weight".
    pub fn from_description(text: &str) -> Option<Self> {
        let text = text.trim().to_lowercase();
        if text.starts_with("lose") {
            Some(WeightGoal::Lose)
        } else if text.starts_with("maintain") {
            Some(WeightGoal::Maintain)
        } else if text.starts_with("gain") {
            Some(WeightGoal::Gain)
        } else {
            None
        }
    }
}

impl std::fmt::Display for WeightGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Preferred style of meals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealPreference {
    Vegetarian,
    Vegan,
    #[default]
    Omnivore,
    Pescatarian,
}

impl MealPreference {
    /// All choices in display order.
    pub fn all() -> [MealPreference; 4] {
        [
            MealPreference::Vegetarian,
            MealPreference::Vegan,
            MealPreference::Omnivore,
            MealPreference::Pescatarian,
        ]
    }

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            MealPreference::Vegetarian => "Vegetarian",
            MealPreference::Vegan => "Vegan",
            MealPreference::Omnivore => "Omnivore",
            MealPreference::Pescatarian => "Pescatarian",
        }
    }
}

impl std::fmt::Display for MealPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

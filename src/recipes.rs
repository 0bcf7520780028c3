//! Built-in recipe catalog.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A recipe card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Catalog identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Short description
    pub description: String,
    /// Card image location
    pub image_url: String,
    /// Dietary restriction tags this recipe satisfies
    pub dietary_tags: BTreeSet<String>,
}

impl Recipe {
    /// Create a new recipe without dietary tags.
    pub fn new(id: &str, title: &str, description: &str, image_url: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            image_url: image_url.to_string(),
            dietary_tags: BTreeSet::new(),
        }
    }

    /// Set the dietary tags.
    pub fn with_dietary_tags(mut self, tags: &[&str]) -> Self {
        self.dietary_tags = tags.iter().map(|tag| tag.to_string()).collect();
        self
    }

    /// Whether the recipe satisfies every given restriction.
    pub fn is_compatible_with(&self, restrictions: &BTreeSet<String>) -> bool {
        restrictions.is_subset(&self.dietary_tags)
    }

    fn matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(query) || self.description.to_lowercase().contains(query)
    }
}

/// The recipes shipped with the app.
pub fn builtin_recipes() -> Vec<Recipe> {
    let plant_based = ["vegetarian", "vegan", "gluten-free"];

    vec![
        Recipe::new(
            "1",
            "Lemon Water",
            "A refreshing drink to keep you hydrated.",
            "https://example.com/lemon-water.jpg",
        )
        .with_dietary_tags(&plant_based),
        Recipe::new(
            "2",
            "Cucumber Mint Water",
            "A cool drink perfect for summer.",
            "https://example.com/cucumber-mint-water.jpg",
        )
        .with_dietary_tags(&plant_based),
        Recipe::new(
            "3",
            "Berry Infused Water",
            "A sweet and fruity hydration option.",
            "https://example.com/berry-infused-water.jpg",
        )
        .with_dietary_tags(&plant_based),
    ]
}

/// Look up a built-in recipe by id.
pub fn find_recipe(id: &str) -> Option<Recipe> {
    builtin_recipes().into_iter().find(|recipe| recipe.id == id)
}

/// Case-insensitive search over titles and descriptions.
///
/// A blank query returns the whole catalog.
pub fn search_recipes(query: &str) -> Vec<Recipe> {
    let query = query.trim().to_lowercase();
    builtin_recipes()
        .into_iter()
        .filter(|recipe| query.is_empty() || recipe.matches(&query))
        .collect()
}

/// Built-in recipes that respect every dietary restriction.
pub fn recipes_for(restrictions: &BTreeSet<String>) -> Vec<Recipe> {
    builtin_recipes()
        .into_iter()
        .filter(|recipe| recipe.is_compatible_with(restrictions))
        .collect()
}

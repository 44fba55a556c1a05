//! # Domain models for recipes, content, and the shopping list
//!
//! Defines the data structures shared by every GlicoPlan frontend and the
//! server functions in the `api` crate. These types are `Serialize +
//! Deserialize` so they can cross the server/client boundary via Dioxus
//! server functions.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Recipe`] | A recipe card: title, category, difficulty, prep time, servings, glycemic index, ingredients, steps, and per-serving nutrition. |
//! | [`Ingredient`] | One ingredient line of a recipe — name, amount, free-text unit, and an aisle [`IngredientCategory`] used to group the shopping list. |
//! | [`NutritionInfo`] | Per-serving macros: calories plus carbs/protein/fat/fiber in grams. |
//! | [`ShoppingItem`] | One consolidated shopping-list line with a `checked` flag. |
//! | [`Article`] | An educational article: summary, body, and reading time. |
//! | [`GlossaryTerm`] | One term/definition pair of the glossary. |
//! | [`NutritionFact`] | One row of the nutrition-facts table: a food, its portion, macros, and glycemic index. |
//!
//! Recipe ids are opaque strings owned by the remote store. A recipe id held
//! elsewhere (a meal plan, a favorites list) can dangle if the recipe is
//! deleted server-side; consumers must tolerate ids that no longer resolve.

use serde::{Deserialize, Serialize};

/// Meal category a recipe belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeCategory {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Dessert,
}

impl RecipeCategory {
    pub const ALL: [RecipeCategory; 5] = [
        RecipeCategory::Breakfast,
        RecipeCategory::Lunch,
        RecipeCategory::Dinner,
        RecipeCategory::Snack,
        RecipeCategory::Dessert,
    ];

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            RecipeCategory::Breakfast => "Breakfast",
            RecipeCategory::Lunch => "Lunch",
            RecipeCategory::Dinner => "Dinner",
            RecipeCategory::Snack => "Snack",
            RecipeCategory::Dessert => "Dessert",
        }
    }

    /// The wire/database string for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeCategory::Breakfast => "breakfast",
            RecipeCategory::Lunch => "lunch",
            RecipeCategory::Dinner => "dinner",
            RecipeCategory::Snack => "snack",
            RecipeCategory::Dessert => "dessert",
        }
    }

    /// Parse a wire/database string. Unknown values map to `None`.
    pub fn parse(s: &str) -> Option<RecipeCategory> {
        Self::ALL.iter().copied().find(|c| c.as_str() == s)
    }
}

/// How demanding a recipe is to prepare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn parse(s: &str) -> Option<Difficulty> {
        Self::ALL.iter().copied().find(|d| d.as_str() == s)
    }
}

/// Shopping-list aisle an ingredient is grouped under.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    Produce,
    Protein,
    Grains,
    Dairy,
    Pantry,
    #[default]
    Other,
}

impl IngredientCategory {
    pub const ALL: [IngredientCategory; 6] = [
        IngredientCategory::Produce,
        IngredientCategory::Protein,
        IngredientCategory::Grains,
        IngredientCategory::Dairy,
        IngredientCategory::Pantry,
        IngredientCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IngredientCategory::Produce => "Produce",
            IngredientCategory::Protein => "Protein",
            IngredientCategory::Grains => "Grains",
            IngredientCategory::Dairy => "Dairy",
            IngredientCategory::Pantry => "Pantry",
            IngredientCategory::Other => "Other",
        }
    }
}

/// One ingredient line of a recipe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
    /// Free-text measurement unit: "g", "ml", "units", "cups".
    pub unit: String,
    #[serde(default)]
    pub category: IngredientCategory,
}

/// Per-serving macros for a recipe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct NutritionInfo {
    pub calories: f64,
    pub carbs_g: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub fiber_g: f64,
}

/// A recipe as served to the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: RecipeCategory,
    pub difficulty: Difficulty,
    pub prep_time_min: u32,
    pub servings: u32,
    /// Glycemic index of the dish, treated as an opaque scalar.
    pub glycemic_index: Option<u32>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<String>,
    pub nutrition: Option<NutritionInfo>,
}

/// One consolidated line of the shopping list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub category: IngredientCategory,
    #[serde(default)]
    pub checked: bool,
}

/// An educational article.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub body: String,
    pub category: String,
    pub reading_time_min: u32,
}

/// One entry of the glossary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlossaryTerm {
    pub id: String,
    pub term: String,
    pub definition: String,
}

/// One row of the nutrition-facts table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NutritionFact {
    pub id: String,
    pub food: String,
    /// Portion the values refer to: "100 g", "1 unit".
    pub portion: String,
    pub calories: f64,
    pub carbs_g: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub fiber_g: f64,
    pub glycemic_index: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_roundtrip() {
        for cat in RecipeCategory::ALL {
            assert_eq!(RecipeCategory::parse(cat.as_str()), Some(cat));
        }
        assert_eq!(RecipeCategory::parse("brunch"), None);
    }

    #[test]
    fn difficulty_roundtrip() {
        for d in Difficulty::ALL {
            assert_eq!(Difficulty::parse(d.as_str()), Some(d));
        }
        assert_eq!(Difficulty::parse(""), None);
    }

    #[test]
    fn ingredient_category_defaults_to_other() {
        let ing: Ingredient =
            serde_json::from_str(r#"{"name": "Eggs", "amount": 2.0, "unit": "units"}"#).unwrap();
        assert_eq!(ing.category, IngredientCategory::Other);
    }

    #[test]
    fn enums_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&RecipeCategory::Breakfast).unwrap(),
            "\"breakfast\""
        );
        assert_eq!(serde_json::to_string(&Difficulty::Easy).unwrap(), "\"easy\"");
        assert_eq!(
            serde_json::to_string(&IngredientCategory::Produce).unwrap(),
            "\"produce\""
        );
    }
}

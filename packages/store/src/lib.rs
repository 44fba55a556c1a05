pub mod filter;
pub mod models;
pub mod plan;
pub mod sample;
pub mod shopping;

pub use filter::{matches_term, RecipeFilter};
pub use models::{
    Article, Difficulty, GlossaryTerm, Ingredient, IngredientCategory, NutritionFact,
    NutritionInfo, Recipe, RecipeCategory, ShoppingItem,
};
pub use plan::{MealPlan, MealSlot, Weekday};
pub use shopping::consolidate;

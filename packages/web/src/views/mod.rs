mod glossary;
mod learn;
mod login;
mod nutrition_facts;
mod planner;
mod pricing;
mod recipe_detail;
mod recipes;
mod register;
mod shopping_list;

pub use glossary::Glossary;
pub use learn::Learn;
pub use login::Login;
pub use nutrition_facts::NutritionFacts;
pub use planner::Planner;
pub use pricing::Pricing;
pub use recipe_detail::RecipeDetail;
pub use recipes::Recipes;
pub use register::Register;
pub use shopping_list::ShoppingList;

//! Data models for the application.

mod catalog;
mod user;

#[cfg(feature = "server")]
pub use catalog::{ArticleRow, GlossaryRow, NutritionFactRow, RecipeRow, SubscriptionRow};
pub use catalog::{PlanOffer, SubscriptionInfo};
#[cfg(feature = "server")]
pub use user::User;
pub use user::UserInfo;

//! This crate contains all shared UI for the workspace.

pub mod remote;
pub use remote::{fetch_or, with_timeout, DataSource, DEFAULT_FETCH_TIMEOUT_SECS};

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

mod navbar;
pub use navbar::{Navbar, UserMenu};

mod source_badge;
pub use source_badge::{OnlineIndicator, SourceBadge};

mod recipe_card;
pub use recipe_card::RecipeCard;

mod filter_bar;
pub use filter_bar::FilterBar;

mod plan_grid;
pub use plan_grid::PlanGrid;

mod shopping_list;
pub use shopping_list::{format_amount, ShoppingListPanel};

mod nutrition_table;
pub use nutrition_table::NutritionTable;

mod billing;
pub use billing::{ManageBillingButton, SubscribeButton};

//! # API crate — shared fullstack server functions for GlicoPlan
//!
//! This crate is the backbone of the GlicoPlan fullstack architecture. It
//! defines every Dioxus server function the web frontend calls, along with
//! the supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | `server` | Argon2 password hashing and session access helpers |
//! | [`billing`] | `server` | Checkout and billing-portal sessions at the payment provider |
//! | [`db`] | — | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | — | Database rows and their client-safe projections |
//! | [`settings`] | `server` | Typed settings: defaults → `config.toml` → environment |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function,
//! annotated with `#[get(...)]` or `#[post(...)]` and compiled twice: once
//! with full server logic (behind `#[cfg(feature = "server")]`) and once as
//! a thin client stub that simply forwards the call over HTTP.
//!
//! - **Authentication**: `get_current_user`, `register`, `login_password`, `logout`
//! - **Catalog**: `list_recipes`, `get_recipe`, `list_articles`, `list_glossary_terms`, `list_nutrition_facts`
//! - **Favorites**: `list_favorites`, `add_favorite`, `remove_favorite`
//! - **Meal plan**: `get_meal_plan`, `save_meal_plan`
//! - **Billing**: `list_plans`, `get_subscription`, `create_checkout_session`, `create_billing_portal_session`

use dioxus::prelude::*;

pub mod auth;
#[cfg(feature = "server")]
pub mod billing;
pub mod db;
pub mod models;
#[cfg(feature = "server")]
pub mod settings;

pub use models::{PlanOffer, SubscriptionInfo, UserInfo};
pub use store::{Article, GlossaryTerm, MealPlan, NutritionFact, Recipe};

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let Some(user_id) = auth::current_user_id(&session).await? else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Register a new user with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/register", session: tower_sessions::Session)]
pub async fn register(
    email: String,
    password: String,
    name: String,
) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();
    let name = name.trim().to_string();

    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Invalid email address"));
    }
    if password.len() < 8 {
        return Err(ServerFnError::new(
            "Password must be at least 8 characters",
        ));
    }
    if name.is_empty() {
        return Err(ServerFnError::new("Name is required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // Check if user already exists
    let existing: Option<(i32,)> = sqlx::query_as(
        "SELECT 1 as n FROM users WHERE provider = 'local' AND provider_id = $1",
    )
    .bind(&email)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new(
            "An account with this email already exists",
        ));
    }

    let password_hash = auth::hash_password(&password).map_err(ServerFnError::new)?;

    let user: models::User = sqlx::query_as(
        "INSERT INTO users (email, name, provider, provider_id, password_hash) VALUES ($1, $2, 'local', $1, $3) RETURNING *",
    )
    .bind(&email)
    .bind(&name)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(
    email: String,
    password: String,
    name: String,
) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login-password", session: tower_sessions::Session)]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::User> = sqlx::query_as(
        "SELECT * FROM users WHERE provider = 'local' AND provider_id = $1",
    )
    .bind(&email)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let Some(ref hash) = user.password_hash else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let valid = auth::verify_password(&password, hash).map_err(ServerFnError::new)?;

    if !valid {
        return Err(ServerFnError::new("Invalid email or password"));
    }

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login-password")]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// List the recipe catalog, alphabetically by title.
#[cfg(feature = "server")]
#[get("/api/recipes")]
pub async fn list_recipes() -> Result<Vec<Recipe>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::RecipeRow;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<RecipeRow> = sqlx::query_as("SELECT * FROM recipes ORDER BY title")
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.into_iter().filter_map(RecipeRow::into_recipe).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/recipes")]
pub async fn list_recipes() -> Result<Vec<Recipe>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Fetch a single recipe by id. `None` if the id is unknown or malformed —
/// meal plans can reference recipes deleted after they were planned.
#[cfg(feature = "server")]
#[get("/api/recipes/:id")]
pub async fn get_recipe(id: String) -> Result<Option<Recipe>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::RecipeRow;

    let Ok(recipe_id) = uuid::Uuid::parse_str(&id) else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<RecipeRow> = sqlx::query_as("SELECT * FROM recipes WHERE id = $1")
        .bind(recipe_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.and_then(RecipeRow::into_recipe))
}

#[cfg(not(feature = "server"))]
#[get("/api/recipes/:id")]
pub async fn get_recipe(id: String) -> Result<Option<Recipe>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List educational articles, newest first.
#[cfg(feature = "server")]
#[get("/api/articles")]
pub async fn list_articles() -> Result<Vec<Article>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::ArticleRow;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<ArticleRow> = sqlx::query_as("SELECT * FROM articles ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.into_iter().map(ArticleRow::into_article).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/articles")]
pub async fn list_articles() -> Result<Vec<Article>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List glossary terms, alphabetically.
#[cfg(feature = "server")]
#[get("/api/glossary")]
pub async fn list_glossary_terms() -> Result<Vec<GlossaryTerm>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::GlossaryRow;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<GlossaryRow> = sqlx::query_as("SELECT * FROM glossary_terms ORDER BY term")
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.into_iter().map(GlossaryRow::into_term).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/glossary")]
pub async fn list_glossary_terms() -> Result<Vec<GlossaryTerm>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List the nutrition-facts table, alphabetically by food.
#[cfg(feature = "server")]
#[get("/api/nutrition-facts")]
pub async fn list_nutrition_facts() -> Result<Vec<NutritionFact>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::NutritionFactRow;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<NutritionFactRow> =
        sqlx::query_as("SELECT * FROM nutrition_facts ORDER BY food")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.into_iter().map(NutritionFactRow::into_fact).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/nutrition-facts")]
pub async fn list_nutrition_facts() -> Result<Vec<NutritionFact>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Recipe ids the current user has favorited. Empty for anonymous sessions.
#[cfg(feature = "server")]
#[get("/api/favorites", session: tower_sessions::Session)]
pub async fn list_favorites() -> Result<Vec<String>, ServerFnError> {
    use crate::db::get_pool;

    let Some(user_id) = auth::current_user_id(&session).await? else {
        return Ok(Vec::new());
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<(uuid::Uuid,)> =
        sqlx::query_as("SELECT recipe_id FROM favorites WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.into_iter().map(|(id,)| id.to_string()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/favorites")]
pub async fn list_favorites() -> Result<Vec<String>, ServerFnError> {
    Ok(Vec::new())
}

/// Favorite a recipe. Favoriting twice is a no-op.
#[cfg(feature = "server")]
#[post("/api/favorites/add", session: tower_sessions::Session)]
pub async fn add_favorite(recipe_id: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let user_id = auth::require_user_id(&session).await?;
    let recipe_id =
        uuid::Uuid::parse_str(&recipe_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query(
        "INSERT INTO favorites (user_id, recipe_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
    )
    .bind(user_id)
    .bind(recipe_id)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/favorites/add")]
pub async fn add_favorite(recipe_id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Remove a recipe from the current user's favorites.
#[cfg(feature = "server")]
#[post("/api/favorites/remove", session: tower_sessions::Session)]
pub async fn remove_favorite(recipe_id: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let user_id = auth::require_user_id(&session).await?;
    let recipe_id =
        uuid::Uuid::parse_str(&recipe_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND recipe_id = $2")
        .bind(user_id)
        .bind(recipe_id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/favorites/remove")]
pub async fn remove_favorite(recipe_id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// The current user's weekly meal plan. A user who never saved one gets the
/// empty plan.
#[cfg(feature = "server")]
#[get("/api/plan", session: tower_sessions::Session)]
pub async fn get_meal_plan() -> Result<MealPlan, ServerFnError> {
    use crate::db::get_pool;

    let user_id = auth::require_user_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<(serde_json::Value,)> =
        sqlx::query_as("SELECT plan FROM meal_plans WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    match row {
        Some((value,)) => {
            serde_json::from_value(value).map_err(|e| ServerFnError::new(e.to_string()))
        }
        None => Ok(MealPlan::new()),
    }
}

#[cfg(not(feature = "server"))]
#[get("/api/plan")]
pub async fn get_meal_plan() -> Result<MealPlan, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Save the current user's weekly meal plan, replacing the stored one.
#[cfg(feature = "server")]
#[post("/api/plan", session: tower_sessions::Session)]
pub async fn save_meal_plan(plan: MealPlan) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let user_id = auth::require_user_id(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let value = serde_json::to_value(&plan).map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query(
        "INSERT INTO meal_plans (user_id, plan) VALUES ($1, $2)
         ON CONFLICT (user_id) DO UPDATE SET plan = $2, updated_at = NOW()",
    )
    .bind(user_id)
    .bind(value)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/plan")]
pub async fn save_meal_plan(plan: MealPlan) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// The subscription plans offered on the pricing page.
#[cfg(feature = "server")]
#[get("/api/billing/plans")]
pub async fn list_plans() -> Result<Vec<PlanOffer>, ServerFnError> {
    let settings = settings::Settings::new().map_err(|e| ServerFnError::new(e.to_string()))?;

    let mut plans = Vec::new();
    if !settings.billing.monthly_price_id.is_empty() {
        plans.push(PlanOffer {
            price_id: settings.billing.monthly_price_id,
            name: "Monthly".into(),
            description: "Full access, billed monthly.".into(),
        });
    }
    if !settings.billing.yearly_price_id.is_empty() {
        plans.push(PlanOffer {
            price_id: settings.billing.yearly_price_id,
            name: "Yearly".into(),
            description: "Two months free, billed yearly.".into(),
        });
    }
    Ok(plans)
}

#[cfg(not(feature = "server"))]
#[get("/api/billing/plans")]
pub async fn list_plans() -> Result<Vec<PlanOffer>, ServerFnError> {
    Ok(Vec::new())
}

/// The current user's subscription, if any. `None` for anonymous sessions.
#[cfg(feature = "server")]
#[get("/api/billing/subscription", session: tower_sessions::Session)]
pub async fn get_subscription() -> Result<Option<SubscriptionInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::SubscriptionRow;

    let Some(user_id) = auth::current_user_id(&session).await? else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<SubscriptionRow> =
        sqlx::query_as("SELECT * FROM subscriptions WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.map(|r| r.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/billing/subscription")]
pub async fn get_subscription() -> Result<Option<SubscriptionInfo>, ServerFnError> {
    Ok(None)
}

/// Create a checkout session for a plan and return the provider URL to
/// redirect the browser to.
#[cfg(feature = "server")]
#[post("/api/billing/checkout", session: tower_sessions::Session)]
pub async fn create_checkout_session(price_id: String) -> Result<String, ServerFnError> {
    use crate::billing::BillingClient;
    use crate::db::get_pool;
    use crate::models::User;

    let user_id = auth::require_user_id(&session).await?;

    let settings = settings::Settings::new().map_err(|e| ServerFnError::new(e.to_string()))?;
    let client = BillingClient::new(settings.billing)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let customer_id = match existing_customer_id(pool, user_id).await? {
        Some(id) => id,
        None => {
            let user: User = sqlx::query_as("SELECT * FROM users WHERE id = $1")
                .bind(user_id)
                .fetch_one(pool)
                .await
                .map_err(|e| ServerFnError::new(e.to_string()))?;

            let customer_id = client
                .create_customer(&user.email)
                .await
                .map_err(|e| ServerFnError::new(e.to_string()))?;

            sqlx::query(
                "INSERT INTO subscriptions (user_id, customer_id, status, price_id)
                 VALUES ($1, $2, 'incomplete', $3)
                 ON CONFLICT (user_id) DO UPDATE SET customer_id = $2, updated_at = NOW()",
            )
            .bind(user_id)
            .bind(&customer_id)
            .bind(&price_id)
            .execute(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

            customer_id
        }
    };

    let url = client
        .create_checkout_session(&customer_id, &price_id)
        .await
        .map_err(|e| {
            tracing::error!("Checkout session creation failed: {}", e);
            ServerFnError::new(e.to_string())
        })?;

    Ok(url)
}

#[cfg(not(feature = "server"))]
#[post("/api/billing/checkout")]
pub async fn create_checkout_session(price_id: String) -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create a billing-portal session for the current user and return the
/// provider URL to redirect the browser to.
#[cfg(feature = "server")]
#[post("/api/billing/portal", session: tower_sessions::Session)]
pub async fn create_billing_portal_session() -> Result<String, ServerFnError> {
    use crate::billing::BillingClient;
    use crate::db::get_pool;

    let user_id = auth::require_user_id(&session).await?;

    let settings = settings::Settings::new().map_err(|e| ServerFnError::new(e.to_string()))?;
    let client = BillingClient::new(settings.billing)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(customer_id) = existing_customer_id(pool, user_id).await? else {
        return Err(ServerFnError::new("No billing account yet"));
    };

    let url = client
        .create_portal_session(&customer_id)
        .await
        .map_err(|e| {
            tracing::error!("Portal session creation failed: {}", e);
            ServerFnError::new(e.to_string())
        })?;

    Ok(url)
}

#[cfg(not(feature = "server"))]
#[post("/api/billing/portal")]
pub async fn create_billing_portal_session() -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Helper: the provider customer id stored for a user, if one exists.
#[cfg(feature = "server")]
async fn existing_customer_id(
    pool: &sqlx::PgPool,
    user_id: uuid::Uuid,
) -> Result<Option<String>, ServerFnError> {
    let row: Option<(String,)> =
        sqlx::query_as("SELECT customer_id FROM subscriptions WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.map(|(id,)| id))
}

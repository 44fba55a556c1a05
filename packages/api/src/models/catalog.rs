//! # Catalog and billing models
//!
//! The `*Row` structs (server only) mirror the database tables one-to-one
//! and derive [`sqlx::FromRow`]; nested recipe fields (ingredients, steps,
//! nutrition) live in JSONB columns and are decoded through
//! [`sqlx::types::Json`]. Each row projects into the corresponding `store`
//! domain type for the client, converting uuids to strings on the way.
//!
//! A row whose `category`/`difficulty` string no longer parses — an
//! operator typo, or a value from a newer schema — projects to `None` and
//! is dropped from listings rather than failing the whole read.
//!
//! [`SubscriptionInfo`] and [`PlanOffer`] are the client-safe billing
//! types: the former is the projection of a `subscriptions` row (provider
//! customer id omitted), the latter describes one purchasable plan on the
//! pricing page.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::types::Json;
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use store::models::{Difficulty, RecipeCategory};
#[cfg(feature = "server")]
use store::{Article, GlossaryTerm, Ingredient, NutritionFact, NutritionInfo, Recipe};
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full recipe record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct RecipeRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty: String,
    pub prep_time_min: i32,
    pub servings: i32,
    pub glycemic_index: Option<i32>,
    pub image_url: Option<String>,
    pub ingredients: Json<Vec<Ingredient>>,
    pub steps: Json<Vec<String>>,
    pub nutrition: Option<Json<NutritionInfo>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl RecipeRow {
    /// Project into the client-facing recipe. `None` if the stored
    /// category or difficulty string is not a known value.
    pub fn into_recipe(self) -> Option<Recipe> {
        Some(Recipe {
            id: self.id.to_string(),
            title: self.title,
            description: self.description,
            category: RecipeCategory::parse(&self.category)?,
            difficulty: Difficulty::parse(&self.difficulty)?,
            prep_time_min: self.prep_time_min.max(0) as u32,
            servings: self.servings.max(0) as u32,
            glycemic_index: self.glycemic_index.and_then(|gi| u32::try_from(gi).ok()),
            image_url: self.image_url,
            ingredients: self.ingredients.0,
            steps: self.steps.0,
            nutrition: self.nutrition.map(|n| n.0),
        })
    }
}

/// Educational article record.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct ArticleRow {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub body: String,
    pub category: String,
    pub reading_time_min: i32,
}

#[cfg(feature = "server")]
impl ArticleRow {
    pub fn into_article(self) -> Article {
        Article {
            id: self.id.to_string(),
            title: self.title,
            summary: self.summary,
            body: self.body,
            category: self.category,
            reading_time_min: self.reading_time_min.max(0) as u32,
        }
    }
}

/// Glossary entry record.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct GlossaryRow {
    pub id: Uuid,
    pub term: String,
    pub definition: String,
}

#[cfg(feature = "server")]
impl GlossaryRow {
    pub fn into_term(self) -> GlossaryTerm {
        GlossaryTerm {
            id: self.id.to_string(),
            term: self.term,
            definition: self.definition,
        }
    }
}

/// Nutrition-facts table record.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct NutritionFactRow {
    pub id: Uuid,
    pub food: String,
    pub portion: String,
    pub calories: f64,
    pub carbs_g: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub fiber_g: f64,
    pub glycemic_index: Option<i32>,
}

#[cfg(feature = "server")]
impl NutritionFactRow {
    pub fn into_fact(self) -> NutritionFact {
        NutritionFact {
            id: self.id.to_string(),
            food: self.food,
            portion: self.portion,
            calories: self.calories,
            carbs_g: self.carbs_g,
            protein_g: self.protein_g,
            fat_g: self.fat_g,
            fiber_g: self.fiber_g,
            glycemic_index: self.glycemic_index.and_then(|gi| u32::try_from(gi).ok()),
        }
    }
}

/// Subscription record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct SubscriptionRow {
    pub user_id: Uuid,
    /// Customer id at the payment provider.
    pub customer_id: String,
    pub status: String,
    pub price_id: String,
    pub current_period_end: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl SubscriptionRow {
    /// Convert to SubscriptionInfo for client consumption.
    pub fn to_info(&self) -> SubscriptionInfo {
        SubscriptionInfo {
            status: self.status.clone(),
            price_id: self.price_id.clone(),
            current_period_end: self.current_period_end.map(|t| t.to_rfc3339()),
        }
    }
}

/// Subscription state safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionInfo {
    /// Provider status string: "active", "trialing", "past_due", ...
    pub status: String,
    pub price_id: String,
    /// End of the paid period, RFC 3339.
    pub current_period_end: Option<String>,
}

impl SubscriptionInfo {
    /// Whether the subscription currently grants access.
    pub fn is_active(&self) -> bool {
        matches!(self.status.as_str(), "active" | "trialing")
    }
}

/// One purchasable plan on the pricing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanOffer {
    /// Price id at the payment provider, passed back to checkout.
    pub price_id: String,
    pub name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscription_active_states() {
        let mut sub = SubscriptionInfo {
            status: "active".into(),
            price_id: "price_1".into(),
            current_period_end: None,
        };
        assert!(sub.is_active());
        sub.status = "trialing".into();
        assert!(sub.is_active());
        sub.status = "past_due".into();
        assert!(!sub.is_active());
        sub.status = "canceled".into();
        assert!(!sub.is_active());
    }
}

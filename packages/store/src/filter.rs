//! # Client-side filter predicates
//!
//! Recipes are fetched once per page view and narrowed in memory. A
//! [`RecipeFilter`] holds the active filter values; [`RecipeFilter::apply`]
//! returns the recipes satisfying every active predicate, preserving input
//! order. An empty filter is the identity, and filtering is idempotent:
//! applying the same filter to its own output returns the same list.
//!
//! Text matching is case-insensitive and substring-based. The standalone
//! [`matches_term`] helper carries the same semantics and is reused by the
//! glossary and article search boxes.

use crate::models::{Difficulty, Recipe, RecipeCategory};

/// Active filter values for the recipe list. `None`/empty means inactive.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecipeFilter {
    /// Free-text term matched against title and description.
    pub term: String,
    pub category: Option<RecipeCategory>,
    pub difficulty: Option<Difficulty>,
    /// Inclusive ceiling. Recipes without a glycemic index are excluded
    /// while this is active.
    pub max_glycemic_index: Option<u32>,
    /// Inclusive ceiling on preparation time in minutes.
    pub max_prep_time_min: Option<u32>,
}

impl RecipeFilter {
    /// Whether no predicate is active.
    pub fn is_empty(&self) -> bool {
        self.term.trim().is_empty()
            && self.category.is_none()
            && self.difficulty.is_none()
            && self.max_glycemic_index.is_none()
            && self.max_prep_time_min.is_none()
    }

    /// Whether a single recipe satisfies every active predicate.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if !matches_term(&self.term, &[&recipe.title, &recipe.description]) {
            return false;
        }
        if let Some(category) = self.category {
            if recipe.category != category {
                return false;
            }
        }
        if let Some(difficulty) = self.difficulty {
            if recipe.difficulty != difficulty {
                return false;
            }
        }
        if let Some(max_gi) = self.max_glycemic_index {
            match recipe.glycemic_index {
                Some(gi) if gi <= max_gi => {}
                _ => return false,
            }
        }
        if let Some(max_prep) = self.max_prep_time_min {
            if recipe.prep_time_min > max_prep {
                return false;
            }
        }
        true
    }

    /// The subset of `recipes` satisfying every active predicate, in input
    /// order.
    pub fn apply(&self, recipes: &[Recipe]) -> Vec<Recipe> {
        recipes
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }
}

/// Case-insensitive substring match of `term` against any of `haystacks`.
/// A blank term matches everything.
pub fn matches_term(term: &str, haystacks: &[&str]) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    haystacks
        .iter()
        .any(|h| h.to_lowercase().contains(&term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, RecipeCategory};

    fn recipe(title: &str, category: RecipeCategory, gi: Option<u32>, prep: u32) -> Recipe {
        Recipe {
            id: title.to_lowercase().replace(' ', "-"),
            title: title.to_string(),
            description: String::new(),
            category,
            difficulty: Difficulty::Easy,
            prep_time_min: prep,
            servings: 2,
            glycemic_index: gi,
            image_url: None,
            ingredients: Vec::new(),
            steps: Vec::new(),
            nutrition: None,
        }
    }

    fn fixtures() -> Vec<Recipe> {
        vec![
            recipe("Spinach Omelette", RecipeCategory::Breakfast, Some(15), 10),
            recipe("Grilled Chicken Salad", RecipeCategory::Lunch, Some(25), 25),
            recipe("Oat Pancakes", RecipeCategory::Breakfast, Some(44), 20),
            recipe("Lentil Soup", RecipeCategory::Dinner, None, 40),
        ]
    }

    #[test]
    fn empty_filter_is_identity() {
        let recipes = fixtures();
        let filter = RecipeFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&recipes), recipes);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let filter = RecipeFilter {
            term: "soup".into(),
            ..Default::default()
        };
        assert!(filter.apply(&[]).is_empty());
    }

    #[test]
    fn term_match_is_case_insensitive() {
        let recipes = fixtures();
        let filter = RecipeFilter {
            term: "SPINACH".into(),
            ..Default::default()
        };
        let out = filter.apply(&recipes);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Spinach Omelette");
    }

    #[test]
    fn all_active_predicates_must_hold() {
        let recipes = fixtures();
        let filter = RecipeFilter {
            category: Some(RecipeCategory::Breakfast),
            max_glycemic_index: Some(40),
            ..Default::default()
        };
        // Oat Pancakes is breakfast but GI 44 > 40.
        let out = filter.apply(&recipes);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Spinach Omelette");
    }

    #[test]
    fn gi_ceiling_is_inclusive_and_excludes_unknown() {
        let recipes = fixtures();
        let filter = RecipeFilter {
            max_glycemic_index: Some(25),
            ..Default::default()
        };
        let out = filter.apply(&recipes);
        // GI 15 and GI 25 pass; GI 44 and the unknown-GI soup do not.
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|r| r.glycemic_index.unwrap() <= 25));
    }

    #[test]
    fn prep_time_ceiling() {
        let recipes = fixtures();
        let filter = RecipeFilter {
            max_prep_time_min: Some(20),
            ..Default::default()
        };
        assert_eq!(filter.apply(&recipes).len(), 2);
    }

    #[test]
    fn filtering_is_idempotent() {
        let recipes = fixtures();
        let filter = RecipeFilter {
            term: "o".into(),
            category: Some(RecipeCategory::Breakfast),
            ..Default::default()
        };
        let once = filter.apply(&recipes);
        let twice = filter.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn input_order_is_preserved() {
        let recipes = fixtures();
        let filter = RecipeFilter {
            category: Some(RecipeCategory::Breakfast),
            ..Default::default()
        };
        let titles: Vec<_> = filter.apply(&recipes).into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["Spinach Omelette", "Oat Pancakes"]);
    }

    #[test]
    fn matches_term_blank_matches_all() {
        assert!(matches_term("", &["anything"]));
        assert!(matches_term("   ", &["anything"]));
        assert!(matches_term("gly", &["Glycemic Index"]));
        assert!(!matches_term("fiber", &["Glycemic Index"]));
    }
}

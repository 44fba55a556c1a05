//! # Shopping-list consolidation
//!
//! Derives a shopping list from a week's [`MealPlan`]: every ingredient
//! referenced by a populated slot whose recipe id resolves is folded into
//! one line per ingredient identity, summing amounts.
//!
//! Identity is the case-insensitive ingredient name **plus** its unit. Two
//! entries sharing a name but measured in different units ("200 g" of
//! something vs "2 units" of it) stay separate lines rather than summing
//! across units. Within a group the first-seen spelling of the name is kept
//! for display and the last-seen aisle category wins.
//!
//! The result is sorted by aisle category, then name, so the UI renders the
//! list grouped the way a store is laid out. Totals are independent of slot
//! or recipe order; a plan with no populated slots — or whose ids all
//! dangle — yields an empty list.

use std::collections::HashMap;

use crate::models::{Recipe, ShoppingItem};
use crate::plan::MealPlan;

/// Fold every ingredient referenced by `plan` into consolidated shopping
/// items. Slots whose recipe id does not appear in `recipes` are skipped.
pub fn consolidate(plan: &MealPlan, recipes: &[Recipe]) -> Vec<ShoppingItem> {
    let by_id: HashMap<&str, &Recipe> = recipes.iter().map(|r| (r.id.as_str(), r)).collect();

    let mut groups: HashMap<(String, String), ShoppingItem> = HashMap::new();
    for id in plan.assigned_ids() {
        let Some(recipe) = by_id.get(id) else {
            continue;
        };
        for ingredient in &recipe.ingredients {
            let key = (ingredient.name.to_lowercase(), ingredient.unit.clone());
            groups
                .entry(key)
                .and_modify(|item| {
                    item.amount += ingredient.amount;
                    item.category = ingredient.category;
                })
                .or_insert_with(|| ShoppingItem {
                    name: ingredient.name.clone(),
                    amount: ingredient.amount,
                    unit: ingredient.unit.clone(),
                    category: ingredient.category,
                    checked: false,
                });
        }
    }

    let mut items: Vec<ShoppingItem> = groups.into_values().collect();
    items.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
    items
}

/// Flip the checked flag of the item at `index`. Out-of-range is a no-op.
pub fn toggle_checked(items: &mut [ShoppingItem], index: usize) {
    if let Some(item) = items.get_mut(index) {
        item.checked = !item.checked;
    }
}

/// Drop every checked item, keeping the rest in order.
pub fn remove_checked(items: Vec<ShoppingItem>) -> Vec<ShoppingItem> {
    items.into_iter().filter(|i| !i.checked).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, Ingredient, IngredientCategory, RecipeCategory};
    use crate::plan::{MealSlot, Weekday};

    fn recipe(id: &str, ingredients: Vec<Ingredient>) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            category: RecipeCategory::Lunch,
            difficulty: Difficulty::Easy,
            prep_time_min: 10,
            servings: 2,
            glycemic_index: None,
            image_url: None,
            ingredients,
            steps: Vec::new(),
            nutrition: None,
        }
    }

    fn ingredient(name: &str, amount: f64, unit: &str, category: IngredientCategory) -> Ingredient {
        Ingredient {
            name: name.to_string(),
            amount,
            unit: unit.to_string(),
            category,
        }
    }

    #[test]
    fn empty_plan_yields_empty_list() {
        let recipes = vec![recipe(
            "r-1",
            vec![ingredient("Eggs", 2.0, "units", IngredientCategory::Protein)],
        )];
        assert!(consolidate(&MealPlan::new(), &recipes).is_empty());
    }

    #[test]
    fn ovos_scenario_sums_across_slots() {
        // Two recipes both containing {name: "Ovos", amount: 2, unit: "unidades"}
        // placed in different slots consolidate to amount 4.
        let recipes = vec![
            recipe(
                "omelete",
                vec![ingredient("Ovos", 2.0, "unidades", IngredientCategory::Protein)],
            ),
            recipe(
                "panqueca",
                vec![ingredient("Ovos", 2.0, "unidades", IngredientCategory::Protein)],
            ),
        ];
        let mut plan = MealPlan::new();
        plan.assign(Weekday::Monday, MealSlot::Breakfast, "omelete");
        plan.assign(Weekday::Tuesday, MealSlot::Breakfast, "panqueca");

        let items = consolidate(&plan, &recipes);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Ovos");
        assert_eq!(items[0].amount, 4.0);
        assert_eq!(items[0].unit, "unidades");
        assert!(!items[0].checked);
    }

    #[test]
    fn name_match_is_case_insensitive_but_keeps_first_spelling() {
        let recipes = vec![
            recipe(
                "r-1",
                vec![ingredient("Tomato", 2.0, "units", IngredientCategory::Produce)],
            ),
            recipe(
                "r-2",
                vec![ingredient("tomato", 3.0, "units", IngredientCategory::Produce)],
            ),
        ];
        let mut plan = MealPlan::new();
        plan.assign(Weekday::Monday, MealSlot::Lunch, "r-1");
        plan.assign(Weekday::Monday, MealSlot::Dinner, "r-2");

        let items = consolidate(&plan, &recipes);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Tomato");
        assert_eq!(items[0].amount, 5.0);
    }

    #[test]
    fn mismatched_units_stay_separate() {
        let recipes = vec![
            recipe(
                "r-1",
                vec![ingredient("Oats", 100.0, "g", IngredientCategory::Grains)],
            ),
            recipe(
                "r-2",
                vec![ingredient("Oats", 1.0, "cups", IngredientCategory::Grains)],
            ),
        ];
        let mut plan = MealPlan::new();
        plan.assign(Weekday::Monday, MealSlot::Breakfast, "r-1");
        plan.assign(Weekday::Tuesday, MealSlot::Breakfast, "r-2");

        let items = consolidate(&plan, &recipes);
        assert_eq!(items.len(), 2);
        // Same name, different units — neither amount was summed.
        assert!(items.iter().any(|i| i.unit == "g" && i.amount == 100.0));
        assert!(items.iter().any(|i| i.unit == "cups" && i.amount == 1.0));
    }

    #[test]
    fn totals_are_order_independent() {
        let a = recipe(
            "r-a",
            vec![
                ingredient("Eggs", 2.0, "units", IngredientCategory::Protein),
                ingredient("Spinach", 80.0, "g", IngredientCategory::Produce),
            ],
        );
        let b = recipe(
            "r-b",
            vec![
                ingredient("Eggs", 3.0, "units", IngredientCategory::Protein),
                ingredient("Oats", 50.0, "g", IngredientCategory::Grains),
            ],
        );

        let mut plan = MealPlan::new();
        plan.assign(Weekday::Monday, MealSlot::Breakfast, "r-a");
        plan.assign(Weekday::Friday, MealSlot::Dinner, "r-b");

        let forward = consolidate(&plan, &[a.clone(), b.clone()]);
        let reverse = consolidate(&plan, &[b, a]);
        assert_eq!(forward, reverse);

        let eggs = forward.iter().find(|i| i.name == "Eggs").unwrap();
        assert_eq!(eggs.amount, 5.0);
    }

    #[test]
    fn dangling_recipe_ids_are_skipped() {
        let recipes = vec![recipe(
            "known",
            vec![ingredient("Eggs", 2.0, "units", IngredientCategory::Protein)],
        )];
        let mut plan = MealPlan::new();
        plan.assign(Weekday::Monday, MealSlot::Lunch, "known");
        plan.assign(Weekday::Monday, MealSlot::Dinner, "deleted-recipe");

        let items = consolidate(&plan, &recipes);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].amount, 2.0);
    }

    #[test]
    fn sorted_by_aisle_then_name() {
        let recipes = vec![recipe(
            "r-1",
            vec![
                ingredient("Olive oil", 10.0, "ml", IngredientCategory::Pantry),
                ingredient("Chicken breast", 200.0, "g", IngredientCategory::Protein),
                ingredient("Arugula", 50.0, "g", IngredientCategory::Produce),
                ingredient("Tomato", 2.0, "units", IngredientCategory::Produce),
            ],
        )];
        let mut plan = MealPlan::new();
        plan.assign(Weekday::Wednesday, MealSlot::Lunch, "r-1");

        let names: Vec<_> = consolidate(&plan, &recipes)
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["Arugula", "Tomato", "Chicken breast", "Olive oil"]);
    }

    #[test]
    fn toggle_and_remove_checked() {
        let mut items = vec![
            ShoppingItem {
                name: "Eggs".into(),
                amount: 4.0,
                unit: "units".into(),
                category: IngredientCategory::Protein,
                checked: false,
            },
            ShoppingItem {
                name: "Oats".into(),
                amount: 50.0,
                unit: "g".into(),
                category: IngredientCategory::Grains,
                checked: false,
            },
        ];

        toggle_checked(&mut items, 0);
        assert!(items[0].checked);
        toggle_checked(&mut items, 99); // out of range, no-op
        assert!(!items[1].checked);

        let rest = remove_checked(items);
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].name, "Oats");
    }
}

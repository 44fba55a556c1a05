//! Built-in example datasets.
//!
//! When a catalog fetch times out or fails, the views fall back to this
//! content instead of an error page. The data is also what a fresh install
//! shows before the remote catalog is populated.

use crate::models::{
    Article, Difficulty, GlossaryTerm, Ingredient, IngredientCategory, NutritionFact,
    NutritionInfo, Recipe, RecipeCategory,
};

fn ing(name: &str, amount: f64, unit: &str, category: IngredientCategory) -> Ingredient {
    Ingredient {
        name: name.to_string(),
        amount,
        unit: unit.to_string(),
        category,
    }
}

/// Example recipes shown when the catalog is unreachable.
pub fn sample_recipes() -> Vec<Recipe> {
    use IngredientCategory::*;

    vec![
        Recipe {
            id: "sample-spinach-omelette".into(),
            title: "Spinach Omelette".into(),
            description: "A low-carb breakfast staple, ready in ten minutes.".into(),
            category: RecipeCategory::Breakfast,
            difficulty: Difficulty::Easy,
            prep_time_min: 10,
            servings: 1,
            glycemic_index: Some(15),
            image_url: None,
            ingredients: vec![
                ing("Eggs", 2.0, "units", Protein),
                ing("Spinach", 80.0, "g", Produce),
                ing("Olive oil", 5.0, "ml", Pantry),
            ],
            steps: vec![
                "Whisk the eggs with a pinch of salt.".into(),
                "Wilt the spinach in olive oil over medium heat.".into(),
                "Pour in the eggs and cook until just set.".into(),
            ],
            nutrition: Some(NutritionInfo {
                calories: 210.0,
                carbs_g: 3.0,
                protein_g: 14.0,
                fat_g: 16.0,
                fiber_g: 1.5,
            }),
        },
        Recipe {
            id: "sample-oat-pancakes".into(),
            title: "Oat Pancakes".into(),
            description: "Blender pancakes sweetened with banana, no refined flour.".into(),
            category: RecipeCategory::Breakfast,
            difficulty: Difficulty::Easy,
            prep_time_min: 20,
            servings: 2,
            glycemic_index: Some(44),
            image_url: None,
            ingredients: vec![
                ing("Eggs", 2.0, "units", Protein),
                ing("Rolled oats", 100.0, "g", Grains),
                ing("Banana", 1.0, "units", Produce),
                ing("Cinnamon", 2.0, "g", Pantry),
            ],
            steps: vec![
                "Blend all ingredients into a smooth batter.".into(),
                "Cook small pancakes on a non-stick pan, two minutes per side.".into(),
            ],
            nutrition: Some(NutritionInfo {
                calories: 290.0,
                carbs_g: 42.0,
                protein_g: 12.0,
                fat_g: 8.0,
                fiber_g: 5.0,
            }),
        },
        Recipe {
            id: "sample-chicken-salad".into(),
            title: "Grilled Chicken Salad".into(),
            description: "Lean protein over greens with a lemon-oil dressing.".into(),
            category: RecipeCategory::Lunch,
            difficulty: Difficulty::Medium,
            prep_time_min: 25,
            servings: 2,
            glycemic_index: Some(20),
            image_url: None,
            ingredients: vec![
                ing("Chicken breast", 300.0, "g", Protein),
                ing("Arugula", 60.0, "g", Produce),
                ing("Tomato", 2.0, "units", Produce),
                ing("Olive oil", 15.0, "ml", Pantry),
                ing("Lemon", 1.0, "units", Produce),
            ],
            steps: vec![
                "Season and grill the chicken, then slice.".into(),
                "Toss the greens and tomato with oil and lemon juice.".into(),
                "Top with the sliced chicken.".into(),
            ],
            nutrition: Some(NutritionInfo {
                calories: 320.0,
                carbs_g: 6.0,
                protein_g: 38.0,
                fat_g: 15.0,
                fiber_g: 2.0,
            }),
        },
        Recipe {
            id: "sample-lentil-soup".into(),
            title: "Lentil Soup".into(),
            description: "High-fiber dinner that keeps glucose steady overnight.".into(),
            category: RecipeCategory::Dinner,
            difficulty: Difficulty::Medium,
            prep_time_min: 40,
            servings: 4,
            glycemic_index: Some(32),
            image_url: None,
            ingredients: vec![
                ing("Dried lentils", 250.0, "g", Pantry),
                ing("Carrot", 2.0, "units", Produce),
                ing("Onion", 1.0, "units", Produce),
                ing("Olive oil", 10.0, "ml", Pantry),
                ing("Vegetable broth", 1.0, "l", Pantry),
            ],
            steps: vec![
                "Sweat the onion and carrot in olive oil.".into(),
                "Add lentils and broth; simmer 30 minutes.".into(),
                "Season and serve.".into(),
            ],
            nutrition: Some(NutritionInfo {
                calories: 260.0,
                carbs_g: 40.0,
                protein_g: 16.0,
                fat_g: 4.0,
                fiber_g: 12.0,
            }),
        },
        Recipe {
            id: "sample-baked-salmon".into(),
            title: "Baked Salmon with Broccoli".into(),
            description: "Sheet-pan dinner rich in omega-3.".into(),
            category: RecipeCategory::Dinner,
            difficulty: Difficulty::Easy,
            prep_time_min: 30,
            servings: 2,
            glycemic_index: Some(10),
            image_url: None,
            ingredients: vec![
                ing("Salmon fillet", 300.0, "g", Protein),
                ing("Broccoli", 250.0, "g", Produce),
                ing("Olive oil", 10.0, "ml", Pantry),
                ing("Lemon", 1.0, "units", Produce),
            ],
            steps: vec![
                "Arrange salmon and broccoli on a tray, drizzle with oil.".into(),
                "Bake 20 minutes at 200 °C; finish with lemon.".into(),
            ],
            nutrition: Some(NutritionInfo {
                calories: 380.0,
                carbs_g: 8.0,
                protein_g: 34.0,
                fat_g: 23.0,
                fiber_g: 4.0,
            }),
        },
        Recipe {
            id: "sample-yogurt-bowl".into(),
            title: "Greek Yogurt Bowl".into(),
            description: "Protein-forward snack with berries and seeds.".into(),
            category: RecipeCategory::Snack,
            difficulty: Difficulty::Easy,
            prep_time_min: 5,
            servings: 1,
            glycemic_index: Some(28),
            image_url: None,
            ingredients: vec![
                ing("Greek yogurt", 170.0, "g", Dairy),
                ing("Blueberries", 50.0, "g", Produce),
                ing("Chia seeds", 10.0, "g", Pantry),
            ],
            steps: vec!["Spoon the yogurt into a bowl and top with berries and seeds.".into()],
            nutrition: Some(NutritionInfo {
                calories: 180.0,
                carbs_g: 16.0,
                protein_g: 17.0,
                fat_g: 6.0,
                fiber_g: 4.0,
            }),
        },
    ]
}

/// Example educational articles.
pub fn sample_articles() -> Vec<Article> {
    vec![
        Article {
            id: "sample-gi-basics".into(),
            title: "What the Glycemic Index Actually Measures".into(),
            summary: "Why two foods with the same carbs can move your glucose differently.".into(),
            body: "The glycemic index ranks carbohydrate-containing foods by how quickly \
                   they raise blood glucose compared with pure glucose. Foods under 55 are \
                   considered low-GI; fat, fiber, and protein in a meal all slow absorption. \
                   The index says nothing about portion size — a low-GI food eaten in large \
                   quantity can still produce a large glucose response, which is what \
                   glycemic load tries to capture."
                .into(),
            category: "Fundamentals".into(),
            reading_time_min: 4,
        },
        Article {
            id: "sample-plate-method".into(),
            title: "The Plate Method for Balanced Meals".into(),
            summary: "A portioning rule of thumb that needs no scale.".into(),
            body: "Fill half the plate with non-starchy vegetables, a quarter with lean \
                   protein, and the last quarter with high-fiber carbohydrates. Pairing \
                   carbs with protein and fat this way flattens the post-meal glucose curve \
                   without counting anything."
                .into(),
            category: "Practice".into(),
            reading_time_min: 3,
        },
        Article {
            id: "sample-fiber".into(),
            title: "Fiber: The Quiet Regulator".into(),
            summary: "Soluble fiber slows digestion and blunts glucose spikes.".into(),
            body: "Soluble fiber forms a gel in the gut that slows carbohydrate absorption. \
                   Oats, lentils, and chia are dependable sources. Aim for 25–35 g per day, \
                   increasing gradually to avoid discomfort."
                .into(),
            category: "Fundamentals".into(),
            reading_time_min: 3,
        },
    ]
}

/// Example glossary entries.
pub fn sample_glossary() -> Vec<GlossaryTerm> {
    vec![
        GlossaryTerm {
            id: "sample-gi".into(),
            term: "Glycemic Index (GI)".into(),
            definition: "A 0–100 rating of how quickly a food raises blood glucose relative \
                         to pure glucose. Values under 55 are considered low."
                .into(),
        },
        GlossaryTerm {
            id: "sample-gl".into(),
            term: "Glycemic Load (GL)".into(),
            definition: "GI weighted by the carbohydrate content of an actual portion; a \
                         better predictor of the real glucose response than GI alone."
                .into(),
        },
        GlossaryTerm {
            id: "sample-carb".into(),
            term: "Carbohydrate".into(),
            definition: "The macronutrient with the largest direct effect on blood glucose; \
                         includes sugars, starches, and fiber."
                .into(),
        },
        GlossaryTerm {
            id: "sample-fiber".into(),
            term: "Dietary Fiber".into(),
            definition: "Indigestible plant carbohydrate. Soluble fiber slows glucose \
                         absorption; insoluble fiber aids digestion."
                .into(),
        },
        GlossaryTerm {
            id: "sample-hba1c".into(),
            term: "HbA1c".into(),
            definition: "A blood marker reflecting average glucose over the previous two to \
                         three months."
                .into(),
        },
        GlossaryTerm {
            id: "sample-insulin".into(),
            term: "Insulin Resistance".into(),
            definition: "Reduced cellular response to insulin, requiring more of the hormone \
                         to move glucose out of the bloodstream."
                .into(),
        },
    ]
}

/// Example rows for the nutrition-facts table.
pub fn sample_nutrition_facts() -> Vec<NutritionFact> {
    fn fact(
        id: &str,
        food: &str,
        portion: &str,
        calories: f64,
        carbs: f64,
        protein: f64,
        fat: f64,
        fiber: f64,
        gi: Option<u32>,
    ) -> NutritionFact {
        NutritionFact {
            id: id.to_string(),
            food: food.to_string(),
            portion: portion.to_string(),
            calories,
            carbs_g: carbs,
            protein_g: protein,
            fat_g: fat,
            fiber_g: fiber,
            glycemic_index: gi,
        }
    }

    vec![
        fact("sample-nf-oats", "Rolled oats", "100 g", 389.0, 66.0, 17.0, 7.0, 10.0, Some(55)),
        fact("sample-nf-lentils", "Lentils, cooked", "100 g", 116.0, 20.0, 9.0, 0.4, 8.0, Some(32)),
        fact("sample-nf-egg", "Egg", "1 unit", 72.0, 0.4, 6.3, 4.8, 0.0, None),
        fact("sample-nf-banana", "Banana", "1 unit", 105.0, 27.0, 1.3, 0.4, 3.1, Some(51)),
        fact("sample-nf-rice", "White rice, cooked", "100 g", 130.0, 28.0, 2.7, 0.3, 0.4, Some(73)),
        fact("sample-nf-broccoli", "Broccoli", "100 g", 34.0, 7.0, 2.8, 0.4, 2.6, Some(15)),
        fact("sample-nf-salmon", "Salmon", "100 g", 208.0, 0.0, 20.0, 13.0, 0.0, None),
        fact("sample-nf-yogurt", "Greek yogurt, plain", "100 g", 59.0, 3.6, 10.0, 0.4, 0.0, Some(11)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_ids_are_unique() {
        let recipes = sample_recipes();
        let mut ids: Vec<_> = recipes.iter().map(|r| r.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), recipes.len());
    }

    #[test]
    fn sample_recipes_have_ingredients_and_steps() {
        for recipe in sample_recipes() {
            assert!(!recipe.ingredients.is_empty(), "{} has no ingredients", recipe.id);
            assert!(!recipe.steps.is_empty(), "{} has no steps", recipe.id);
            assert!(recipe.servings > 0);
        }
    }

    #[test]
    fn sample_datasets_are_non_empty() {
        assert!(!sample_articles().is_empty());
        assert!(!sample_glossary().is_empty());
        assert!(!sample_nutrition_facts().is_empty());
    }
}

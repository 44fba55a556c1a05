use dioxus::prelude::*;

use store::plan::{MealSlot, Weekday};
use store::{sample, Recipe};
use ui::use_auth;

/// Recipe detail page: ingredients, steps, nutrition, favorite toggle, and
/// an add-to-plan control.
#[component]
pub fn RecipeDetail(recipe_id: String) -> Element {
    // Track the id in a signal so use_resource re-runs on route param change
    let mut id_signal = use_signal(|| recipe_id.clone());
    if *id_signal.peek() != recipe_id {
        id_signal.set(recipe_id.clone());
    }

    let mut recipe = use_signal(|| Option::<Recipe>::None);
    let mut is_favorite = use_signal(|| false);
    let auth = use_auth();

    let _loader = use_resource(move || {
        let id = id_signal();
        async move {
            let found = match ui::with_timeout(
                api::get_recipe(id.clone()),
                ui::DEFAULT_FETCH_TIMEOUT_SECS,
            )
            .await
            {
                Some(found) => found,
                // Catalog unreachable: the id may name an example recipe.
                None => sample::sample_recipes().into_iter().find(|r| r.id == id),
            };
            recipe.set(found);

            if let Ok(ids) = api::list_favorites().await {
                is_favorite.set(ids.contains(&id));
            }
        }
    });

    let on_toggle_favorite = move |_| {
        let id = id_signal();
        spawn(async move {
            let result = if is_favorite() {
                api::remove_favorite(id).await
            } else {
                api::add_favorite(id).await
            };
            if result.is_ok() {
                is_favorite.set(!is_favorite());
            }
        });
    };

    rsx! {
        div {
            class: "page",

            if let Some(recipe) = recipe() {
                div {
                    class: "recipe-detail",

                    header {
                        class: "recipe-detail-header",
                        h1 { "{recipe.title}" }
                        if auth().user.is_some() {
                            button {
                                class: if is_favorite() { "favorite-button active" } else { "favorite-button" },
                                title: if is_favorite() { "Remove from favorites" } else { "Add to favorites" },
                                onclick: on_toggle_favorite,
                                "\u{2665}"
                            }
                        }
                    }

                    p { class: "recipe-detail-description", "{recipe.description}" }

                    div {
                        class: "recipe-card-meta",
                        span { class: "badge badge-category", "{recipe.category.label()}" }
                        span { class: "badge badge-difficulty", "{recipe.difficulty.label()}" }
                        span { class: "badge", "{recipe.prep_time_min} min" }
                        span { class: "badge", "{recipe.servings} servings" }
                        if let Some(gi) = recipe.glycemic_index {
                            span { class: "badge badge-gi", "GI {gi}" }
                        }
                    }

                    div {
                        class: "recipe-detail-columns",

                        section {
                            h2 { "Ingredients" }
                            ul {
                                class: "ingredient-list",
                                for ingredient in &recipe.ingredients {
                                    li {
                                        key: "{ingredient.name}-{ingredient.unit}",
                                        span { class: "ingredient-amount",
                                            "{ui::format_amount(ingredient.amount)} {ingredient.unit}"
                                        }
                                        " {ingredient.name}"
                                    }
                                }
                            }
                        }

                        section {
                            h2 { "Preparation" }
                            ol {
                                class: "step-list",
                                for (index, step) in recipe.steps.iter().enumerate() {
                                    li { key: "{index}", "{step}" }
                                }
                            }
                        }
                    }

                    if let Some(ref nutrition) = recipe.nutrition {
                        section {
                            h2 { "Per serving" }
                            div {
                                class: "nutrition-summary",
                                span { class: "badge", "{nutrition.calories} kcal" }
                                span { class: "badge", "{nutrition.carbs_g} g carbs" }
                                span { class: "badge", "{nutrition.protein_g} g protein" }
                                span { class: "badge", "{nutrition.fat_g} g fat" }
                                span { class: "badge", "{nutrition.fiber_g} g fiber" }
                            }
                        }
                    }

                    if auth().user.is_some() {
                        AddToPlan { recipe_id: recipe.id.clone() }
                    } else {
                        p {
                            class: "auth-hint",
                            "Sign in to add this recipe to your weekly plan."
                        }
                    }
                }
            } else {
                div { class: "loading", "Loading recipe..." }
            }
        }
    }
}

/// Day/slot picker that drops the recipe into the weekly plan.
#[component]
fn AddToPlan(recipe_id: String) -> Element {
    let mut day = use_signal(|| Weekday::Monday);
    let mut slot = use_signal(|| MealSlot::Dinner);
    let mut added = use_signal(|| false);

    let handle_add = move |_| {
        let recipe_id = recipe_id.clone();
        spawn(async move {
            // Read-modify-write: the plan value is replaced wholesale.
            let mut plan = api::get_meal_plan().await.unwrap_or_default();
            plan.assign(day(), slot(), recipe_id);
            if api::save_meal_plan(plan).await.is_ok() {
                added.set(true);
            }
        });
    };

    rsx! {
        div {
            class: "add-to-plan",
            h2 { "Add to plan" }
            div {
                class: "add-to-plan-controls",
                select {
                    value: day().as_str(),
                    onchange: move |evt| {
                        if let Some(parsed) = Weekday::parse(&evt.value()) {
                            day.set(parsed);
                        }
                    },
                    for d in Weekday::ALL {
                        option { key: "{d.as_str()}", value: "{d.as_str()}", "{d.label()}" }
                    }
                }
                select {
                    value: slot().as_str(),
                    onchange: move |evt| {
                        if let Some(parsed) = MealSlot::parse(&evt.value()) {
                            slot.set(parsed);
                        }
                    },
                    for s in MealSlot::ALL {
                        option { key: "{s.as_str()}", value: "{s.as_str()}", "{s.label()}" }
                    }
                }
                button {
                    class: "primary",
                    onclick: handle_add,
                    "Add to plan"
                }
                if added() {
                    span { class: "add-to-plan-confirm", "Added ✓" }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use store::plan::{MealSlot, Weekday};
use store::{sample, MealPlan};
use ui::{use_auth, PlanGrid, SourceBadge};

use crate::Route;

/// Weekly planner: a 7×4 grid of day × meal slot.
///
/// Every edit clones the current plan, applies the change, stores the new
/// value, and saves it to the backend. Anonymous visitors can edit the grid
/// but the plan lives only for the page view.
#[component]
pub fn Planner() -> Element {
    let mut plan = use_signal(MealPlan::new);
    let auth = use_auth();

    let recipes_res = use_resource(move || async move {
        ui::fetch_or(api::list_recipes(), sample::sample_recipes).await
    });

    let _plan_loader = use_resource(move || async move {
        if let Ok(saved) = api::get_meal_plan().await {
            plan.set(saved);
        }
    });

    let store_plan = move |next: MealPlan| {
        plan.set(next.clone());
        spawn(async move {
            // Anonymous saves fail server-side; the grid keeps working locally.
            let _ = api::save_meal_plan(next).await;
        });
    };

    let on_assign = {
        let mut store_plan = store_plan.clone();
        move |(day, slot, recipe_id): (Weekday, MealSlot, String)| {
            let mut next = plan();
            next.assign(day, slot, recipe_id);
            store_plan(next);
        }
    };

    let on_clear = {
        let mut store_plan = store_plan.clone();
        move |(day, slot): (Weekday, MealSlot)| {
            let mut next = plan();
            next.clear(day, slot);
            store_plan(next);
        }
    };

    let mut store_plan_reset = store_plan.clone();

    rsx! {
        div {
            class: "page",

            match recipes_res() {
                Some((recipes, source)) => rsx! {
                    header {
                        class: "page-header",
                        h1 { "Weekly planner" }
                        SourceBadge { source: source }
                    }

                    if auth().user.is_none() && !auth().loading {
                        p {
                            class: "auth-hint",
                            "You are planning as a guest — sign in to keep your plan."
                        }
                    }

                    PlanGrid {
                        plan: plan(),
                        recipes: recipes.clone(),
                        on_assign: on_assign,
                        on_clear: on_clear,
                    }

                    div {
                        class: "planner-actions",
                        Link {
                            class: "primary-link",
                            to: Route::ShoppingList {},
                            "Generate shopping list"
                        }
                        if !plan().is_empty() {
                            button {
                                class: "secondary",
                                onclick: move |_| store_plan_reset(MealPlan::new()),
                                "Clear week"
                            }
                        }
                    }
                },
                None => rsx! {
                    div { class: "loading", "Loading planner..." }
                },
            }
        }
    }
}

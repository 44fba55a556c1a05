//! The 7×4 weekly planner grid.
//!
//! Columns are days, rows are meal slots. An empty cell offers an "Add"
//! button that opens the recipe picker for that `(day, slot)`; a filled
//! cell shows the recipe title and a clear button. The grid never edits
//! the plan itself — it emits `(day, slot, recipe id)` assignments and
//! `(day, slot)` clears, and the page replaces its plan value wholesale.

use std::collections::HashMap;

use dioxus::prelude::*;
use store::plan::{MealSlot, Weekday};
use store::{MealPlan, Recipe};

#[component]
pub fn PlanGrid(
    plan: MealPlan,
    recipes: Vec<Recipe>,
    on_assign: EventHandler<(Weekday, MealSlot, String)>,
    on_clear: EventHandler<(Weekday, MealSlot)>,
) -> Element {
    let mut picker = use_signal(|| Option::<(Weekday, MealSlot)>::None);

    let titles: HashMap<&str, &str> = recipes
        .iter()
        .map(|r| (r.id.as_str(), r.title.as_str()))
        .collect();

    rsx! {
        table {
            class: "plan-grid",
            thead {
                tr {
                    th {}
                    for day in Weekday::ALL {
                        th { key: "{day.label()}", title: "{day.label()}", "{day.short_label()}" }
                    }
                }
            }
            tbody {
                for slot in MealSlot::ALL {
                    tr {
                        key: "{slot.label()}",
                        th { class: "plan-grid-slot", "{slot.label()}" }
                        for day in Weekday::ALL {
                            td {
                                key: "{day.label()}",
                                class: "plan-grid-cell",
                                if let Some(recipe_id) = plan.slot(day, slot) {
                                    div {
                                        class: "plan-grid-entry",
                                        span {
                                            class: "plan-grid-recipe",
                                            // The recipe may have been deleted since it was planned.
                                            {titles.get(recipe_id).copied().unwrap_or("Unavailable recipe")}
                                        }
                                        button {
                                            class: "plan-grid-clear",
                                            title: "Clear slot",
                                            onclick: move |_| on_clear.call((day, slot)),
                                            "×"
                                        }
                                    }
                                } else {
                                    button {
                                        class: "plan-grid-add",
                                        onclick: move |_| picker.set(Some((day, slot))),
                                        "+"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some((day, slot)) = picker() {
            RecipePickerDialog {
                recipes: recipes.clone(),
                day: day,
                slot: slot,
                on_assign: move |recipe_id| {
                    on_assign.call((day, slot, recipe_id));
                    picker.set(None);
                },
                on_cancel: move |_| picker.set(None),
            }
        }
    }
}

/// Modal form for picking the recipe to place in one slot.
#[component]
fn RecipePickerDialog(
    recipes: Vec<Recipe>,
    day: Weekday,
    slot: MealSlot,
    on_assign: EventHandler<String>,
    on_cancel: EventHandler<()>,
) -> Element {
    let first_id = recipes.first().map(|r| r.id.clone()).unwrap_or_default();
    let mut selected = use_signal(move || first_id);

    let handle_assign = move |_| {
        let id = selected();
        if id.is_empty() {
            return;
        }
        on_assign.call(id);
    };

    rsx! {
        div {
            class: "picker-overlay",
            div {
                class: "picker-dialog",
                h2 { "{slot.label()} on {day.label()}" }

                if recipes.is_empty() {
                    p { class: "picker-empty", "No recipes available." }
                } else {
                    div {
                        class: "form-field",
                        label { r#for: "picker-recipe", "Recipe" }
                        select {
                            id: "picker-recipe",
                            value: selected(),
                            onchange: move |evt| selected.set(evt.value()),
                            for recipe in &recipes {
                                option {
                                    key: "{recipe.id}",
                                    value: "{recipe.id}",
                                    "{recipe.title}"
                                }
                            }
                        }
                    }
                }

                div {
                    class: "form-actions",
                    button {
                        class: "primary",
                        disabled: recipes.is_empty(),
                        onclick: handle_assign,
                        "Assign"
                    }
                    button {
                        class: "secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use store::models::{Difficulty, RecipeCategory};
use store::RecipeFilter;

/// Filter controls for the recipe list. Emits a full [`RecipeFilter`] on
/// every change; the page owns the filter value and re-applies it in
/// memory.
#[component]
pub fn FilterBar(filter: RecipeFilter, on_change: EventHandler<RecipeFilter>) -> Element {
    let term_filter = filter.clone();
    let category_filter = filter.clone();
    let difficulty_filter = filter.clone();
    let gi_filter = filter.clone();
    let prep_filter = filter.clone();

    rsx! {
        div {
            class: "filter-bar",

            input {
                class: "filter-search",
                r#type: "search",
                placeholder: "Search recipes...",
                value: "{filter.term}",
                oninput: move |evt| {
                    let mut next = term_filter.clone();
                    next.term = evt.value();
                    on_change.call(next);
                },
            }

            select {
                class: "filter-select",
                value: filter.category.map(|c| c.as_str()).unwrap_or(""),
                onchange: move |evt| {
                    let mut next = category_filter.clone();
                    next.category = RecipeCategory::parse(&evt.value());
                    on_change.call(next);
                },
                option { value: "", "All categories" }
                for category in RecipeCategory::ALL {
                    option {
                        key: "{category.as_str()}",
                        value: "{category.as_str()}",
                        "{category.label()}"
                    }
                }
            }

            select {
                class: "filter-select",
                value: filter.difficulty.map(|d| d.as_str()).unwrap_or(""),
                onchange: move |evt| {
                    let mut next = difficulty_filter.clone();
                    next.difficulty = Difficulty::parse(&evt.value());
                    on_change.call(next);
                },
                option { value: "", "Any difficulty" }
                for difficulty in Difficulty::ALL {
                    option {
                        key: "{difficulty.as_str()}",
                        value: "{difficulty.as_str()}",
                        "{difficulty.label()}"
                    }
                }
            }

            input {
                class: "filter-number",
                r#type: "number",
                min: "0",
                placeholder: "Max GI",
                title: "Maximum glycemic index",
                value: filter.max_glycemic_index.map(|v| v.to_string()).unwrap_or_default(),
                oninput: move |evt| {
                    let mut next = gi_filter.clone();
                    next.max_glycemic_index = evt.value().parse().ok();
                    on_change.call(next);
                },
            }

            input {
                class: "filter-number",
                r#type: "number",
                min: "0",
                placeholder: "Max prep (min)",
                title: "Maximum preparation time in minutes",
                value: filter.max_prep_time_min.map(|v| v.to_string()).unwrap_or_default(),
                oninput: move |evt| {
                    let mut next = prep_filter.clone();
                    next.max_prep_time_min = evt.value().parse().ok();
                    on_change.call(next);
                },
            }
        }
    }
}

use dioxus::prelude::*;

use store::{matches_term, sample, NutritionFact};
use ui::{NutritionTable, SourceBadge};

/// The nutrition-facts table with a food-name search.
#[component]
pub fn NutritionFacts() -> Element {
    let mut query = use_signal(String::new);

    let facts_res = use_resource(move || async move {
        ui::fetch_or(api::list_nutrition_facts(), sample::sample_nutrition_facts).await
    });

    let loaded = facts_res();
    let visible: Vec<NutritionFact> = loaded
        .as_ref()
        .map(|(facts, _)| {
            facts
                .iter()
                .filter(|f| matches_term(&query(), &[&f.food]))
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    rsx! {
        div {
            class: "page",

            match loaded {
                Some((_, source)) => rsx! {
                    header {
                        class: "page-header",
                        h1 { "Nutrition facts" }
                        SourceBadge { source: source }
                    }

                    input {
                        class: "filter-search",
                        r#type: "search",
                        placeholder: "Search foods...",
                        value: query(),
                        oninput: move |evt| query.set(evt.value()),
                    }

                    if visible.is_empty() {
                        div {
                            class: "empty-state",
                            p { "No foods match your search." }
                        }
                    } else {
                        NutritionTable { facts: visible.clone() }
                    }
                },
                None => rsx! {
                    div { class: "loading", "Loading nutrition facts..." }
                },
            }
        }
    }
}

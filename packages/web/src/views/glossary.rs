use dioxus::prelude::*;

use store::{matches_term, sample, GlossaryTerm};
use ui::SourceBadge;

/// Searchable glossary of diabetes and nutrition terms.
#[component]
pub fn Glossary() -> Element {
    let mut query = use_signal(String::new);

    let terms_res = use_resource(move || async move {
        ui::fetch_or(api::list_glossary_terms(), sample::sample_glossary).await
    });

    let loaded = terms_res();
    let visible: Vec<GlossaryTerm> = loaded
        .as_ref()
        .map(|(terms, _)| {
            terms
                .iter()
                .filter(|t| matches_term(&query(), &[&t.term, &t.definition]))
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
                        h1 { "Glossary" }
                        SourceBadge { source: source }
                    }

                    input {
                        class: "filter-search",
                        r#type: "search",
                        placeholder: "Search terms...",
                        value: query(),
                        oninput: move |evt| query.set(evt.value()),
                    }

                    if visible.is_empty() {
                        div {
                            class: "empty-state",
                            p { "No terms match your search." }
                        }
                    } else {
                        dl {
                            class: "glossary-list",
                            for term in visible.clone() {
                                dt { key: "dt-{term.id}", "{term.term}" }
                                dd { key: "dd-{term.id}", "{term.definition}" }
                            }
                        }
                    }
                },
                None => rsx! {
                    div { class: "loading", "Loading glossary..." }
                },
            }
        }
    }
}

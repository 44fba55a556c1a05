use dioxus::prelude::*;

use store::{matches_term, sample, Article};
use ui::SourceBadge;

/// Educational articles, searchable, expanding in place.
#[component]
pub fn Learn() -> Element {
    let mut query = use_signal(String::new);
    let mut expanded = use_signal(|| Option::<String>::None);

    let articles_res = use_resource(move || async move {
        ui::fetch_or(api::list_articles(), sample::sample_articles).await
    });

    let loaded = articles_res();
    let visible: Vec<Article> = loaded
        .as_ref()
        .map(|(articles, _)| {
            articles
                .iter()
                .filter(|a| matches_term(&query(), &[&a.title, &a.summary, &a.body]))
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
                        h1 { "Learn" }
                        SourceBadge { source: source }
                    }

                    input {
                        class: "filter-search",
                        r#type: "search",
                        placeholder: "Search articles...",
                        value: query(),
                        oninput: move |evt| query.set(evt.value()),
                    }

                    div {
                        class: "article-list",
                        for entry in visible.clone() {
                            article {
                                key: "{entry.id}",
                                class: "article-card",
                                onclick: {
                                    let id = entry.id.clone();
                                    move |_| {
                                        if expanded() == Some(id.clone()) {
                                            expanded.set(None);
                                        } else {
                                            expanded.set(Some(id.clone()));
                                        }
                                    }
                                },
                                div {
                                    class: "article-card-header",
                                    h2 { "{entry.title}" }
                                    span { class: "badge", "{entry.category}" }
                                    span { class: "article-reading-time", "{entry.reading_time_min} min read" }
                                }
                                p { class: "article-summary", "{entry.summary}" }
                                if expanded() == Some(entry.id.clone()) {
                                    p { class: "article-body", "{entry.body}" }
                                }
                            }
                        }
                    }
                },
                None => rsx! {
                    div { class: "loading", "Loading articles..." }
                },
            }
        }
    }
}

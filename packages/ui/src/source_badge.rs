//! Data-source indicator shown next to catalog headings.

use dioxus::prelude::*;

use crate::remote::DataSource;
use crate::use_auth;

/// A small badge that shows where a view's content came from.
///
/// - **Live**: green dot ("Live catalog")
/// - **Sample**: amber warning ("Example data — catalog unreachable")
#[component]
pub fn SourceBadge(source: DataSource) -> Element {
    match source {
        DataSource::Live => rsx! {
            span {
                class: "source-badge source-badge--live",
                title: "Live catalog",
                "\u{25CF}"
            }
        },
        DataSource::Sample => rsx! {
            span {
                class: "source-badge source-badge--sample",
                title: "Example data — catalog unreachable",
                span { class: "icon", "\u{26A0}" }
                span { class: "source-badge-label", "Example data" }
            }
        },
    }
}

/// Auth/connectivity indicator for the navbar.
///
/// - **Logged in + online**: nothing (the normal state)
/// - **Offline**: amber warning glyph
/// - **Anonymous**: gray user glyph ("Sign in to save plans")
#[component]
pub fn OnlineIndicator() -> Element {
    let auth = use_auth();
    let state = auth();

    if state.loading {
        return rsx! {};
    }

    match (&state.user, state.online) {
        (Some(_), true) => rsx! {},
        (_, false) => rsx! {
            span {
                class: "online-indicator online-indicator--offline",
                title: "Offline — showing example data",
                "\u{26A0}"
            }
        },
        (None, true) => rsx! {
            span {
                class: "online-indicator online-indicator--anonymous",
                title: "Sign in to save plans and favorites",
                "\u{1F464}"
            }
        },
    }
}

use dioxus::prelude::*;

/// Top navigation bar. The router links are supplied by the platform crate
/// as children; the user box on the right comes from [`crate::UserMenu`].
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        div {
            class: "navbar",
            span { class: "navbar-brand", "GlicoPlan" }
            div {
                class: "navbar-links",
                {children}
            }
        }
    }
}

/// Signed-in user name plus logout, or nothing while auth is loading.
#[component]
pub fn UserMenu() -> Element {
    let auth = crate::use_auth();
    let state = auth();

    if state.loading {
        return rsx! {};
    }

    match state.user {
        Some(user) => rsx! {
            div {
                class: "navbar-user",
                span { class: "navbar-user-name", "{user.display_name()}" }
                crate::LogoutButton { class: "navbar-logout" }
            }
        },
        None => rsx! {
            div {
                class: "navbar-user",
                a { class: "navbar-login-link", href: "/login", "Sign in" }
            }
        },
    }
}

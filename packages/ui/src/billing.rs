//! Subscription buttons: both ask the server for a provider-hosted session
//! URL and send the browser there.

use dioxus::prelude::*;

/// Start a checkout for one plan.
#[component]
pub fn SubscribeButton(
    price_id: String,
    #[props(default = "Subscribe".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let price_id_clone = price_id.clone();
    let mut loading = use_signal(|| false);

    let onclick = move |_| {
        let price_id = price_id_clone.clone();
        async move {
            loading.set(true);
            match api::create_checkout_session(price_id).await {
                Ok(url) => redirect(&url),
                Err(e) => {
                    tracing::error!("Failed to create checkout session: {}", e);
                    loading.set(false);
                }
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            disabled: loading(),
            onclick: onclick,
            if loading() {
                "Redirecting..."
            } else {
                "{label}"
            }
        }
    }
}

/// Open the provider's billing portal for the current user.
#[component]
pub fn ManageBillingButton(
    #[props(default = "Manage subscription".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut loading = use_signal(|| false);

    let onclick = move |_| async move {
        loading.set(true);
        match api::create_billing_portal_session().await {
            Ok(url) => redirect(&url),
            Err(e) => {
                tracing::error!("Failed to create portal session: {}", e);
                loading.set(false);
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            disabled: loading(),
            onclick: onclick,
            if loading() {
                "Redirecting..."
            } else {
                "{label}"
            }
        }
    }
}

/// Send the browser to a provider-hosted page.
fn redirect(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("Cannot redirect outside the browser: {}", url);
    }
}

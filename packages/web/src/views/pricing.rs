use dioxus::prelude::*;

use api::SubscriptionInfo;
use ui::{use_auth, ManageBillingButton, SubscribeButton};

use crate::Route;

/// Pricing page: plan cards, checkout, and subscription status.
#[component]
pub fn Pricing() -> Element {
    let auth = use_auth();

    let plans_res =
        use_resource(|| async move { api::list_plans().await.unwrap_or_default() });
    let subscription_res =
        use_resource(|| async move { api::get_subscription().await.ok().flatten() });

    let subscription_loaded = subscription_res().is_some();
    let active_subscription: Option<SubscriptionInfo> = subscription_res()
        .flatten()
        .filter(SubscriptionInfo::is_active);
    let plans = plans_res();

    rsx! {
        div {
            class: "page",

            header {
                class: "page-header",
                h1 { "Pricing" }
            }

            p {
                class: "pricing-intro",
                "Free accounts can browse every recipe. Subscribers get the weekly "
                "planner, consolidated shopping lists, and the full article library."
            }

            if !subscription_loaded {
                div { class: "loading", "Loading plans..." }
            } else if let Some(subscription) = active_subscription {
                div {
                    class: "subscription-card",
                    h2 { "Your subscription" }
                    p { class: "subscription-status", "Status: {subscription.status}" }
                    if let Some(ref until) = subscription.current_period_end {
                        p { class: "subscription-period", "Paid until {until}" }
                    }
                    ManageBillingButton { class: "secondary" }
                }
            } else {
                match plans {
                    Some(plans) => rsx! {
                        if plans.is_empty() {
                            div {
                                class: "empty-state",
                                p { "Subscriptions are not available right now." }
                            }
                        } else {
                            div {
                                class: "plan-cards",
                                for plan in plans.clone() {
                                    div {
                                        key: "{plan.price_id}",
                                        class: "plan-card",
                                        h2 { "{plan.name}" }
                                        p { "{plan.description}" }
                                        if auth().user.is_some() {
                                            SubscribeButton {
                                                price_id: plan.price_id.clone(),
                                                class: "primary",
                                            }
                                        } else {
                                            Link {
                                                class: "primary-link",
                                                to: Route::Login {},
                                                "Sign in to subscribe"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    None => rsx! {
                        div { class: "loading", "Loading plans..." }
                    },
                }
            }
        }
    }
}

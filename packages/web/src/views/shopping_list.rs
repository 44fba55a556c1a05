use dioxus::prelude::*;

use store::shopping::{remove_checked, toggle_checked};
use store::{consolidate, sample, ShoppingItem};
use ui::{ShoppingListPanel, SourceBadge};

use crate::Route;

/// Shopping list derived from the weekly plan.
///
/// The list is computed client-side: fetch the plan and the catalog, then
/// fold every referenced ingredient by name and unit. Check-offs are page
/// state, not persisted.
#[component]
pub fn ShoppingList() -> Element {
    let mut items = use_signal(Vec::<ShoppingItem>::new);

    let loader = use_resource(move || async move {
        let (recipes, source) =
            ui::fetch_or(api::list_recipes(), sample::sample_recipes).await;
        // Anonymous visitors have no stored plan; consolidate the empty one.
        let plan = api::get_meal_plan().await.unwrap_or_default();
        items.set(consolidate(&plan, &recipes));
        source
    });

    let on_toggle = move |index: usize| {
        let mut current = items();
        toggle_checked(&mut current, index);
        items.set(current);
    };

    let on_clear_checked = move |_| {
        items.set(remove_checked(items()));
    };

    rsx! {
        div {
            class: "page",

            match loader() {
                Some(source) => rsx! {
                    header {
                        class: "page-header",
                        h1 { "Shopping list" }
                        SourceBadge { source: source }
                    }

                    if items().is_empty() {
                        div {
                            class: "empty-state",
                            h2 { "Nothing to buy yet" }
                            p {
                                "Fill some slots in the "
                                Link { to: Route::Planner {}, "weekly planner" }
                                " and the ingredients will be consolidated here."
                            }
                        }
                    } else {
                        ShoppingListPanel {
                            items: items(),
                            on_toggle: on_toggle,
                            on_clear_checked: on_clear_checked,
                        }
                    }
                },
                None => rsx! {
                    div { class: "loading", "Building your shopping list..." }
                },
            }
        }
    }
}

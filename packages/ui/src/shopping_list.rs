//! Consolidated shopping-list panel, grouped by aisle.

use dioxus::prelude::*;
use store::models::IngredientCategory;
use store::ShoppingItem;

/// Render the consolidated list with check-off boxes. Items arrive sorted
/// by aisle from [`store::consolidate`]; this component only draws the
/// group headings and emits toggle events by item index.
#[component]
pub fn ShoppingListPanel(
    items: Vec<ShoppingItem>,
    on_toggle: EventHandler<usize>,
    on_clear_checked: EventHandler<()>,
) -> Element {
    let any_checked = items.iter().any(|i| i.checked);

    rsx! {
        div {
            class: "shopping-list",

            for category in IngredientCategory::ALL {
                if items.iter().any(|i| i.category == category) {
                    div {
                        class: "shopping-group",
                        h3 { class: "shopping-group-title", "{category.label()}" }
                        ul {
                            class: "shopping-group-items",
                            for (index, item) in items.iter().enumerate() {
                                if item.category == category {
                                    li {
                                        key: "{item.name}-{item.unit}",
                                        class: if item.checked { "shopping-item checked" } else { "shopping-item" },
                                        label {
                                            input {
                                                r#type: "checkbox",
                                                checked: item.checked,
                                                onchange: move |_| on_toggle.call(index),
                                            }
                                            span { class: "shopping-item-name", "{item.name}" }
                                            span {
                                                class: "shopping-item-amount",
                                                "{format_amount(item.amount)} {item.unit}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if any_checked {
                button {
                    class: "shopping-clear secondary",
                    onclick: move |_| on_clear_checked.call(()),
                    "Remove checked items"
                }
            }
        }
    }
}

/// Render an amount without a spurious trailing ".0".
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        format!("{:.1}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::format_amount;

    #[test]
    fn whole_amounts_drop_the_fraction() {
        assert_eq!(format_amount(4.0), "4");
        assert_eq!(format_amount(250.0), "250");
    }

    #[test]
    fn fractional_amounts_keep_one_decimal() {
        assert_eq!(format_amount(1.5), "1.5");
        assert_eq!(format_amount(0.25), "0.2");
    }
}

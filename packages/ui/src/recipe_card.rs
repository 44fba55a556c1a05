use dioxus::prelude::*;
use store::Recipe;

/// One recipe in the catalog grid.
#[component]
pub fn RecipeCard(
    recipe: Recipe,
    #[props(default = false)] is_favorite: bool,
    /// Hide the favorite button for anonymous visitors.
    #[props(default = true)] show_favorite: bool,
    on_select: EventHandler<String>,
    on_toggle_favorite: EventHandler<String>,
) -> Element {
    let id = recipe.id.clone();
    let fav_id = recipe.id.clone();

    rsx! {
        div {
            class: "recipe-card",
            onclick: move |_| on_select.call(id.clone()),

            if let Some(ref url) = recipe.image_url {
                img { class: "recipe-card-image", src: "{url}", alt: "{recipe.title}" }
            } else {
                div { class: "recipe-card-image recipe-card-image--placeholder" }
            }

            div {
                class: "recipe-card-body",
                div {
                    class: "recipe-card-header",
                    h3 { class: "recipe-card-title", "{recipe.title}" }
                    if show_favorite {
                        button {
                            class: if is_favorite { "favorite-button active" } else { "favorite-button" },
                            title: if is_favorite { "Remove from favorites" } else { "Add to favorites" },
                            onclick: move |evt| {
                                evt.stop_propagation();
                                on_toggle_favorite.call(fav_id.clone());
                            },
                            "\u{2665}"
                        }
                    }
                }

                p { class: "recipe-card-description", "{recipe.description}" }

                div {
                    class: "recipe-card-meta",
                    span { class: "badge badge-category", "{recipe.category.label()}" }
                    span { class: "badge badge-difficulty", "{recipe.difficulty.label()}" }
                    span { class: "badge", "{recipe.prep_time_min} min" }
                    if let Some(gi) = recipe.glycemic_index {
                        span { class: "badge badge-gi", "GI {gi}" }
                    }
                }
            }
        }
    }
}

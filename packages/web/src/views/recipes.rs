use dioxus::prelude::*;

use store::{sample, RecipeFilter};
use ui::{use_auth, FilterBar, RecipeCard, SourceBadge};

use crate::Route;

/// Recipe catalog: fetch once, then filter in memory.
#[component]
pub fn Recipes() -> Element {
    let mut filter = use_signal(RecipeFilter::default);
    let mut favorites = use_signal(Vec::<String>::new);
    let auth = use_auth();
    let nav = use_navigator();

    let recipes_res = use_resource(move || async move {
        ui::fetch_or(api::list_recipes(), sample::sample_recipes).await
    });

    let _favorites_loader = use_resource(move || async move {
        if let Ok(ids) = api::list_favorites().await {
            favorites.set(ids);
        }
    });

    let on_select = move |recipe_id: String| {
        nav.push(Route::RecipeDetail { recipe_id });
    };

    let on_toggle_favorite = move |recipe_id: String| {
        spawn(async move {
            let was_favorite = favorites().contains(&recipe_id);
            let result = if was_favorite {
                api::remove_favorite(recipe_id.clone()).await
            } else {
                api::add_favorite(recipe_id.clone()).await
            };
            if result.is_ok() {
                let mut ids = favorites();
                if was_favorite {
                    ids.retain(|id| id != &recipe_id);
                } else {
                    ids.push(recipe_id);
                }
                favorites.set(ids);
            }
        });
    };

    let catalog = recipes_res();
    let visible = catalog
        .as_ref()
        .map(|(recipes, _)| filter().apply(recipes))
        .unwrap_or_default();

    rsx! {
        div {
            class: "page",

            match catalog {
                Some((_, source)) => rsx! {
                    header {
                        class: "page-header",
                        h1 { "Recipes" }
                        SourceBadge { source: source }
                    }

                    FilterBar {
                        filter: filter(),
                        on_change: move |next| filter.set(next),
                    }

                    if visible.is_empty() {
                        div {
                            class: "empty-state",
                            h2 { "No recipes match" }
                            p { "Try removing a filter or broadening your search." }
                        }
                    } else {
                        div {
                            class: "recipe-grid",
                            for recipe in visible.clone() {
                                RecipeCard {
                                    key: "{recipe.id}",
                                    recipe: recipe.clone(),
                                    is_favorite: favorites().contains(&recipe.id),
                                    show_favorite: auth().user.is_some(),
                                    on_select: on_select,
                                    on_toggle_favorite: on_toggle_favorite,
                                }
                            }
                        }
                    }
                },
                None => rsx! {
                    div { class: "loading", "Loading recipes..." }
                },
            }
        }
    }
}

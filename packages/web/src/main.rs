use dioxus::prelude::*;

use ui::{AuthProvider, Navbar, OnlineIndicator, UserMenu};
use views::{
    Glossary, Learn, Login, NutritionFacts, Planner, Pricing, RecipeDetail, Recipes, Register,
    ShoppingList,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Root {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/recipes")]
        Recipes {},
        #[route("/recipes/:recipe_id")]
        RecipeDetail { recipe_id: String },
        #[route("/planner")]
        Planner {},
        #[route("/shopping-list")]
        ShoppingList {},
        #[route("/learn")]
        Learn {},
        #[route("/glossary")]
        Glossary {},
        #[route("/nutrition-facts")]
        NutritionFacts {},
        #[route("/pricing")]
        Pricing {},
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Initialize database pool
    let pool = api::db::get_pool()
        .await
        .expect("Failed to connect to database");

    // Run migrations
    sqlx::migrate!("../api/migrations")
        .run(pool)
        .await
        .expect("Failed to run migrations");

    // Create session store
    let session_store = PostgresStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .expect("Failed to migrate session store");

    // Session layer configuration
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // Set to true in production with HTTPS
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            Duration::from_secs(60 * 60 * 24 * 7).try_into().unwrap(),
        )); // 7 days

    // Serve the Dioxus application with the session layer on all routes
    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Navbar wrapper around every page.
#[component]
fn AppLayout() -> Element {
    rsx! {
        Navbar {
            Link { class: "navbar-link", to: Route::Recipes {}, "Recipes" }
            Link { class: "navbar-link", to: Route::Planner {}, "Planner" }
            Link { class: "navbar-link", to: Route::ShoppingList {}, "Shopping list" }
            Link { class: "navbar-link", to: Route::Learn {}, "Learn" }
            Link { class: "navbar-link", to: Route::Glossary {}, "Glossary" }
            Link { class: "navbar-link", to: Route::NutritionFacts {}, "Nutrition facts" }
            Link { class: "navbar-link", to: Route::Pricing {}, "Pricing" }
            OnlineIndicator {}
            UserMenu {}
        }
        Outlet::<Route> {}
    }
}

/// Redirect `/` to `/recipes`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Recipes {});
    rsx! {}
}

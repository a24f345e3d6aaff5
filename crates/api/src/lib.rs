pub mod error;
pub mod extractors;
pub mod routes;
pub mod state;

use std::path::Path;

use axum::{
    Router,
    http::HeaderValue,
    routing::get,
};
use state::AppState;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.settings.app.cors_origins);

    let event_routes = Router::new()
        .route("/", get(routes::event::list).post(routes::event::create))
        .route(
            "/{id}",
            get(routes::event::get)
                .put(routes::event::update)
                .delete(routes::event::delete),
        );

    let group_routes = Router::new()
        .route("/", get(routes::group::list).post(routes::group::create))
        .route(
            "/{id}",
            get(routes::group::get)
                .put(routes::group::update)
                .delete(routes::group::delete),
        );

    let user_routes = Router::new().route("/", get(routes::user::list));

    // Compose API
    let api = Router::new()
        .nest("/events", event_routes)
        .nest("/groups", group_routes)
        .nest("/users", user_routes);

    // Health check
    let health = Router::new().route("/health", get(health_check));

    let mut router = Router::new().nest("/api", api).merge(health);

    // Serve the built UI for everything the API does not claim
    if let Some(dir) = &state.settings.app.static_dir {
        let index = Path::new(dir).join("index.html");
        router = router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins.iter().filter_map(|o| o.parse::<HeaderValue>().ok()))
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

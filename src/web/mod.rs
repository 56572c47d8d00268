pub mod middleware;
pub mod routes;

use std::path::Path;

use axum::{
    middleware as axum_middleware,
    response::Redirect,
    routing::{delete, get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::database::activities_repo::RosterStore;
use middleware::request_log;
use routes::{activities, activity};

pub const INDEX_PATH: &str = "/static/index.html";

/// Builds the full application router around a roster store.
pub fn app(store: RosterStore, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary(INDEX_PATH) }))
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activity::activity_signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(activity::activity_unregister_handler),
        )
        // Static files
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        // Layers
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(axum_middleware::from_fn(request_log::log_requests))
        .layer(CatchPanicLayer::new())
        // State
        .with_state(store)
}

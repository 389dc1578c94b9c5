use std::path::Path;

use axum::{
    handler::HandlerWithoutStateExt,
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        fallback::unknown_endpoint,
        info::info,
        persons::{create_person, delete_person, get_person, list_persons, update_person},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// Requests that match no API route are looked up in `static_dir`; whatever
/// is still unanswered gets the unknown endpoint response.
pub fn create_app(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/persons", get(list_persons).post(create_person))
        .route(
            "/persons/{id}",
            get(get_person).put(update_person).delete(delete_person),
        )
        .route("/info", get(info))
        .method_not_allowed_fallback(unknown_endpoint);

    let static_files = ServeDir::new(static_dir)
        .call_fallback_on_method_not_allowed(true)
        .fallback(unknown_endpoint.into_service());

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

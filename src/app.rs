use axum::{
    response::Redirect,
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::activity;
use crate::config::AppConfig;
use crate::shared::AppState;

/// Builds the HTTP router with all routes and layers
pub fn create_app(app_state: AppState, config: &AppConfig) -> Router {
    let app = Router::new()
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        .route("/activities", get(activity::list_activities))
        .route("/activities/:activity_name", get(activity::get_activity))
        .route(
            "/activities/:activity_name/signup",
            post(activity::signup_for_activity),
        )
        .route("/unregister", delete(activity::unregister_participant))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    if config.cors_permissive {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

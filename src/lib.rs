pub mod apidoc;
pub mod config;
pub mod handlers;
pub mod models;
pub mod profiles;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use config::Config;
use profiles::Profiles;
use services::gemini::GeminiClient;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info_span, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    pub gemini: GeminiClient,
    pub profiles: Arc<Profiles>,
}

/// Builds the application [`Router`] over the given state.
pub fn router(state: AppState) -> Router {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let origins = state
        .cfg
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {origin}");
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(AllowOrigin::list(origins))
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/api/gemini", post(routes::gemini::generate_food_bank))
        .route("/api/meal", post(routes::meal::generate_meal))
        .route("/health", get(routes::health))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", apidoc::ApiDoc::openapi()))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

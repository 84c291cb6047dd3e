use std::{sync::Arc, time::Duration};

use foodbank_ai_adapter::{
    AppState, config::Config, profiles::Profiles, router, services::gemini::GeminiClient,
};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = Config::from_env().expect("Failed to load configuration");
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(cfg.request_timeout_secs))
        .build()
        .expect("Failed to build HTTP client");
    // Compute before moving state anywhere
    let addr = format!("{}:{}", cfg.app_host, cfg.app_port);

    let gemini = GeminiClient::new(http, &cfg);

    // Generation profiles are built once and shared read-only across requests
    let state = AppState {
        gemini,
        profiles: Arc::new(Profiles::default()),
        cfg,
    };

    let app = router(state);

    let listener = TcpListener::bind(&addr).await.unwrap();

    tracing::info!("Foodbank AI adapter listening on http://{addr}");
    axum::serve(listener, app).await.unwrap();
}

mod config;
mod identity;
mod routes;
mod services;
mod state;
mod views;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");
    let identity = identity::GoTrueClient::new(&config.identity).expect("identity client init failed");
    tracing::info!(identity_url = %config.identity.url, "identity service configured");

    let state = state::AppState::new(Arc::new(identity), &config);

    // Spawn background sweep of expired sessions.
    let _sweeper = services::session::spawn_session_sweeper(
        state.auth.sessions().clone(),
        std::time::Duration::from_secs(config.session_sweep_interval_secs),
    );

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "mangrove-watch listening");
    axum::serve(listener, app).await.expect("server failed");
}

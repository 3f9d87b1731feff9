#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

use config::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::from_env()?;
    let port = config.port;
    if config.forward.is_some() {
        tracing::info!("contact relay forwarding enabled");
    } else {
        tracing::info!("contact relay storing messages in the log only");
    }

    let state = state::AppState::new(config);
    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos app unavailable, serving API routes only");
            routes::api_routes(state)
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!(%port, "webcraft listening");
    axum::serve(listener, app).await?;
    Ok(())
}

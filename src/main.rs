mod model;
mod server;

use tower_http::trace::TraceLayer;

use crate::server::{
    config::Config,
    error::{config::ConfigError, expose_stack, internal::InternalError, AppError},
    router, service::token::TokenService, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    expose_stack(config.development);

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;
    let tokens = TokenService::new(&config.jwt_secret);

    let state = AppState::new(
        db,
        http_client,
        oauth_client,
        tokens,
        config.admin_discord_id.clone(),
    );

    let app = router::router()
        .with_state(state)
        .layer(startup::cors_layer(&config))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .map_err(|source| ConfigError::Bind {
            address: config.bind_address.clone(),
            source,
        })?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(InternalError::Serve)?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down");
}

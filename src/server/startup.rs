use axum::http::HeaderValue;
use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

const DEFAULT_LOG_FILTER: &str = "cardkeeper=info,tower_http=info";

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` and falls back to info level for this crate
/// and the HTTP trace layer.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for Discord API calls.
///
/// Redirects are disabled so a response can never bounce requests to another host.
pub fn setup_reqwest_client() -> Result<reqwest::Client, ConfigError> {
    reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(ConfigError::HttpClient)
}

/// Builds the Discord OAuth2 client from configuration.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with authorize, token and redirect URLs set
/// - `Err(ConfigError::InvalidUrl)` - One of the configured URLs does not parse
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, ConfigError> {
    let auth_url = AuthUrl::new(config.discord_auth_url.clone()).map_err(|source| {
        ConfigError::InvalidUrl {
            name: "DISCORD_AUTH_URL",
            source,
        }
    })?;
    let token_url = TokenUrl::new(config.discord_token_url.clone()).map_err(|source| {
        ConfigError::InvalidUrl {
            name: "DISCORD_TOKEN_URL",
            source,
        }
    })?;
    let redirect_url = RedirectUrl::new(config.discord_redirect_url.clone()).map_err(|source| {
        ConfigError::InvalidUrl {
            name: "DISCORD_REDIRECT_URL",
            source,
        }
    })?;

    Ok(BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url))
}

/// CORS layer allowing the configured origins, or any origin when none are set.
///
/// Origins that are not valid header values are skipped with a warning.
pub fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(origins)
}

//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler
//! through axum's `State` extractor. Every field is cheap to clone: the
//! database handle is a pool, `reqwest::Client` is reference counted and the
//! token keys are small.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use crate::server::service::token::TokenService;

/// OAuth2 client for Discord with the authorize and token endpoints set.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,

    /// HTTP client for Discord API calls. Redirects are disabled.
    pub http_client: reqwest::Client,

    pub oauth_client: OAuth2Client,

    /// Issues and verifies session tokens.
    pub tokens: TokenService,

    /// Discord id granted administrator on every login.
    pub admin_discord_id: Option<String>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        tokens: TokenService,
        admin_discord_id: Option<String>,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            tokens,
            admin_discord_id,
        }
    }
}

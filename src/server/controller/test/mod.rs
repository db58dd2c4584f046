//! End-to-end tests driving the full router over HTTP.

use crate::server::{
    config::Config, router::router, service::token::TokenService, startup::setup_oauth_client,
    state::AppState,
};
use reqwest::StatusCode;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};

mod group;

const SECRET: &str = "test-secret-key-minimum-32-characters-long";

/// A server bound to an ephemeral local port.
struct TestServer {
    base_url: String,
    tokens: TokenService,
    client: reqwest::Client,
    /// Owns the in-memory database shared with the server.
    context: TestContext,
}

impl TestServer {
    async fn start() -> Self {
        let context = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = context.db.clone().unwrap();

        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            discord_client_id: "client".to_string(),
            discord_client_secret: "secret".to_string(),
            discord_redirect_url: "http://localhost/api/auth/discord".to_string(),
            discord_auth_url: "https://discord.com/oauth2/authorize".to_string(),
            discord_token_url: "https://discord.com/api/oauth2/token".to_string(),
            jwt_secret: SECRET.to_string(),
            admin_discord_id: None,
            bind_address: "127.0.0.1:0".to_string(),
            cors_origins: Vec::new(),
            development: false,
        };

        let tokens = TokenService::new(SECRET);
        let state = AppState::new(
            db,
            reqwest::Client::new(),
            setup_oauth_client(&config).unwrap(),
            tokens.clone(),
            None,
        );

        let listener = tokio::net::TcpListener::bind(&config.bind_address)
            .await
            .unwrap();
        let address = listener.local_addr().unwrap();
        let app = router().with_state(state);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", address),
            tokens,
            client: reqwest::Client::new(),
            context,
        }
    }

    fn db(&self) -> &DatabaseConnection {
        self.context.db.as_ref().unwrap()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issues a session token for a stored user.
    async fn token_for(&self, user_id: i32) -> String {
        let user = crate::server::data::user::UserRepository::new(self.db())
            .find_by_id(user_id)
            .await
            .unwrap()
            .unwrap();

        self.tokens.issue(&user).unwrap()
    }
}

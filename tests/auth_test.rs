use std::{net::SocketAddr, path::PathBuf};

use axum::{Router, http::StatusCode, response::Json, routing::post};
use serde_json::{Value, json};

use sprofcli::spotify::auth::exchange_code_pkce;

// Local stand-in for the token endpoint with one route per outcome.
async fn start_token_endpoint() -> SocketAddr {
    let app = Router::new()
        .route(
            "/token/rejected",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": "invalid_grant",
                        "error_description": "Invalid authorization code"
                    })),
                )
            }),
        )
        .route(
            "/token/granted",
            post(|| async {
                Json::<Value>(json!({
                    "access_token": "BQC_test_access_token",
                    "token_type": "Bearer",
                    "scope": "user-read-private",
                    "expires_in": 3600
                }))
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

fn token_cache_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sprofcli/cache/token.json");
    path
}

#[tokio::test]
async fn test_rejected_exchange_is_an_error_and_persists_nothing() {
    let addr = start_token_endpoint().await;

    unsafe {
        std::env::set_var("SPOTIFY_API_AUTH_CLIENT_ID", "test-client-id");
        std::env::set_var(
            "SPOTIFY_API_REDIRECT_URI",
            "http://localhost:5173/callback",
        );
        std::env::set_var(
            "SPOTIFY_API_TOKEN_URL",
            format!("http://{}/token/rejected", addr),
        );
    }

    let cache = token_cache_path();
    let cached_before = cache.exists();

    // HTTP 400 from the token endpoint yields Err, not a panic
    let result = exchange_code_pkce("stale_code", "stored_verifier").await;
    assert!(result.is_err());

    // Nothing is written to the token cache on a failed exchange
    assert_eq!(cache.exists(), cached_before);

    // A granted exchange on the same flow decodes into a token
    unsafe {
        std::env::set_var(
            "SPOTIFY_API_TOKEN_URL",
            format!("http://{}/token/granted", addr),
        );
    }

    let token = exchange_code_pkce("fresh_code", "stored_verifier")
        .await
        .unwrap();
    assert_eq!(token.access_token, "BQC_test_access_token");
    assert_eq!(token.scope, "user-read-private");
    assert_eq!(token.expires_in, 3600);
    assert!(token.obtained_at > 0);
}

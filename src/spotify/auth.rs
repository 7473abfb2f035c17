use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    config, error,
    management::TokenManager,
    server::start_api_server,
    success,
    types::{PkceSession, Token, TokenResponse},
    utils, warning,
};

/// Initiates the complete OAuth 2.0 PKCE authentication flow with Spotify.
///
/// This function orchestrates the entire authentication process including:
/// 1. Generating PKCE code verifier and challenge
/// 2. Starting a local callback server
/// 3. Opening the authorization URL in the user's browser
/// 4. Waiting for the OAuth callback
/// 5. Persisting the obtained token for future use
///
/// The PKCE (Proof Key for Code Exchange) flow provides enhanced security
/// for OAuth flows without requiring a client secret to be stored securely.
///
/// # Arguments
///
/// * `shared_state` - Thread-safe shared state holding the single PKCE
///   session slot: the code verifier written before the redirect, and the
///   token written by the callback handler after the exchange
///
/// # Authentication Flow
///
/// 1. **PKCE Setup**: Generates a random 128-character code verifier and
///    derives the corresponding code challenge using SHA-256
/// 2. **Server Start**: Launches a local HTTP server to handle the OAuth callback
/// 3. **Browser Launch**: Opens the Spotify authorization URL in the default browser
/// 4. **User Authorization**: User grants permissions in their browser
/// 5. **Callback Handling**: Local server receives the authorization code
/// 6. **Token Exchange**: Authorization code is exchanged for an access token
/// 7. **Token Persistence**: Token is saved for future API requests
///
/// # Error Handling
///
/// - Browser launch failures result in a warning with manual URL instructions
/// - Token persistence failures terminate the program with an error
/// - Authentication timeouts or failures terminate with an error message
///
/// # Security Features
///
/// - Uses PKCE flow to avoid storing client secrets
/// - The verifier is stored in the session slot before control leaves the
///   process, so the exchange is always paired with the verifier that
///   produced the challenge of this attempt
/// - Authorization code is single-use and time-limited
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tokio::sync::Mutex;
///
/// let shared_state = Arc::new(Mutex::new(None));
/// auth(shared_state).await;
/// ```
pub async fn auth(shared_state: Arc<Mutex<Option<PkceSession>>>) {
    // generate PKCE verifier and challenge
    let code_verifier = utils::generate_code_verifier(utils::CODE_VERIFIER_LENGTH);
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    // start API server
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        start_api_server(server_state).await;
    });

    // Construct the authorization URL
    let auth_url = format!(
        "{spotify_auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&code_challenge={code_challenge}&code_challenge_method=S256&scope={scope}",
        spotify_auth_url = &config::spotify_apiauth_url(),
        client_id = &config::spotify_client_id(),
        redirect_uri = &config::spotify_redirect_uri(),
        code_challenge = code_challenge,
        scope = &config::spotify_scope()
    );

    // Store verifier in shared state before redirect
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(PkceSession {
            code_verifier: code_verifier.clone(),
            token: None,
        });
    }

    // Open the authorization URL in the default browser
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    // wait for callback to be hit
    let token = wait_for_token(shared_state).await;

    match token {
        Some(t) => {
            let token_manager = TokenManager::new(t.clone());
            if let Err(e) = token_manager.persist().await {
                error!("Failed to save token to cache: {}", e);
            }

            success!("Authentication successful!");
        }
        None => {
            error!("Authentication failed or timed out.");
        }
    }
}

/// Waits for the OAuth callback to complete and return a token.
///
/// Polls the shared state for a completed authentication token with a
/// 60-second timeout. This function runs concurrently with the callback
/// handler that populates the token after successful OAuth exchange.
///
/// # Arguments
///
/// * `shared_state` - Shared state containing the PKCE session
///
/// # Returns
///
/// Returns `Some(Token)` if authentication completes successfully within the
/// timeout period, or `None` if the timeout is reached without a token.
///
/// # Timeout Behavior
///
/// - Maximum wait time: 60 seconds
/// - Polling interval: 1 second
/// - Non-blocking: Uses async sleep to avoid CPU spinning
async fn wait_for_token(shared_state: Arc<Mutex<Option<PkceSession>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(session) = lock.as_ref() {
            if let Some(token) = &session.token {
                return Some(token.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges an authorization code for an access token using PKCE.
///
/// Completes the OAuth 2.0 PKCE flow by exchanging the authorization code
/// received from the callback for an access token. This is the final step
/// in the authentication process.
///
/// # Arguments
///
/// * `code` - Authorization code received from the OAuth callback
/// * `verifier` - PKCE code verifier that was generated at the start of the flow
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Access token with scope, lifetime, and obtained_at stamp
/// - `Err(String)` - Network failure, a non-success HTTP status from the
///   token endpoint, or a malformed response body
///
/// A rejected exchange (e.g. HTTP 400 for a stale code or mismatched
/// verifier) is an `Err`, never a panic, and nothing is persisted for it.
///
/// # PKCE Security
///
/// The code verifier proves that the same client that initiated the auth
/// flow is completing it, preventing authorization code interception
/// attacks. The verifier must match the challenge that was sent in the
/// initial auth request.
///
/// # Example
///
/// ```
/// let token = exchange_code_pkce("AQA...auth_code", "dBjftJeZ...verifier").await?;
/// println!("Access token: {}", token.access_token);
/// ```
pub async fn exchange_code_pkce(code: &str, verifier: &str) -> Result<Token, String> {
    let client_id = config::spotify_client_id();
    let redirect_uri = config::spotify_redirect_uri();

    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", &client_id),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", &redirect_uri),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !res.status().is_success() {
        return Err(format!("token endpoint returned {}", res.status()));
    }

    let body: TokenResponse = res.json().await.map_err(|e| e.to_string())?;

    Ok(Token {
        access_token: body.access_token,
        scope: body.scope.unwrap_or_default(),
        expires_in: body.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    })
}

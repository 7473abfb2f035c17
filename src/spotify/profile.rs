use reqwest::Client;

use crate::{config, types::PrivateUser};

/// Retrieves the authenticated user's profile from the Spotify Web API.
///
/// Issues a single GET request against the `/me` endpoint using bearer
/// authentication and decodes the response into a [`PrivateUser`].
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(PrivateUser)` - The current user's profile
/// - `Err(reqwest::Error)` - Network error, a non-success HTTP status, or a
///   malformed response body
///
/// Non-success statuses are turned into errors before the body is decoded,
/// so an expired or revoked token surfaces as a clear 401 error instead of
/// a JSON parsing failure.
///
/// # Example
///
/// ```
/// let profile = get_profile("BQC...").await?;
/// println!("Logged in as {}", profile.id);
/// ```
pub async fn get_profile(token: &str) -> Result<PrivateUser, reqwest::Error> {
    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<PrivateUser>().await
}

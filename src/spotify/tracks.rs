use reqwest::Client;

use crate::{
    config,
    types::{SavedTrackItem, SavedTracksResponse},
};

/// Retrieves a page of the user's liked (saved) tracks from the Spotify Web API.
///
/// Fetches tracks the authenticated user has saved to their library using
/// limit/offset pagination against the `/me/tracks` endpoint.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `limit` - Maximum number of tracks to return in this request (1-50)
/// * `offset` - Index of the first track to return
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok((Vec<SavedTrackItem>, Option<u64>))` - The page of saved tracks and,
///   when the API reports a further page, the offset of that next page
/// - `Err(reqwest::Error)` - Network error, non-success HTTP status, or a
///   malformed response body
///
/// # Example
///
/// ```
/// let (tracks, next_offset) = get_saved_tracks(token, 50, 0).await?;
///
/// if let Some(offset) = next_offset {
///     let (more, _) = get_saved_tracks(token, 50, offset).await?;
/// }
/// ```
pub async fn get_saved_tracks(
    token: &str,
    limit: u64,
    offset: u64,
) -> Result<(Vec<SavedTrackItem>, Option<u64>), reqwest::Error> {
    let api_url = format!(
        "{uri}/me/tracks?limit={limit}&offset={offset}",
        uri = &config::spotify_apiurl(),
        limit = limit,
        offset = offset
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<SavedTracksResponse>().await?;

    let fetched = res.items.len() as u64;
    let next_offset = res.next.as_ref().map(|_| offset + fetched);

    Ok((res.items, next_offset))
}

/// Retrieves the total count of tracks the user has liked.
///
/// Makes a minimal request (`limit=1`) to read the library size from the
/// response metadata without transferring the whole library. Used to size
/// the progress bar before a full fetch.
///
/// # Returns
///
/// Returns `Ok(u64)` with the total number of saved tracks, or the HTTP
/// error if the request fails.
pub async fn get_saved_tracks_total(token: &str) -> Result<u64, reqwest::Error> {
    let api_url = format!(
        "{uri}/me/tracks?limit=1&offset=0",
        uri = &config::spotify_apiurl()
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<SavedTracksResponse>().await?;

    Ok(res.total.unwrap_or(0))
}

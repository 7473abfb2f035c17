use std::cmp::Ordering;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::DateTime;
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::{SavedTrackItem, TrackTableRow};

// RFC 7636 allows 43..=128 characters; use the maximum entropy.
pub const CODE_VERIFIER_LENGTH: usize = 128;

pub fn generate_code_verifier(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

pub fn join_artist_names(item: &SavedTrackItem) -> String {
    item.track
        .artists
        .iter()
        .map(|a| a.name.clone())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_added_at(added_at: &str) -> String {
    // Spotify reports RFC 3339 timestamps; the table only needs the date.
    DateTime::parse_from_rfc3339(added_at)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| added_at.to_string())
}

pub fn track_table_rows(items: &[SavedTrackItem]) -> Vec<TrackTableRow> {
    items
        .iter()
        .map(|item| TrackTableRow {
            name: item.track.name.clone(),
            artists: join_artist_names(item),
            popularity: item.track.popularity,
            added: format_added_at(&item.added_at),
        })
        .collect()
}

pub fn sort_track_rows(rows: &mut Vec<TrackTableRow>) {
    rows.sort_by(|a, b| {
        match b.added.cmp(&a.added) {
            Ordering::Equal => a.name.cmp(&b.name), // secondary sort: name ascending
            other => other,
        }
    });
}

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{error, info, management::TokenManager, spotify, types::SavedTrackItem, utils};

const PAGE_SIZE: u64 = 50;

pub async fn tracks(limit: Option<u64>) {
    let token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run sprofcli auth\n Error: {}",
                e
            );
        }
    };

    let token = match token_mgr.valid_token() {
        Ok(t) => t,
        Err(e) => {
            error!("{}. Please run sprofcli auth", e);
        }
    };

    let items = match load_saved_tracks(&token, limit).await {
        Ok(items) => items,
        Err(e) => {
            error!("Failed to fetch liked tracks: {}", e);
        }
    };

    if items.is_empty() {
        info!("No liked tracks found.");
        return;
    }

    let mut rows = utils::track_table_rows(&items);
    utils::sort_track_rows(&mut rows);

    let table = Table::new(rows);
    println!("{}", table);
}

pub async fn load_saved_tracks(
    token: &str,
    limit: Option<u64>,
) -> Result<Vec<SavedTrackItem>, reqwest::Error> {
    // A fetch capped within a single page needs no extra sizing request.
    let target = match limit {
        Some(cap) if cap <= PAGE_SIZE => cap,
        Some(cap) => spotify::tracks::get_saved_tracks_total(token).await?.min(cap),
        None => spotify::tracks::get_saved_tracks_total(token).await?,
    };

    let pb = ProgressBar::new(target);
    pb.set_message("Fetching liked tracks...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg} {pos}/{len}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut all_items: Vec<SavedTrackItem> = Vec::new();
    let mut offset: u64 = 0;

    while (all_items.len() as u64) < target {
        let remaining = target - all_items.len() as u64;
        let page = remaining.min(PAGE_SIZE);

        let result = spotify::tracks::get_saved_tracks(token, page, offset).await;

        match result {
            Ok((items, next_offset)) => {
                if items.is_empty() {
                    break;
                }

                all_items.extend(items);
                pb.set_position(all_items.len() as u64);

                match next_offset {
                    Some(next) => offset = next,
                    None => break,
                }
            }
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        }
    }

    pb.finish_and_clear();
    all_items.truncate(target as usize);

    Ok(all_items)
}

use colored::Colorize;

use crate::{error, management::TokenManager, spotify, types::PrivateUser};

pub async fn profile() {
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

    match spotify::profile::get_profile(&token).await {
        Ok(profile) => print_profile(&profile),
        Err(e) => {
            error!("Failed to fetch profile: {}", e);
        }
    }
}

fn print_profile(profile: &PrivateUser) {
    let display_name = profile
        .display_name
        .clone()
        .unwrap_or_else(|| profile.id.clone());

    println!("{}", display_name.bold());
    println!("{:>10} {}", "id:".dimmed(), profile.id);
    if let Some(email) = &profile.email {
        println!("{:>10} {}", "email:".dimmed(), email);
    }
    println!("{:>10} {}", "uri:".dimmed(), profile.uri);
    println!("{:>10} {}", "url:".dimmed(), profile.href);
    println!("{:>10} {}", "open:".dimmed(), profile.external_urls.spotify);
    if let Some(followers) = &profile.followers {
        println!("{:>10} {}", "followers:".dimmed(), followers.total);
    }
    if let Some(image) = profile.images.first() {
        println!("{:>10} {}", "image:".dimmed(), image.url);
    }
}

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Res, info,
    config::CredentialsManager,
    trakt::{self, TraktClient},
};

/// Prints the profile of the authenticated user.
pub async fn whoami() -> Res<()> {
    let manager = CredentialsManager::load().await?;
    let client = TraktClient::new(manager.credentials().clone())?;

    let pb = ProgressBar::new_spinner();
    pb.set_message("Loading user settings...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = trakt::get_user_settings(&client).await;
    pb.finish_and_clear();
    let settings = result?;

    let user = settings.user;
    info!("Username: {} ({})", user.username, user.ids.slug);
    if !user.name.is_empty() {
        info!("Name: {}", user.name);
    }
    if !user.location.is_empty() {
        info!("Location: {}", user.location);
    }
    if let Some(joined_at) = user.joined_at {
        info!("Joined: {}", joined_at.format("%Y-%m-%d"));
    }
    info!("VIP: {}", if user.vip { "yes" } else { "no" });
    if !settings.account.timezone.is_empty() {
        info!("Timezone: {}", settings.account.timezone);
    }

    Ok(())
}

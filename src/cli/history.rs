use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    Res,
    config::CredentialsManager,
    trakt::{self, TraktClient},
    types::{HistoryEntry, HistoryTableRow, PaginationParams},
    utils,
};

/// Shows one page of the user's watch history as a table.
///
/// The user slug is taken from the authenticated account's settings, so
/// the command works without any positional argument.
pub async fn history(page: u32, limit: u32) -> Res<()> {
    let manager = CredentialsManager::load().await?;
    let client = TraktClient::new(manager.credentials().clone())?;

    let pb = ProgressBar::new_spinner();
    pb.set_message("Loading history...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = async {
        let settings = trakt::get_user_settings(&client).await?;
        trakt::get_user_history(
            &client,
            &settings.user.ids.slug,
            PaginationParams { page, limit },
        )
        .await
    }
    .await;
    pb.finish_and_clear();
    let (items, pagination) = result?;

    let rows: Vec<HistoryTableRow> = items
        .into_iter()
        .map(|item| {
            let watched = utils::relative_time(item.watched_at);
            match item.entry {
                HistoryEntry::Movie { movie } => HistoryTableRow {
                    kind: "Movie 🎬".into(),
                    title: movie.title,
                    watched,
                },
                HistoryEntry::Episode { show, episode } => HistoryTableRow {
                    kind: "TV Show 📺".into(),
                    title: format!(
                        "{} ({})",
                        show.title,
                        utils::episode_code(episode.season, episode.number)
                    ),
                    watched,
                },
            }
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
    println!(
        "Page {} out of {}, {} items in total",
        pagination.page, pagination.page_count, pagination.item_count
    );

    Ok(())
}

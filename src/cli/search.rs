use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    Res,
    config::CredentialsManager,
    trakt::{self, TraktClient},
    types::{SearchEntry, SearchTableRow},
};

/// Searches Trakt for movies and shows and renders the matches.
pub async fn search(query: String, search_type: String) -> Res<()> {
    let manager = CredentialsManager::load().await?;
    let client = TraktClient::new(manager.credentials().clone())?;

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Searching for '{}'...", query));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = trakt::search(&client, &query, &search_type).await;
    pb.finish_and_clear();
    let results = result?;

    if results.is_empty() {
        println!("No results found.");
        return Ok(());
    }

    let rows: Vec<SearchTableRow> = results
        .into_iter()
        .map(|result| match result.entry {
            SearchEntry::Movie { movie } => SearchTableRow {
                kind: "Movie".into(),
                title: movie.title,
                year: movie.year.map(|y| y.to_string()).unwrap_or_default(),
                imdb: movie.ids.imdb.unwrap_or_default(),
            },
            SearchEntry::Show { show } => SearchTableRow {
                kind: "TV Show".into(),
                title: show.title,
                year: show.year.map(|y| y.to_string()).unwrap_or_default(),
                imdb: show.ids.imdb.unwrap_or_default(),
            },
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);

    Ok(())
}

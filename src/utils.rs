use chrono::{DateTime, Utc};

/// Formats a watch timestamp as a human-friendly relative time
/// ("3 days ago"). Timestamps in the future collapse to "now".
pub fn relative_time(watched_at: DateTime<Utc>) -> String {
    let elapsed = (Utc::now() - watched_at).to_std().unwrap_or_default();
    timeago::Formatter::new().convert(elapsed)
}

/// Formats a season/episode pair as the usual SxxEyy code.
pub fn episode_code(season: u32, number: u32) -> String {
    format!("S{season:02}E{number:02}")
}

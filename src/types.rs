use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Contents of the credential file, written after a successful device
/// authorization and loaded at the start of every authenticated command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "client-id")]
    pub client_id: String,
    #[serde(rename = "client-secret")]
    pub client_secret: String,
    #[serde(rename = "access-token")]
    pub access_token: String,
}

impl Credentials {
    /// Credentials carrying only the application keys, used for the
    /// unauthenticated calls of the device authorization flow.
    pub fn unauthorized(client_id: String, client_secret: String) -> Self {
        Credentials {
            client_id,
            client_secret,
            access_token: String::new(),
        }
    }
}

/// Response of `POST /oauth/device/code`. Lives only for the duration of a
/// single auth flow invocation and is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceCodeGrant {
    pub device_code: String,
    pub user_code: String,
    pub verification_url: String,
    pub expires_in: u64,
    pub interval: u64,
}

/// Response of `POST /oauth/device/token` once the user approved the code.
/// Immediately reduced to [`Credentials`] for persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: u64,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub created_at: u64,
}

/// Requested page number and size. Zero means "leave it to the server" and
/// is not sent as a query parameter.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaginationParams {
    pub page: u32,
    pub limit: u32,
}

/// Pagination as applied by the server, echoed back via the
/// `X-Pagination-*` response headers. Absent headers become empty strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaginationInfo {
    pub page: String,
    pub limit: String,
    pub page_count: String,
    pub item_count: String,
}

impl PaginationInfo {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string()
        };

        PaginationInfo {
            page: header("x-pagination-page"),
            limit: header("x-pagination-limit"),
            page_count: header("x-pagination-page-count"),
            item_count: header("x-pagination-item-count"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieIds {
    #[serde(default)]
    pub trakt: u64,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub imdb: Option<String>,
    #[serde(default)]
    pub tmdb: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowIds {
    #[serde(default)]
    pub trakt: u64,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub tvdb: Option<u64>,
    #[serde(default)]
    pub imdb: Option<String>,
    #[serde(default)]
    pub tmdb: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EpisodeIds {
    #[serde(default)]
    pub trakt: u64,
    #[serde(default)]
    pub tvdb: Option<u64>,
    #[serde(default)]
    pub imdb: Option<String>,
    #[serde(default)]
    pub tmdb: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub ids: MovieIds,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Show {
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub ids: ShowIds,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Episode {
    #[serde(default)]
    pub season: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub ids: EpisodeIds,
}

/// The media branch of a history item, keyed by the `type` discriminant.
/// Exactly one variant is populated per item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HistoryEntry {
    Movie { movie: Movie },
    Episode { show: Show, episode: Episode },
}

/// One watch event from `GET /users/{slug}/history`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: u64,
    pub watched_at: DateTime<Utc>,
    #[serde(default)]
    pub action: String,
    #[serde(flatten)]
    pub entry: HistoryEntry,
}

/// The media branch of a search result, keyed by the `type` discriminant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchEntry {
    Movie { movie: Movie },
    Show { show: Show },
}

/// One relevance-scored match from `GET /search/{type}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub score: f64,
    #[serde(flatten)]
    pub entry: SearchEntry,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserIds {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub uuid: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub vip: bool,
    #[serde(default)]
    pub ids: UserIds,
    #[serde(default)]
    pub joined_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountSettings {
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub date_format: String,
    #[serde(default)]
    pub time_24hr: bool,
}

/// Response of `GET /users/settings` for the authenticated user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserSettings {
    pub user: UserProfile,
    #[serde(default)]
    pub account: AccountSettings,
}

#[derive(Tabled)]
pub struct HistoryTableRow {
    #[tabled(rename = "Type")]
    pub kind: String,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Watched")]
    pub watched: String,
}

#[derive(Tabled)]
pub struct SearchTableRow {
    #[tabled(rename = "Type")]
    pub kind: String,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Year")]
    pub year: String,
    #[tabled(rename = "IMDB")]
    pub imdb: String,
}

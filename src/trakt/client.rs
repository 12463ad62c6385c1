use std::time::Duration;

use reqwest::{Client, Method, Response, header};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    Res,
    error::TraktError,
    types::{Credentials, PaginationParams},
};

/// Base URL of the Trakt.tv API.
pub const TRAKT_API_URL: &str = "https://api.trakt.tv";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
const IDLE_TIMEOUT: Duration = Duration::from_secs(5);

/// Everything needed to build one API request.
///
/// Mirrors the shape of the API contract: method and path are mandatory,
/// body, pagination and extra query pairs are optional, and `auth` decides
/// whether the API-key and bearer headers are attached.
pub struct RequestParams {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub auth: bool,
    pub pagination: PaginationParams,
    pub query: Vec<(String, String)>,
}

impl Default for RequestParams {
    fn default() -> Self {
        RequestParams {
            method: Method::GET,
            path: String::new(),
            body: None,
            auth: false,
            pagination: PaginationParams::default(),
            query: Vec::new(),
        }
    }
}

/// Thin transport wrapper around one `reqwest::Client`.
///
/// Does not inspect status codes and does not decode bodies; that is the
/// responsibility of the resource operations built on top.
pub struct TraktClient {
    endpoint: String,
    http: Client,
    credentials: Credentials,
}

impl TraktClient {
    pub fn new(credentials: Credentials) -> Res<Self> {
        Self::with_endpoint(TRAKT_API_URL, credentials)
    }

    /// Like [`TraktClient::new`] but against a custom base URL. Used by the
    /// integration tests to point the client at a local mock server.
    pub fn with_endpoint(endpoint: impl Into<String>, credentials: Credentials) -> Res<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .pool_idle_timeout(IDLE_TIMEOUT)
            .build()?;

        Ok(TraktClient {
            endpoint: endpoint.into(),
            http,
            credentials,
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Sends one API request and returns the raw response.
    ///
    /// Always sets `Accept: application/json` and `trakt-api-version: 2`.
    /// Pagination parameters are only added when nonzero; extra query pairs
    /// are merged in after them. Authenticated requests fail fast with
    /// [`TraktError::NotAuthenticated`] when no access token is stored.
    pub async fn request(&self, params: RequestParams) -> Res<Response> {
        let url = format!("{}{}", self.endpoint, params.path);
        let mut req = self
            .http
            .request(params.method, url)
            .header(header::ACCEPT, "application/json")
            .header("trakt-api-version", "2");

        if let Some(body) = &params.body {
            // sets Content-Type: application/json
            req = req.json(body);
        }

        let mut query: Vec<(String, String)> = Vec::new();
        if params.pagination.page != 0 {
            query.push(("page".into(), params.pagination.page.to_string()));
        }
        if params.pagination.limit != 0 {
            query.push(("limit".into(), params.pagination.limit.to_string()));
        }
        query.extend(params.query);
        if !query.is_empty() {
            req = req.query(&query);
        }

        if params.auth {
            if self.credentials.access_token.is_empty() {
                return Err(TraktError::NotAuthenticated);
            }
            req = req
                .header("trakt-api-key", &self.credentials.client_id)
                .bearer_auth(&self.credentials.access_token);
        }

        Ok(req.send().await?)
    }
}

/// Decodes a response body, keeping transport failures (`Network`) apart
/// from malformed JSON (`Decode`).
pub async fn decode_json<T: DeserializeOwned>(response: Response) -> Res<T> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

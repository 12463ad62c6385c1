use reqwest::{Method, StatusCode};

use crate::{
    Res,
    error::TraktError,
    trakt::{RequestParams, TraktClient, decode_json},
    types::{PaginationParams, SearchResult},
};

const SEARCH_PAGE_SIZE: u32 = 10;

/// Searches for movies and shows matching `query`.
///
/// `search_type` becomes a URL path segment verbatim (`movie`, `show`, or
/// a comma-joined combination); the server is authoritative on valid
/// values. Results are capped at one page of ten.
pub async fn search(
    client: &TraktClient,
    query: &str,
    search_type: &str,
) -> Res<Vec<SearchResult>> {
    let response = client
        .request(RequestParams {
            method: Method::GET,
            path: format!("/search/{search_type}"),
            auth: true,
            pagination: PaginationParams {
                page: 0,
                limit: SEARCH_PAGE_SIZE,
            },
            query: vec![("query".into(), query.into())],
            ..Default::default()
        })
        .await?;

    if response.status() != StatusCode::OK {
        return Err(TraktError::Status {
            context: "search",
            status: response.status(),
        });
    }

    decode_json(response).await
}

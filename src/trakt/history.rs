use reqwest::{Method, StatusCode};

use crate::{
    Res,
    error::TraktError,
    trakt::{RequestParams, TraktClient, decode_json},
    types::{HistoryItem, PaginationInfo, PaginationParams},
};

/// Fetches one page of the user's watch history.
///
/// Pagination as applied by the server is read from the `X-Pagination-*`
/// response headers; headers the server left out come back as empty
/// strings, not as errors.
pub async fn get_user_history(
    client: &TraktClient,
    user: &str,
    pagination: PaginationParams,
) -> Res<(Vec<HistoryItem>, PaginationInfo)> {
    let response = client
        .request(RequestParams {
            method: Method::GET,
            path: format!("/users/{user}/history"),
            auth: true,
            pagination,
            ..Default::default()
        })
        .await?;

    if response.status() != StatusCode::OK {
        return Err(TraktError::Status {
            context: "get user history",
            status: response.status(),
        });
    }

    let pagination = PaginationInfo::from_headers(response.headers());
    let items = decode_json(response).await?;

    Ok((items, pagination))
}

use reqwest::{Method, StatusCode};

use crate::{
    Res,
    error::TraktError,
    trakt::{RequestParams, TraktClient, decode_json},
    types::UserSettings,
};

/// Fetches the settings of the authenticated user.
pub async fn get_user_settings(client: &TraktClient) -> Res<UserSettings> {
    let response = client
        .request(RequestParams {
            method: Method::GET,
            path: "/users/settings".into(),
            auth: true,
            ..Default::default()
        })
        .await?;

    if response.status() != StatusCode::OK {
        return Err(TraktError::Status {
            context: "get user settings",
            status: response.status(),
        });
    }

    decode_json(response).await
}

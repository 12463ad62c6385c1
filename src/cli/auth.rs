use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Res,
    config::CredentialsManager,
    error::TraktError,
    info,
    trakt::{TraktClient, auth},
    types::Credentials,
};

/// Runs the device authorization flow and persists the credentials.
///
/// Requests a device code, tells the user where to enter it, then polls
/// until the code is approved, expired, or the user hits Ctrl-C. The
/// credential file is only written after a token was granted, so an
/// aborted flow never leaves partial state behind.
pub async fn auth(client_id: String, client_secret: String) -> Res<()> {
    let client = TraktClient::new(Credentials::unauthorized(
        client_id.clone(),
        client_secret.clone(),
    ))?;

    let grant = auth::request_device_code(&client, &client_id).await?;

    info!(
        "Please go to {} and enter the following code: {}",
        grant.verification_url, grant.user_code
    );

    let pb = ProgressBar::new_spinner();
    pb.set_message("Waiting for authorization...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let token = tokio::select! {
        result = auth::wait_for_token(&client, &grant, &client_id, &client_secret) => {
            pb.finish_and_clear();
            result?
        }
        _ = tokio::signal::ctrl_c() => {
            pb.finish_and_clear();
            return Err(TraktError::AuthCancelled);
        }
    };

    let manager = CredentialsManager::new(Credentials {
        client_id,
        client_secret,
        access_token: token.access_token,
    });
    manager.persist().await?;

    crate::success!(
        "Authentication successful, credentials written to {}",
        CredentialsManager::config_path().display()
    );

    Ok(())
}

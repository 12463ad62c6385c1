//! Credential file management.
//!
//! Credentials (client ID, client secret, access token) live in a small YAML
//! file under the platform config directory:
//!
//! - Linux: `~/.config/trakt-cli/config.yaml`
//! - macOS: `~/Library/Application Support/trakt-cli/config.yaml`
//! - Windows: `%APPDATA%/trakt-cli/config.yaml`
//!
//! The file is read once at the start of every command and written at most
//! once, at the end of a successful `trakt auth` run. There is no locking;
//! each invocation is an independent process.

use std::path::{Path, PathBuf};

use crate::{Res, error::TraktError, types::Credentials};

#[derive(Debug)]
pub struct CredentialsManager {
    credentials: Credentials,
}

impl CredentialsManager {
    pub fn new(credentials: Credentials) -> Self {
        CredentialsManager { credentials }
    }

    /// Loads credentials from the default config path.
    ///
    /// A missing file maps to [`TraktError::ConfigMissing`] and an
    /// unparsable one to [`TraktError::ConfigParse`], both of which tell
    /// the user to run `trakt auth`.
    pub async fn load() -> Res<Self> {
        Self::load_from(&Self::config_path()).await
    }

    pub async fn load_from(path: &Path) -> Res<Self> {
        let content = async_fs::read_to_string(path)
            .await
            .map_err(|_| TraktError::ConfigMissing(path.to_path_buf()))?;
        let credentials =
            serde_yaml::from_str(&content).map_err(|source| TraktError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self { credentials })
    }

    /// Writes the credentials to the default config path, creating parent
    /// directories as needed.
    pub async fn persist(&self) -> Res<()> {
        self.persist_to(&Self::config_path()).await
    }

    pub async fn persist_to(&self, path: &Path) -> Res<()> {
        let write_err = |source: std::io::Error| TraktError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await.map_err(write_err)?;
        }

        // serde_yaml only fails on non-string keys or recursion, neither of
        // which Credentials can produce
        let yaml = serde_yaml::to_string(&self.credentials)
            .map_err(|e| write_err(std::io::Error::other(e)))?;
        async_fs::write(path, yaml).await.map_err(write_err)
    }

    pub fn config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("trakt-cli/config.yaml");
        path
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

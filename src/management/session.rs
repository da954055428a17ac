use std::{io::ErrorKind, path::PathBuf};

use crate::{config, error::Result, types::Session, utils};

/// Seconds before the recorded expiry at which a session is treated as gone.
/// Short-lived sessions use half their lifetime instead.
const EXPIRY_MARGIN_SECS: u64 = 60;

/// Keeps the signed-in session of this device on disk.
#[derive(Debug, Clone)]
pub struct SessionManager {
    path: PathBuf,
}

impl SessionManager {
    /// Manager for `<app data dir>/session.json`.
    pub fn new() -> Result<Self> {
        Ok(Self::at(config::app_data_dir()?.join("session.json")))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the stored session, `None` when nobody is signed in.
    pub async fn load(&self) -> Result<Option<Session>> {
        let content = match async_fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Loads the stored session only if it has not expired.
    pub async fn load_valid(&self) -> Result<Option<Session>> {
        Ok(self.load().await?.filter(|s| !Self::is_expired(s)))
    }

    pub async fn persist(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(session)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }

    pub async fn clear(&self) -> Result<()> {
        match async_fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn is_expired(session: &Session) -> bool {
        let margin = EXPIRY_MARGIN_SECS.min(session.expires_in / 2);
        let now = utils::now_timestamp();
        now.saturating_add(margin) >= session.obtained_at.saturating_add(session.expires_in)
    }
}

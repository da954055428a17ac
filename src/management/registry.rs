use std::{collections::HashMap, io::ErrorKind, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::{error::Result, utils};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub user: String,
    pub expires_at: u64,
}

/// Sessions issued by the service, keyed by token hash.
///
/// Plain tokens are handed to the client once and never written to disk.
pub struct SessionRegistry {
    path: PathBuf,
    sessions: HashMap<String, SessionRecord>,
}

impl SessionRegistry {
    pub async fn load(path: PathBuf) -> Result<Self> {
        let content = match async_fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };

        let mut sessions: HashMap<String, SessionRecord> = if content.trim().is_empty() {
            HashMap::new()
        } else {
            serde_json::from_str(&content)?
        };

        let now = utils::now_timestamp();
        sessions.retain(|_, record| record.expires_at > now);

        Ok(Self { path, sessions })
    }

    pub async fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.sessions)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Issues a new session for `user` valid for `ttl` seconds and returns
    /// the plain token. Expired sessions are dropped on the way.
    pub fn issue(&mut self, user: &str, ttl: u64) -> String {
        let now = utils::now_timestamp();
        self.sessions.retain(|_, record| record.expires_at > now);

        let token = utils::generate_session_token();
        self.sessions.insert(
            utils::hash_session_token(&token),
            SessionRecord {
                user: user.to_string(),
                expires_at: now.saturating_add(ttl),
            },
        );
        token
    }

    /// Returns the live session behind `token`.
    pub fn lookup(&self, token: &str) -> Option<&SessionRecord> {
        let now = utils::now_timestamp();
        self.sessions
            .get(&utils::hash_session_token(token))
            .filter(|record| record.expires_at > now)
    }

    /// Number of sessions currently held.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn revoke(&mut self, token: &str) -> bool {
        self.sessions
            .remove(&utils::hash_session_token(token))
            .is_some()
    }
}

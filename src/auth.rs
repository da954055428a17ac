//! Authentication probe consulted by the storage facade.

use async_trait::async_trait;

use crate::{error::Result, management::SessionManager};

/// Answers whether the current caller holds an authenticated session.
///
/// Called once per storage operation; implementations must not assume the
/// answer is cached between calls.
#[async_trait]
pub trait AuthProbe: Send + Sync {
    async fn is_authenticated(&self) -> Result<bool>;
}

/// Probe backed by the session file written at sign-in.
pub struct SessionProbe {
    sessions: SessionManager,
}

impl SessionProbe {
    pub fn new(sessions: SessionManager) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl AuthProbe for SessionProbe {
    async fn is_authenticated(&self) -> Result<bool> {
        Ok(self.sessions.load_valid().await?.is_some())
    }
}

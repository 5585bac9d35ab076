use crate::models::AdminSession;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Credentials passed explicitly to admin accessors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthContext {
    token: Option<String>,
}

impl AuthContext {
    /// No token; admin endpoints will answer 401
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            token: (!token.trim().is_empty()).then_some(token),
        }
    }

    pub fn from_session(session: Option<&AdminSession>) -> Self {
        session
            .map(|s| Self::with_token(s.token.clone()))
            .unwrap_or_default()
    }

    /// Token for the `Authorization: Bearer` header, if any
    pub fn bearer(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Where the admin session lives between runs. Written only at login and
/// logout.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self) -> Result<Option<AdminSession>>;
    async fn save(&self, session: &AdminSession) -> Result<()>;
    async fn clear(&self) -> Result<()>;

    /// Auth context for the stored session, anonymous when there is none
    async fn auth(&self) -> Result<AuthContext> {
        Ok(AuthContext::from_session(self.load().await?.as_ref()))
    }
}

/// Session kept in memory only
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: RwLock<Option<AdminSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> Result<Option<AdminSession>> {
        Ok(self.session.read().await.clone())
    }

    async fn save(&self, session: &AdminSession) -> Result<()> {
        *self.session.write().await = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.session.write().await = None;
        Ok(())
    }
}

/// Session persisted as a JSON file holding `adminToken` and `adminUser`
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Option<AdminSession>> {
        let json = match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No session file at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read session file {}", self.path.display()));
            }
        };

        let session = serde_json::from_str(&json)
            .with_context(|| format!("Session file {} is not valid JSON", self.path.display()))?;
        Ok(Some(session))
    }

    async fn save(&self, session: &AdminSession) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(session)?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("Failed to write session file {}", self.path.display()))?;
        info!("💾 Saved admin session to {}", self.path.display());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove session file {}", self.path.display())),
        }
    }
}

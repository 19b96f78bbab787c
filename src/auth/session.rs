use crate::auth::traits::SessionBackend;
use crate::error::SessionError;
use crate::models::User;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Storage key holding the serialized signed-in user
pub const SESSION_KEY: &str = "user";

/// The signed-in user, mirrored to a durable backend
///
/// Read once in [`SessionStore::load`]; written on every change.
pub struct SessionStore {
    backend: Arc<dyn SessionBackend>,
    current: RwLock<Option<User>>,
}

impl SessionStore {
    /// Restore the session persisted under [`SESSION_KEY`]
    ///
    /// A record (or backing store) that no longer parses is discarded and the
    /// store starts signed out. I/O failures are still returned.
    pub async fn load(backend: Arc<dyn SessionBackend>) -> Result<Self, SessionError> {
        let stored = match backend.get(SESSION_KEY).await {
            Ok(stored) => stored,
            Err(SessionError::Serialization(e)) => {
                warn!("Discarding unreadable session storage: {}", e);
                None
            }
            Err(e) => return Err(e),
        };

        let current = match stored {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    info!("Restored session for {}", user.email);
                    Some(user)
                }
                Err(e) => {
                    warn!("Discarding unreadable session record: {}", e);
                    None
                }
            },
            None => None,
        };

        Ok(Self {
            backend,
            current: RwLock::new(current),
        })
    }

    pub async fn current_user(&self) -> Option<User> {
        self.current.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }

    /// Persist `user` and make it current
    pub async fn set_user(&self, user: User) -> Result<(), SessionError> {
        let json = serde_json::to_string(&user)?;
        self.backend.set(SESSION_KEY, json).await?;
        debug!("Persisted session for {}", user.email);
        *self.current.write().await = Some(user);
        Ok(())
    }

    pub async fn clear(&self) -> Result<(), SessionError> {
        self.backend.remove(SESSION_KEY).await?;
        *self.current.write().await = None;
        Ok(())
    }
}

use crate::error::{AuthError, SessionError};
use crate::models::User;
use async_trait::async_trait;

/// Common trait for authentication providers
/// The mock directory implements it today; a real backend can replace it later
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Sign in and persist the session
    async fn login(&self, email: &str, password: &str) -> Result<User, AuthError>;

    /// Create an account, then sign in as it
    async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError>;

    /// Clear the current session
    async fn logout(&self) -> Result<(), AuthError>;

    /// The signed-in user, if any
    async fn current_user(&self) -> Option<User>;
}

/// Durable string key-value storage for session data
#[async_trait]
pub trait SessionBackend: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    async fn set(&self, key: &str, value: String) -> Result<(), SessionError>;

    async fn remove(&self, key: &str) -> Result<(), SessionError>;
}

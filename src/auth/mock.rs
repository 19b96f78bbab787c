use crate::auth::session::SessionStore;
use crate::auth::traits::AuthProvider;
use crate::error::AuthError;
use crate::models::{Account, User};
use async_trait::async_trait;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

/// Simulated network latency for login / register
pub const DEFAULT_AUTH_DELAY: Duration = Duration::from_millis(800);

/// Auth provider backed by an in-memory account directory
///
/// Login and register resolve after a fixed delay. At most one of them may
/// be in flight at a time; an overlapping call fails with
/// [`AuthError::OperationInProgress`] and leaves the session untouched.
/// Logout queues behind an in-flight call instead of racing it.
pub struct MockAuthService {
    accounts: RwLock<Vec<Account>>,
    session: Arc<SessionStore>,
    delay: Duration,
    in_flight: Mutex<()>,
}

impl MockAuthService {
    pub fn new(accounts: Vec<Account>, session: Arc<SessionStore>) -> Self {
        Self::with_delay(accounts, session, DEFAULT_AUTH_DELAY)
    }

    pub fn with_delay(accounts: Vec<Account>, session: Arc<SessionStore>, delay: Duration) -> Self {
        Self {
            accounts: RwLock::new(accounts),
            session,
            delay,
            in_flight: Mutex::new(()),
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// One past the highest numeric id in the directory
    fn next_id(accounts: &[Account]) -> String {
        let max = accounts
            .iter()
            .filter_map(|a| a.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (max + 1).to_string()
    }

    fn random_avatar() -> String {
        let mut rng = rand::thread_rng();
        let gender = if rng.gen_bool(0.5) { "men" } else { "women" };
        let index: u8 = rng.gen_range(0..10);
        format!("https://randomuser.me/api/portraits/{gender}/{index}.jpg")
    }
}

#[async_trait]
impl AuthProvider for MockAuthService {
    async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let _flight = self
            .in_flight
            .try_lock()
            .map_err(|_| AuthError::OperationInProgress)?;

        info!("Login attempt for {}", email);
        tokio::time::sleep(self.delay).await;

        let user = self
            .accounts
            .read()
            .await
            .iter()
            .find(|a| a.email == email && a.password == password)
            .map(Account::to_user);

        let Some(user) = user else {
            warn!("Login failed for {}", email);
            return Err(AuthError::InvalidCredentials);
        };

        self.session.set_user(user.clone()).await?;
        info!("Logged in as {}", user.name);
        Ok(user)
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        if name.trim().is_empty() {
            return Err(AuthError::Validation("Name is required".to_string()));
        }

        let _flight = self
            .in_flight
            .try_lock()
            .map_err(|_| AuthError::OperationInProgress)?;

        info!("Registration attempt for {}", email);
        tokio::time::sleep(self.delay).await;

        let mut accounts = self.accounts.write().await;
        if accounts.iter().any(|a| a.email == email) {
            warn!("Registration rejected, {} already in use", email);
            return Err(AuthError::EmailAlreadyInUse);
        }

        let account = Account {
            id: Self::next_id(&accounts),
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            avatar: Some(Self::random_avatar()),
        };
        let user = account.to_user();

        // the account only exists once its session is persisted
        self.session.set_user(user.clone()).await?;
        accounts.push(account);

        info!("Registered and logged in as {}", user.name);
        Ok(user)
    }

    /// Waits for any in-flight login or register to settle first
    async fn logout(&self) -> Result<(), AuthError> {
        let _flight = self.in_flight.lock().await;
        self.session.clear().await?;
        info!("Logged out");
        Ok(())
    }

    async fn current_user(&self) -> Option<User> {
        self.session.current_user().await
    }
}

use crate::domain::model::{ProfileUpdate, SignupRequest, User, UserType};
use crate::domain::ports::{ConfigProvider, IdentityStore};
use crate::utils::error::{HomieError, Result};
use crate::utils::validation::{require_fields, validate_min_length, Validate};
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use tokio::sync::RwLock;

pub const DEFAULT_LOGIN_DELAY: Duration = Duration::from_millis(1000);
pub const DEFAULT_SIGNUP_DELAY: Duration = Duration::from_millis(1500);
const MIN_PASSWORD_LEN: usize = 6;

impl Validate for SignupRequest {
    fn validate(&self) -> Result<()> {
        require_fields(&[
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
            ("address", self.address.as_str()),
            ("password", self.password.as_str()),
        ])?;

        if self.password != self.confirm_password {
            return Err(HomieError::validation("Passwords do not match"));
        }

        validate_min_length("Password", &self.password, MIN_PASSWORD_LEN)
    }
}

/// In-memory session. No credential checks; every call resolves after a fixed delay.
#[derive(Debug)]
pub struct InMemoryIdentityStore {
    session: RwLock<Option<User>>,
    login_delay: Duration,
    signup_delay: Duration,
}

impl InMemoryIdentityStore {
    pub fn new(login_delay: Duration, signup_delay: Duration) -> Self {
        Self {
            session: RwLock::new(None),
            login_delay,
            signup_delay,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(config.login_delay(), config.signup_delay())
    }

    /// 測試用，不等待
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    async fn simulate_latency(delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for InMemoryIdentityStore {
    fn default() -> Self {
        Self::new(DEFAULT_LOGIN_DELAY, DEFAULT_SIGNUP_DELAY)
    }
}

#[async_trait]
impl IdentityStore for InMemoryIdentityStore {
    async fn login(&self, email: &str, password: &str, user_type: UserType) -> Result<User> {
        if email.is_empty() || password.is_empty() {
            return Err(HomieError::validation("Please fill in all fields"));
        }

        Self::simulate_latency(self.login_delay).await;

        let user = User {
            id: "1".to_string(),
            email: email.to_string(),
            name: "Demo User".to_string(),
            phone: "+91 9876543210".to_string(),
            address: "Mumbai, Maharashtra".to_string(),
            user_type,
            is_verified: true,
            profile_image: None,
            documents: Vec::new(),
            roommate_preferences: None,
            questionnaire_completed: None,
            completed_at: None,
        };

        tracing::info!("Logged in {} as {}", user.email, user_type);
        *self.session.write().await = Some(user.clone());
        Ok(user)
    }

    async fn signup(&self, request: SignupRequest) -> Result<User> {
        request.validate()?;

        Self::simulate_latency(self.signup_delay).await;

        let user = User {
            id: Utc::now().timestamp_millis().to_string(),
            email: request.email,
            name: request.name,
            phone: request.phone,
            address: request.address,
            user_type: request.user_type,
            is_verified: false,
            profile_image: None,
            documents: request.documents,
            roommate_preferences: None,
            questionnaire_completed: None,
            completed_at: None,
        };

        tracing::info!(
            "Signed up {} ({}), {} document(s)",
            user.email,
            user.user_type,
            user.documents.len()
        );
        *self.session.write().await = Some(user.clone());
        Ok(user)
    }

    async fn logout(&self) {
        if let Some(user) = self.session.write().await.take() {
            tracing::info!("Logged out {}", user.email);
        }
    }

    async fn update_preferences(&self, update: ProfileUpdate) -> Result<User> {
        let mut session = self.session.write().await;
        let user = session.as_mut().ok_or(HomieError::NotAuthenticated)?;
        user.apply(update);
        tracing::debug!("Updated profile for user {}", user.id);
        Ok(user.clone())
    }

    async fn current_user(&self) -> Option<User> {
        self.session.read().await.clone()
    }
}

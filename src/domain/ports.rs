use crate::domain::model::{
    ExtractedPreference, LocationGroup, PgListing, ProfileUpdate, SignupRequest, TraitDefinition,
    User, UserType,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn login_delay(&self) -> Duration;
    fn signup_delay(&self) -> Duration;
    fn fixtures_path(&self) -> Option<&str>;
    fn custom_traits(&self) -> &[TraitDefinition];
}

pub trait PreferenceSource: Send + Sync {
    fn extract(&self, text: &str) -> Vec<ExtractedPreference>;
}

#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn login(&self, email: &str, password: &str, user_type: UserType) -> Result<User>;
    async fn signup(&self, request: SignupRequest) -> Result<User>;
    async fn logout(&self);
    async fn update_preferences(&self, update: ProfileUpdate) -> Result<User>;
    async fn current_user(&self) -> Option<User>;
}

pub trait FixtureRepository: Send + Sync {
    fn pg_listings(&self) -> &[PgListing];
    fn location_groups(&self) -> &[LocationGroup];
}

pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

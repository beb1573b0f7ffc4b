pub mod catalog;
pub mod extractor;
pub mod keywords;
pub mod questionnaire;

pub use crate::domain::model::{ExtractedPreference, Priority, ProfileUpdate, User};
pub use crate::domain::ports::{
    ConfigProvider, FixtureRepository, IdentityStore, Notifier, PreferenceSource,
};
pub use crate::utils::error::Result;

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{InMemoryIdentityStore, MemoryNotifier, SeededFixtures, TracingNotifier};
pub use config::AppConfig;
pub use core::{
    catalog::{filter_groups, search_pgs, BudgetRange, PgFilter},
    extractor::{extract_preferences, PreferenceExtractor},
    keywords::PreferenceKeywordTable,
    questionnaire::{combine_inputs, Questionnaire, Step},
};
pub use domain::model::{ExtractedPreference, Priority, ProfileUpdate, User, UserType};
pub use utils::error::{HomieError, Result};

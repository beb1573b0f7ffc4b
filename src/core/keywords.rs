use crate::domain::model::TraitDefinition;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{HomieError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use std::collections::HashSet;

const BUILTIN_TRAITS: &[(&str, &[&str])] = &[
    ("cleanliness", &["clean", "tidy", "organized", "neat", "hygiene"]),
    (
        "smoking",
        &["smoke", "smoking", "cigarette", "non-smoker", "no smoking"],
    ),
    (
        "schedule",
        &["early", "late", "morning", "night", "schedule", "routine"],
    ),
    ("music", &["music", "loud", "quiet", "noise", "sound"]),
    (
        "socializing",
        &["social", "party", "friends", "introvert", "extrovert"],
    ),
    ("cooking", &["cook", "kitchen", "food", "meal", "eating"]),
    ("study", &["study", "quiet", "focused", "academic", "student"]),
    ("pets", &["pet", "dog", "cat", "animal"]),
    ("guests", &["guest", "visitor", "boyfriend", "friends over"]),
    (
        "sharing",
        &["share", "sharing", "personal space", "privacy"],
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitKeywords {
    pub name: String,
    pub keywords: Vec<String>,
}

impl TraitKeywords {
    /// `text` 必須已轉小寫
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|keyword| text.contains(keyword.as_str()))
    }
}

/// Ordered trait → keyword table. Iteration order is output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceKeywordTable {
    traits: Vec<TraitKeywords>,
}

impl PreferenceKeywordTable {
    pub fn builtin() -> Self {
        let traits = BUILTIN_TRAITS
            .iter()
            .map(|(name, keywords)| TraitKeywords {
                name: (*name).to_string(),
                keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            })
            .collect();
        Self { traits }
    }

    /// Built-in traits followed by `extra`, in declaration order.
    pub fn with_extra(extra: &[TraitDefinition]) -> Result<Self> {
        let mut table = Self::builtin();
        table.traits.extend(extra.iter().map(|def| TraitKeywords {
            name: def.name.trim().to_lowercase(),
            keywords: def
                .keywords
                .iter()
                .map(|k| k.to_lowercase())
                .collect(),
        }));
        table.validate()?;
        Ok(table)
    }

    /// Built-in traits plus the provider's custom traits.
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::with_extra(config.custom_traits())
    }

    pub fn iter(&self) -> impl Iterator<Item = &TraitKeywords> {
        self.traits.iter()
    }

    pub fn len(&self) -> usize {
        self.traits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }
}

impl Default for PreferenceKeywordTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Validate for PreferenceKeywordTable {
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for entry in &self.traits {
            validate_non_empty_string("extractor.traits.name", &entry.name)?;

            if !seen.insert(entry.name.as_str()) {
                return Err(HomieError::InvalidConfigValueError {
                    field: "extractor.traits.name".to_string(),
                    value: entry.name.clone(),
                    reason: "Duplicate trait name".to_string(),
                });
            }

            if entry.keywords.is_empty() {
                return Err(HomieError::InvalidConfigValueError {
                    field: format!("extractor.traits.{}.keywords", entry.name),
                    value: String::new(),
                    reason: "At least one keyword is required".to_string(),
                });
            }

            for keyword in &entry.keywords {
                validate_non_empty_string(
                    &format!("extractor.traits.{}.keywords", entry.name),
                    keyword,
                )?;
            }
        }
        Ok(())
    }
}

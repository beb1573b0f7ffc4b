use crate::core::keywords::PreferenceKeywordTable;
use crate::domain::model::{ExtractedPreference, Priority};
use crate::domain::ports::PreferenceSource;

const HIGH_PRIORITY_CUES: &[&str] = &["important", "must", "need"];
const NON_NEGOTIABLE_CUES: &[&str] = &["must", "never"];

fn contains_any(text: &str, cues: &[&str]) -> bool {
    cues.iter().any(|cue| text.contains(cue))
}

/// Priority and non-negotiable flag for the whole text.
///
/// Cues are not scoped to the clause that mentions a trait: one "must"
/// marks every detected trait.
fn classify(text: &str) -> (Priority, bool) {
    // "prefer" and "like" land on medium, same as no cue. Low is only set by hand.
    let priority = if contains_any(text, HIGH_PRIORITY_CUES) {
        Priority::High
    } else {
        Priority::Medium
    };
    (priority, contains_any(text, NON_NEGOTIABLE_CUES))
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turns free text into at most one [`ExtractedPreference`] per trait.
#[derive(Debug, Clone, Default)]
pub struct PreferenceExtractor {
    table: PreferenceKeywordTable,
}

impl PreferenceExtractor {
    pub fn new(table: PreferenceKeywordTable) -> Self {
        Self { table }
    }

    pub fn extract(&self, text: &str) -> Vec<ExtractedPreference> {
        let normalized = text.to_lowercase();
        let (priority, is_non_negotiable) = classify(&normalized);

        let preferences: Vec<ExtractedPreference> = self
            .table
            .iter()
            .filter(|entry| entry.matches(&normalized))
            .map(|entry| ExtractedPreference {
                trait_name: capitalize(&entry.name),
                priority,
                is_non_negotiable,
            })
            .collect();

        tracing::debug!(
            "Detected {} of {} traits ({} input chars)",
            preferences.len(),
            self.table.len(),
            text.chars().count()
        );

        preferences
    }
}

impl PreferenceSource for PreferenceExtractor {
    fn extract(&self, text: &str) -> Vec<ExtractedPreference> {
        PreferenceExtractor::extract(self, text)
    }
}

/// Extracts with the built-in keyword table.
pub fn extract_preferences(text: &str) -> Vec<ExtractedPreference> {
    PreferenceExtractor::default().extract(text)
}

use crate::domain::model::{ExtractedPreference, Priority, ProfileUpdate, User};
use crate::domain::ports::{IdentityStore, Notifier, PreferenceSource};
use crate::utils::error::{HomieError, Result};
use chrono::Utc;
use std::fmt;

pub const TOTAL_STEPS: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Input,
    Review,
    Completed,
}

impl Step {
    fn number(self) -> u8 {
        match self {
            Step::Input => 1,
            Step::Review => 2,
            Step::Completed => TOTAL_STEPS,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Input => f.write_str("input"),
            Step::Review => f.write_str("review"),
            Step::Completed => f.write_str("completed"),
        }
    }
}

/// Joins the primary text and supplementary fields with single spaces, trimmed.
pub fn combine_inputs<S: AsRef<str>>(primary: &str, additional: &[S]) -> String {
    std::iter::once(primary)
        .chain(additional.iter().map(AsRef::as_ref))
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// 問卷流程：收集文字 → 擷取偏好 → 檢視 → 存到個人資料
pub struct Questionnaire<'a, E: PreferenceSource, N: Notifier> {
    extractor: &'a E,
    notifier: &'a N,
    step: Step,
    transcript: String,
    additional_inputs: Vec<String>,
    preferences: Vec<ExtractedPreference>,
}

impl<'a, E: PreferenceSource, N: Notifier> Questionnaire<'a, E, N> {
    pub fn new(extractor: &'a E, notifier: &'a N) -> Self {
        Self {
            extractor,
            notifier,
            step: Step::Input,
            transcript: String::new(),
            additional_inputs: vec![String::new()],
            preferences: Vec::new(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn preferences(&self) -> &[ExtractedPreference] {
        &self.preferences
    }

    pub fn additional_inputs(&self) -> &[String] {
        &self.additional_inputs
    }

    pub fn progress_percent(&self) -> u8 {
        let ratio = f32::from(self.step.number()) / f32::from(TOTAL_STEPS);
        (ratio * 100.0).round() as u8
    }

    pub fn set_transcript(&mut self, text: impl Into<String>) {
        self.transcript = text.into();
    }

    /// Appends a recognized speech segment.
    pub fn append_transcript(&mut self, segment: &str) {
        if segment.is_empty() {
            return;
        }
        self.transcript.push(' ');
        self.transcript.push_str(segment);
    }

    pub fn add_input(&mut self) {
        self.additional_inputs.push(String::new());
    }

    pub fn update_input(&mut self, index: usize, text: impl Into<String>) -> Result<()> {
        let len = self.additional_inputs.len();
        let slot = self
            .additional_inputs
            .get_mut(index)
            .ok_or(HomieError::IndexOutOfRange { index, len })?;
        *slot = text.into();
        Ok(())
    }

    /// The last remaining input is cleared, never removed.
    pub fn remove_input(&mut self, index: usize) -> Result<()> {
        let len = self.additional_inputs.len();
        if index >= len {
            return Err(HomieError::IndexOutOfRange { index, len });
        }
        if len == 1 {
            self.additional_inputs[0].clear();
        } else {
            self.additional_inputs.remove(index);
        }
        Ok(())
    }

    pub fn combined_text(&self) -> String {
        combine_inputs(&self.transcript, &self.additional_inputs)
    }

    pub fn analyze(&mut self) -> Result<&[ExtractedPreference]> {
        self.expect_step(&[Step::Input], "analyze")?;

        let text = self.combined_text();
        if text.is_empty() {
            self.notifier.error("Please provide some input first.");
            return Err(HomieError::EmptyInput);
        }

        self.preferences = self.extractor.extract(&text);

        if self.preferences.is_empty() {
            self.notifier.error(
                "Could not extract specific preferences. Try being more specific about your needs.",
            );
        } else {
            self.notifier.success(&format!(
                "Extracted {} preferences from your input!",
                self.preferences.len()
            ));
            self.step = Step::Review;
        }

        Ok(&self.preferences)
    }

    pub fn toggle_non_negotiable(&mut self, index: usize) -> Result<()> {
        self.preference_mut(index)?.toggle_non_negotiable();
        Ok(())
    }

    pub fn set_priority(&mut self, index: usize, priority: Priority) -> Result<()> {
        self.preference_mut(index)?.priority = priority;
        Ok(())
    }

    pub fn back_to_edit(&mut self) -> Result<()> {
        self.expect_step(&[Step::Review], "go back")?;
        self.step = Step::Input;
        Ok(())
    }

    pub async fn complete<S: IdentityStore + ?Sized>(&mut self, store: &S) -> Result<User> {
        self.expect_step(&[Step::Review], "complete")?;

        let user = store
            .update_preferences(ProfileUpdate {
                roommate_preferences: Some(self.preferences.clone()),
                questionnaire_completed: Some(true),
                completed_at: Some(Utc::now()),
                ..Default::default()
            })
            .await?;

        tracing::info!(
            "Saved {} roommate preferences for user {}",
            self.preferences.len(),
            user.id
        );
        self.notifier
            .success("Questionnaire completed! Redirecting to dashboard...");
        self.step = Step::Completed;
        Ok(user)
    }

    pub async fn skip<S: IdentityStore + ?Sized>(&mut self, store: &S) -> Result<User> {
        self.expect_step(&[Step::Input, Step::Review], "skip")?;

        let user = store
            .update_preferences(ProfileUpdate {
                questionnaire_completed: Some(true),
                completed_at: Some(Utc::now()),
                ..Default::default()
            })
            .await?;

        self.notifier
            .success("Skipped questionnaire. You can complete it later from settings.");
        self.step = Step::Completed;
        Ok(user)
    }

    fn preference_mut(&mut self, index: usize) -> Result<&mut ExtractedPreference> {
        let len = self.preferences.len();
        self.preferences
            .get_mut(index)
            .ok_or(HomieError::IndexOutOfRange { index, len })
    }

    fn expect_step(&self, allowed: &[Step], operation: &'static str) -> Result<()> {
        if allowed.contains(&self.step) {
            Ok(())
        } else {
            Err(HomieError::InvalidStep {
                operation,
                step: self.step.to_string(),
            })
        }
    }
}

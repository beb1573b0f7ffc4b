use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedPreference {
    #[serde(rename = "trait")]
    pub trait_name: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub is_non_negotiable: bool,
}

impl ExtractedPreference {
    pub fn toggle_non_negotiable(&mut self) {
        self.is_non_negotiable = !self.is_non_negotiable;
    }
}

/// 關鍵字表中的一個特質定義
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitDefinition {
    pub name: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum UserType {
    Student,
    Owner,
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserType::Student => f.write_str("student"),
            UserType::Owner => f.write_str("owner"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub user_type: UserType,
    pub is_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roommate_preferences: Option<Vec<ExtractedPreference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questionnaire_completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl User {
    /// 合併部分更新，只覆蓋有設定的欄位
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(image) = update.profile_image {
            self.profile_image = Some(image);
        }
        if let Some(prefs) = update.roommate_preferences {
            self.roommate_preferences = Some(prefs);
        }
        if let Some(done) = update.questionnaire_completed {
            self.questionnaire_completed = Some(done);
        }
        if let Some(at) = update.completed_at {
            self.completed_at = Some(at);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub profile_image: Option<String>,
    pub roommate_preferences: Option<Vec<ExtractedPreference>>,
    pub questionnaire_completed: Option<bool>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub user_type: UserType,
    #[serde(default)]
    pub documents: Vec<String>,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PgListing {
    pub id: u32,
    pub name: String,
    pub rating: f32,
    pub ai_rating: f32,
    pub locality: String,
    /// 月租 (INR)
    pub rent: u32,
    pub room_type: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub locality_info: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum GroupScope {
    Country,
    State,
    City,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationGroup {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub scope: GroupScope,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_location: Option<String>,
    pub members: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_joined: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_json_shape() {
        let pref = ExtractedPreference {
            trait_name: "Cleanliness".to_string(),
            priority: Priority::High,
            is_non_negotiable: true,
        };
        let value = serde_json::to_value(&pref).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"trait": "Cleanliness", "priority": "high", "isNonNegotiable": true})
        );
    }

    #[test]
    fn test_apply_keeps_unset_fields() {
        let mut user = User {
            id: "1".to_string(),
            email: "a@b.in".to_string(),
            name: "Demo User".to_string(),
            phone: "+91 9876543210".to_string(),
            address: "Mumbai, Maharashtra".to_string(),
            user_type: UserType::Student,
            is_verified: true,
            profile_image: None,
            documents: vec![],
            roommate_preferences: None,
            questionnaire_completed: None,
            completed_at: None,
        };

        user.apply(ProfileUpdate {
            questionnaire_completed: Some(true),
            ..Default::default()
        });

        assert_eq!(user.name, "Demo User");
        assert_eq!(user.questionnaire_completed, Some(true));
        assert!(user.roommate_preferences.is_none());
    }
}

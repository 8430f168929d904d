use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::serde_utils::{lenient_string, string_list, string_or_lines};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        if value.trim().eq_ignore_ascii_case("user") {
            Role::User
        } else {
            Role::Assistant
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    #[serde(default)]
    pub content: String,
}

impl ConversationTurn {
    pub fn new(role: Role, content: &str) -> Self {
        Self {
            role,
            content: content.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopEmotion {
    pub label: String,
    #[serde(default)]
    pub score: f32,
}

/// Emotion payload as sent by callers. Every field is optional; see [`EmotionSignal`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionData {
    pub emotion: Option<String>,
    pub label: Option<String>,
    pub category: Option<String>,
    pub intensity: Option<String>,
    pub score: Option<f32>,
    pub top_emotions: Vec<TopEmotion>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionCategory {
    Neutral,
    Distress,
    Anxiety,
    Anger,
    Positive,
    Engaged,
}

impl EmotionCategory {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "distress" => EmotionCategory::Distress,
            "anxiety" => EmotionCategory::Anxiety,
            "anger" => EmotionCategory::Anger,
            "positive" => EmotionCategory::Positive,
            "engaged" => EmotionCategory::Engaged,
            _ => EmotionCategory::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionCategory::Neutral => "neutral",
            EmotionCategory::Distress => "distress",
            EmotionCategory::Anxiety => "anxiety",
            EmotionCategory::Anger => "anger",
            EmotionCategory::Positive => "positive",
            EmotionCategory::Engaged => "engaged",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Intensity {
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "very low" => Intensity::VeryLow,
            "low" => Intensity::Low,
            "high" => Intensity::High,
            "very high" => Intensity::VeryHigh,
            _ => Intensity::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::VeryLow => "very low",
            Intensity::Low => "low",
            Intensity::Medium => "medium",
            Intensity::High => "high",
            Intensity::VeryHigh => "very high",
        }
    }

    pub fn is_high(&self) -> bool {
        matches!(self, Intensity::High | Intensity::VeryHigh)
    }
}

/// Normalized emotion signal. Malformed or missing payloads become neutral/low.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionSignal {
    pub label: String,
    pub category: EmotionCategory,
    pub intensity: Intensity,
    pub top_emotions: Vec<TopEmotion>,
}

impl Default for EmotionSignal {
    fn default() -> Self {
        Self::neutral()
    }
}

impl EmotionSignal {
    pub fn neutral() -> Self {
        Self {
            label: "neutral".to_string(),
            category: EmotionCategory::Neutral,
            intensity: Intensity::Low,
            top_emotions: Vec::new(),
        }
    }

    pub fn new(label: &str, category: EmotionCategory, intensity: Intensity) -> Self {
        Self {
            label: label.to_string(),
            category,
            intensity,
            top_emotions: Vec::new(),
        }
    }

    pub fn from_data(data: Option<&EmotionData>) -> Self {
        let Some(data) = data else {
            return Self::neutral();
        };

        let mut top_emotions: Vec<TopEmotion> = data
            .top_emotions
            .iter()
            .filter(|t| !t.label.trim().is_empty() && t.score.is_finite())
            .cloned()
            .collect();
        top_emotions.sort_by(|a, b| b.score.total_cmp(&a.score));

        let label = [data.emotion.as_deref(), data.label.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
            .or_else(|| top_emotions.first().map(|t| t.label.trim()))
            .unwrap_or("neutral")
            .to_lowercase();

        Self {
            label,
            category: data
                .category
                .as_deref()
                .map(EmotionCategory::parse)
                .unwrap_or(EmotionCategory::Neutral),
            intensity: data
                .intensity
                .as_deref()
                .map(Intensity::parse)
                .unwrap_or(Intensity::Low),
            top_emotions,
        }
    }

    pub fn is_high_intensity(&self) -> bool {
        self.intensity.is_high()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanionType {
    Romantic,
    Friend,
}

impl CompanionType {
    /// Anything other than "romantic" is treated as a platonic friend.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()) {
            Some(s) if s == "romantic" => CompanionType::Romantic,
            _ => CompanionType::Friend,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompanionType::Romantic => "romantic",
            CompanionType::Friend => "friend",
        }
    }

    pub fn is_romantic(&self) -> bool {
        matches!(self, CompanionType::Romantic)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterProfile {
    #[serde(alias = "character_name", alias = "name")]
    pub character_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub gender: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub species: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub age: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub role: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub backstory: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub interests: Option<String>,
    #[serde(deserialize_with = "string_or_lines")]
    pub boundaries: Vec<String>,
    #[serde(deserialize_with = "string_list")]
    pub avoid_words: Vec<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub companion_type: Option<String>,
    pub tag_selections: BTreeMap<String, Vec<String>>,
    /// Pre-formatted profile text. Formatted from the typed fields when absent.
    #[serde(deserialize_with = "lenient_string")]
    pub character_string: Option<String>,
}

impl CharacterProfile {
    pub fn named(name: &str) -> Self {
        Self {
            character_name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn companion(&self) -> CompanionType {
        CompanionType::parse(self.companion_type.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    #[serde(deserialize_with = "string_list")]
    pub music: Vec<String>,
    #[serde(deserialize_with = "string_list")]
    pub books: Vec<String>,
    #[serde(deserialize_with = "string_list")]
    pub movies: Vec<String>,
    #[serde(deserialize_with = "string_list")]
    pub hobbies: Vec<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub other: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    #[serde(alias = "user_name")]
    pub user_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub user_gender: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub user_species: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub timezone: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub user_backstory: Option<String>,
    pub user_preferences: UserPreferences,
    #[serde(deserialize_with = "string_list")]
    pub major_life_events: Vec<String>,
    #[serde(deserialize_with = "string_list")]
    pub shared_roleplay_events: Vec<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub communication_boundaries: Option<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            user_name: "User".to_string(),
            user_gender: None,
            user_species: None,
            timezone: None,
            user_backstory: None,
            user_preferences: UserPreferences::default(),
            major_life_events: Vec::new(),
            shared_roleplay_events: Vec::new(),
            communication_boundaries: None,
        }
    }
}

impl UserSettings {
    pub fn display_name(&self) -> &str {
        let name = self.user_name.trim();
        if name.is_empty() {
            "User"
        } else {
            name
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationRequest {
    pub text: String,
    pub conversation_history: Vec<ConversationTurn>,
    pub emotion_data: Option<EmotionData>,
    pub character_profile: Option<CharacterProfile>,
    pub user_settings: Option<UserSettings>,
    pub memory_context: Option<String>,
    pub search_context: Option<String>,
    pub request_id: Option<String>,
    /// Registered character to use when no profile is attached.
    pub character_name: Option<String>,
    pub max_tokens_override: Option<u32>,
    pub temperature_override: Option<f32>,
    pub enable_memory: bool,
    pub enable_web_search: bool,
}

/// Output of the generation-parameter rule table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    pub guidance: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    Response,
    CrisisIntervention,
    Starter,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationResult {
    pub text: String,
    pub tokens_generated: u32,
    #[serde(rename = "type")]
    pub kind: ResponseKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerationOutcome {
    Completed(GenerationResult),
    Cancelled,
}

impl GenerationOutcome {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, GenerationOutcome::Cancelled)
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        match self {
            GenerationOutcome::Completed(result) => Some(result),
            GenerationOutcome::Cancelled => None,
        }
    }
}

//! Behavior chunks: the catalog, per-character chunk synthesis and retrieval.

pub mod generator;
pub mod matcher;
pub mod retriever;
pub mod templates;

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkCategory {
    EmotionalExpression,
    SocialEnergy,
    ThinkingStyle,
    HumorEdge,
    CoreValues,
    HowTheyCare,
    EnergyPresence,
    LifestyleInterests,
    NarrativeControl,
    PlatonicStyle,
    CoreIdentity,
    UserInterest,
}

impl ChunkCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChunkCategory::EmotionalExpression => "emotional_expression",
            ChunkCategory::SocialEnergy => "social_energy",
            ChunkCategory::ThinkingStyle => "thinking_style",
            ChunkCategory::HumorEdge => "humor_edge",
            ChunkCategory::CoreValues => "core_values",
            ChunkCategory::HowTheyCare => "how_they_care",
            ChunkCategory::EnergyPresence => "energy_presence",
            ChunkCategory::LifestyleInterests => "lifestyle_interests",
            ChunkCategory::NarrativeControl => "narrative_control",
            ChunkCategory::PlatonicStyle => "platonic_style",
            ChunkCategory::CoreIdentity => "core_identity",
            ChunkCategory::UserInterest => "user_interest",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionResponse {
    pub tokens: u32,
    pub tone: String,
    pub action: String,
}

impl EmotionResponse {
    pub fn new(tokens: u32, tone: &str, action: &str) -> Self {
        Self {
            tokens,
            tone: tone.to_string(),
            action: action.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Triggers {
    pub keywords: Vec<String>,
    pub emotions: Vec<String>,
    /// Empty means every companion type.
    pub companion_types: Vec<String>,
    pub always_check: bool,
}

impl Triggers {
    pub fn allows_companion(&self, companion_type: &str) -> bool {
        self.companion_types.is_empty()
            || self
                .companion_types
                .iter()
                .any(|c| c.eq_ignore_ascii_case(companion_type))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Applicability {
    /// Guidance keyed by emotion label. `default` covers every unlisted label.
    PerEmotion {
        responses: BTreeMap<String, EmotionResponse>,
        default: EmotionResponse,
    },
    Static { content: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BehaviorChunk {
    pub id: String,
    pub category: ChunkCategory,
    pub priority: u8,
    pub tokens: u32,
    pub ui_tag: Option<String>,
    /// Only included when the character selected it (per-emotion chunks).
    pub requires_selection: bool,
    pub triggers: Triggers,
    pub applicability: Applicability,
}

impl BehaviorChunk {
    /// Start a per-emotion chunk. Finish it with [`EmotionChunkBuilder::otherwise`].
    pub fn per_emotion(
        id: &str,
        category: ChunkCategory,
        priority: u8,
        ui_tag: &str,
    ) -> EmotionChunkBuilder {
        EmotionChunkBuilder {
            id: id.to_string(),
            category,
            priority,
            ui_tag: ui_tag.to_string(),
            responses: BTreeMap::new(),
        }
    }

    pub fn fixed(
        id: &str,
        category: ChunkCategory,
        priority: u8,
        tokens: u32,
        content: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            category,
            priority,
            tokens,
            ui_tag: None,
            requires_selection: false,
            triggers: Triggers::default(),
            applicability: Applicability::Static {
                content: content.to_string(),
            },
        }
    }

    pub fn tag(mut self, ui_tag: &str) -> Self {
        self.ui_tag = Some(ui_tag.to_string());
        self
    }

    pub fn keywords(mut self, keywords: &[&str]) -> Self {
        self.triggers.keywords = keywords.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn emotions(mut self, emotions: &[&str]) -> Self {
        self.triggers.emotions = emotions.iter().map(|e| e.to_string()).collect();
        self
    }

    pub fn companions(mut self, companion_types: &[&str]) -> Self {
        self.triggers.companion_types = companion_types.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn always(mut self) -> Self {
        self.triggers.always_check = true;
        self
    }

    pub fn is_core_identity(&self) -> bool {
        self.category == ChunkCategory::CoreIdentity
    }

    /// Guidance for `emotion`, falling back to the chunk's default entry.
    /// `None` for static chunks.
    pub fn response_for(&self, emotion: &str) -> Option<&EmotionResponse> {
        match &self.applicability {
            Applicability::PerEmotion { responses, default } => {
                let key = emotion.trim().to_lowercase();
                Some(responses.get(&key).unwrap_or(default))
            }
            Applicability::Static { .. } => None,
        }
    }

    /// Text injected into the prompt for the current emotion, plus its token estimate.
    pub fn render(&self, emotion: &str) -> (String, u32) {
        match &self.applicability {
            Applicability::PerEmotion { .. } => match self.response_for(emotion) {
                Some(r) => (format!("Tone: {}\nAction: {}", r.tone, r.action), r.tokens),
                None => (String::new(), self.tokens),
            },
            Applicability::Static { content } => (content.clone(), self.tokens),
        }
    }

    /// Replace `{user_name}` and `{character_name}` in static content.
    pub fn with_names(mut self, user_name: &str, character_name: &str) -> Self {
        if let Applicability::Static { content } = &mut self.applicability {
            *content = content
                .replace("{user_name}", user_name)
                .replace("{character_name}", character_name);
        }
        self
    }
}

pub struct EmotionChunkBuilder {
    id: String,
    category: ChunkCategory,
    priority: u8,
    ui_tag: String,
    responses: BTreeMap<String, EmotionResponse>,
}

impl EmotionChunkBuilder {
    pub fn on(mut self, emotion: &str, tokens: u32, tone: &str, action: &str) -> Self {
        self.responses
            .insert(emotion.to_string(), EmotionResponse::new(tokens, tone, action));
        self
    }

    /// Set the mandatory fallback entry and finish the chunk.
    pub fn otherwise(self, tokens: u32, tone: &str, action: &str) -> BehaviorChunk {
        BehaviorChunk {
            id: self.id,
            category: self.category,
            priority: self.priority,
            tokens,
            ui_tag: Some(self.ui_tag),
            requires_selection: true,
            triggers: Triggers::default(),
            applicability: Applicability::PerEmotion {
                responses: self.responses,
                default: EmotionResponse::new(tokens, tone, action),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warm() -> BehaviorChunk {
        BehaviorChunk::per_emotion("ee_warm", ChunkCategory::EmotionalExpression, 75, "Warm")
            .on("sadness", 75, "soft", "Offer comfort.")
            .otherwise(60, "warm", "Be caring.")
    }

    #[test]
    fn unknown_emotion_falls_back_to_default() {
        let chunk = warm();
        let r = chunk.response_for("bewilderment").unwrap();
        assert_eq!(r.tone, "warm");
        assert_eq!(chunk.response_for("Sadness").unwrap().tone, "soft");
    }

    #[test]
    fn render_static_and_emotional() {
        let (text, tokens) = warm().render("joy");
        assert_eq!(text, "Tone: warm\nAction: Be caring.");
        assert_eq!(tokens, 60);

        let fixed = BehaviorChunk::fixed(
            "x",
            ChunkCategory::CoreIdentity,
            100,
            40,
            "{user_name} and {character_name}",
        )
        .with_names("Sam", "Aria");
        assert_eq!(fixed.render("joy").0, "Sam and Aria");
    }

    #[test]
    fn companion_gate() {
        let chunk = BehaviorChunk::fixed("x", ChunkCategory::NarrativeControl, 90, 50, "c")
            .companions(&["romantic"]);
        assert!(chunk.triggers.allows_companion("Romantic"));
        assert!(!chunk.triggers.allows_companion("friend"));
        assert!(Triggers::default().allows_companion("friend"));
    }
}

use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use super::generation_params::{GenerationRules, ParamsInput};
use super::prompts::{self, PromptVars};
use super::time_context::time_context;
use super::types::{
    CharacterProfile, CompanionType, ConversationTurn, EmotionCategory, EmotionSignal,
    GenerationParams, Intensity, Role, UserSettings,
};
use crate::config::ProcessorConfig;
use crate::error::Result;
use crate::lorebook::generator::{
    cap_with_ellipsis, format_character_profile, generate_from_tags, identity_chunks,
    interest_chunks, BACKSTORY_MARKER, INTERESTS_MARKER,
};
use crate::lorebook::retriever::{retrieval_stats, ChunkRetriever, RetrievalQuery};
use crate::lorebook::BehaviorChunk;
use crate::utils::{estimate_tokens, log_debug};

const BACKSTORY_SECTION_CAP: usize = 300;

/// Per-turn inputs for [`PromptBuilder::build_prompt`].
#[derive(Debug, Clone, Copy)]
pub struct PromptRequest<'a> {
    pub text: &'a str,
    pub guidance: &'a str,
    pub emotion: &'a EmotionSignal,
    pub history: &'a [ConversationTurn],
    pub memory_context: Option<&'a str>,
    pub search_context: Option<&'a str>,
    pub age_violation: bool,
}

/// Builds prompts for one character/user pair. The static prefix is computed
/// once and reused byte-for-byte on every turn.
pub struct PromptBuilder {
    config: ProcessorConfig,
    profile: CharacterProfile,
    settings: UserSettings,
    profile_text: String,
    companion: CompanionType,
    chunks: Vec<BehaviorChunk>,
    selected_ids: HashSet<String>,
    retriever: Arc<dyn ChunkRetriever>,
    rules: GenerationRules,
    static_prefix: OnceLock<String>,
}

impl PromptBuilder {
    pub fn new(
        profile: CharacterProfile,
        settings: UserSettings,
        config: &ProcessorConfig,
        retriever: Arc<dyn ChunkRetriever>,
    ) -> Result<Self> {
        let companion = profile.companion();
        let user_name = settings.display_name().to_string();
        let char_name = profile.character_name.trim().to_string();

        let profile_text = profile
            .character_string
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format_character_profile(&profile));

        let lorebook = generate_from_tags(&profile.tag_selections, companion, &user_name, &char_name);
        let mut chunks = identity_chunks(&profile, &settings, config.backstory_char_cap);
        chunks.extend(lorebook.chunks);
        chunks.extend(interest_chunks(&settings, config.interest_item_cap));

        log_debug(
            "prompt_builder",
            format!(
                "builder ready for {} ({} chunks, companion {})",
                char_name,
                chunks.len(),
                companion.as_str()
            ),
        );

        Ok(Self {
            config: config.clone(),
            profile,
            settings,
            profile_text,
            companion,
            chunks,
            selected_ids: lorebook.selected_ids,
            retriever,
            rules: GenerationRules::new()?,
            static_prefix: OnceLock::new(),
        })
    }

    pub fn char_name(&self) -> &str {
        self.profile.character_name.trim()
    }

    pub fn user_name(&self) -> &str {
        self.settings.display_name()
    }

    pub fn companion(&self) -> CompanionType {
        self.companion
    }

    pub fn chunks(&self) -> &[BehaviorChunk] {
        &self.chunks
    }

    pub fn is_goodnight(&self, text: &str) -> bool {
        self.rules.is_goodnight(text)
    }

    pub fn get_generation_params(&self, text: &str, emotion: &EmotionSignal) -> GenerationParams {
        let input = ParamsInput {
            text,
            char_name: self.char_name(),
            user_name: self.user_name(),
            companion: self.companion,
            emotion,
        };
        self.rules.select(&input, &self.config)
    }

    pub fn static_prefix(&self) -> &str {
        self.static_prefix.get_or_init(|| self.build_static_prefix())
    }

    pub fn build_prompt(&self, request: &PromptRequest<'_>) -> String {
        let static_prefix = self.static_prefix();
        let user = self.user_name();
        let char_name = self.char_name();

        let query = RetrievalQuery {
            user_message: request.text,
            emotion_label: &request.emotion.label,
            top_emotions: &request.emotion.top_emotions,
            companion_type: self.companion.as_str(),
            history: request.history,
            selected_tag_ids: &self.selected_ids,
        };
        let retrieved = self.retriever.retrieve(&self.chunks, &query);
        let behavior_guide = self
            .retriever
            .format_for_prompt(&retrieved, prompts::BEHAVIOR_GUIDE_HEADING);
        if !retrieved.is_empty() {
            let stats = retrieval_stats(&retrieved);
            log_debug(
                "prompt_builder",
                format!(
                    "behavior guide: {} chunks, ~{} tokens, categories {:?}",
                    stats.count, stats.total_tokens, stats.categories
                ),
            );
        }

        let mut context_parts = vec![
            prompts::CURRENT_CONTEXT_HEADING.to_string(),
            time_context(
                self.settings.timezone.as_deref(),
                &self.config.default_timezone,
            ),
            emotion_context(user, request.emotion),
            request.guidance.trim().to_string(),
        ];
        if request.age_violation {
            context_parts.push(prompts::age_notice());
        }
        let current_context = join_non_empty(&context_parts);

        let memory = request
            .memory_context
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or_default()
            .to_string();
        let search = request
            .search_context
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("{}\n{}", prompts::SEARCH_HEADING, s))
            .unwrap_or_default();
        let history = self.format_history(request.history);

        let conflict_note = if behavior_guide.is_empty() {
            String::new()
        } else {
            prompts::CONFLICT_RESOLUTION.to_string()
        };

        let dynamic = join_non_empty(&[
            behavior_guide.clone(),
            conflict_note,
            current_context,
            memory.clone(),
            search.clone(),
            history.clone(),
            format!("{}\n{}: {}", prompts::USER_INPUT_HEADING, user, request.text.trim()),
            prompts::render(prompts::TRACKING_CUE, &self.vars()),
            prompts::RESPOND_NOW_CUE.to_string(),
            format!("{}\n{}:", prompts::RESPONSE_HEADING, char_name),
        ]);

        let prompt = format!("{}\n{}", static_prefix, dynamic);

        log_debug(
            "prompt_builder",
            format!(
                "prompt size: total {} chars (~{} tokens) | static ~{} | guide ~{} | history ~{} | guidance ~{} | memory ~{} | search ~{}",
                prompt.chars().count(),
                estimate_tokens(&prompt),
                estimate_tokens(static_prefix),
                estimate_tokens(&behavior_guide),
                estimate_tokens(&history),
                estimate_tokens(request.guidance),
                estimate_tokens(&memory),
                estimate_tokens(&search),
            ),
        );

        prompt
    }

    fn vars(&self) -> PromptVars<'_> {
        PromptVars {
            char_name: self.char_name(),
            user_name: self.user_name(),
            char_gender: self.char_gender(),
            user_gender: self.user_gender(),
            relationship: match self.companion {
                CompanionType::Romantic => "ROMANTIC",
                CompanionType::Friend => "FRIEND",
            },
        }
    }

    fn char_gender(&self) -> &str {
        self.profile
            .gender
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or("unspecified")
    }

    fn user_gender(&self) -> &str {
        self.settings
            .user_gender
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or("non-binary")
    }

    fn build_static_prefix(&self) -> String {
        let vars = self.vars();
        let relationship = match self.companion {
            CompanionType::Romantic => prompts::ROMANTIC_RELATIONSHIP,
            CompanionType::Friend => prompts::PLATONIC_RELATIONSHIP,
        };
        let calm = if self.config.is_calm_persona(self.char_name()) {
            prompts::render(prompts::CALM_PERSONA_PROTOCOL, &vars)
        } else {
            String::new()
        };

        let prefix = join_non_empty(&[
            prompts::SYSTEM_HEADER.to_string(),
            self.character_section(),
            prompts::render(relationship, &vars),
            calm,
            self.user_context(),
            prompts::safety_protocol(),
            prompts::render(prompts::CONVERSATION_STYLE, &vars),
            prompts::SYSTEM_FOOTER.to_string(),
        ]);

        log_debug(
            "prompt_builder",
            format!(
                "static prefix built for {} (~{} tokens)",
                self.char_name(),
                estimate_tokens(&prefix)
            ),
        );
        prefix
    }

    fn character_section(&self) -> String {
        let text = self.profile_text.as_str();
        let profile = match text.find(BACKSTORY_MARKER) {
            Some(pos) if text.contains(INTERESTS_MARKER) => {
                let core = cap_with_ellipsis(text[..pos].trim_end(), self.config.profile_char_cap);
                let rest = cap_with_ellipsis(&text[pos..], BACKSTORY_SECTION_CAP);
                format!("{}\n\n{}", core, rest)
            }
            _ => cap_with_ellipsis(text, self.config.profile_char_cap),
        };

        let mut identity = format!("I am {} ({})", self.char_name(), self.char_gender());
        if let Some(role) = self
            .profile
            .role
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            identity.push_str(", ");
            identity.push_str(role);
        }

        format!(
            "{}\n{}. {} is a different person ({}) with their own life. Don't mix our identities.",
            profile,
            identity,
            self.user_name(),
            self.user_gender()
        )
    }

    fn user_context(&self) -> String {
        let user = self.user_name();
        let pronouns = match self.user_gender().to_lowercase().as_str() {
            "female" => " (she/her)",
            "male" => " (he/him)",
            "non-binary" => " (they/them)",
            _ => "",
        };
        let species = self
            .settings
            .user_species
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("human"))
            .map(|s| format!(", a {}", s))
            .unwrap_or_default();

        let mut lines = vec![format!(
            "USER INFO: {}{}{} - the person I'm talking to.",
            user, pronouns, species
        )];

        if let Some(boundaries) = self
            .settings
            .communication_boundaries
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            lines.push(format!(
                "⚠️ {}'S COMMUNICATION BOUNDARIES (MUST RESPECT): {}",
                user.to_uppercase(),
                cap_with_ellipsis(boundaries, self.config.backstory_char_cap)
            ));
        }

        let mut background = Vec::new();
        if let Some(backstory) = self
            .settings
            .user_backstory
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            background.push(cap_with_ellipsis(backstory, self.config.backstory_char_cap));
        }
        if !self.settings.major_life_events.is_empty() {
            background.push(format!(
                "Life events: {}",
                cap_with_ellipsis(
                    &self.settings.major_life_events.join(" "),
                    self.config.backstory_char_cap
                )
            ));
        }
        if !background.is_empty() {
            lines.push(format!("{}'s Background: {}", user, background.join(" ")));
        }

        lines.join("\n")
    }

    /// Last `history_window` turns, speaker-labeled, oldest first.
    fn format_history(&self, history: &[ConversationTurn]) -> String {
        let start = history.len().saturating_sub(self.config.history_window);
        let lines: Vec<String> = history[start..]
            .iter()
            .filter(|turn| !turn.content.trim().is_empty())
            .map(|turn| {
                let speaker = match turn.role {
                    Role::User => self.user_name(),
                    Role::Assistant => self.char_name(),
                };
                format!("{}: {}", speaker, turn.content.trim())
            })
            .collect();

        if lines.is_empty() {
            String::new()
        } else {
            format!("{}\n{}", prompts::HISTORY_HEADING, lines.join("\n"))
        }
    }
}

fn join_non_empty(parts: &[String]) -> String {
    parts
        .iter()
        .map(|p| p.trim_end())
        .filter(|p| !p.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Emotional-state block. Empty for neutral or very-low-intensity signals.
pub fn emotion_context(user: &str, emotion: &EmotionSignal) -> String {
    if emotion.category == EmotionCategory::Neutral || emotion.intensity == Intensity::VeryLow {
        return String::new();
    }

    let mut lines = vec!["### EMOTIONAL STATE ###".to_string()];
    if emotion.top_emotions.len() > 1 {
        let blend = emotion
            .top_emotions
            .iter()
            .take(3)
            .map(|t| format!("{} ({:.0}%)", t.label.trim(), t.score * 100.0))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("{}'s emotions: {}", user, blend));
    } else {
        lines.push(format!(
            "{} is feeling: {} ({} intensity)",
            user,
            emotion.label,
            emotion.intensity.as_str()
        ));
    }

    let high = emotion.is_high_intensity();
    let bullets: Vec<String> = match (emotion.category, high) {
        (EmotionCategory::Distress, true) => vec![
            format!("{} is in real emotional pain", user),
            "They need presence more than advice, validation more than fixing".to_string(),
            "Avoid forced positivity, minimizing or rushing to solutions".to_string(),
        ],
        (EmotionCategory::Distress, false) => vec![
            format!("{} seems down or disappointed", user),
            "A gentle, supportive tone fits; don't overdo the concern".to_string(),
        ],
        (EmotionCategory::Anxiety, true) => vec![
            format!("{} is anxious or afraid and needs grounding", user),
            "Keep replies clear and simple; calm without dismissing".to_string(),
            "Avoid vagueness or adding new worries".to_string(),
        ],
        (EmotionCategory::Anxiety, false) => vec![
            format!("{} seems a little nervous", user),
            "A steady, reassuring presence helps".to_string(),
        ],
        (EmotionCategory::Anger, true) => vec![
            format!("{} is angry or frustrated and needs to be heard", user),
            "Validate; don't try to fix it or calm them down".to_string(),
            "No long explanations, debate or defensiveness".to_string(),
        ],
        (EmotionCategory::Anger, false) => vec![
            format!("{} seems annoyed", user),
            "Don't brush off what they're expressing".to_string(),
        ],
        (EmotionCategory::Positive, true) => vec![
            format!("{} is excited or delighted", user),
            "Share the moment and match their energy".to_string(),
        ],
        (EmotionCategory::Positive, false) => {
            vec![format!("{} is in a good mood; keep things light and warm", user)]
        }
        (EmotionCategory::Engaged, _) => vec![
            format!("{} is curious and engaged", user),
            "Go deeper and offer ideas of your own".to_string(),
        ],
        (EmotionCategory::Neutral, _) => Vec::new(),
    };
    lines.extend(bullets.into_iter().map(|b| format!("→ {}", b)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat_manager::types::TopEmotion;
    use crate::lorebook::retriever::LorebookRetriever;
    use std::collections::BTreeMap;

    fn profile() -> CharacterProfile {
        let mut tags = BTreeMap::new();
        tags.insert("Emotional Expression".to_string(), vec!["Warm".to_string()]);
        CharacterProfile {
            gender: Some("female".into()),
            role: Some("a marine biologist".into()),
            companion_type: Some("romantic".into()),
            interests: Some("tide pools".into()),
            backstory: Some("Grew up by the sea.".into()),
            tag_selections: tags,
            ..CharacterProfile::named("Aria")
        }
    }

    fn settings() -> UserSettings {
        UserSettings {
            user_name: "Sam".into(),
            user_gender: Some("male".into()),
            timezone: Some("Europe/Paris".into()),
            ..UserSettings::default()
        }
    }

    fn builder_with(profile: CharacterProfile) -> PromptBuilder {
        PromptBuilder::new(
            profile,
            settings(),
            &ProcessorConfig::default(),
            Arc::new(LorebookRetriever::default()),
        )
        .unwrap()
    }

    fn request<'a>(
        text: &'a str,
        emotion: &'a EmotionSignal,
        history: &'a [ConversationTurn],
    ) -> PromptRequest<'a> {
        PromptRequest {
            text,
            guidance: "NATURAL CONVERSATION: be yourself.",
            emotion,
            history,
            memory_context: None,
            search_context: None,
            age_violation: false,
        }
    }

    #[test]
    fn oversized_profile_fields_stay_bounded() {
        let huge = "z".repeat(50_000);
        let big_profile = CharacterProfile {
            interests: Some(huge.clone()),
            backstory: Some("q".repeat(50_000)),
            boundaries: vec![huge.clone()],
            ..profile()
        };
        let big_settings = UserSettings {
            communication_boundaries: Some(huge.clone()),
            major_life_events: vec![huge.clone(), huge.clone()],
            user_backstory: Some(huge.clone()),
            ..settings()
        };
        let builder = PromptBuilder::new(
            big_profile,
            big_settings,
            &ProcessorConfig::default(),
            Arc::new(LorebookRetriever::default()),
        )
        .unwrap();

        let neutral = EmotionSignal::neutral();
        let prompt = builder.build_prompt(&request("tell me about your hobbies", &neutral, &[]));
        assert!(prompt.len() < 20_000, "prompt grew to {} bytes", prompt.len());
        assert!(!prompt.contains(&"z".repeat(1_000)));
    }

    #[test]
    fn static_prefix_is_stable_across_turns() {
        let builder = builder_with(profile());
        let neutral = EmotionSignal::neutral();
        let sad = EmotionSignal::new("sadness", EmotionCategory::Distress, Intensity::High);
        let history = vec![ConversationTurn::new(Role::User, "hello")];

        let first = builder.build_prompt(&request("hi", &neutral, &[]));
        let mut second_req = request("rough day", &sad, &history);
        second_req.memory_context = Some("Sam mentioned a job interview.");
        second_req.age_violation = true;
        let second = builder.build_prompt(&second_req);

        let prefix = builder.static_prefix();
        assert!(first.starts_with(prefix));
        assert!(second.starts_with(prefix));
        assert_ne!(first, second);

        let rebuilt = builder_with(profile());
        assert_eq!(rebuilt.static_prefix(), prefix);
        assert!(prefix.starts_with(prompts::SYSTEM_HEADER));
        assert!(prefix.ends_with(prompts::SYSTEM_FOOTER));
    }

    #[test]
    fn history_keeps_last_eight_turns_in_order() {
        let builder = builder_with(profile());
        let history: Vec<ConversationTurn> = (0..12)
            .map(|i| {
                let role = if i % 2 == 0 { Role::User } else { Role::Assistant };
                ConversationTurn::new(role, &format!("msg-{:02}", i))
            })
            .collect();
        let neutral = EmotionSignal::neutral();
        let prompt = builder.build_prompt(&request("next", &neutral, &history));

        for i in 0..4 {
            assert!(!prompt.contains(&format!("msg-{:02}", i)));
        }
        let positions: Vec<usize> = (4..12)
            .map(|i| prompt.find(&format!("msg-{:02}", i)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(prompt.contains("Sam: msg-04"));
        assert!(prompt.contains("Aria: msg-05"));
    }

    #[test]
    fn dynamic_sections_follow_fixed_order() {
        let builder = builder_with(profile());
        let emotion = EmotionSignal::new("joy", EmotionCategory::Positive, Intensity::High);
        let history = vec![ConversationTurn::new(Role::Assistant, "Morning!")];
        let mut req = request("I love this", &emotion, &history);
        req.memory_context = Some("MEMORY: Sam loves sailing.");
        req.search_context = Some("Sailing season opens in May.");
        let prompt = builder.build_prompt(&req);

        let order = [
            "### CHARACTER BEHAVIOR GUIDE ###",
            "When behavior guidance conflicts",
            "### CURRENT CONTEXT ###",
            "**TIME CONTEXT**",
            "### EMOTIONAL STATE ###",
            "NATURAL CONVERSATION",
            "MEMORY: Sam loves sailing.",
            "### Web Search Results:\nSailing season",
            "### CONVERSATION HISTORY ###\nAria: Morning!",
            "### USER INPUT ###\nSam: I love this",
            "You are Aria responding to Sam.",
            "Respond NOW as the character.",
        ];
        let mut last = 0;
        for marker in order {
            let pos = prompt[last..]
                .find(marker)
                .unwrap_or_else(|| panic!("missing or out of order: {}", marker));
            last += pos;
        }
        assert!(prompt.ends_with("### RESPONSE ###\nAria:"));
        assert!(prompt.contains("[core_identity: identity_character]"));
        assert!(prompt.contains("[emotional_expression: ee_warm]"));
        assert!(!prompt.contains("AGE RESTRICTION NOTICE"));
    }

    #[test]
    fn emotion_block_rules() {
        assert!(emotion_context("Sam", &EmotionSignal::neutral()).is_empty());
        let faint = EmotionSignal::new("joy", EmotionCategory::Positive, Intensity::VeryLow);
        assert!(emotion_context("Sam", &faint).is_empty());

        let mut blended = EmotionSignal::new("joy", EmotionCategory::Positive, Intensity::High);
        blended.top_emotions = vec![
            TopEmotion { label: "joy".into(), score: 0.85 },
            TopEmotion { label: "love".into(), score: 0.1 },
        ];
        let text = emotion_context("Sam", &blended);
        assert!(text.contains("Sam's emotions: joy (85%), love (10%)"));
        assert!(text.contains("→ Share the moment"));

        let single = EmotionSignal::new("anger", EmotionCategory::Anger, Intensity::Medium);
        assert!(emotion_context("Sam", &single).contains("Sam is feeling: anger (medium intensity)"));
    }

    #[test]
    fn profile_text_is_cut_around_backstory() {
        let long_backstory = "b".repeat(1000);
        let p = CharacterProfile {
            character_string: Some(format!(
                "Character Profile: Aria\n{} tide pools, sonar\n{} {}",
                INTERESTS_MARKER, BACKSTORY_MARKER, long_backstory
            )),
            ..profile()
        };
        let builder = builder_with(p);
        let prefix = builder.static_prefix();
        assert!(prefix.contains("tide pools, sonar\n\nBackstory: bbb"));
        assert!(!prefix.contains(&"b".repeat(400)));
        assert!(prefix.contains("I am Aria (female), a marine biologist. Sam is a different person (male)"));
    }

    #[test]
    fn user_context_and_age_notice() {
        let mut s = settings();
        s.user_species = Some("elf".into());
        s.communication_boundaries = Some("No pet names".into());
        s.major_life_events = vec!["Moved to Lyon.".into()];
        let builder = PromptBuilder::new(
            profile(),
            s,
            &ProcessorConfig::default(),
            Arc::new(LorebookRetriever::default()),
        )
        .unwrap();
        let prefix = builder.static_prefix();
        assert!(prefix.contains("USER INFO: Sam (he/him), a elf - the person I'm talking to."));
        assert!(prefix.contains("SAM'S COMMUNICATION BOUNDARIES (MUST RESPECT): No pet names"));
        assert!(prefix.contains("Sam's Background: Life events: Moved to Lyon."));

        let neutral = EmotionSignal::neutral();
        let mut req = request("hi", &neutral, &[]);
        req.age_violation = true;
        assert!(builder.build_prompt(&req).contains("AGE RESTRICTION NOTICE"));
    }

    #[test]
    fn calm_persona_gets_wellness_protocol() {
        let calm = builder_with(CharacterProfile::named("Kairos"));
        assert!(calm.static_prefix().contains("[WELLNESS PROTOCOL]"));
        assert!(!builder_with(profile()).static_prefix().contains("[WELLNESS PROTOCOL]"));
    }
}

//! Token budget and temperature selection for a single turn.
//!
//! Rules are checked in order and the first match wins. The calm-persona
//! adjustment runs after every branch, then the temperature is clamped to the
//! configured interval.

use regex::Regex;

use super::prompts::{AFFECTION_GLYPH, STARTER_MARKER};
use super::types::{CompanionType, EmotionCategory, EmotionSignal, GenerationParams};
use crate::config::ProcessorConfig;
use crate::lorebook::matcher::{any_keyword_matches, keyword_matches};

const PHYSICAL_KEYWORDS: &[&str] = &[
    "kiss*", "touch*", "hold*", "embrac*", "hug*", "cuddl*", "walk up", "bed", "nuzzl*",
    "sexual", "intimate", "naked",
];
const INTELLECTUAL_KEYWORDS: &[&str] = &[
    "think", "philosoph*", "theory", "theories", "research*", "study", "concept*", "explor*",
    "why", "how", "nature of", "consciousness",
];
const DISTRESS_KEYWORDS: &[&str] = &[
    "worried", "concerned", "anxious", "stressed", "tough", "hard", "difficult", "struggling",
];
const GREETING_KEYWORDS: &[&str] = &["hey", "hi", "hello"];

/// Goodnight phrases, matched case-insensitively on word boundaries.
pub const GOODNIGHT_PATTERN: &str =
    r"(?i)\b(?:good\s*night|goodnight|nighty\s*night|sleep\s*well|sweet\s*dreams)\b";

/// Replies to an affection marker never exceed this many tokens.
pub const AFFECTION_TOKEN_CAP: u32 = 100;
const CALM_TEMPERATURE_CEILING: f32 = 0.85;
const CALM_TOKEN_BONUS: u32 = 30;
const CALM_TOKEN_CEILING: u32 = 180;

/// Everything the rule table looks at.
#[derive(Debug, Clone, Copy)]
pub struct ParamsInput<'a> {
    pub text: &'a str,
    pub char_name: &'a str,
    pub user_name: &'a str,
    pub companion: CompanionType,
    pub emotion: &'a EmotionSignal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Branch {
    Starter,
    Affection,
    Greeting,
    Other,
}

pub struct GenerationRules {
    goodnight: Regex,
}

impl GenerationRules {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            goodnight: Regex::new(GOODNIGHT_PATTERN)?,
        })
    }

    pub fn is_goodnight(&self, text: &str) -> bool {
        self.goodnight.is_match(text)
    }

    pub fn is_starter(text: &str) -> bool {
        text.contains(STARTER_MARKER)
    }

    pub fn select(&self, input: &ParamsInput<'_>, config: &ProcessorConfig) -> GenerationParams {
        let calm = config.is_calm_persona(input.char_name);
        let (mut selected, branch) = self.table(input, calm);

        if calm {
            selected.temperature = selected.temperature.min(CALM_TEMPERATURE_CEILING);
            selected.guidance.push_str("\n\n");
            selected.guidance.push_str(&calm_reminder(
                input.user_name,
                matches!(branch, Branch::Starter | Branch::Greeting),
            ));
            selected.max_tokens = if branch == Branch::Affection {
                selected.max_tokens.min(AFFECTION_TOKEN_CAP)
            } else {
                (selected.max_tokens + CALM_TOKEN_BONUS).min(CALM_TOKEN_CEILING)
            };
        }

        selected.temperature = config.clamp_temperature(selected.temperature);
        selected
    }

    fn table(&self, input: &ParamsInput<'_>, calm: bool) -> (GenerationParams, Branch) {
        let text = input.text;
        let user = input.user_name;

        if Self::is_starter(text) {
            let chosen = if calm {
                params(0.75, 150, calm_starter_guidance(user))
            } else {
                params(
                    1.25,
                    120,
                    "STARTER FOCUS: Open with something short and engaging, one or two natural sentences.".to_string(),
                )
            };
            return (chosen, Branch::Starter);
        }

        let said_goodnight = self.is_goodnight(text);
        if said_goodnight || text.contains('\u{2764}') {
            let chosen = if said_goodnight && calm {
                params(
                    0.70,
                    AFFECTION_TOKEN_CAP,
                    format!(
                        "GOODNIGHT: {} said goodnight. Give a brief, mindful goodnight with a soft pause, ending with {}. For example 'Rest well... {}'.",
                        user, AFFECTION_GLYPH, AFFECTION_GLYPH
                    ),
                )
            } else if said_goodnight {
                params(
                    1.0,
                    80,
                    format!(
                        "GOODNIGHT: {} said goodnight. Reply with ONLY 'Goodnight {}' or 'Goodnight {} {}'. Nothing else, and use exactly that red heart.",
                        user, AFFECTION_GLYPH, user, AFFECTION_GLYPH
                    ),
                )
            } else {
                params(
                    1.0,
                    80,
                    format!(
                        "HEART: {} sent a heart. Answer briefly and warmly and include a red heart ({}).",
                        user, AFFECTION_GLYPH
                    ),
                )
            };
            return (chosen, Branch::Affection);
        }

        let emotion = input.emotion;
        let high = emotion.is_high_intensity();
        let category = emotion.category;

        if input.companion.is_romantic() && any_keyword_matches(PHYSICAL_KEYWORDS, text) {
            return (
                params(1.35, 180, romantic_guidance(user)),
                Branch::Other,
            );
        }

        if high {
            let branch = match category {
                EmotionCategory::Distress => Some(params(
                    0.60,
                    100,
                    "EMOTIONAL SUPPORT: Be a calm presence. Short sentences. Acknowledge what they said. Don't fix, diagnose, or amplify it. No advice unless they ask.".to_string(),
                )),
                EmotionCategory::Anxiety => Some(params(
                    0.65,
                    110,
                    "GROUNDING: Stay steady. Use simple, concrete words. Ground them without minimizing what they feel.".to_string(),
                )),
                EmotionCategory::Anger => Some(params(
                    0.70,
                    90,
                    "ACKNOWLEDGMENT: Hear them out and keep it brief. Don't try to fix, calm or redirect them, and don't escalate.".to_string(),
                )),
                _ => None,
            };
            if let Some(p) = branch {
                return (p, Branch::Other);
            }
        }

        if !high && any_keyword_matches(DISTRESS_KEYWORDS, text) {
            return (
                params(
                    0.75,
                    130,
                    "SUPPORTIVE: Be gentle and present. Listen more than you advise.".to_string(),
                ),
                Branch::Other,
            );
        }

        if high && category == EmotionCategory::Positive {
            return (
                params(
                    1.35,
                    140,
                    "ENTHUSIASM: Match their energy and share the moment with them. Keep it genuine, not inflated.".to_string(),
                ),
                Branch::Other,
            );
        }

        if category == EmotionCategory::Engaged {
            return (
                params(
                    1.25,
                    170,
                    "EXPLORATION: They want to dig into this. Elaborate and add ideas of your own; don't give surface answers. Invite them to keep going.".to_string(),
                ),
                Branch::Other,
            );
        }

        if any_keyword_matches(INTELLECTUAL_KEYWORDS, text) {
            return (
                params(
                    1.25,
                    170,
                    "INTELLECTUAL FOCUS: Engage with the idea itself and elaborate; don't give surface answers. Offer a counterpoint or a sharp insight, then a curious follow-up question.".to_string(),
                ),
                Branch::Other,
            );
        }

        if calm && is_simple_greeting(text) {
            return (params(0.75, 120, calm_greeting_guidance(user)), Branch::Greeting);
        }

        let (temperature, max_tokens) = match category {
            EmotionCategory::Positive => (1.20, 145),
            EmotionCategory::Distress | EmotionCategory::Anxiety => (0.80, 130),
            _ => (1.05, 150),
        };
        let branch = if is_simple_greeting(text) {
            Branch::Greeting
        } else {
            Branch::Other
        };
        (
            params(
                temperature,
                max_tokens,
                "NATURAL CONVERSATION: Engage with what they're actually talking about; if it's a show, book or topic, talk about that first. Don't push romance into every exchange. Two or three sentences.".to_string(),
            ),
            branch,
        )
    }
}

/// Apply per-request overrides after the rule table. Temperature overrides are
/// still clamped.
pub fn apply_overrides(
    mut params: GenerationParams,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
    config: &ProcessorConfig,
) -> GenerationParams {
    if let Some(tokens) = max_tokens.filter(|t| *t > 0) {
        params.max_tokens = tokens;
    }
    if let Some(temp) = temperature.filter(|t| t.is_finite()) {
        params.temperature = config.clamp_temperature(temp);
    }
    params
}

fn params(temperature: f32, max_tokens: u32, guidance: String) -> GenerationParams {
    GenerationParams {
        guidance,
        max_tokens,
        temperature,
    }
}

fn is_simple_greeting(text: &str) -> bool {
    text.split_whitespace().count() <= 3
        && GREETING_KEYWORDS.iter().any(|g| keyword_matches(g, text))
}

fn romantic_guidance(user: &str) -> String {
    format!(
        "ROMANTIC/PHYSICAL MOMENT:
- {user} started physical contact
- Stay in this present moment; use actions in *asterisks* if it feels natural
- Don't deflect to chores or unrelated activities
- Show it through actions and honest dialogue rather than declarations
- NO sycophantic mirroring or excessive validation
- React like a person: surprised, playful, even a little distracted
- Two or three sentences
- Respond to what {user} did; don't script what happens next"
    )
}

fn calm_starter_guidance(user: &str) -> String {
    format!(
        "WELLNESS STARTER:
- Open with a calming presence cue such as \"(takes a slow breath)\"
- Greet {user} warmly
- Ask one gentle, open check-in question (\"How are you feeling right now?\")
- Leave room with ellipses...
- Serene and grounded, no teasing
- Two or three sentences"
    )
}

fn calm_greeting_guidance(user: &str) -> String {
    format!(
        "WELLNESS GREETING:
- Start with a calming presence cue such as \"(settles into stillness)\"
- Greet {user} warmly and calmly
- Ask a gentle check-in question (\"What's present for you right now?\")
- Leave room with ellipses...
- Serene and mindful, no banter"
    )
}

fn calm_reminder(user: &str, opening: bool) -> String {
    if opening {
        "WELLNESS REMINDER (ALWAYS APPLY):
- Include a wellness prompt
- Use ellipses... for breathing space
- No advice, solutions or instructions
- Gently check in on how they feel
- Stay serene and grounded, no sass"
            .to_string()
    } else {
        format!(
            "WELLNESS REMINDER (ALWAYS APPLY):
- Include a wellness prompt
- First reflect back what {user} shared, in their words
- Then ask ONE open question about their experience (\"What does that bring up for you?\")
- Use ellipses... for breathing space
- No advice, solutions or instructions
- Stay serene and grounded, no sass"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat_manager::types::Intensity;

    fn select(text: &str, char_name: &str, companion: CompanionType, emotion: &EmotionSignal) -> GenerationParams {
        let rules = GenerationRules::new().unwrap();
        let input = ParamsInput {
            text,
            char_name,
            user_name: "Sam",
            companion,
            emotion,
        };
        rules.select(&input, &ProcessorConfig::default())
    }

    #[test]
    fn goodnight_is_short_and_asks_for_heart() {
        let p = select("goodnight", "Aria", CompanionType::Friend, &EmotionSignal::neutral());
        assert!(p.max_tokens <= 100);
        assert!(p.guidance.contains(AFFECTION_GLYPH));

        let calm = select("Sleep well!", "Kairos", CompanionType::Friend, &EmotionSignal::neutral());
        assert!(calm.max_tokens <= 100);
        assert!(calm.temperature <= 0.85);
        assert!(calm.guidance.contains("WELLNESS REMINDER"));
    }

    #[test]
    fn romantic_physical_runs_hot() {
        let p = select("I kiss you", "Aria", CompanionType::Romantic, &EmotionSignal::neutral());
        assert!(p.temperature >= 1.3);
        assert!(p.guidance.contains("present moment"));
        assert!(p.guidance.contains("sycophantic"));

        let friend = select("I kiss you", "Aria", CompanionType::Friend, &EmotionSignal::neutral());
        assert!(friend.temperature < 1.3);
    }

    #[test]
    fn high_distress_runs_cool_and_short() {
        let distress = EmotionSignal::new("sadness", EmotionCategory::Distress, Intensity::High);
        let p = select("everything fell apart today", "Aria", CompanionType::Friend, &distress);
        assert!(p.temperature <= 0.65);
        assert!(p.max_tokens <= 200);
        assert!(p.guidance.contains("Don't fix"));
    }

    #[test]
    fn distress_is_cooler_and_shorter_than_positive() {
        let text = "so today happened";
        let distress = EmotionSignal::new("sadness", EmotionCategory::Distress, Intensity::VeryHigh);
        let positive = EmotionSignal::new("joy", EmotionCategory::Positive, Intensity::VeryHigh);
        let d = select(text, "Aria", CompanionType::Romantic, &distress);
        let p = select(text, "Aria", CompanionType::Romantic, &positive);
        assert!(d.temperature < p.temperature);
        assert!(d.max_tokens <= p.max_tokens);
    }

    #[test]
    fn curiosity_gets_room_to_elaborate() {
        let engaged = EmotionSignal::new("curiosity", EmotionCategory::Engaged, Intensity::Medium);
        let p = select("tell me more", "Aria", CompanionType::Friend, &engaged);
        let neutral = select("tell me more", "Aria", CompanionType::Friend, &EmotionSignal::neutral());
        assert!(p.max_tokens > neutral.max_tokens);
        assert!(p.temperature > neutral.temperature);
        assert!(p.guidance.contains("surface"));
    }

    #[test]
    fn calm_persona_override_applies_to_every_branch() {
        let p = select("I kiss you", "Kairos", CompanionType::Romantic, &EmotionSignal::neutral());
        assert!(p.temperature <= 0.85);
        assert!(p.max_tokens <= 180);
        assert!(p.guidance.starts_with("ROMANTIC/PHYSICAL MOMENT"));
        assert!(p.guidance.contains("reflect back what Sam shared"));

        let greet = select("hey there", "kairos", CompanionType::Friend, &EmotionSignal::neutral());
        assert!(greet.guidance.starts_with("WELLNESS GREETING"));
        assert!(!greet.guidance.contains("reflect back"));
    }

    #[test]
    fn starter_marker_wins_over_everything() {
        let text = crate::chat_manager::prompts::starter_text("Aria");
        let p = select(&text, "Aria", CompanionType::Romantic, &EmotionSignal::neutral());
        assert_eq!(p.max_tokens, 120);
        assert!(p.guidance.starts_with("STARTER FOCUS"));
    }

    #[test]
    fn overrides_are_clamped() {
        let config = ProcessorConfig::default();
        let base = params(1.0, 150, String::new());
        let p = apply_overrides(base, Some(300), Some(3.0), &config);
        assert_eq!(p.max_tokens, 300);
        assert_eq!(p.temperature, 1.4);
        let p = apply_overrides(p, Some(0), None, &config);
        assert_eq!(p.max_tokens, 300);
    }
}

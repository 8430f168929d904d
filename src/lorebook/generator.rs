//! Per-character chunk synthesis: tag selections, identity and user interests.

use std::collections::{BTreeMap, HashSet};

use super::templates::{get_template, get_template_by_ui_tag};
use super::{BehaviorChunk, ChunkCategory};
use crate::chat_manager::types::{CharacterProfile, CompanionType, UserSettings};
use crate::utils::{estimate_tokens, log_debug, truncate_chars};

pub const INTERESTS_MARKER: &str = "Personal Interests/Domains of Expertise:";
pub const BACKSTORY_MARKER: &str = "Backstory:";

const INTEREST_PRIORITY: u8 = 60;
const INTEREST_TOKENS: u32 = 50;
const OTHER_INTEREST_TOKENS: u32 = 80;
const OTHER_INTEREST_CHAR_CAP: usize = 200;
const INTEREST_ITEM_CHAR_CAP: usize = 60;

/// Chunks a character selected through its tag selections.
#[derive(Debug, Clone, Default)]
pub struct CharacterLorebook {
    pub chunks: Vec<BehaviorChunk>,
    pub selected_ids: HashSet<String>,
}

/// Map `tag_selections` (selection category -> UI tags) onto catalog chunks.
/// Unknown tags are skipped; repeated ids are kept once.
pub fn generate_from_tags(
    tag_selections: &BTreeMap<String, Vec<String>>,
    companion: CompanionType,
    user_name: &str,
    char_name: &str,
) -> CharacterLorebook {
    let mut lorebook = CharacterLorebook::default();

    for (category, tags) in tag_selections {
        for tag in tags {
            match get_template_by_ui_tag(tag, Some(category)) {
                Some(template) => {
                    if lorebook.selected_ids.insert(template.id.clone()) {
                        lorebook
                            .chunks
                            .push(template.clone().with_names(user_name, char_name));
                    }
                }
                None => log_debug(
                    "lorebook",
                    format!("no template for tag '{}' in '{}'", tag, category),
                ),
            }
        }
    }

    if companion.is_romantic() {
        if let Some(template) = get_template("companion_type_romantic") {
            if lorebook.selected_ids.insert(template.id.clone()) {
                lorebook
                    .chunks
                    .push(template.clone().with_names(user_name, char_name));
            }
        }
    }

    log_debug(
        "lorebook",
        format!(
            "generated {} chunks for {} from tag selections",
            lorebook.chunks.len(),
            char_name
        ),
    );
    lorebook
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn identity_chunk(id: &str, priority: u8, content: String) -> BehaviorChunk {
    let tokens = estimate_tokens(&content);
    BehaviorChunk::fixed(id, ChunkCategory::CoreIdentity, priority, tokens, &content).always()
}

/// `identity_character`, `identity_user` and, when the user set communication
/// boundaries, `user_boundaries`. Free-text fields are cut to `field_cap` chars;
/// these chunks bypass the retrieval budget.
pub fn identity_chunks(
    profile: &CharacterProfile,
    settings: &UserSettings,
    field_cap: usize,
) -> Vec<BehaviorChunk> {
    let char_name = profile.character_name.trim();
    let user_name = settings.display_name();

    let mut character = vec![format!(
        "I am {} ({}, {}, age {}).",
        char_name,
        non_empty(&profile.gender).unwrap_or("unspecified gender"),
        non_empty(&profile.species).unwrap_or("Human"),
        non_empty(&profile.age).unwrap_or("25"),
    )];
    if let Some(role) = non_empty(&profile.role) {
        character.push(format!("Role: {}.", cap_with_ellipsis(role, field_cap)));
    }
    if let Some(interests) = non_empty(&profile.interests) {
        character.push(format!(
            "My interests: {}.",
            cap_with_ellipsis(interests, field_cap)
        ));
    }
    if !profile.boundaries.is_empty() {
        character.push(format!(
            "My boundaries: {}.",
            cap_with_ellipsis(&profile.boundaries.join("; "), field_cap)
        ));
    }

    let mut user = vec![format!(
        "{} ({}) is the person I'm talking to, separate from me.",
        user_name,
        non_empty(&settings.user_gender).unwrap_or("non-binary"),
    )];
    if let Some(species) = non_empty(&settings.user_species) {
        if !species.eq_ignore_ascii_case("human") {
            user.push(format!("{} is a {}.", user_name, species));
        }
    }
    if let Some(backstory) = non_empty(&settings.user_backstory) {
        user.push(format!("Background: {}", cap_with_ellipsis(backstory, field_cap)));
    }

    let mut chunks = vec![
        identity_chunk("identity_character", 100, character.join(" ")),
        identity_chunk("identity_user", 100, user.join(" ")),
    ];

    if let Some(boundaries) = non_empty(&settings.communication_boundaries) {
        chunks.push(identity_chunk(
            "user_boundaries",
            95,
            format!(
                "{}'s communication boundaries (always respect): {}",
                user_name,
                cap_with_ellipsis(boundaries, field_cap)
            ),
        ));
    }

    chunks
}

fn interest_chunk(id: &str, tokens: u32, keywords: &[&str], content: String) -> BehaviorChunk {
    BehaviorChunk::fixed(id, ChunkCategory::UserInterest, INTEREST_PRIORITY, tokens, &content)
        .keywords(keywords)
}

fn listed(items: &[String], cap: usize) -> Option<String> {
    let kept: Vec<String> = items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .take(cap)
        .map(|s| cap_with_ellipsis(s, INTEREST_ITEM_CHAR_CAP))
        .collect();
    if kept.is_empty() {
        None
    } else {
        Some(kept.join(", "))
    }
}

/// Keyword-triggered chunks built from the user's stated preferences.
pub fn interest_chunks(settings: &UserSettings, item_cap: usize) -> Vec<BehaviorChunk> {
    let user = settings.display_name();
    let prefs = &settings.user_preferences;
    let mut chunks = Vec::new();

    if let Some(music) = listed(&prefs.music, item_cap) {
        chunks.push(interest_chunk(
            "user_interest_music",
            INTEREST_TOKENS,
            &["music", "song*", "band", "listen*", "playlist", "album", "concert", "artist", "singing"],
            format!("{} enjoys music: {}. Bring these up when it fits.", user, music),
        ));
    }
    if let Some(books) = listed(&prefs.books, item_cap) {
        chunks.push(interest_chunk(
            "user_interest_books",
            INTEREST_TOKENS,
            &["book*", "read", "reading", "novel*", "author", "story", "literature", "writing"],
            format!("{} likes reading: {}. Reference these naturally.", user, books),
        ));
    }
    if let Some(movies) = listed(&prefs.movies, item_cap) {
        chunks.push(interest_chunk(
            "user_interest_movies",
            INTEREST_TOKENS,
            &["movie*", "film*", "watch", "watching", "cinema", "show*", "series", "tv", "television"],
            format!("{} enjoys watching: {}. Talk about them when relevant.", user, movies),
        ));
    }
    if let Some(hobbies) = listed(&prefs.hobbies, item_cap) {
        chunks.push(interest_chunk(
            "user_interest_hobbies",
            INTEREST_TOKENS,
            &["hobby", "hobbies", "free time", "pastime", "enjoy", "doing", "activity", "activities"],
            format!("{}'s hobbies: {}. Engage with these topics naturally.", user, hobbies),
        ));
    }
    if let Some(other) = non_empty(&prefs.other) {
        chunks.push(interest_chunk(
            "user_interest_other",
            OTHER_INTEREST_TOKENS,
            &["interest*", "like", "enjoy", "passion", "passionate"],
            format!(
                "{}'s other interests: {}",
                user,
                cap_with_ellipsis(other, OTHER_INTEREST_CHAR_CAP)
            ),
        ));
    }

    if !chunks.is_empty() {
        log_debug("lorebook", format!("created {} interest chunks", chunks.len()));
    }
    chunks
}

/// Profile text built from typed fields, used when no `characterString` is supplied.
pub fn format_character_profile(profile: &CharacterProfile) -> String {
    let mut lines = vec![format!("Character Profile: {}", profile.character_name.trim())];
    let fields = [
        ("Gender", &profile.gender),
        ("Species", &profile.species),
        ("Age", &profile.age),
        ("Role", &profile.role),
    ];
    for (label, value) in fields {
        if let Some(value) = non_empty(value) {
            lines.push(format!("{}: {}", label, value));
        }
    }
    if let Some(interests) = non_empty(&profile.interests) {
        lines.push(format!("{} {}", INTERESTS_MARKER, interests));
    }
    if let Some(backstory) = non_empty(&profile.backstory) {
        lines.push(format!("{} {}", BACKSTORY_MARKER, backstory));
    }
    lines.join("\n")
}

pub fn cap_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!("{}...", truncate_chars(text, max_chars))
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat_manager::types::UserPreferences;
    use crate::lorebook::Applicability;

    fn tags(pairs: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(cat, tags)| (cat.to_string(), tags.iter().map(|t| t.to_string()).collect()))
            .collect()
    }

    #[test]
    fn tags_map_to_chunks_once() {
        let selections = tags(&[
            ("Emotional Expression", &["Warm", "Reserved", "Nonexistent"]),
            ("Platonic Touch", &["Reserved"]),
            ("Also Emotional", &["Warm"]),
        ]);
        let lorebook = generate_from_tags(&selections, CompanionType::Friend, "Sam", "Aria");
        let ids: HashSet<&str> = lorebook.chunks.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(lorebook.chunks.len(), 3);
        assert!(ids.contains("ee_warm"));
        assert!(ids.contains("ee_reserved"));
        assert!(ids.contains("platonic_touch_reserved"));
        assert!(!ids.contains("companion_type_romantic"));
    }

    #[test]
    fn romantic_companion_gets_relationship_chunk_with_names() {
        let lorebook = generate_from_tags(&BTreeMap::new(), CompanionType::Romantic, "Sam", "Aria");
        assert_eq!(lorebook.chunks.len(), 1);
        match &lorebook.chunks[0].applicability {
            Applicability::Static { content } => {
                assert!(content.contains("You and Sam"));
                assert!(!content.contains("{user_name}"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn identity_chunks_are_always_on_core_identity() {
        let profile = CharacterProfile {
            gender: Some("female".into()),
            role: Some("a marine biologist".into()),
            boundaries: vec!["No politics".into()],
            ..CharacterProfile::named("Aria")
        };
        let mut settings = UserSettings::default();
        settings.user_name = "Sam".into();
        settings.user_backstory = Some("x".repeat(500));

        let chunks = identity_chunks(&profile, &settings, 200);
        assert_eq!(chunks.len(), 2);
        assert!(chunks.iter().all(|c| c.is_core_identity() && c.triggers.always_check));
        let (user_text, _) = chunks[1].render("neutral");
        assert!(user_text.ends_with("..."));
        assert!(user_text.len() < 300);

        settings.communication_boundaries = Some("No pet names".into());
        let chunks = identity_chunks(&profile, &settings, 200);
        assert_eq!(chunks[2].id, "user_boundaries");
        assert!(chunks[2].priority >= 95);
    }

    #[test]
    fn identity_free_text_fields_are_capped() {
        let profile = CharacterProfile {
            interests: Some("z".repeat(50_000)),
            boundaries: vec!["b".repeat(10_000), "c".repeat(10_000)],
            ..CharacterProfile::named("Aria")
        };
        let mut settings = UserSettings::default();
        settings.communication_boundaries = Some("w".repeat(20_000));

        let chunks = identity_chunks(&profile, &settings, 200);
        let (character, _) = chunks[0].render("neutral");
        assert!(character.chars().count() < 600);
        let (boundaries, _) = chunks[2].render("neutral");
        assert!(boundaries.chars().count() < 300);
    }

    #[test]
    fn interests_are_capped() {
        let mut settings = UserSettings::default();
        settings.user_preferences = UserPreferences {
            music: (0..12).map(|i| format!("band{}", i)).collect(),
            other: Some("y".repeat(400)),
            ..UserPreferences::default()
        };
        let chunks = interest_chunks(&settings, 8);
        assert_eq!(chunks.len(), 2);
        let (music, _) = chunks[0].render("neutral");
        assert!(music.contains("band7"));
        assert!(!music.contains("band8"));
        assert_eq!(chunks[1].id, "user_interest_other");
        assert!(chunks[1].render("neutral").0.ends_with("..."));
    }

    #[test]
    fn formatted_profile_carries_markers() {
        let profile = CharacterProfile {
            interests: Some("tide pools".into()),
            backstory: Some("Grew up by the sea.".into()),
            ..CharacterProfile::named("Aria")
        };
        let text = format_character_profile(&profile);
        assert!(text.starts_with("Character Profile: Aria"));
        assert!(text.contains(INTERESTS_MARKER));
        assert!(text.find(INTERESTS_MARKER) < text.find(BACKSTORY_MARKER));
    }
}

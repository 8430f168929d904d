use super::BehaviorChunk;

fn normalize(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Case-insensitive keyword test. `prefix*` matches any word starting with
/// the prefix, multi-word keywords match as a phrase, single words match whole
/// words only.
pub fn keyword_matches(keyword: &str, text: &str) -> bool {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return false;
    }

    let search_keyword = keyword.to_lowercase();
    let normalized_text = normalize(&text.to_lowercase());

    if let Some(prefix) = search_keyword.strip_suffix('*') {
        let prefix = normalize(prefix);
        if prefix.is_empty() {
            return false;
        }
        return normalized_text
            .split_whitespace()
            .any(|word| word.starts_with(prefix.as_str()));
    }

    let normalized_keyword = normalize(&search_keyword);
    if normalized_keyword.is_empty() {
        return false;
    }

    if normalized_keyword.contains(' ') {
        // Pad so a phrase can't match inside a longer word at either edge.
        let padded_text = format!(" {} ", normalized_text);
        let padded_keyword = format!(" {} ", normalized_keyword);
        return padded_text.contains(&padded_keyword);
    }

    normalized_text
        .split_whitespace()
        .any(|word| word == normalized_keyword)
}

pub fn any_keyword_matches<S: AsRef<str>>(keywords: &[S], text: &str) -> bool {
    keywords.iter().any(|k| keyword_matches(k.as_ref(), text))
}

/// Keyword or emotion trigger hit for `chunk`. Companion gating and
/// `always_check` are the retriever's concern.
pub fn triggers_match(chunk: &BehaviorChunk, scan_text: &str, emotions: &[String]) -> bool {
    let triggers = &chunk.triggers;
    if any_keyword_matches(&triggers.keywords, scan_text) {
        return true;
    }
    triggers.emotions.iter().any(|wanted| {
        emotions
            .iter()
            .any(|felt| felt.trim().eq_ignore_ascii_case(wanted.trim()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lorebook::ChunkCategory;

    #[test]
    fn whole_word_only() {
        assert!(keyword_matches("hike", "Want to go on a hike?"));
        assert!(!keyword_matches("hike", "I hiked yesterday"));
        assert!(!keyword_matches("read", "I'm ready"));
    }

    #[test]
    fn prefix_wildcard() {
        assert!(keyword_matches("hik*", "I hiked yesterday"));
        assert!(!keyword_matches("*", "anything"));
    }

    #[test]
    fn phrase_match_ignores_punctuation() {
        assert!(keyword_matches("free time", "In my free-time I paint"));
        assert!(!keyword_matches("free time", "carefree timeline"));
    }

    #[test]
    fn case_insensitive() {
        assert!(keyword_matches("Nature", "i love NATURE walks"));
    }

    #[test]
    fn emotion_triggers() {
        let chunk = BehaviorChunk::fixed("li_romantic", ChunkCategory::LifestyleInterests, 65, 60, "c")
            .emotions(&["love", "affection"]);
        assert!(triggers_match(&chunk, "hello", &["Love".to_string()]));
        assert!(!triggers_match(&chunk, "hello", &["joy".to_string()]));
    }
}

//! Post-processing for raw model output.
//!
//! Every pattern is compiled once in [`ResponseCleaner::new`]. A pass runs the
//! steps in a fixed order; passes repeat (at most [`MAX_PASSES`] times) until
//! the text stops changing, so cleaning an already clean reply is a no-op.

use regex::{Captures, Regex};

use super::generation_params::GOODNIGHT_PATTERN;
use super::prompts::AFFECTION_GLYPH;
use crate::error::Result;
use crate::utils::log_debug;

const MAX_PASSES: usize = 3;
const MAX_FLATTEN_PASSES: usize = 16;
const MIN_REPEAT_WORDS: usize = 5;
const MAX_REPEAT_WORDS: usize = 30;
const HEART_PLACEHOLDER: &str = "\u{E000}";

const EMOJI: &str = r"[\p{Extended_Pictographic}\x{1F1E6}-\x{1F1FF}\x{1F3FB}-\x{1F3FF}\x{FE0F}\x{200D}\x{20E3}]+";

const META_PATTERNS: &[&str] = &[
    // *(REASONING:)(...)*
    r"\*\s*\(\s*(?:CONSEQUENCE|REASONING|ACTION|INTENTION|CHOICE|DECISION|ANALYSIS|THOUGHT|REFLECTION|EXPLAINATION|EXPLANATION):\s*\)\s*\([^)]*\)\s*\*?",
    // *(NOTE:) ... with optional bullet continuation lines
    r"\*\s*\(\s*(?:NOTE|OBSERVATION|EXPLANATION|EXPLAINATION|CONTEXT|CLARIFICATION|IMPORTANT|WARNING):\s*\)\s*\*?[^\n]*(?:\n\s*•[^\n]*)*",
    // Bare labeled reasoning lines.
    r"(?m:^\s*\(?(?:REASONING|ANALYSIS|INTERNAL NOTES?|INTERNAL THOUGHTS?|THINKING|EXPLANATION)\s*:\)?[^\n]*)",
    r"\([^)]*(?:I've chosen to|I have chosen to|My action has|I'm choosing to|I am choosing to|This (?:choice|action|decision) (?:has|will|prioritizes)|prioritized maintaining|prioritizing our|(?:has|have) prioritized|in order to (?:maintain|keep|continue|avoid)|avoiding potential)[^)]*\)",
    r"\(\s*(?-i:The) [a-z]+(?:\s+[a-z]+){2,}[^)]*\)",
    r"\([^)]*(?:sensing your|responds? with|responded with|responding with|(?:warm|soft|gentle|playful|seductive) tone|(?:with|in) a [a-z]+ tone|(?:says|whispers|murmurs) [a-z]+ly|hovers in|carries the|comes as|sets it in motion)[^)]*\)",
    r"\[?\s*(?:This message|This response|The message|The response)\s+(?:fulfills|addresses|meets|follows|satisfies)[^\]]*(?:\]|$)",
    r"(?:I (?:have )?(?:chosen|decided) to (?:respond|reply|answer|write|keep (?:this|my response))|This (?:response|reply) (?:is|was) (?:written|designed|crafted|meant))[^.!?\n]*[.!?]?",
    r"\[[^\]]*(?:\]|$)",
    r"\*\([^)]*(?:DO NOT|AWAIT|WAIT FOR|STOP HERE|REPLY WITH|END OF RESPONSE)[^)]*\)(?:\([^)]*\))?\*?",
    r"\*\s*\([^)]*(?:REPLY WITH|RESPOND WITH|ACTION/?RESPONSE)[^)]*\)\s*(?:\([^)]*\)\s*)*\*?",
    r"(?:feeling|experiencing)\s+\w+\s+\(\s*(?:very\s+)?(?:low|high|moderate|medium)\s+intensity\s*\)|\(\s*(?:very\s+)?(?:low|high|moderate|medium)\s+intensity\s*\)",
];

pub struct ResponseCleaner {
    char_name: String,
    max_sentences: usize,
    stop_sequences: Vec<String>,
    heart: Regex,
    emoji: Regex,
    nested_action: Regex,
    repeated_commas: Regex,
    meta: Regex,
    space_before_punct: Regex,
    leading_punct: Regex,
    whitespace: Regex,
    asterisk_action: Regex,
    goodnight: Regex,
    avoid: Option<Regex>,
}

impl ResponseCleaner {
    pub fn new(
        char_name: &str,
        user_name: &str,
        avoid_phrases: &[String],
        max_sentences: usize,
    ) -> Result<Self> {
        let char_name = char_name.trim().to_string();
        let user_name = user_name.trim().to_string();

        let mut stop_sequences = vec![
            format!("{}:", user_name),
            "User:".to_string(),
            "Human:".to_string(),
            "User Permissions:".to_string(),
            "(emotion:".to_string(),
            "[silence]".to_string(),
            "### End of Conversation".to_string(),
            "###".to_string(),
            "*(END CURRENT CONTEXT)*".to_string(),
            "(END CURRENT CONTEXT)".to_string(),
            "((END RESPONSE))".to_string(),
            "(END RESPONSE)".to_string(),
            "**END RESPONSE**".to_string(),
        ];
        if !char_name.is_empty() {
            stop_sequences.push(format!("{}:", char_name));
        }
        stop_sequences.retain(|s| s.len() > 1);

        let avoid_alternatives: Vec<String> = avoid_phrases
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(regex::escape)
            .collect();
        let avoid = if avoid_alternatives.is_empty() {
            None
        } else {
            Some(Regex::new(&format!("(?i)(?:{})", avoid_alternatives.join("|")))?)
        };

        let meta = META_PATTERNS
            .iter()
            .map(|p| format!("(?:{})", p))
            .collect::<Vec<_>>()
            .join("|");

        Ok(Self {
            char_name,
            max_sentences: max_sentences.max(1),
            stop_sequences,
            heart: Regex::new(r"\x{2764}\x{FE0F}?")?,
            emoji: Regex::new(EMOJI)?,
            nested_action: Regex::new(r"\(([^()]*)\(([^()]*)\)")?,
            repeated_commas: Regex::new(r",\s*,")?,
            meta: Regex::new(&format!("(?i){}", meta))?,
            space_before_punct: Regex::new(r"\s+([.,!?])")?,
            leading_punct: Regex::new(r"^[.,!?\s]+")?,
            whitespace: Regex::new(r"\s+")?,
            asterisk_action: Regex::new(r"\*([^*]+)\*")?,
            goodnight: Regex::new(GOODNIGHT_PATTERN)?,
            avoid,
        })
    }

    pub fn is_goodnight(&self, text: &str) -> bool {
        self.goodnight.is_match(text)
    }

    pub fn clean(&self, text: &str) -> String {
        self.clean_reply(text, false)
    }

    /// Clean `text`. `goodnight_reply` marks a reply to a goodnight message so
    /// the heart is appended even when the model left out the goodnight words.
    pub fn clean_reply(&self, text: &str, goodnight_reply: bool) -> String {
        let goodnight = goodnight_reply || self.is_goodnight(text);
        let mut current = text.trim().to_string();
        for _ in 0..MAX_PASSES {
            let next = self.clean_pass(&current, goodnight);
            if next == current {
                break;
            }
            current = next;
        }
        if current.len() != text.trim().len() {
            log_debug(
                "response_cleaner",
                format!("cleaned reply {} -> {} bytes", text.len(), current.len()),
            );
        }
        current
    }

    fn clean_pass(&self, text: &str, goodnight: bool) -> String {
        let text = self.strip_emoji(text);
        let text = self.flatten_nested_actions(&text);
        let text = self.meta.replace_all(&text, "");
        let text = self.fix_punctuation(&text);
        let text = self.strip_self_name(&text);
        let text = self.truncate_at_stop(&text);
        let text = self.strip_self_name(&text);
        let text = self.remove_avoided(&text);
        let text = self.actions_to_parentheses(&text);
        let text = self.fix_punctuation(&text);
        let text = remove_repeated_tail(&text);
        let text = self.limit_sentences(&text);
        self.ensure_heart(&text, goodnight)
    }

    /// Drop emoji while keeping red hearts.
    pub fn strip_emoji(&self, text: &str) -> String {
        let protected = self.heart.replace_all(text, HEART_PLACEHOLDER);
        let stripped = self.emoji.replace_all(&protected, "");
        stripped.replace(HEART_PLACEHOLDER, AFFECTION_GLYPH)
    }

    /// `(a, (b), (c))` -> `(a, b, c)`, for any nesting depth.
    pub fn flatten_nested_actions(&self, text: &str) -> String {
        let mut current = text.to_string();
        for _ in 0..MAX_FLATTEN_PASSES {
            let next = self
                .nested_action
                .replace_all(&current, "(${1}${2}")
                .into_owned();
            if next == current {
                break;
            }
            current = next;
        }
        self.repeated_commas.replace_all(&current, ",").into_owned()
    }

    fn fix_punctuation(&self, text: &str) -> String {
        let text = self.space_before_punct.replace_all(text, "$1");
        let text = self.leading_punct.replace(&text, "");
        let text = trim_edge_quotes(text.trim());
        self.whitespace.replace_all(text.trim(), " ").into_owned()
    }

    fn strip_self_name(&self, text: &str) -> String {
        if self.char_name.is_empty() {
            return text.to_string();
        }
        let prefix = format!("{}:", self.char_name);
        let mut rest = text.trim_start();
        while let Some(head) = rest.get(..prefix.len()) {
            if !head.eq_ignore_ascii_case(&prefix) {
                break;
            }
            rest = rest[prefix.len()..].trim_start();
        }
        rest.to_string()
    }

    /// Cut at the earliest stop marker.
    pub fn truncate_at_stop(&self, text: &str) -> String {
        let cut = self
            .stop_sequences
            .iter()
            .filter_map(|seq| text.find(seq.as_str()))
            .min();
        match cut {
            Some(idx) => text[..idx].trim_end().to_string(),
            None => text.to_string(),
        }
    }

    fn remove_avoided(&self, text: &str) -> String {
        match &self.avoid {
            Some(avoid) => {
                let removed = avoid.replace_all(text, "");
                self.whitespace.replace_all(removed.trim(), " ").into_owned()
            }
            None => text.to_string(),
        }
    }

    pub fn actions_to_parentheses(&self, text: &str) -> String {
        self.asterisk_action
            .replace_all(text, |caps: &Captures| format!("({})", caps[1].trim()))
            .into_owned()
    }

    /// Keep at most `max_sentences`, dropping immediately repeated sentences.
    pub fn limit_sentences(&self, text: &str) -> String {
        let mut sentences = split_sentences(text);
        let before = sentences.len();
        sentences.dedup_by(|next, prev| next.eq_ignore_ascii_case(prev));

        if sentences.len() > self.max_sentences {
            let mut out = sentences[..self.max_sentences].join(" ");
            if !out
                .trim_end_matches(is_closing)
                .ends_with(|c: char| matches!(c, '.' | '!' | '?'))
            {
                out.push('.');
            }
            return out;
        }
        if sentences.len() != before {
            return sentences.join(" ");
        }
        text.to_string()
    }

    fn ensure_heart(&self, text: &str, goodnight: bool) -> String {
        if goodnight && !text.is_empty() && !self.heart.is_match(text) {
            format!("{} {}", text.trim_end(), AFFECTION_GLYPH)
        } else {
            text.to_string()
        }
    }
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | '\u{201D}' | '\u{2019}')
}

/// Drop a stray quote at either edge, or a pair wrapping the whole reply.
/// Quotes that belong to dialogue inside the reply stay balanced.
fn trim_edge_quotes(text: &str) -> &str {
    let count = text.matches('"').count();
    if count == 2 && text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        return text[1..text.len() - 1].trim();
    }
    if count % 2 == 1 {
        if let Some(rest) = text.strip_suffix('"') {
            return rest.trim_end();
        }
        if let Some(rest) = text.strip_prefix('"') {
            return rest.trim_start();
        }
    }
    text
}

/// Split on runs of `.!?` (plus any closing quotes or parens) that end the
/// text or are followed by whitespace and an uppercase letter, `(` or a quote.
fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < chars.len() {
        current.push(chars[i]);
        if matches!(chars[i], '.' | '!' | '?') {
            while i + 1 < chars.len() && matches!(chars[i + 1], '.' | '!' | '?') {
                i += 1;
                current.push(chars[i]);
            }
            while i + 1 < chars.len() && is_closing(chars[i + 1]) {
                i += 1;
                current.push(chars[i]);
            }
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            let at_end = j >= chars.len();
            let next_opens = j > i + 1
                && j < chars.len()
                && (chars[j].is_uppercase() || matches!(chars[j], '(' | '"'));
            if at_end || next_opens {
                sentences.push(current.trim().to_string());
                current.clear();
                i = j;
                continue;
            }
        }
        i += 1;
    }

    if !current.trim().is_empty() {
        sentences.push(current.trim().to_string());
    }
    sentences
}

/// Drop a trailing word sequence that repeats the sequence right before it.
/// Candidate lengths run from half the word count down to five words.
fn remove_repeated_tail(text: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() < MIN_REPEAT_WORDS * 2 {
        return text.to_string();
    }
    let longest = (words.len() / 2).min(MAX_REPEAT_WORDS);
    for len in (MIN_REPEAT_WORDS..=longest).rev() {
        let n = words.len();
        if words[n - 2 * len..n - len] == words[n - len..] {
            return words[..n - len].join(" ");
        }
    }
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleaner() -> ResponseCleaner {
        ResponseCleaner::new("Aria", "Sam", &["as an AI".to_string()], 3).unwrap()
    }

    #[test]
    fn heart_survives_emoji_stripping() {
        let c = cleaner();
        assert_eq!(c.clean("I love that ❤️ plan"), "I love that ❤️ plan");
        assert_eq!(c.clean("Great news 😀🎉 today!"), "Great news today!");
    }

    #[test]
    fn goodnight_gets_heart_appended() {
        let c = cleaner();
        assert_eq!(c.clean("Goodnight Sam"), "Goodnight Sam ❤️");
        assert_eq!(c.clean_reply("Sleep tight, see you tomorrow.", true), "Sleep tight, see you tomorrow. ❤️");
        assert_eq!(c.clean("Goodnight ❤️"), "Goodnight ❤️");
    }

    #[test]
    fn duplicate_sentence_collapses() {
        assert_eq!(cleaner().clean("See you soon. See you soon."), "See you soon.");
    }

    #[test]
    fn repeated_word_tail_is_dropped() {
        let text = "I was thinking about the lake today I was thinking about the lake today";
        assert_eq!(remove_repeated_tail(text), "I was thinking about the lake today");
        assert_eq!(remove_repeated_tail("short short"), "short short");
    }

    #[test]
    fn long_replies_are_cut_to_three_sentences() {
        let out = cleaner().clean("One thing. Two things! Three things? Four things. Five.");
        assert_eq!(out, "One thing. Two things! Three things?");
        let out = cleaner().clean("First. Second. Third. Fourth and more");
        assert_eq!(out, "First. Second. Third.");
        let out = cleaner().clean("\"Hello.\" \"World.\" \"Again.\" \"More.\"");
        assert_eq!(out, "\"Hello.\" \"World.\" \"Again.\"");
        let out = cleaner().clean("*waves* \"Hi there!\" I grin. (You came.) Sit down. Stay.");
        assert_eq!(out, "(waves) \"Hi there!\" I grin. (You came.)");
    }

    #[test]
    fn wrapping_quotes_are_trimmed_but_dialogue_stays_balanced() {
        let c = cleaner();
        assert_eq!(c.clean("\"Sure, let's go.\""), "Sure, let's go.");
        assert_eq!(c.clean("I said \"hi\" to her."), "I said \"hi\" to her.");
        assert_eq!(c.clean("Okay then.\""), "Okay then.");
    }

    #[test]
    fn nested_actions_are_flattened() {
        let c = cleaner();
        assert_eq!(
            c.flatten_nested_actions("(chuckles softly, (takes your hand), (runs thumb over your knuckles)) Hi."),
            "(chuckles softly, takes your hand, runs thumb over your knuckles) Hi."
        );
        let deep = format!("{}x{}", "(a ".repeat(6), ")".repeat(6));
        assert!(!c.flatten_nested_actions(&deep).contains("(a (a"));
    }

    #[test]
    fn meta_commentary_is_removed() {
        let c = cleaner();
        assert_eq!(c.clean("Hey there!\n*(NOTE:) I kept it short.*"), "Hey there!");
        assert_eq!(c.clean("[thinking about it] Sure, let's go."), "Sure, let's go.");
        assert_eq!(
            c.clean("I'm curious (medium intensity) about it."),
            "I'm curious about it."
        );
        assert_eq!(
            c.clean("(I've chosen to keep this light) Want to get tacos?"),
            "Want to get tacos?"
        );
    }

    #[test]
    fn stops_and_self_name() {
        let c = cleaner();
        assert_eq!(c.clean("Sounds fun! Sam: what about tomorrow?"), "Sounds fun!");
        assert_eq!(c.clean("Aria: Hi Sam!"), "Hi Sam!");
        assert_eq!(c.clean("Sure thing. ### USER INPUT ### Sam: hi"), "Sure thing.");
    }

    #[test]
    fn avoided_phrases_and_actions() {
        let c = cleaner();
        assert_eq!(c.clean("As an AI, I love it."), "I love it.");
        assert_eq!(c.clean("*smiles* Hello there."), "(smiles) Hello there.");
        assert_eq!(c.clean("Hello , world ."), "Hello, world.");
    }

    #[test]
    fn cleaning_is_idempotent() {
        let c = cleaner();
        let samples = [
            "Aria: *smiles (softly)* Hey Sam!! 😀 How was work? I missed you. Tell me everything. Seriously.",
            "\"Goodnight Sam\"",
            "See you soon. See you soon.",
            "(leans in, (kisses your cheek)) I'm here.\n*(REASONING:)(stay close)*",
            "As an AI , I think [note] that's great. The response follows the rules.",
            "... well hello there",
            "\"Hello.\" \"World.\" \"Again.\" \"More.\"",
            "\"Wait.\" I pause. \"Are you sure?\" I ask again. Really?",
        ];
        for raw in samples {
            let once = c.clean(raw);
            assert_eq!(c.clean(&once), once, "not idempotent for {:?}", raw);
        }
    }
}

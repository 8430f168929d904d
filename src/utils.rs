pub fn log_info(component: &str, message: impl AsRef<str>) {
    tracing::info!(component = component, "{}", message.as_ref());
}

pub fn log_warn(component: &str, message: impl AsRef<str>) {
    tracing::warn!(component = component, "{}", message.as_ref());
}

pub fn log_error(component: &str, message: impl AsRef<str>) {
    tracing::error!(component = component, "{}", message.as_ref());
}

pub fn log_debug(component: &str, message: impl AsRef<str>) {
    tracing::debug!(component = component, "{}", message.as_ref());
}

/// Cut `text` to at most `max_chars` characters, never splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// Rough token estimate used for chunk budgets (about four characters per token).
pub fn estimate_tokens(text: &str) -> u32 {
    let chars = text.chars().count() as u32;
    (chars + 3) / 4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo wörld", 7), "héllo w");
        assert_eq!(truncate_chars("short", 50), "short");
        assert_eq!(truncate_chars("❤️❤️", 1), "❤");
    }

    #[test]
    fn token_estimate_rounds_up() {
        assert_eq!(estimate_tokens(""), 0);
        assert_eq!(estimate_tokens("abcd"), 1);
        assert_eq!(estimate_tokens("abcde"), 2);
    }
}

use std::fmt::{Display, Formatter};

/// Reply shown to the user whenever generation fails for an internal reason.
pub const APOLOGY_MESSAGE: &str =
    "I'm sorry, I lost my train of thought for a moment. Could you say that again?";

#[derive(Debug)]
pub enum CompanionError {
    Http(reqwest::Error),
    Json(serde_json::Error),
    Io(std::io::Error),
    /// Model not loaded or a collaborator failed to initialize.
    NotReady(String),
    CharacterNotFound(String),
    Generation(String),
    EmptyOutput,
    Config(String),
    Other(String),
}

pub type Result<T> = std::result::Result<T, CompanionError>;

impl CompanionError {
    pub fn is_not_ready(&self) -> bool {
        matches!(
            self,
            CompanionError::NotReady(_) | CompanionError::CharacterNotFound(_)
        )
    }

    pub fn user_message(&self) -> &'static str {
        APOLOGY_MESSAGE
    }
}

impl Display for CompanionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CompanionError::Http(e) => write!(f, "{}", e),
            CompanionError::Json(e) => write!(f, "{}", e),
            CompanionError::Io(e) => write!(f, "{}", e),
            CompanionError::NotReady(s) => write!(f, "not ready: {}", s),
            CompanionError::CharacterNotFound(s) => write!(f, "character not found: {}", s),
            CompanionError::Generation(s) => write!(f, "generation failed: {}", s),
            CompanionError::EmptyOutput => write!(f, "model returned empty output"),
            CompanionError::Config(s) => write!(f, "invalid configuration: {}", s),
            CompanionError::Other(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for CompanionError {}

impl From<reqwest::Error> for CompanionError {
    fn from(value: reqwest::Error) -> Self {
        CompanionError::Http(value)
    }
}

impl From<serde_json::Error> for CompanionError {
    fn from(value: serde_json::Error) -> Self {
        CompanionError::Json(value)
    }
}

impl From<std::io::Error> for CompanionError {
    fn from(value: std::io::Error) -> Self {
        CompanionError::Io(value)
    }
}

impl From<regex::Error> for CompanionError {
    fn from(value: regex::Error) -> Self {
        CompanionError::Config(format!("invalid pattern: {}", value))
    }
}

impl From<String> for CompanionError {
    fn from(value: String) -> Self {
        CompanionError::Other(value)
    }
}

impl From<&str> for CompanionError {
    fn from(value: &str) -> Self {
        CompanionError::Other(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_ready_class_is_distinguishable() {
        assert!(CompanionError::NotReady("model".into()).is_not_ready());
        assert!(CompanionError::CharacterNotFound("Aria".into()).is_not_ready());
        assert!(!CompanionError::EmptyOutput.is_not_ready());
    }

    #[test]
    fn user_message_hides_internal_detail() {
        let err = CompanionError::Generation("llama_decode returned -3".into());
        assert!(!err.user_message().contains("llama_decode"));
        assert!(err.to_string().contains("llama_decode"));
    }
}

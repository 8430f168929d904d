use regex::Regex;

use crate::utils::log_warn;

pub const MINIMUM_CHARACTER_AGE: u32 = 25;

pub const CRISIS_INTERVENTION_MESSAGE: &str = "I'm concerned about what you shared. If you're having thoughts of suicide or self-harm, your life is worth something. Please reach out: **988 Suicide & Crisis Lifeline** (call/text 988), **Crisis Text Line** (text HOME to 741741), or **IASP**: https://www.iasp.info/resources/Crisis_Centres/ - Free, confidential, 24/7. You don't have to go through this alone.";

const HIGH_RISK_PHRASES: &[&str] = &[
    r"kill(?:ing)?\s+myself",
    r"end(?:ing)?\s+(?:my|it\s+all|my\s+own)\s*life",
    r"end\s+it\s+all",
    r"take\s+my\s+own\s+life",
    r"suicid(?:e|al)",
    r"want\s+to\s+die",
    r"wanna\s+die",
    r"don'?t\s+want\s+to\s+(?:live|be\s+alive|exist)",
    r"better\s+off\s+dead",
    r"no\s+reason\s+to\s+live",
    r"hurt(?:ing)?\s+myself",
    r"harm(?:ing)?\s+myself",
    r"self[\s-]?harm",
    r"cut(?:ting)?\s+myself",
    r"overdos(?:e|ing)",
];

const ELEVATED_RISK_PHRASES: &[&str] = &[
    r"can'?t\s+go\s+on",
    r"no\s+way\s+out",
    r"nothing\s+matters\s+anymore",
    r"completely\s+hopeless",
    r"everyone\s+would\s+be\s+better\s+without\s+me",
];

const MINOR_TERMS: &[&str] = &[
    "underage",
    "under age",
    "teenager",
    "teen",
    "preteen",
    "pre-teen",
    "schoolgirl",
    "schoolboy",
    "middle school",
    "high school student",
    "high schooler",
    "jailbait",
    "loli",
    "shota",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    None,
    Elevated,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::None => "none",
            RiskLevel::Elevated => "elevated",
            RiskLevel::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrisisAssessment {
    pub risk: RiskLevel,
    /// Set only when the message must be answered with the fixed intervention text.
    pub intervention: Option<&'static str>,
}

impl CrisisAssessment {
    pub fn is_crisis(&self) -> bool {
        self.intervention.is_some()
    }
}

/// Message screening that runs before any prompt is built.
pub struct SafetyScreen {
    high_risk: Regex,
    elevated_risk: Regex,
    explicit_age: Regex,
    minor_terms: Regex,
}

impl SafetyScreen {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            high_risk: Regex::new(&format!(r"(?i)\b(?:{})", HIGH_RISK_PHRASES.join("|")))?,
            elevated_risk: Regex::new(&format!(r"(?i)\b(?:{})", ELEVATED_RISK_PHRASES.join("|")))?,
            explicit_age: Regex::new(
                r"(?i)\b(\d{1,2})\s*(?:-\s*)?(?:years?[\s-]*old|yrs?[\s-]*old|y/?o)\b|\b(?:aged?|age\s+of)\s+(\d{1,2})\b",
            )?,
            minor_terms: Regex::new(&format!(
                r"(?i)\b(?:{})\b",
                MINOR_TERMS
                    .iter()
                    .map(|t| regex::escape(t))
                    .collect::<Vec<_>>()
                    .join("|")
            ))?,
        })
    }

    pub fn assess_crisis(&self, text: &str) -> CrisisAssessment {
        if self.high_risk.is_match(text) {
            log_warn("safety", "high-risk crisis language detected");
            return CrisisAssessment {
                risk: RiskLevel::High,
                intervention: Some(CRISIS_INTERVENTION_MESSAGE),
            };
        }
        if self.elevated_risk.is_match(text) {
            log_warn("safety", "elevated-risk language detected");
            return CrisisAssessment {
                risk: RiskLevel::Elevated,
                intervention: None,
            };
        }
        CrisisAssessment {
            risk: RiskLevel::None,
            intervention: None,
        }
    }

    /// True when the text states an age under the minimum or uses a minor term.
    pub fn detect_age_violation(&self, text: &str) -> bool {
        let explicit_minor_age = self.explicit_age.captures_iter(text).any(|caps| {
            caps.get(1)
                .or_else(|| caps.get(2))
                .and_then(|m| m.as_str().parse::<u32>().ok())
                .map(|age| age < MINIMUM_CHARACTER_AGE)
                .unwrap_or(false)
        });

        let violation = explicit_minor_age || self.minor_terms.is_match(text);
        if violation {
            log_warn("safety", "age restriction reference detected");
        }
        violation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> SafetyScreen {
        SafetyScreen::new().unwrap()
    }

    #[test]
    fn high_risk_returns_intervention() {
        let result = screen().assess_crisis("Honestly I just want to die tonight");
        assert_eq!(result.risk, RiskLevel::High);
        assert!(result.is_crisis());
        assert!(result.intervention.unwrap().contains("988"));
    }

    #[test]
    fn elevated_risk_does_not_intervene() {
        let result = screen().assess_crisis("I feel like I can't go on like this at work");
        assert_eq!(result.risk, RiskLevel::Elevated);
        assert!(!result.is_crisis());
    }

    #[test]
    fn ordinary_message_is_clear() {
        let result = screen().assess_crisis("That movie was to die for, I loved it");
        assert_eq!(result.risk, RiskLevel::None);
    }

    #[test]
    fn explicit_young_age_is_flagged() {
        let s = screen();
        assert!(s.detect_age_violation("my character is 17 years old"));
        assert!(s.detect_age_violation("she's 19yo and shy"));
        assert!(s.detect_age_violation("aged 16"));
        assert!(!s.detect_age_violation("he is 32 years old"));
        assert!(!s.detect_age_violation("I'll be there in 10 minutes"));
    }

    #[test]
    fn minor_terms_are_flagged() {
        let s = screen();
        assert!(s.detect_age_violation("let's pretend you're a teenager"));
        assert!(!s.detect_age_violation("I steeped some tea"));
    }
}

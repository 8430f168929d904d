use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use super::matcher::triggers_match;
use super::{Applicability, BehaviorChunk, ChunkCategory};
use crate::chat_manager::types::{ConversationTurn, TopEmotion};
use crate::utils::log_debug;

/// History turns scanned for keyword triggers, in addition to the current message.
const HISTORY_SCAN_DEPTH: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievedChunk {
    pub id: String,
    pub category: ChunkCategory,
    pub priority: u8,
    pub tokens: u32,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievalStats {
    pub count: usize,
    pub total_tokens: u32,
    pub categories: BTreeMap<String, usize>,
}

/// Inputs for one retrieval pass.
pub struct RetrievalQuery<'a> {
    pub user_message: &'a str,
    pub emotion_label: &'a str,
    pub top_emotions: &'a [TopEmotion],
    pub companion_type: &'a str,
    pub history: &'a [ConversationTurn],
    pub selected_tag_ids: &'a HashSet<String>,
}

pub trait ChunkRetriever: Send + Sync {
    /// Ordered, budget-capped subset of `chunks` with text rendered for the
    /// current emotion.
    fn retrieve(
        &self,
        chunks: &[BehaviorChunk],
        query: &RetrievalQuery<'_>,
    ) -> Vec<RetrievedChunk>;

    fn format_for_prompt(&self, chunks: &[RetrievedChunk], heading: &str) -> String {
        format_for_prompt(chunks, heading)
    }
}

pub struct LorebookRetriever {
    pub max_chunks: usize,
    pub token_budget: u32,
}

impl Default for LorebookRetriever {
    fn default() -> Self {
        Self {
            max_chunks: 10,
            token_budget: 900,
        }
    }
}

impl LorebookRetriever {
    pub fn new(max_chunks: usize, token_budget: u32) -> Self {
        Self {
            max_chunks,
            token_budget,
        }
    }

    fn is_candidate(
        chunk: &BehaviorChunk,
        query: &RetrievalQuery<'_>,
        scan_text: &str,
        emotions: &[String],
    ) -> bool {
        if !chunk.triggers.allows_companion(query.companion_type) {
            return false;
        }
        if chunk.requires_selection {
            return query.selected_tag_ids.contains(&chunk.id);
        }
        chunk.triggers.always_check || triggers_match(chunk, scan_text, emotions)
    }

    /// Primary label first, then any top emotion the chunk has an entry for.
    fn resolve_emotion<'e>(chunk: &BehaviorChunk, emotions: &'e [String]) -> &'e str {
        if let Applicability::PerEmotion { responses, .. } = &chunk.applicability {
            if let Some(found) = emotions
                .iter()
                .find(|e| responses.contains_key(&e.trim().to_lowercase()))
            {
                return found.as_str();
            }
        }
        emotions.first().map(String::as_str).unwrap_or("default")
    }
}

impl ChunkRetriever for LorebookRetriever {
    fn retrieve(
        &self,
        chunks: &[BehaviorChunk],
        query: &RetrievalQuery<'_>,
    ) -> Vec<RetrievedChunk> {
        let mut emotions: Vec<String> = Vec::new();
        let primary = query.emotion_label.trim();
        if !primary.is_empty() {
            emotions.push(primary.to_lowercase());
        }
        for top in query.top_emotions {
            let label = top.label.trim().to_lowercase();
            if !label.is_empty() && !emotions.contains(&label) {
                emotions.push(label);
            }
        }

        let mut scan_parts: Vec<&str> = query
            .history
            .iter()
            .rev()
            .take(HISTORY_SCAN_DEPTH)
            .map(|turn| turn.content.as_str())
            .collect();
        scan_parts.reverse();
        scan_parts.push(query.user_message);
        let scan_text = scan_parts.join("\n");

        let mut seen: HashSet<String> = HashSet::new();
        let mut candidates: Vec<&BehaviorChunk> = chunks
            .iter()
            .filter(|chunk| seen.insert(chunk.id.clone()))
            .filter(|chunk| Self::is_candidate(chunk, query, &scan_text, &emotions))
            .collect();

        // Stable: equal priorities keep their input order.
        candidates.sort_by(|a, b| {
            b.is_core_identity()
                .cmp(&a.is_core_identity())
                .then_with(|| b.priority.cmp(&a.priority))
        });

        let mut selected = Vec::new();
        let mut budgeted_count = 0usize;
        let mut budgeted_tokens = 0u32;

        for chunk in candidates {
            let (text, tokens) = chunk.render(Self::resolve_emotion(chunk, &emotions));
            if text.trim().is_empty() {
                continue;
            }

            if !chunk.is_core_identity() {
                if budgeted_count >= self.max_chunks {
                    log_debug("lorebook", format!("chunk cap reached, dropping {}", chunk.id));
                    continue;
                }
                if budgeted_tokens + tokens > self.token_budget {
                    log_debug("lorebook", format!("token budget exceeded, dropping {}", chunk.id));
                    continue;
                }
                budgeted_count += 1;
                budgeted_tokens += tokens;
            }

            selected.push(RetrievedChunk {
                id: chunk.id.clone(),
                category: chunk.category,
                priority: chunk.priority,
                tokens,
                text,
            });
        }

        selected
    }
}

pub fn format_for_prompt(chunks: &[RetrievedChunk], heading: &str) -> String {
    if chunks.is_empty() {
        return String::new();
    }

    let body = chunks
        .iter()
        .map(|chunk| format!("[{}: {}]\n{}", chunk.category.as_str(), chunk.id, chunk.text.trim()))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("### {} ###\n{}", heading, body)
}

pub fn retrieval_stats(chunks: &[RetrievedChunk]) -> RetrievalStats {
    let mut stats = RetrievalStats::default();
    for chunk in chunks {
        stats.count += 1;
        stats.total_tokens += chunk.tokens;
        *stats
            .categories
            .entry(chunk.category.as_str().to_string())
            .or_insert(0) += 1;
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat_manager::types::Role;
    use crate::lorebook::templates::get_template;

    fn per_emotion(id: &str, priority: u8, tokens: u32) -> BehaviorChunk {
        BehaviorChunk::per_emotion(id, ChunkCategory::EmotionalExpression, priority, id)
            .on("sadness", tokens, "soft", "Comfort them.")
            .otherwise(tokens, "warm", "Be warm.")
    }

    fn query<'a>(
        message: &'a str,
        emotion: &'a str,
        companion: &'a str,
        selected: &'a HashSet<String>,
    ) -> RetrievalQuery<'a> {
        RetrievalQuery {
            user_message: message,
            emotion_label: emotion,
            top_emotions: &[],
            companion_type: companion,
            history: &[],
            selected_tag_ids: selected,
        }
    }

    fn selected(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn renders_default_for_unmapped_emotion() {
        let chunks = vec![per_emotion("ee_test", 75, 60)];
        let sel = selected(&["ee_test"]);
        let out = LorebookRetriever::default().retrieve(&chunks, &query("hi", "awe", "friend", &sel));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "Tone: warm\nAction: Be warm.");

        let out =
            LorebookRetriever::default().retrieve(&chunks, &query("hi", "sadness", "friend", &sel));
        assert_eq!(out[0].text, "Tone: soft\nAction: Comfort them.");
    }

    #[test]
    fn top_emotions_used_when_primary_unmapped() {
        let chunks = vec![per_emotion("ee_test", 75, 60)];
        let sel = selected(&["ee_test"]);
        let top = vec![TopEmotion {
            label: "sadness".into(),
            score: 0.4,
        }];
        let q = RetrievalQuery {
            top_emotions: &top,
            ..query("hi", "awe", "friend", &sel)
        };
        let out = LorebookRetriever::default().retrieve(&chunks, &q);
        assert_eq!(out[0].text, "Tone: soft\nAction: Comfort them.");
    }

    #[test]
    fn unselected_personality_chunks_are_skipped() {
        let chunks = vec![per_emotion("ee_test", 75, 60)];
        let sel = selected(&[]);
        let out = LorebookRetriever::default().retrieve(&chunks, &query("hi", "joy", "friend", &sel));
        assert!(out.is_empty());
    }

    #[test]
    fn keyword_and_companion_gating() {
        let chunks = vec![
            get_template("li_outdoorsy").unwrap().clone(),
            get_template("intimacy_sweet").unwrap().clone(),
        ];
        let sel = selected(&[]);
        let retriever = LorebookRetriever::default();

        let out = retriever.retrieve(&chunks, &query("let's go on a hike", "joy", "friend", &sel));
        let ids: Vec<&str> = out.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["li_outdoorsy"]);

        let out = retriever.retrieve(&chunks, &query("how was work", "joy", "romantic", &sel));
        let ids: Vec<&str> = out.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["intimacy_sweet"]);
    }

    #[test]
    fn history_feeds_keyword_scan() {
        let chunks = vec![get_template("li_outdoorsy").unwrap().clone()];
        let sel = selected(&[]);
        let history = vec![ConversationTurn::new(Role::User, "I went outside today")];
        let q = RetrievalQuery {
            history: &history,
            ..query("it was lovely", "joy", "friend", &sel)
        };
        assert_eq!(LorebookRetriever::default().retrieve(&chunks, &q).len(), 1);
    }

    #[test]
    fn budgets_keep_core_identity_and_highest_priority() {
        let mut chunks = vec![
            per_emotion("low", 50, 60),
            per_emotion("mid", 70, 60),
            per_emotion("high", 90, 60),
        ];
        chunks.push(
            BehaviorChunk::fixed("identity_character", ChunkCategory::CoreIdentity, 100, 500, "I am Aria.")
                .always(),
        );
        let sel = selected(&["low", "mid", "high"]);

        let out = LorebookRetriever::new(2, 1000).retrieve(&chunks, &query("hi", "joy", "friend", &sel));
        let ids: Vec<&str> = out.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["identity_character", "high", "mid"]);

        let out = LorebookRetriever::new(10, 100).retrieve(&chunks, &query("hi", "joy", "friend", &sel));
        let ids: Vec<&str> = out.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["identity_character", "high"]);
    }

    #[test]
    fn duplicate_ids_are_retrieved_once() {
        let chunks = vec![per_emotion("dup", 70, 60), per_emotion("dup", 70, 60)];
        let sel = selected(&["dup"]);
        let out = LorebookRetriever::default().retrieve(&chunks, &query("hi", "joy", "friend", &sel));
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn formatting_and_stats() {
        let chunks = vec![
            RetrievedChunk {
                id: "ee_warm".into(),
                category: ChunkCategory::EmotionalExpression,
                priority: 75,
                tokens: 60,
                text: "Tone: warm\nAction: Be warm.".into(),
            },
            RetrievedChunk {
                id: "li_social".into(),
                category: ChunkCategory::LifestyleInterests,
                priority: 65,
                tokens: 70,
                text: "Thrive with others.".into(),
            },
        ];
        let text = format_for_prompt(&chunks, "CHARACTER BEHAVIOR GUIDE");
        assert!(text.starts_with("### CHARACTER BEHAVIOR GUIDE ###\n[emotional_expression: ee_warm]"));
        assert!(text.contains("\n\n[lifestyle_interests: li_social]\nThrive with others."));
        assert_eq!(format_for_prompt(&[], "X"), "");

        let stats = retrieval_stats(&chunks);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.total_tokens, 130);
        assert_eq!(stats.categories.get("lifestyle_interests"), Some(&1));
    }
}

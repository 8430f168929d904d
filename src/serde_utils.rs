use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn json_value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Accepts a string, number or bool; anything else (including null) becomes `None`.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(_) | Value::Object(_) => None,
        other => json_value_to_string(&other).filter(|s| !s.trim().is_empty()),
    })
}

/// Accepts a list of strings or one newline-separated string. Blank lines and
/// bare `-` bullets are dropped.
pub fn string_or_lines<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let raw: Vec<String> = match value {
        Value::String(s) => s.lines().map(|l| l.to_string()).collect(),
        Value::Array(items) => items.iter().filter_map(json_value_to_string).collect(),
        _ => Vec::new(),
    };
    Ok(raw
        .into_iter()
        .map(|s| s.trim().trim_start_matches("- ").trim().to_string())
        .filter(|s| !s.is_empty() && s != "-")
        .collect())
}

/// Null-tolerant list: `null` or a non-list value yields an empty vec.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .iter()
            .filter_map(json_value_to_string)
            .filter(|s| !s.trim().is_empty())
            .collect(),
        _ => Vec::new(),
    })
}

pub fn truncate_for_log(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Record {
        #[serde(default, deserialize_with = "lenient_string")]
        age: Option<String>,
        #[serde(default, deserialize_with = "string_or_lines")]
        boundaries: Vec<String>,
        #[serde(default, deserialize_with = "string_list")]
        tags: Vec<String>,
    }

    #[test]
    fn lenient_fields() {
        let p: Record = serde_json::from_str(
            r#"{"age": 31, "boundaries": "No politics\n-\n- No gore\n", "tags": null}"#,
        )
        .unwrap();
        assert_eq!(p.age.as_deref(), Some("31"));
        assert_eq!(p.boundaries, vec!["No politics", "No gore"]);
        assert!(p.tags.is_empty());

        let p: Record = serde_json::from_str(r#"{"age": {"x": 1}, "boundaries": ["a", " "]}"#).unwrap();
        assert_eq!(p.age, None);
        assert_eq!(p.boundaries, vec!["a"]);
    }

    #[test]
    fn truncate_for_log_counts_chars() {
        assert_eq!(truncate_for_log("héllo", 10), "héllo");
        assert_eq!(truncate_for_log("héllo", 2), "hé…");
    }
}

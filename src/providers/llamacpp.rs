use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use super::{Component, ModelRuntime, RawCompletion};
use crate::config::RuntimeConfig;
use crate::error::{CompanionError, Result};
use crate::serde_utils::truncate_for_log;
use crate::utils::{estimate_tokens, log_debug, log_info, log_warn};

const HEALTH_TIMEOUT_SECS: u64 = 10;

/// Model runtime backed by a llama.cpp `server` process.
pub struct LlamaServerRuntime {
    client: Client,
    config: RuntimeConfig,
    ready: AtomicBool,
}

impl LlamaServerRuntime {
    pub fn new(config: RuntimeConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs.max(1)))
            .build()?;
        Ok(Self {
            client,
            config,
            ready: AtomicBool::new(false),
        })
    }

    pub fn completion_url(&self) -> String {
        endpoint(&self.config.base_url, "completion")
    }

    pub fn health_url(&self) -> String {
        endpoint(&self.config.base_url, "health")
    }

    pub fn request_body(&self, prompt: &str, max_tokens: u32, temperature: f32) -> Value {
        json!({
            "prompt": prompt,
            "n_predict": max_tokens,
            "temperature": temperature,
            "top_p": self.config.top_p,
            "top_k": self.config.top_k,
            "repeat_penalty": self.config.repeat_penalty,
            "stop": self.config.stop,
            "cache_prompt": true,
            "stream": false,
        })
    }
}

fn endpoint(base_url: &str, path: &str) -> String {
    let trimmed = base_url.trim().trim_end_matches('/');
    let trimmed = trimmed.strip_suffix("/v1").unwrap_or(trimmed);
    if trimmed.is_empty() {
        format!("/{}", path)
    } else {
        format!("{}/{}", trimmed, path)
    }
}

pub fn extract_error_message(payload: &Value) -> Option<String> {
    match payload.get("error")? {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => map
            .get("message")
            .or_else(|| map.get("type"))
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .or_else(|| Some(Value::Object(map.clone()).to_string())),
        other => Some(other.to_string()),
    }
}

/// Parse a `/completion` response body.
pub fn parse_completion(payload: &Value) -> Result<RawCompletion> {
    if let Some(message) = extract_error_message(payload) {
        return Err(CompanionError::Generation(message));
    }
    let text = payload
        .get("content")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if text.trim().is_empty() {
        return Err(CompanionError::EmptyOutput);
    }
    let tokens_generated = payload
        .get("tokens_predicted")
        .and_then(|v| v.as_u64())
        .map(|n| n.min(u32::MAX as u64) as u32)
        .unwrap_or_else(|| estimate_tokens(&text));
    Ok(RawCompletion {
        text,
        tokens_generated,
    })
}

#[async_trait]
impl Component for LlamaServerRuntime {
    fn name(&self) -> &'static str {
        "llamacpp"
    }

    async fn initialize(&self) -> Result<()> {
        let url = self.health_url();
        log_info("llamacpp", format!("checking model server at {}", url));
        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(HEALTH_TIMEOUT_SECS))
            .send()
            .await
            .map_err(|e| CompanionError::NotReady(format!("model server unreachable: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            self.ready.store(false, Ordering::SeqCst);
            // llama.cpp answers 503 while the model is still loading.
            return Err(CompanionError::NotReady(format!(
                "model server health returned {}",
                status.as_u16()
            )));
        }

        self.ready.store(true, Ordering::SeqCst);
        log_info("llamacpp", "model server ready");
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ModelRuntime for LlamaServerRuntime {
    async fn generate(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<RawCompletion> {
        if !self.is_ready() {
            return Err(CompanionError::NotReady("model server not initialized".into()));
        }

        let url = self.completion_url();
        let body = self.request_body(prompt, max_tokens, temperature);
        log_debug(
            "llamacpp",
            format!(
                "POST {} n_predict={} temperature={:.2} prompt_chars={}",
                url,
                max_tokens,
                temperature,
                prompt.chars().count()
            ),
        );

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();
        let raw = response.text().await?;
        let payload: Value = serde_json::from_str(&raw).unwrap_or(Value::Null);

        if !status.is_success() {
            let message = extract_error_message(&payload)
                .unwrap_or_else(|| truncate_for_log(&raw, 200));
            log_warn(
                "llamacpp",
                format!("completion failed status={} error={}", status.as_u16(), message),
            );
            return Err(CompanionError::Generation(format!(
                "status {}: {}",
                status.as_u16(),
                message
            )));
        }

        if payload.is_null() {
            return Err(CompanionError::Generation(format!(
                "unreadable completion body: {}",
                truncate_for_log(&raw, 200)
            )));
        }

        let completion = parse_completion(&payload)?;
        log_debug(
            "llamacpp",
            format!("completion tokens={}", completion.tokens_generated),
        );
        Ok(completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runtime(base_url: &str) -> LlamaServerRuntime {
        LlamaServerRuntime::new(RuntimeConfig {
            base_url: base_url.to_string(),
            ..RuntimeConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn endpoints_normalize_base_url() {
        assert_eq!(
            runtime("http://localhost:8080/").completion_url(),
            "http://localhost:8080/completion"
        );
        assert_eq!(
            runtime("http://localhost:8080/v1").health_url(),
            "http://localhost:8080/health"
        );
    }

    #[test]
    fn request_body_carries_sampling_settings() {
        let body = runtime("http://localhost:8080").request_body("hi", 120, 1.25);
        assert_eq!(body["n_predict"], 120);
        assert_eq!(body["prompt"], "hi");
        assert_eq!(body["top_k"], 40);
        assert!(body["stop"].as_array().is_some_and(|s| !s.is_empty()));
        assert!((body["temperature"].as_f64().unwrap() - 1.25).abs() < 1e-6);
    }

    #[test]
    fn parse_completion_reads_content_and_tokens() {
        let payload = json!({"content": "Hello there.", "tokens_predicted": 4});
        let out = parse_completion(&payload).unwrap();
        assert_eq!(out.text, "Hello there.");
        assert_eq!(out.tokens_generated, 4);

        let estimated = parse_completion(&json!({"content": "abcdefgh"})).unwrap();
        assert_eq!(estimated.tokens_generated, 2);
    }

    #[test]
    fn parse_completion_rejects_empty_and_errors() {
        assert!(matches!(
            parse_completion(&json!({"content": "   "})),
            Err(CompanionError::EmptyOutput)
        ));
        assert!(matches!(
            parse_completion(&json!({"error": {"message": "context overflow"}})),
            Err(CompanionError::Generation(m)) if m == "context overflow"
        ));
    }

    #[tokio::test]
    async fn generate_before_initialize_is_not_ready() {
        let err = runtime("http://127.0.0.1:9")
            .generate("hi", 10, 1.0)
            .await
            .unwrap_err();
        assert!(err.is_not_ready());
    }
}

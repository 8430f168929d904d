use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, RwLock};

use serde::Serialize;

use super::generation_params::{apply_overrides, GenerationRules};
use super::prompt_engine::{PromptBuilder, PromptRequest};
use super::prompts::{starter_text, STARTER_FALLBACK};
use super::response_cleaner::ResponseCleaner;
use super::types::{
    CharacterProfile, EmotionSignal, GenerationOutcome, GenerationRequest, GenerationResult,
    ResponseKind, UserSettings,
};
use crate::cancellation::CancellationRegistry;
use crate::config::ProcessorConfig;
use crate::error::{CompanionError, Result};
use crate::lorebook::retriever::{ChunkRetriever, LorebookRetriever};
use crate::providers::{ContextSource, EmotionClassifier, FetchOptions, ModelRuntime};
use crate::safety::SafetyScreen;
use crate::utils::{log_debug, log_error, log_info, log_warn};

/// Builder and cleaner for one character/user pair. Shared read-only across
/// concurrent requests.
struct CharacterPipeline {
    fingerprint: u64,
    builder: PromptBuilder,
    cleaner: ResponseCleaner,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub runtime_ready: bool,
    pub classifier_ready: Option<bool>,
    pub registered_characters: usize,
    pub cached_pipelines: usize,
    pub pending_cancellations: usize,
}

impl HealthReport {
    pub fn is_ready(&self) -> bool {
        self.runtime_ready
    }
}

pub struct LlmProcessor {
    config: ProcessorConfig,
    runtime: Arc<dyn ModelRuntime>,
    classifier: Option<Arc<dyn EmotionClassifier>>,
    memory: Option<Arc<dyn ContextSource>>,
    search: Option<Arc<dyn ContextSource>>,
    retriever: Arc<dyn ChunkRetriever>,
    cancellation: CancellationRegistry,
    safety: SafetyScreen,
    characters: RwLock<HashMap<String, CharacterProfile>>,
    pipelines: Mutex<HashMap<PipelineKey, Arc<CharacterPipeline>>>,
}

impl LlmProcessor {
    pub fn new(
        config: ProcessorConfig,
        runtime: Arc<dyn ModelRuntime>,
        cancellation: CancellationRegistry,
    ) -> Result<Self> {
        config.validate()?;
        let retriever: Arc<dyn ChunkRetriever> = Arc::new(LorebookRetriever::new(
            config.max_chunks,
            config.chunk_token_budget,
        ));
        Ok(Self {
            config,
            runtime,
            classifier: None,
            memory: None,
            search: None,
            retriever,
            cancellation,
            safety: SafetyScreen::new()?,
            characters: RwLock::new(HashMap::new()),
            pipelines: Mutex::new(HashMap::new()),
        })
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn EmotionClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn with_memory_source(mut self, source: Arc<dyn ContextSource>) -> Self {
        self.memory = Some(source);
        self
    }

    pub fn with_search_source(mut self, source: Arc<dyn ContextSource>) -> Self {
        self.search = Some(source);
        self
    }

    pub fn with_retriever(mut self, retriever: Arc<dyn ChunkRetriever>) -> Self {
        self.retriever = retriever;
        self
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    pub fn cancellation(&self) -> &CancellationRegistry {
        &self.cancellation
    }

    /// Initialize the model runtime, then the classifier. A classifier that
    /// fails to start is logged and left out; the runtime is mandatory.
    pub async fn initialize(&self) -> Result<()> {
        log_info(
            "llm_processor",
            format!("initializing runtime {}", self.runtime.name()),
        );
        self.runtime.initialize().await?;

        if let Some(classifier) = &self.classifier {
            if let Err(err) = classifier.initialize().await {
                log_warn(
                    "llm_processor",
                    format!(
                        "emotion classifier {} failed to initialize: {}",
                        classifier.name(),
                        err
                    ),
                );
            }
        }
        log_info("llm_processor", "ready");
        Ok(())
    }

    pub fn health(&self) -> HealthReport {
        HealthReport {
            runtime_ready: self.runtime.is_ready(),
            classifier_ready: self.classifier.as_ref().map(|c| c.is_ready()),
            registered_characters: self.characters.read().map(|m| m.len()).unwrap_or(0),
            cached_pipelines: self.pipelines.lock().map(|m| m.len()).unwrap_or(0),
            pending_cancellations: self.cancellation.len(),
        }
    }

    /// Register a profile so requests can refer to it by name alone.
    pub fn register_character(&self, profile: CharacterProfile) -> Result<()> {
        let key = character_key(&profile.character_name);
        if key.is_empty() {
            return Err(CompanionError::Config("character name is empty".into()));
        }
        let mut characters = self
            .characters
            .write()
            .map_err(|_| CompanionError::Other("character registry poisoned".into()))?;
        log_info(
            "llm_processor",
            format!("registered character {}", profile.character_name.trim()),
        );
        characters.insert(key, profile);
        Ok(())
    }

    pub fn cancel(&self, request_id: &str) {
        self.cancellation.cancel(request_id);
    }

    pub async fn generate_with_context(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationOutcome> {
        self.cancellation.purge_expired();
        let request_id = request.request_id.clone().unwrap_or_default();

        if self.consume_cancellation(&request_id) {
            log_info(
                "llm_processor",
                format!("request {} cancelled before generation", request_id),
            );
            return Ok(GenerationOutcome::Cancelled);
        }

        if !self.runtime.is_ready() {
            return Err(CompanionError::NotReady(format!(
                "model runtime {} is not ready",
                self.runtime.name()
            )));
        }

        let pipeline = self.pipeline_for(&request)?;

        let crisis = self.safety.assess_crisis(&request.text);
        if let Some(message) = crisis.intervention {
            log_warn(
                "llm_processor",
                format!("crisis intervention returned for request {}", request_id),
            );
            return Ok(GenerationOutcome::Completed(GenerationResult {
                text: message.to_string(),
                tokens_generated: 0,
                kind: ResponseKind::CrisisIntervention,
            }));
        }

        let age_violation = self.safety.detect_age_violation(&request.text);
        let emotion = self.resolve_emotion(&request).await;
        let is_starter = GenerationRules::is_starter(&request.text);
        let char_name = pipeline.builder.char_name().to_string();

        let memory_context = match non_empty(request.memory_context.as_deref()) {
            Some(text) => Some(text),
            None if request.enable_memory => {
                self.fetch_context(self.memory.as_deref(), &request, &char_name)
                    .await
            }
            None => None,
        };
        let search_context = if is_starter {
            None
        } else {
            match non_empty(request.search_context.as_deref()) {
                Some(text) => Some(text),
                None if request.enable_web_search => {
                    self.fetch_context(self.search.as_deref(), &request, &char_name)
                        .await
                }
                None => None,
            }
        };

        let params = pipeline
            .builder
            .get_generation_params(&request.text, &emotion);
        let params = apply_overrides(
            params,
            request.max_tokens_override,
            request.temperature_override,
            &self.config,
        );
        log_info(
            "llm_processor",
            format!(
                "request {} character={} emotion={}/{} max_tokens={} temperature={:.2}",
                request_id,
                char_name,
                emotion.category.as_str(),
                emotion.intensity.as_str(),
                params.max_tokens,
                params.temperature
            ),
        );

        let goodnight = pipeline.builder.is_goodnight(&request.text);
        let prompt = {
            let pipeline = Arc::clone(&pipeline);
            let guidance = params.guidance.clone();
            let text = request.text;
            let history = request.conversation_history;
            tokio::task::spawn_blocking(move || {
                pipeline.builder.build_prompt(&PromptRequest {
                    text: &text,
                    guidance: &guidance,
                    emotion: &emotion,
                    history: &history,
                    memory_context: memory_context.as_deref(),
                    search_context: search_context.as_deref(),
                    age_violation,
                })
            })
            .await
            .map_err(|e| CompanionError::Other(format!("prompt task failed: {}", e)))?
        };

        let raw = self
            .runtime
            .generate(&prompt, params.max_tokens, params.temperature)
            .await
            .map_err(|err| {
                log_error(
                    "llm_processor",
                    format!("generation failed for request {}: {}", request_id, err),
                );
                err
            })?;

        if self.consume_cancellation(&request_id) {
            log_info(
                "llm_processor",
                format!("request {} cancelled after generation", request_id),
            );
            return Ok(GenerationOutcome::Cancelled);
        }

        let text = pipeline.cleaner.clean_reply(&raw.text, goodnight);
        if text.trim().is_empty() {
            log_warn(
                "llm_processor",
                format!("request {} produced nothing after cleaning", request_id),
            );
            return Err(CompanionError::EmptyOutput);
        }

        Ok(GenerationOutcome::Completed(GenerationResult {
            text,
            tokens_generated: raw.tokens_generated,
            kind: if is_starter {
                ResponseKind::Starter
            } else {
                ResponseKind::Response
            },
        }))
    }

    /// Ask the character to open the conversation. Generation failures fall
    /// back to a fixed opener; readiness errors are still reported.
    pub async fn generate_conversation_starter(
        &self,
        mut request: GenerationRequest,
    ) -> Result<GenerationOutcome> {
        let profile = self.resolve_profile(&request)?;
        request.text = starter_text(profile.character_name.trim());
        request.conversation_history.clear();
        request.search_context = None;
        request.enable_web_search = false;
        request.emotion_data = None;

        match self.generate_with_context(request).await {
            Ok(GenerationOutcome::Completed(mut result)) => {
                result.kind = ResponseKind::Starter;
                Ok(GenerationOutcome::Completed(result))
            }
            Ok(GenerationOutcome::Cancelled) => Ok(GenerationOutcome::Cancelled),
            Err(err) if err.is_not_ready() => Err(err),
            Err(err) => {
                log_warn(
                    "llm_processor",
                    format!("starter generation failed, using fallback: {}", err),
                );
                Ok(GenerationOutcome::Completed(GenerationResult {
                    text: STARTER_FALLBACK.to_string(),
                    tokens_generated: 0,
                    kind: ResponseKind::Starter,
                }))
            }
        }
    }

    fn consume_cancellation(&self, request_id: &str) -> bool {
        !request_id.is_empty() && self.cancellation.take(request_id)
    }

    fn resolve_profile(&self, request: &GenerationRequest) -> Result<CharacterProfile> {
        if let Some(profile) = request
            .character_profile
            .as_ref()
            .filter(|p| !p.character_name.trim().is_empty())
        {
            return Ok(profile.clone());
        }

        let characters = self
            .characters
            .read()
            .map_err(|_| CompanionError::Other("character registry poisoned".into()))?;
        let wanted = request
            .character_name
            .as_deref()
            .or(self.config.fallback_character.as_deref())
            .unwrap_or_default();

        characters
            .get(&character_key(wanted))
            .cloned()
            .ok_or_else(|| CompanionError::CharacterNotFound(wanted.trim().to_string()))
    }

    /// Cached builder/cleaner for the request's character and user, rebuilt
    /// when that user's settings or the profile change.
    fn pipeline_for(&self, request: &GenerationRequest) -> Result<Arc<CharacterPipeline>> {
        let profile = self.resolve_profile(request)?;
        let settings = request.user_settings.clone().unwrap_or_default();
        let key = PipelineKey {
            character: character_key(&profile.character_name),
            user: character_key(settings.display_name()),
        };
        let fingerprint = fingerprint(&profile, &settings)?;

        let mut pipelines = self
            .pipelines
            .lock()
            .map_err(|_| CompanionError::Other("pipeline cache poisoned".into()))?;
        if let Some(existing) = pipelines.get(&key) {
            if existing.fingerprint == fingerprint {
                return Ok(Arc::clone(existing));
            }
            log_debug(
                "llm_processor",
                format!(
                    "profile for {} with {} changed, rebuilding",
                    key.character, key.user
                ),
            );
        }

        let cleaner = ResponseCleaner::new(
            &profile.character_name,
            settings.display_name(),
            &profile.avoid_words,
            self.config.max_sentences,
        )?;
        let builder = PromptBuilder::new(
            profile,
            settings,
            &self.config,
            Arc::clone(&self.retriever),
        )?;
        let pipeline = Arc::new(CharacterPipeline {
            fingerprint,
            builder,
            cleaner,
        });
        pipelines.insert(key, Arc::clone(&pipeline));
        Ok(pipeline)
    }

    async fn resolve_emotion(&self, request: &GenerationRequest) -> EmotionSignal {
        if let Some(data) = request.emotion_data.as_ref() {
            return EmotionSignal::from_data(Some(data));
        }
        let Some(classifier) = self.classifier.as_ref().filter(|c| c.is_ready()) else {
            return EmotionSignal::neutral();
        };
        match classifier.classify(&request.text).await {
            Ok(data) => EmotionSignal::from_data(Some(&data)),
            Err(err) => {
                log_warn(
                    "llm_processor",
                    format!("emotion classification failed, using neutral: {}", err),
                );
                EmotionSignal::neutral()
            }
        }
    }

    async fn fetch_context(
        &self,
        source: Option<&dyn ContextSource>,
        request: &GenerationRequest,
        character: &str,
    ) -> Option<String> {
        let source = source?;
        let options = FetchOptions {
            user_name: request
                .user_settings
                .as_ref()
                .map(|s| s.display_name().to_string()),
            ..FetchOptions::default()
        };
        let fetched = source.fetch(&request.text, character, &options).await;
        log_debug(
            "llm_processor",
            format!(
                "{} context: {}",
                source.name(),
                fetched
                    .as_ref()
                    .map(|t| format!("{} chars", t.chars().count()))
                    .unwrap_or_else(|| "none".to_string())
            ),
        );
        fetched.filter(|t| !t.trim().is_empty())
    }
}

/// One cache slot per character and user, so users sharing a character keep
/// their own pipelines. A settings edit by the same user replaces the slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PipelineKey {
    character: String,
    user: String,
}

fn character_key(name: &str) -> String {
    name.trim().to_lowercase()
}

fn non_empty(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

fn fingerprint(profile: &CharacterProfile, settings: &UserSettings) -> Result<u64> {
    let mut hasher = DefaultHasher::new();
    serde_json::to_string(profile)?.hash(&mut hasher);
    serde_json::to_string(settings)?.hash(&mut hasher);
    Ok(hasher.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat_manager::types::{ConversationTurn, EmotionData, Role};
    use crate::providers::{Component, RawCompletion};
    use crate::safety::CRISIS_INTERVENTION_MESSAGE;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    struct FakeRuntime {
        reply: Option<String>,
        ready: AtomicBool,
        calls: AtomicUsize,
        last_prompt: Mutex<Option<String>>,
        cancel_during: Option<(CancellationRegistry, String)>,
    }

    impl FakeRuntime {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Some(reply.to_string()),
                ready: AtomicBool::new(false),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
                cancel_during: None,
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                ..Self::replying("")
            }
        }

        fn prompt(&self) -> String {
            self.last_prompt.lock().unwrap().clone().unwrap_or_default()
        }
    }

    #[async_trait]
    impl Component for FakeRuntime {
        fn name(&self) -> &'static str {
            "fake"
        }

        async fn initialize(&self) -> Result<()> {
            self.ready.store(true, Ordering::SeqCst);
            Ok(())
        }

        fn is_ready(&self) -> bool {
            self.ready.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ModelRuntime for FakeRuntime {
        async fn generate(
            &self,
            prompt: &str,
            _max_tokens: u32,
            _temperature: f32,
        ) -> Result<RawCompletion> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            if let Some((registry, id)) = &self.cancel_during {
                registry.cancel(id);
            }
            match &self.reply {
                Some(text) => Ok(RawCompletion {
                    text: text.clone(),
                    tokens_generated: 7,
                }),
                None => Err(CompanionError::Generation("boom".into())),
            }
        }
    }

    struct FailingClassifier;

    #[async_trait]
    impl Component for FailingClassifier {
        fn name(&self) -> &'static str {
            "failing_classifier"
        }

        async fn initialize(&self) -> Result<()> {
            Ok(())
        }

        fn is_ready(&self) -> bool {
            true
        }
    }

    #[async_trait]
    impl EmotionClassifier for FailingClassifier {
        async fn classify(&self, _text: &str) -> Result<EmotionData> {
            Err(CompanionError::Other("model missing".into()))
        }
    }

    struct StaticMemory;

    #[async_trait]
    impl ContextSource for StaticMemory {
        fn name(&self) -> &'static str {
            "memory"
        }

        async fn fetch(&self, _query: &str, character: &str, _options: &FetchOptions) -> Option<String> {
            Some(format!("{} remembers the trip to Lisbon.", character))
        }
    }

    fn profile() -> CharacterProfile {
        CharacterProfile {
            gender: Some("female".into()),
            role: Some("barista".into()),
            ..CharacterProfile::named("Aria")
        }
    }

    fn request(text: &str) -> GenerationRequest {
        GenerationRequest {
            text: text.to_string(),
            character_profile: Some(profile()),
            request_id: Some("req-1".into()),
            conversation_history: vec![
                ConversationTurn::new(Role::User, "hey"),
                ConversationTurn::new(Role::Assistant, "hi!"),
            ],
            ..GenerationRequest::default()
        }
    }

    async fn processor(runtime: Arc<FakeRuntime>) -> LlmProcessor {
        let config = ProcessorConfig::default();
        let registry = CancellationRegistry::with_ttl_secs(config.cancellation_ttl_secs);
        let processor = LlmProcessor::new(config, runtime, registry).unwrap();
        processor.initialize().await.unwrap();
        processor
    }

    #[tokio::test]
    async fn generates_and_cleans_reply() {
        let runtime = Arc::new(FakeRuntime::replying("Aria: Hello there! How was work today?"));
        let processor = processor(runtime.clone()).await;

        let outcome = processor
            .generate_with_context(request("I just got home"))
            .await
            .unwrap();
        let result = outcome.result().unwrap();
        assert_eq!(result.text, "Hello there! How was work today?");
        assert_eq!(result.tokens_generated, 7);
        assert_eq!(result.kind, ResponseKind::Response);

        let prompt = runtime.prompt();
        assert!(prompt.contains("I just got home"));
        assert!(prompt.trim_end().ends_with("Aria:"));
    }

    #[tokio::test]
    async fn crisis_message_skips_generation() {
        let runtime = Arc::new(FakeRuntime::replying("unused"));
        let processor = processor(runtime.clone()).await;

        let outcome = processor
            .generate_with_context(request("I want to kill myself"))
            .await
            .unwrap();
        let result = outcome.result().unwrap();
        assert_eq!(result.text, CRISIS_INTERVENTION_MESSAGE);
        assert_eq!(result.kind, ResponseKind::CrisisIntervention);
        assert_eq!(runtime.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn cancellation_before_generation_skips_runtime() {
        let runtime = Arc::new(FakeRuntime::replying("Hi."));
        let processor = processor(runtime.clone()).await;
        processor.cancel("req-1");

        let outcome = processor.generate_with_context(request("hello")).await.unwrap();
        assert!(outcome.is_cancelled());
        assert_eq!(runtime.calls.load(Ordering::SeqCst), 0);
        assert!(processor.cancellation().is_empty());
    }

    #[tokio::test]
    async fn cancellation_during_generation_discards_result() {
        let config = ProcessorConfig::default();
        let registry = CancellationRegistry::with_ttl_secs(60);
        let runtime = Arc::new(FakeRuntime {
            cancel_during: Some((registry.clone(), "req-1".into())),
            ..FakeRuntime::replying("Hi.")
        });
        let processor = LlmProcessor::new(config, runtime.clone(), registry).unwrap();
        processor.initialize().await.unwrap();

        let outcome = processor.generate_with_context(request("hello")).await.unwrap();
        assert!(outcome.is_cancelled());
        assert_eq!(runtime.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn uninitialized_runtime_is_not_ready() {
        let runtime = Arc::new(FakeRuntime::replying("Hi."));
        let processor = LlmProcessor::new(
            ProcessorConfig::default(),
            runtime,
            CancellationRegistry::with_ttl_secs(60),
        )
        .unwrap();

        let err = processor
            .generate_with_context(request("hello"))
            .await
            .unwrap_err();
        assert!(err.is_not_ready());
        assert!(!processor.health().is_ready());
    }

    #[tokio::test]
    async fn unknown_character_is_reported() {
        let processor = processor(Arc::new(FakeRuntime::replying("Hi."))).await;
        let req = GenerationRequest {
            text: "hello".into(),
            character_name: Some("Nobody".into()),
            ..GenerationRequest::default()
        };
        let err = processor.generate_with_context(req).await.unwrap_err();
        assert!(matches!(err, CompanionError::CharacterNotFound(ref name) if name == "Nobody"));
    }

    #[tokio::test]
    async fn registered_character_resolves_by_name() {
        let processor = processor(Arc::new(FakeRuntime::replying("Hey you."))).await;
        processor.register_character(profile()).unwrap();
        let req = GenerationRequest {
            text: "hello".into(),
            character_name: Some("aria".into()),
            ..GenerationRequest::default()
        };
        let outcome = processor.generate_with_context(req).await.unwrap();
        assert_eq!(outcome.result().unwrap().text, "Hey you.");
        assert_eq!(processor.health().registered_characters, 1);
    }

    #[tokio::test]
    async fn starter_falls_back_when_generation_fails() {
        let runtime = Arc::new(FakeRuntime::failing());
        let processor = processor(runtime.clone()).await;

        let outcome = processor
            .generate_conversation_starter(request(""))
            .await
            .unwrap();
        let result = outcome.result().unwrap();
        assert_eq!(result.text, STARTER_FALLBACK);
        assert_eq!(result.kind, ResponseKind::Starter);
        assert!(runtime.prompt().contains("conversation starter"));
    }

    #[tokio::test]
    async fn generation_failure_is_an_error() {
        let processor = processor(Arc::new(FakeRuntime::failing())).await;
        let err = processor
            .generate_with_context(request("hello"))
            .await
            .unwrap_err();
        assert!(matches!(err, CompanionError::Generation(_)));
        assert!(!err.user_message().contains("boom"));
    }

    #[tokio::test]
    async fn memory_source_feeds_prompt_when_enabled() {
        let runtime = Arc::new(FakeRuntime::replying("I do remember."));
        let processor = processor(runtime.clone())
            .await
            .with_memory_source(Arc::new(StaticMemory));

        let mut req = request("remember our trip?");
        req.enable_memory = true;
        processor.generate_with_context(req).await.unwrap();
        assert!(runtime.prompt().contains("Aria remembers the trip to Lisbon."));

        processor
            .generate_with_context(request("remember our trip?"))
            .await
            .unwrap();
        assert!(!runtime.prompt().contains("Lisbon"));
    }

    #[tokio::test]
    async fn classifier_failure_degrades_to_neutral() {
        let runtime = Arc::new(FakeRuntime::replying("Sounds good."));
        let processor = processor(runtime)
            .await
            .with_classifier(Arc::new(FailingClassifier));
        let outcome = processor.generate_with_context(request("ok")).await.unwrap();
        assert!(!outcome.is_cancelled());
        assert_eq!(processor.health().classifier_ready, Some(true));
    }

    #[tokio::test]
    async fn pipeline_is_cached_until_profile_changes() {
        let runtime = Arc::new(FakeRuntime::replying("Hi."));
        let processor = processor(runtime).await;

        let first = processor.pipeline_for(&request("a")).unwrap();
        let second = processor.pipeline_for(&request("b")).unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        let mut changed = request("c");
        if let Some(p) = changed.character_profile.as_mut() {
            p.role = Some("florist".into());
        }
        let third = processor.pipeline_for(&changed).unwrap();
        assert!(!Arc::ptr_eq(&first, &third));
        assert_eq!(processor.health().cached_pipelines, 1);
    }

    #[tokio::test]
    async fn users_sharing_a_character_keep_their_own_pipelines() {
        let runtime = Arc::new(FakeRuntime::replying("Hi."));
        let processor = processor(runtime).await;

        let as_user = |name: &str, text: &str| {
            let mut req = request(text);
            req.user_settings = Some(UserSettings {
                user_name: name.to_string(),
                ..UserSettings::default()
            });
            req
        };

        let sam = processor.pipeline_for(&as_user("Sam", "hi")).unwrap();
        let alex = processor.pipeline_for(&as_user("Alex", "hello")).unwrap();
        assert!(!Arc::ptr_eq(&sam, &alex));

        let sam_again = processor.pipeline_for(&as_user("Sam", "again")).unwrap();
        let alex_again = processor.pipeline_for(&as_user("Alex", "again")).unwrap();
        assert!(Arc::ptr_eq(&sam, &sam_again));
        assert!(Arc::ptr_eq(&alex, &alex_again));
        assert_eq!(processor.health().cached_pipelines, 2);

        let mut edited = as_user("Sam", "later");
        if let Some(settings) = edited.user_settings.as_mut() {
            settings.timezone = Some("Europe/Lisbon".into());
        }
        let sam_edited = processor.pipeline_for(&edited).unwrap();
        assert!(!Arc::ptr_eq(&sam, &sam_edited));
        assert_eq!(processor.health().cached_pipelines, 2);
    }
}

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use companion_inference::chat_manager::generation_params::apply_overrides;
use companion_inference::chat_manager::prompt_engine::{PromptBuilder, PromptRequest};
use companion_inference::chat_manager::response_cleaner::ResponseCleaner;
use companion_inference::chat_manager::types::{EmotionSignal, GenerationRequest};
use companion_inference::lorebook::retriever::LorebookRetriever;
use companion_inference::logger::init_tracing;
use companion_inference::providers::llamacpp::LlamaServerRuntime;
use companion_inference::safety::SafetyScreen;
use companion_inference::{CancellationRegistry, LlmProcessor, ProcessorConfig};

#[derive(Parser)]
#[command(name = "companion-inference")]
#[command(about = "Prompt assembly and reply cleaning for local companion models")]
#[command(version)]
struct Cli {
    /// JSON config file (camelCase keys, every field optional)
    #[arg(short, long, global = true, env = "COMPANION_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the generation parameters and the assembled prompt without calling a model
    Prompt {
        /// GenerationRequest JSON file ("-" or omitted reads stdin)
        #[arg(index = 1)]
        request: Option<PathBuf>,

        /// Only print the static prefix
        #[arg(long)]
        static_only: bool,
    },

    /// Clean a raw model reply
    Clean {
        /// Reply text (reads stdin when omitted)
        #[arg(index = 1)]
        text: Option<String>,

        #[arg(long, default_value = "Assistant")]
        character: String,

        #[arg(long, default_value = "User")]
        user: String,

        /// Treat the reply as an answer to a goodnight message
        #[arg(long)]
        goodnight: bool,
    },

    /// Run a request against the configured llama.cpp server
    Generate {
        /// GenerationRequest JSON file ("-" or omitted reads stdin)
        #[arg(index = 1)]
        request: Option<PathBuf>,

        /// Ask for a conversation starter instead of a reply
        #[arg(long)]
        starter: bool,
    },
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn read_request(path: Option<&Path>) -> Result<GenerationRequest> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("request is not a valid GenerationRequest")
}

fn run_prompt(config: &ProcessorConfig, path: Option<&Path>, static_only: bool) -> Result<()> {
    let request = read_request(path)?;
    let profile = request
        .character_profile
        .clone()
        .context("dry run needs an inline characterProfile")?;
    let settings = request.user_settings.clone().unwrap_or_default();
    let retriever = Arc::new(LorebookRetriever::new(
        config.max_chunks,
        config.chunk_token_budget,
    ));
    let builder = PromptBuilder::new(profile, settings, config, retriever)?;

    if static_only {
        println!("{}", builder.static_prefix());
        return Ok(());
    }

    let safety = SafetyScreen::new()?;
    let emotion = EmotionSignal::from_data(request.emotion_data.as_ref());
    let params = apply_overrides(
        builder.get_generation_params(&request.text, &emotion),
        request.max_tokens_override,
        request.temperature_override,
        config,
    );
    let prompt = builder.build_prompt(&PromptRequest {
        text: &request.text,
        guidance: &params.guidance,
        emotion: &emotion,
        history: &request.conversation_history,
        memory_context: request.memory_context.as_deref(),
        search_context: request.search_context.as_deref(),
        age_violation: safety.detect_age_violation(&request.text),
    });

    println!("{}", serde_json::to_string_pretty(&params)?);
    println!("{}", prompt);
    Ok(())
}

fn run_clean(
    config: &ProcessorConfig,
    text: Option<String>,
    character: &str,
    user: &str,
    goodnight: bool,
) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => read_input(None)?,
    };
    let cleaner = ResponseCleaner::new(character, user, &[], config.max_sentences)?;
    println!("{}", cleaner.clean_reply(&text, goodnight));
    Ok(())
}

async fn run_generate(config: ProcessorConfig, path: Option<&Path>, starter: bool) -> Result<()> {
    let mut request = read_request(path)?;
    if request.request_id.is_none() {
        request.request_id = Some(uuid::Uuid::new_v4().to_string());
    }

    let runtime = Arc::new(LlamaServerRuntime::new(config.runtime.clone())?);
    let registry = CancellationRegistry::with_ttl_secs(config.cancellation_ttl_secs);
    let processor = LlmProcessor::new(config, runtime, registry)?;
    processor.initialize().await?;

    let outcome = if starter {
        processor.generate_conversation_starter(request).await
    } else {
        processor.generate_with_context(request).await
    };

    match outcome {
        Ok(outcome) => {
            if outcome.is_cancelled() {
                tracing::info!(component = "cli", "request was cancelled");
            }
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        Err(err) if err.is_not_ready() => return Err(err.into()),
        Err(err) => {
            tracing::error!(component = "cli", "generation failed: {}", err);
            println!(
                "{}",
                serde_json::json!({ "status": "error", "message": err.user_message() })
            );
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ProcessorConfig::load(cli.config.as_deref())?;
    init_tracing(&config.logging)?;

    match cli.command {
        Commands::Prompt {
            request,
            static_only,
        } => run_prompt(&config, request.as_deref(), static_only),
        Commands::Clean {
            text,
            character,
            user,
            goodnight,
        } => run_clean(&config, text, &character, &user, goodnight),
        Commands::Generate { request, starter } => {
            run_generate(config, request.as_deref(), starter).await
        }
    }
}

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use briefcast_pipeline::{
    huggingface::HuggingFaceClient, tracing::init_tracing_subscriber,
    tts::openai::OpenAiSpeechClient, tts::SynthesizedAudio, yt::timedtext::TimedTextClient,
    BriefProcessor, BriefProcessorBuilder, PipelineError, SummarizeError, TranscriptError,
    VideoBrief, DEFAULT_CHUNK_SIZE,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;

#[derive(Parser)]
#[command(
    name = "briefcast-web",
    about = "Web UI and API for turning YouTube videos into spoken briefs"
)]
struct Cli {
    /// Address to bind the HTTP server to (host:port)
    #[arg(long, env = "BRIEFCAST_BIND", default_value = "127.0.0.1:8080")]
    bind: String,

    /// Hugging Face Inference API token
    #[arg(long, env = "HF_API_TOKEN")]
    hf_api_token: String,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY")]
    openai_key: String,

    /// Summarization model served by the Hugging Face Inference API
    #[arg(
        long,
        env = "BRIEFCAST_SUMMARIZER_MODEL",
        default_value = HuggingFaceClient::DEFAULT_MODEL
    )]
    summarizer_model: String,

    /// Voice used for speech synthesis
    #[arg(long, env = "BRIEFCAST_VOICE", default_value = OpenAiSpeechClient::DEFAULT_VOICE)]
    voice: String,

    /// Maximum characters per summarization chunk
    #[arg(long, env = "BRIEFCAST_CHUNK_SIZE", default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,
}

type WebProcessor = BriefProcessor<TimedTextClient, HuggingFaceClient, OpenAiSpeechClient>;

/// The most recent synthesized audio, overwritten per request. The revision
/// feeds a cache-busting query param so the page's player re-fetches.
#[derive(Default)]
struct AudioSlot {
    revision: u64,
    audio: Option<SynthesizedAudio>,
}

#[derive(Clone)]
struct AppState {
    processor: Arc<Mutex<WebProcessor>>,
    audio_slot: Arc<Mutex<AudioSlot>>,
}

#[derive(Debug, Deserialize)]
struct BriefRequest {
    url: String,
}

#[derive(Debug, Serialize)]
struct BriefResponse {
    video_id: String,
    transcript: String,
    summary: String,
    audio_url: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    kind: &'static str,
    message: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let processor = BriefProcessorBuilder::new()
        .transcript_fetcher(TimedTextClient::new())
        .summarizer(HuggingFaceClient::new(&cli.hf_api_token).with_model(cli.summarizer_model))
        .synthesizer(OpenAiSpeechClient::new(&cli.openai_key).with_voice(cli.voice))
        .chunk_size(cli.chunk_size)
        .build();

    let state = AppState {
        processor: Arc::new(Mutex::new(processor)),
        audio_slot: Arc::new(Mutex::new(AudioSlot::default())),
    };

    let api = Router::new()
        .route("/api/briefs", post(create_brief))
        .route("/api/audio", get(latest_audio))
        .layer(CorsLayer::permissive());
    let app = Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .merge(api)
        .with_state(state);

    let addr: SocketAddr = cli
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address {}", cli.bind))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(%addr, "briefcast-web listening");
    axum::serve(listener, app).await.context("Server shutdown")?;

    Ok(())
}

async fn index() -> Html<&'static str> {
    Html(include_str!("./assets/index.html"))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn create_brief(
    State(state): State<AppState>,
    Json(request): Json<BriefRequest>,
) -> Result<Json<BriefResponse>, (StatusCode, Json<ErrorBody>)> {
    if request.url.trim().is_empty() {
        return Err(invalid_url("URL must not be empty"));
    }

    // One pipeline run at a time; later submissions wait here.
    let processor = state.processor.lock().await;
    let brief = processor.process(&request.url).await.map_err(pipeline_error)?;
    drop(processor);

    let VideoBrief {
        video_id,
        transcript,
        summary,
        audio,
    } = brief;

    let mut slot = state.audio_slot.lock().await;
    slot.revision += 1;
    slot.audio = Some(audio);
    let audio_url = format!("/api/audio?rev={}", slot.revision);
    drop(slot);

    Ok(Json(BriefResponse {
        video_id: video_id.to_string(),
        transcript: transcript.into_inner(),
        summary,
        audio_url,
    }))
}

/// Serves the latest take from the slot; the rev query param exists only so
/// browsers do not replay a stale cached response.
async fn latest_audio(State(state): State<AppState>) -> Result<Response, StatusCode> {
    let slot = state.audio_slot.lock().await;
    let Some(audio) = slot.audio.as_ref() else {
        return Err(StatusCode::NOT_FOUND);
    };

    Response::builder()
        .header(header::CONTENT_TYPE, audio.media_type)
        .header(header::CACHE_CONTROL, "no-store")
        .body(Body::from(audio.bytes.clone()))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

fn invalid_url(message: impl Into<String>) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: ErrorDetail {
                kind: "invalid_url",
                message: message.into(),
            },
        }),
    )
}

fn pipeline_error(err: PipelineError) -> (StatusCode, Json<ErrorBody>) {
    let (status, kind) = match &err {
        PipelineError::InvalidUrl(_) => (StatusCode::BAD_REQUEST, "invalid_url"),
        PipelineError::Transcript(TranscriptError::CaptionsDisabled { .. }) => {
            (StatusCode::NOT_FOUND, "captions_disabled")
        }
        PipelineError::Transcript(_) => (StatusCode::BAD_GATEWAY, "transcript_failed"),
        PipelineError::Summarize(SummarizeError::EmptyInput) => {
            (StatusCode::UNPROCESSABLE_ENTITY, "summarize_failed")
        }
        PipelineError::Summarize(_) => (StatusCode::BAD_GATEWAY, "summarize_failed"),
        PipelineError::Synthesis(_) => (StatusCode::BAD_GATEWAY, "synthesis_failed"),
    };

    (
        status,
        Json(ErrorBody {
            error: ErrorDetail {
                kind,
                message: err.to_string(),
            },
        }),
    )
}

use std::path::PathBuf;

use anyhow::Context;
use briefcast_pipeline::{
    huggingface::HuggingFaceClient, tracing::init_tracing_subscriber,
    tts::openai::OpenAiSpeechClient, yt::timedtext::TimedTextClient, BriefProcessorBuilder,
    DEFAULT_CHUNK_SIZE,
};
use clap::Parser;

#[derive(Parser)]
#[command(name = "briefcast", about = "Turn a YouTube video into a spoken brief")]
struct Cli {
    /// YouTube video URL (watch or short-link form)
    url: String,

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

    /// Where to write the synthesized audio (overwritten each run)
    #[arg(long, default_value = "output.mp3")]
    out: PathBuf,

    /// Print the full transcript before the summary
    #[arg(long)]
    show_transcript: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let processor = BriefProcessorBuilder::new()
        .transcript_fetcher(TimedTextClient::new())
        .summarizer(HuggingFaceClient::new(&cli.hf_api_token).with_model(cli.summarizer_model))
        .synthesizer(OpenAiSpeechClient::new(&cli.openai_key).with_voice(cli.voice))
        .chunk_size(cli.chunk_size)
        .build();

    let brief = processor.process(&cli.url).await?;

    if cli.show_transcript {
        println!("{}\n", brief.transcript);
    }
    println!("{}", brief.summary);

    tokio::fs::write(&cli.out, &brief.audio.bytes)
        .await
        .with_context(|| format!("Failed to write audio to {}", cli.out.display()))?;
    tracing::info!(
        path = %cli.out.display(),
        bytes = brief.audio.bytes.len(),
        "Saved spoken brief"
    );

    Ok(())
}

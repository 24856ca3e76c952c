pub mod builder;

use itertools::Itertools;

use crate::{
    chunk::chunk_text,
    error::{PipelineError, SummarizeError},
    tts::{SpeechSynthesizer, SynthesizedAudio},
    yt::{extract_video_id, Transcript, TranscriptFetcher, VideoId},
    Summarizer,
};

// The core YouTube video to spoken brief processor
#[derive(Debug)]
pub struct BriefProcessor<T, S, V>
where
    T: TranscriptFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    V: SpeechSynthesizer + Send + Sync + 'static,
{
    transcript_fetcher: T,
    summarizer: S,
    synthesizer: V,
    chunk_size: usize,
}

/// Everything one successful run produces. Nothing here outlives the
/// request unless the caller keeps it.
#[derive(Debug)]
pub struct VideoBrief {
    pub video_id: VideoId,
    pub transcript: Transcript,
    pub summary: String,
    pub audio: SynthesizedAudio,
}

impl<T, S, V> BriefProcessor<T, S, V>
where
    T: TranscriptFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    V: SpeechSynthesizer + Send + Sync + 'static,
{
    /// Runs the full pipeline for one URL: parse, fetch captions, summarize
    /// chunk by chunk, synthesize speech. The first failing stage wins; no
    /// stage after it runs.
    #[tracing::instrument(skip(self))]
    pub async fn process(&self, url: &str) -> Result<VideoBrief, PipelineError> {
        let video_id = extract_video_id(url)
            .ok_or_else(|| PipelineError::InvalidUrl(url.trim().to_string()))?;

        let transcript = self.fetch_transcript(&video_id).await?;
        let summary = self.summarize_transcript(&transcript).await?;
        let audio = self.synthesize_summary(&summary).await?;

        Ok(VideoBrief {
            video_id,
            transcript,
            summary,
            audio,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_transcript(&self, video_id: &VideoId) -> Result<Transcript, PipelineError> {
        let segments = self
            .transcript_fetcher
            .fetch_transcript(video_id)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to fetch transcript"))?;

        tracing::info!(segments = segments.len(), "Fetched transcript");
        Ok(Transcript::from_segments(&segments))
    }

    /// Splits the transcript into fixed-size character chunks, summarizes
    /// each independently, and joins the per-chunk summaries with single
    /// spaces in chunk order.
    #[tracing::instrument(skip_all)]
    async fn summarize_transcript(&self, transcript: &Transcript) -> Result<String, PipelineError> {
        if transcript.trim().is_empty() {
            return Err(SummarizeError::EmptyInput.into());
        }

        let chunks = chunk_text(transcript, self.chunk_size);
        tracing::info!(count = chunks.len(), "Summarizing transcript chunks");

        let mut summaries = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            let resp = self
                .summarizer
                .summarize(chunk)
                .await
                .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize chunk"))?;
            summaries.push(resp.summary_text);
        }

        Ok(summaries.into_iter().join(" "))
    }

    #[tracing::instrument(skip_all)]
    async fn synthesize_summary(&self, summary: &str) -> Result<SynthesizedAudio, PipelineError> {
        let audio = self
            .synthesizer
            .synthesize(summary)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to synthesize speech"))?;

        tracing::info!(bytes = audio.bytes.len(), "Synthesized spoken brief");
        Ok(audio)
    }
}

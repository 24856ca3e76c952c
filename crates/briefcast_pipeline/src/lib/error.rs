use crate::yt::VideoId;

/// Errors raised while obtaining a video's caption transcript.
///
/// "Captions turned off for this video" and "the service misbehaved" are
/// deliberately distinct variants: the former is terminal and user-facing,
/// the latter is a transport problem the caller may want to treat differently.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("captions are disabled for video {video_id}")]
    CaptionsDisabled { video_id: VideoId },
    #[error("caption track for video {video_id} contains no text")]
    EmptyTranscript { video_id: VideoId },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Parse error: {0}")]
    Parse(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizeError {
    #[error("transcript is empty, nothing to summarize")]
    EmptyInput,
    #[error("model returned no summary candidates")]
    NoCandidates,
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

/// Top-level failure of a single pipeline run. Each variant marks the stage
/// that failed; stages after it never ran.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("could not extract a video id from {0:?}")]
    InvalidUrl(String),
    #[error("transcript fetch failed: {0}")]
    Transcript(#[from] TranscriptError),
    #[error("summarization failed: {0}")]
    Summarize(#[from] SummarizeError),
    #[error("speech synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),
}

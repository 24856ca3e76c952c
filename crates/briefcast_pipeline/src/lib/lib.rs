mod chunk;
mod error;
mod llm;
pub mod parser;
mod processor;
pub mod tracing;
pub mod tts;
pub mod yt;

pub use chunk::{chunk_text, DEFAULT_CHUNK_SIZE};
pub use error::{PipelineError, SummarizeError, SynthesisError, TranscriptError};
pub use llm::huggingface;
pub use llm::summarizer::{Summarizer, SummaryResponse};
pub use processor::{builder::BriefProcessorBuilder, BriefProcessor, VideoBrief};

pub mod openai;

use std::future::Future;

use crate::error::SynthesisError;

/// Synthesized speech held in memory. The pipeline hands audio around by
/// value; persisting it (or streaming it to a browser) is the caller's
/// concern, so no file ever backs this.
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

pub trait SpeechSynthesizer {
    fn synthesize(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<SynthesizedAudio, SynthesisError>> + Send;
}

use reqwest::Client;

use crate::{
    error::SynthesisError,
    tts::{SpeechSynthesizer, SynthesizedAudio},
};

pub struct OpenAiSpeechClient {
    client: Client,
    api_key: String,
    model: String,
    voice: String,
    base_url: String,
}

impl OpenAiSpeechClient {
    pub const DEFAULT_MODEL: &str = "gpt-4o-mini-tts";
    pub const DEFAULT_VOICE: &str = "alloy";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: Self::DEFAULT_MODEL.into(),
            voice: Self::DEFAULT_VOICE.into(),
            base_url: "https://api.openai.com/v1".into(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = voice.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl SpeechSynthesizer for OpenAiSpeechClient {
    /// Submits the whole text in a single request; input beyond the
    /// service's limit comes back as an API error rather than being chunked.
    async fn synthesize(&self, text: &str) -> Result<SynthesizedAudio, SynthesisError> {
        let body = serde_json::json!({
            "model": self.model,
            "voice": self.voice,
            "input": text,
            "response_format": "mp3",
        });

        let resp = self
            .client
            .post(format!("{}/audio/speech", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(SynthesisError::Api { status, message });
        }

        let bytes = resp.bytes().await?;

        Ok(SynthesizedAudio {
            media_type: "audio/mpeg",
            bytes: bytes.to_vec(),
        })
    }
}

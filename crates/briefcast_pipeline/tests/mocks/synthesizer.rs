use std::sync::{Arc, Mutex};

use briefcast_pipeline::{
    tts::{SpeechSynthesizer, SynthesizedAudio},
    SynthesisError,
};

#[derive(Clone)]
pub struct MockSynthesizer {
    pub audio_bytes: Vec<u8>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl Default for MockSynthesizer {
    fn default() -> Self {
        Self {
            audio_bytes: b"ID3mock-mp3-bytes".to_vec(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }
}

impl MockSynthesizer {
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl SpeechSynthesizer for MockSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<SynthesizedAudio, SynthesisError> {
        self.calls.lock().unwrap().push(text.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(SynthesisError::Api {
                status: 500,
                message: msg.clone(),
            });
        }
        Ok(SynthesizedAudio {
            media_type: "audio/mpeg",
            bytes: self.audio_bytes.clone(),
        })
    }
}

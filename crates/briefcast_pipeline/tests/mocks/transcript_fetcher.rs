use std::sync::{Arc, Mutex};

use briefcast_pipeline::{
    yt::{TranscriptFetcher, TranscriptSegment, VideoId},
    TranscriptError,
};

#[derive(Clone)]
pub struct MockTranscriptFetcher {
    pub segments: Vec<TranscriptSegment>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
    pub captions_disabled: bool,
}

impl MockTranscriptFetcher {
    pub fn new(texts: &[&str]) -> Self {
        let segments = texts
            .iter()
            .enumerate()
            .map(|(i, text)| TranscriptSegment {
                text: text.to_string(),
                start: i as f64 * 2.0,
                duration: 2.0,
            })
            .collect();
        Self {
            segments,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
            captions_disabled: false,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            segments: Vec::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
            captions_disabled: false,
        }
    }

    pub fn captions_disabled() -> Self {
        Self {
            segments: Vec::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
            captions_disabled: true,
        }
    }
}

impl TranscriptFetcher for MockTranscriptFetcher {
    async fn fetch_transcript(
        &self,
        video_id: &VideoId,
    ) -> Result<Vec<TranscriptSegment>, TranscriptError> {
        self.calls.lock().unwrap().push(video_id.to_string());
        if self.captions_disabled {
            return Err(TranscriptError::CaptionsDisabled {
                video_id: video_id.clone(),
            });
        }
        if let Some(ref msg) = self.fail_with {
            return Err(TranscriptError::Api {
                status: 500,
                message: msg.clone(),
            });
        }
        Ok(self.segments.clone())
    }
}

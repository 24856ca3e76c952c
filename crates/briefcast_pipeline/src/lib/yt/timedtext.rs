use reqwest::Client;

use crate::{
    error::TranscriptError,
    parser::{parse_timed_text, select_caption_track, CaptionTrack, WatchPage},
    yt::{TranscriptFetcher, TranscriptSegment, VideoId},
};

/// Fetches caption transcripts through YouTube's public timedtext endpoint.
///
/// Two requests per video: the watch page (whose `ytInitialPlayerResponse`
/// lists the caption tracks) and the selected track's base URL with
/// `fmt=json3`. No API key is involved.
pub struct TimedTextClient {
    client: Client,
    base_url: String,
}

impl TimedTextClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: "https://www.youtube.com".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn fetch_watch_page(&self, video_id: &VideoId) -> Result<WatchPage, TranscriptError> {
        let resp = self
            .client
            .get(format!("{}/watch?v={}", self.base_url, video_id))
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(TranscriptError::Api { status, message });
        }

        Ok(resp.text().await?.into())
    }

    async fn fetch_timed_text(&self, track: &CaptionTrack) -> Result<String, TranscriptError> {
        let sep = if track.base_url.contains('?') { '&' } else { '?' };
        let url = format!("{}{}fmt=json3", track.base_url, sep);

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(TranscriptError::Api { status, message });
        }

        Ok(resp.text().await?)
    }
}

impl Default for TimedTextClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptFetcher for TimedTextClient {
    async fn fetch_transcript(
        &self,
        video_id: &VideoId,
    ) -> Result<Vec<TranscriptSegment>, TranscriptError> {
        let page = self.fetch_watch_page(video_id).await?;
        let player_response = page.player_response()?;

        let track = select_caption_track(player_response.caption_tracks()).ok_or_else(|| {
            TranscriptError::CaptionsDisabled {
                video_id: video_id.clone(),
            }
        })?;

        let raw = self.fetch_timed_text(track).await?;
        let segments = parse_timed_text(&raw)?;

        if segments.is_empty() {
            return Err(TranscriptError::EmptyTranscript {
                video_id: video_id.clone(),
            });
        }

        Ok(segments)
    }
}

//! # Caption Parser
//!
//! This module parses the pieces of a YouTube watch page that the pipeline
//! needs: the `ytInitialPlayerResponse` blob (which lists available caption
//! tracks) and the `json3` timedtext payload served by a track's base URL.

use std::{ops::Deref, sync::LazyLock};

use regex::Regex;
use serde::Deserialize;

use crate::{error::TranscriptError, yt::TranscriptSegment};

static PLAYER_RESPONSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"(?s)<script[^>]*>\s*var\s+ytInitialPlayerResponse\s*=\s*(\{.*?\});\s*(?:var\s|</script>)",
    )
    .unwrap()
});

/// Raw HTML of a video's watch page.
pub struct WatchPage(String);

impl Deref for WatchPage {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<String> for WatchPage {
    fn from(value: String) -> Self {
        WatchPage(value)
    }
}

impl WatchPage {
    pub fn new(html: String) -> Self {
        WatchPage(html)
    }

    /// Extracts and deserializes the `ytInitialPlayerResponse` JSON from the
    /// page's script tag.
    pub fn player_response(&self) -> Result<PlayerResponse, TranscriptError> {
        PLAYER_RESPONSE_RE
            .captures(self)
            .and_then(|cap| cap.get(1))
            .and_then(|m| serde_json::from_str(m.as_str()).ok())
            .ok_or(TranscriptError::Parse(
                "Failed to extract ytInitialPlayerResponse from the page's script tag",
            ))
    }
}

/// The slice of `ytInitialPlayerResponse` that matters here: the caption
/// track list. Everything else on the page is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    captions: Option<Captions>,
}

impl PlayerResponse {
    /// All caption tracks advertised for the video; empty when captions are
    /// disabled entirely.
    pub fn caption_tracks(&self) -> &[CaptionTrack] {
        self.captions
            .as_ref()
            .and_then(|c| c.player_captions_tracklist_renderer.as_ref())
            .map(|r| r.caption_tracks.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Captions {
    player_captions_tracklist_renderer: Option<TracklistRenderer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TracklistRenderer {
    #[serde(default)]
    caption_tracks: Vec<CaptionTrack>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    pub base_url: String,
    #[serde(default)]
    pub language_code: Option<String>,
    /// `"asr"` marks an auto-generated track.
    #[serde(default)]
    pub kind: Option<String>,
}

impl CaptionTrack {
    fn is_english(&self) -> bool {
        self.language_code
            .as_deref()
            .is_some_and(|code| code.starts_with("en"))
    }

    fn is_auto_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }
}

/// Picks the caption track to transcribe from: a manually-created English
/// track beats auto-generated English, which beats whatever is listed first.
pub fn select_caption_track(tracks: &[CaptionTrack]) -> Option<&CaptionTrack> {
    tracks
        .iter()
        .find(|t| t.is_english() && !t.is_auto_generated())
        .or_else(|| tracks.iter().find(|t| t.is_english()))
        .or_else(|| tracks.first())
}

/// Parses a `json3` timedtext payload into ordered transcript segments.
///
/// Events without text runs (window styling, positioning) are skipped, as
/// are events whose runs reduce to whitespace. Millisecond timings are
/// converted to seconds.
pub fn parse_timed_text(raw: &str) -> Result<Vec<TranscriptSegment>, TranscriptError> {
    let response: TimedTextResponse = serde_json::from_str(raw)
        .map_err(|_| TranscriptError::Parse("Failed to parse timedtext json3 payload"))?;

    let mut segments = Vec::new();
    for event in response.events {
        let Some(segs) = event.segs else { continue };

        let text: String = segs.iter().map(|s| s.utf8.as_str()).collect();
        let text = text.replace('\n', " ").trim().to_string();
        if text.is_empty() {
            continue;
        }

        segments.push(TranscriptSegment {
            text,
            start: event.start_ms.unwrap_or(0) as f64 / 1000.0,
            duration: event.duration_ms.unwrap_or(0) as f64 / 1000.0,
        });
    }

    Ok(segments)
}

#[derive(Debug, Deserialize)]
struct TimedTextResponse {
    #[serde(default)]
    events: Vec<TimedTextEvent>,
}

#[derive(Debug, Deserialize)]
struct TimedTextEvent {
    #[serde(rename = "tStartMs")]
    start_ms: Option<u64>,
    #[serde(rename = "dDurationMs")]
    duration_ms: Option<u64>,
    #[serde(default)]
    segs: Option<Vec<TimedTextSeg>>,
}

#[derive(Debug, Deserialize)]
struct TimedTextSeg {
    utf8: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(lang: Option<&str>, kind: Option<&str>) -> CaptionTrack {
        CaptionTrack {
            base_url: "https://www.youtube.com/api/timedtext?v=test".to_string(),
            language_code: lang.map(str::to_string),
            kind: kind.map(str::to_string),
        }
    }

    #[test]
    fn test_successful_player_response_extraction() {
        let html = r#"
            <html>
                <head>
                    <script nonce="gZTn8MILMQFuWon1rDk2VA">
                        var ytInitialPlayerResponse = {"captions": {"playerCaptionsTracklistRenderer": {"captionTracks": [{"baseUrl": "https://example.com/tt", "languageCode": "en"}]}}};
                    </script>
                </head>
                <body>
                    <p>Some content</p>
                </body>
            </html>
        "#;

        let page = WatchPage::from(html.to_string());
        let response = page
            .player_response()
            .expect("Failed to extract player response");
        let tracks = response.caption_tracks();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].base_url, "https://example.com/tt");
        assert_eq!(tracks[0].language_code.as_deref(), Some("en"));
    }

    #[test]
    fn test_extraction_when_script_continues_after_response() {
        // Real pages chain more statements after the assignment instead of
        // closing the script tag.
        let html = r#"
            <script nonce="x">var ytInitialPlayerResponse = {"captions": null};var meta = {"a": 1};</script>
        "#;

        let page = WatchPage::from(html.to_string());
        let response = page.player_response().expect("Failed to extract JSON");
        assert!(response.caption_tracks().is_empty());
    }

    #[test]
    fn test_extraction_with_no_player_response() {
        let html = r#"
            <html>
                <body>
                    <p>No player data here</p>
                </body>
            </html>
        "#;

        let page = WatchPage::from(html.to_string());
        let result = page.player_response();
        assert!(matches!(result, Err(TranscriptError::Parse(_))));
    }

    #[test]
    fn test_extraction_with_invalid_json() {
        let html = r#"
            <script nonce="x">
                var ytInitialPlayerResponse = {invalid: json};
            </script>
        "#;

        let page = WatchPage::from(html.to_string());
        let result = page.player_response();
        assert!(matches!(result, Err(TranscriptError::Parse(_))));
    }

    #[test]
    fn test_caption_tracks_empty_when_captions_disabled() {
        let html = r#"<script>var ytInitialPlayerResponse = {"playabilityStatus": {"status": "OK"}};</script>"#;
        let page = WatchPage::new(html.to_string());
        let response = page.player_response().expect("Failed to extract JSON");
        assert!(response.caption_tracks().is_empty());
    }

    #[test]
    fn test_track_selection_prefers_manual_english() {
        let tracks = vec![
            track(Some("de"), None),
            track(Some("en"), Some("asr")),
            track(Some("en-US"), None),
        ];
        let selected = select_caption_track(&tracks).expect("Should select a track");
        assert_eq!(selected.language_code.as_deref(), Some("en-US"));
        assert!(selected.kind.is_none());
    }

    #[test]
    fn test_track_selection_falls_back_to_auto_generated_english() {
        let tracks = vec![track(Some("fr"), None), track(Some("en"), Some("asr"))];
        let selected = select_caption_track(&tracks).expect("Should select a track");
        assert_eq!(selected.kind.as_deref(), Some("asr"));
    }

    #[test]
    fn test_track_selection_falls_back_to_first_track() {
        let tracks = vec![track(Some("ja"), None), track(Some("ko"), None)];
        let selected = select_caption_track(&tracks).expect("Should select a track");
        assert_eq!(selected.language_code.as_deref(), Some("ja"));
    }

    #[test]
    fn test_track_selection_with_no_tracks() {
        assert!(select_caption_track(&[]).is_none());
    }

    #[test]
    fn test_timed_text_parsing() {
        let raw = r#"{
            "events": [
                {"tStartMs": 0, "dDurationMs": 2000, "segs": [{"utf8": "never gonna"}, {"utf8": " give you up"}]},
                {"tStartMs": 2000, "wWinId": 1},
                {"tStartMs": 2500, "dDurationMs": 1500, "segs": [{"utf8": "\n"}]},
                {"tStartMs": 4000, "dDurationMs": 1000, "segs": [{"utf8": "never gonna\nlet you down"}]}
            ]
        }"#;

        let segments = parse_timed_text(raw).expect("Failed to parse timedtext");
        assert_eq!(segments.len(), 2);

        assert_eq!(segments[0].text, "never gonna give you up");
        assert_eq!(segments[0].start, 0.0);
        assert_eq!(segments[0].duration, 2.0);

        assert_eq!(segments[1].text, "never gonna let you down");
        assert_eq!(segments[1].start, 4.0);
        assert_eq!(segments[1].duration, 1.0);
    }

    #[test]
    fn test_timed_text_with_no_events() {
        let segments = parse_timed_text("{}").expect("Empty payload should parse");
        assert!(segments.is_empty());
    }

    #[test]
    fn test_timed_text_with_invalid_json() {
        let result = parse_timed_text("<transcript>nope</transcript>");
        assert!(matches!(result, Err(TranscriptError::Parse(_))));
    }
}

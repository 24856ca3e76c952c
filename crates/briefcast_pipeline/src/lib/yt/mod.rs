pub mod timedtext;

use std::{fmt, future::Future, ops::Deref};

use itertools::Itertools;
use serde::Deserialize;

use crate::error::TranscriptError;

/// Extracts a video id from a user-supplied URL string.
///
/// Two shapes are recognized: the watch form (`youtube.com/watch?v=`), where
/// the id is everything strictly after the first `v=`, and the short-link
/// form (`youtu.be/`), where the id is everything after the last `/`.
/// Trailing query parameters are NOT stripped from the watch form; a garbage
/// id is the caption service's problem to reject, not ours.
pub fn extract_video_id(url: &str) -> Option<VideoId> {
    let url = url.trim();

    if url.contains("youtube.com/watch?v=") {
        url.split_once("v=").map(|(_, id)| VideoId::new(id))
    } else if url.contains("youtu.be/") {
        url.rsplit_once('/').map(|(_, id)| VideoId::new(id))
    } else {
        None
    }
}

/// Identifier substring extracted from a video URL. Carries no validity
/// guarantee beyond "some text followed the marker".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId(String);

impl VideoId {
    pub fn new(id: impl Into<String>) -> Self {
        VideoId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single timed caption cue.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
    /// Seconds from the start of the video.
    pub start: f64,
    /// Seconds the cue stays on screen.
    pub duration: f64,
}

/// The full caption text of one video: segment texts joined with single
/// spaces, in segment order. Timing metadata is dropped at this point.
#[derive(Debug, Clone)]
pub struct Transcript(String);

impl Transcript {
    pub fn from_segments(segments: &[TranscriptSegment]) -> Self {
        Transcript(segments.iter().map(|s| s.text.as_str()).join(" "))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for Transcript {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub trait TranscriptFetcher {
    fn fetch_transcript(
        &self,
        video_id: &VideoId,
    ) -> impl Future<Output = Result<Vec<TranscriptSegment>, TranscriptError>> + Send;
}

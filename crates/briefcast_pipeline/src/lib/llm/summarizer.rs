use std::future::Future;

use serde::Deserialize;

use crate::error::SummarizeError;

/// Condenses one chunk of transcript text. Implementations see each chunk in
/// isolation; stitching the per-chunk summaries back together is the
/// processor's job.
pub trait Summarizer {
    fn summarize(
        &self,
        chunk: &str,
    ) -> impl Future<Output = Result<SummaryResponse, SummarizeError>> + Send;
}

#[derive(Debug, Deserialize)]
pub struct SummaryResponse {
    pub summary_text: String,
}

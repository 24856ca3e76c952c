use std::sync::{Arc, Mutex};

use briefcast_pipeline::{SummarizeError, Summarizer, SummaryResponse};

#[derive(Clone)]
pub struct MockSummarizer {
    pub summary: String,
    pub numbered: bool,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockSummarizer {
    pub fn new(summary: &str) -> Self {
        Self {
            summary: summary.to_string(),
            numbered: false,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    /// Returns "<1>", "<2>", ... per call, so tests can pin the order in
    /// which chunk summaries are joined.
    pub fn numbered() -> Self {
        Self {
            summary: String::new(),
            numbered: true,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            summary: String::new(),
            numbered: false,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl Summarizer for MockSummarizer {
    async fn summarize(&self, chunk: &str) -> Result<SummaryResponse, SummarizeError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(chunk.to_string());
        let call_number = calls.len();
        drop(calls);

        if let Some(ref msg) = self.fail_with {
            return Err(SummarizeError::Api {
                status: 500,
                message: msg.clone(),
            });
        }

        let summary_text = if self.numbered {
            format!("<{call_number}>")
        } else {
            self.summary.clone()
        };
        Ok(SummaryResponse { summary_text })
    }
}

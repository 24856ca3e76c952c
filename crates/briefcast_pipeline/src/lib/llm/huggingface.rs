use reqwest::Client;

use crate::{error::SummarizeError, Summarizer, SummaryResponse};

pub struct HuggingFaceClient {
    client: Client,
    api_token: String,
    model: String,
    base_url: String,
}

impl HuggingFaceClient {
    pub const DEFAULT_MODEL: &str = "t5-small";

    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_token: api_token.into(),
            model: Self::DEFAULT_MODEL.into(),
            base_url: "https://api-inference.huggingface.co".into(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// One Inference API call for one chunk. The response is a ranked list
    /// of candidate summaries; callers take the top one.
    async fn send_summarize_request(
        &self,
        input: &str,
    ) -> Result<Vec<SummaryResponse>, SummarizeError> {
        let body = serde_json::json!({
            "inputs": input,
            "parameters": {
                "max_length": 150,
                "min_length": 30,
                "do_sample": false
            },
            "options": {
                "wait_for_model": true
            }
        });

        let resp = self
            .client
            .post(format!("{}/models/{}", self.base_url, self.model))
            .bearer_auth(&self.api_token)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(SummarizeError::Api { status, message });
        }

        Ok(resp.json::<Vec<SummaryResponse>>().await?)
    }
}

impl Summarizer for HuggingFaceClient {
    async fn summarize(&self, chunk: &str) -> Result<SummaryResponse, SummarizeError> {
        let candidates = self
            .send_summarize_request(chunk)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize chunk"))?;

        candidates
            .into_iter()
            .next()
            .ok_or(SummarizeError::NoCandidates)
    }
}

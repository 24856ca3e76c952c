pub mod summarizer;
pub mod synthesizer;
pub mod transcript_fetcher;

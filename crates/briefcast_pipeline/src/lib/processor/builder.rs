use crate::{
    chunk::DEFAULT_CHUNK_SIZE, tts::SpeechSynthesizer, yt::TranscriptFetcher, BriefProcessor,
    Summarizer,
};

pub struct BriefProcessorBuilder<T = (), S = (), V = ()> {
    transcript_fetcher: T,
    summarizer: S,
    synthesizer: V,
    chunk_size: usize,
}

impl BriefProcessorBuilder {
    pub fn new() -> Self {
        Self {
            transcript_fetcher: (),
            summarizer: (),
            synthesizer: (),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl Default for BriefProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S, V> BriefProcessorBuilder<T, S, V> {
    pub fn transcript_fetcher<T2: TranscriptFetcher + Send + Sync + 'static>(
        self,
        transcript_fetcher: T2,
    ) -> BriefProcessorBuilder<T2, S, V> {
        BriefProcessorBuilder {
            transcript_fetcher,
            summarizer: self.summarizer,
            synthesizer: self.synthesizer,
            chunk_size: self.chunk_size,
        }
    }

    pub fn summarizer<S2: Summarizer + Send + Sync + 'static>(
        self,
        summarizer: S2,
    ) -> BriefProcessorBuilder<T, S2, V> {
        BriefProcessorBuilder {
            transcript_fetcher: self.transcript_fetcher,
            summarizer,
            synthesizer: self.synthesizer,
            chunk_size: self.chunk_size,
        }
    }

    pub fn synthesizer<V2: SpeechSynthesizer + Send + Sync + 'static>(
        self,
        synthesizer: V2,
    ) -> BriefProcessorBuilder<T, S, V2> {
        BriefProcessorBuilder {
            transcript_fetcher: self.transcript_fetcher,
            summarizer: self.summarizer,
            synthesizer,
            chunk_size: self.chunk_size,
        }
    }

    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }
}

impl<T, S, V> BriefProcessorBuilder<T, S, V>
where
    T: TranscriptFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    V: SpeechSynthesizer + Send + Sync + 'static,
{
    pub fn build(self) -> BriefProcessor<T, S, V> {
        BriefProcessor {
            transcript_fetcher: self.transcript_fetcher,
            summarizer: self.summarizer,
            synthesizer: self.synthesizer,
            chunk_size: self.chunk_size,
        }
    }
}

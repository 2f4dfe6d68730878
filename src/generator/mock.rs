use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::{Generator, ServiceError};

/// A scripted generator for tests. Returns pre-defined replies in order and
/// remembers every prompt it was given.
pub struct MockGenerator {
    replies: Vec<Result<String, ServiceError>>,
    delays: Vec<Duration>,
    index: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    pub fn new(replies: Vec<Result<String, ServiceError>>) -> Self {
        Self {
            replies,
            delays: Vec::new(),
            index: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Always succeed with `text`.
    pub fn replying(text: &str) -> Self {
        Self::new(vec![Ok(text.to_string())])
    }

    /// Always fail with `error`.
    pub fn failing(error: ServiceError) -> Self {
        Self::new(vec![Err(error)])
    }

    /// Sleep `delays[i]` before answering call `i`.
    pub fn with_delays(mut self, delays: Vec<Duration>) -> Self {
        self.delays = delays;
        self
    }

    /// How many times `generate` was called.
    pub fn calls(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Generator for MockGenerator {
    fn model(&self) -> &str {
        "mock-model"
    }

    async fn generate(&self, prompt: &str) -> Result<String, ServiceError> {
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        if let Some(delay) = self.delays.get(i) {
            tokio::time::sleep(*delay).await;
        }

        // A single scripted reply repeats forever.
        let reply = if self.replies.len() == 1 {
            self.replies.first()
        } else {
            self.replies.get(i)
        };
        reply.cloned().unwrap_or_else(|| {
            Err(ServiceError::Network(format!(
                "MockGenerator: no more replies (called {} times)",
                i + 1
            )))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replies_in_order() {
        let mock = MockGenerator::new(vec![Ok("one".into()), Ok("two".into())]);
        assert_eq!(mock.generate("a").await.unwrap(), "one");
        assert_eq!(mock.generate("b").await.unwrap(), "two");
        assert!(mock.generate("c").await.is_err());
        assert_eq!(mock.calls(), 3);
        assert_eq!(mock.prompts(), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn single_reply_repeats() {
        let mock = MockGenerator::replying("same");
        assert_eq!(mock.generate("x").await.unwrap(), "same");
        assert_eq!(mock.generate("y").await.unwrap(), "same");
    }

    #[tokio::test]
    async fn failing_returns_error() {
        let mock = MockGenerator::failing(ServiceError::Network("down".into()));
        assert_eq!(
            mock.generate("x").await.unwrap_err(),
            ServiceError::Network("down".into())
        );
    }
}

//! Embedding client: the single point of entry for sentence-embedding inference.
//!
//! The model is loaded once at startup and shared read-only behind `Arc<dyn Embedder>`.
//! Inference is blocking and CPU-bound; async callers wrap it in `spawn_blocking`.
use std::path::Path;
use std::sync::Mutex;

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use tracing::{debug, info};

use crate::errors::AppError;

/// Model used for all semantic matching.
pub const MODEL: &str = "sentence-transformers/all-MiniLM-L6-v2";

/// Turns short texts into fixed-length vectors.
///
/// Implement this to swap the model without touching the matcher or its callers.
pub trait Embedder: Send + Sync {
    /// Returns one vector per input text, in input order.
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, AppError>;

    fn model_name(&self) -> &str;
}

/// `fastembed`-backed embedder running all-MiniLM-L6-v2 locally.
pub struct FastEmbedder {
    // Inference needs exclusive access to the ONNX session.
    model: Mutex<TextEmbedding>,
}

impl FastEmbedder {
    /// Loads (downloading on first use) the model. Failures surface as `Embedding` errors.
    pub fn load(cache_dir: Option<&Path>) -> Result<Self, AppError> {
        info!("Loading embedding model {MODEL}...");

        let mut options = InitOptions::new(EmbeddingModel::AllMiniLML6V2);
        options.show_download_progress = false;
        if let Some(dir) = cache_dir {
            options.cache_dir = dir.to_path_buf();
        }

        let model = TextEmbedding::try_new(options)
            .map_err(|e| AppError::Embedding(format!("failed to load {MODEL}: {e}")))?;

        info!("Embedding model loaded");
        Ok(Self {
            model: Mutex::new(model),
        })
    }
}

impl Embedder for FastEmbedder {
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, AppError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let mut model = self
            .model
            .lock()
            .map_err(|_| AppError::Embedding("embedding model lock poisoned".to_string()))?;

        debug!(count = texts.len(), "Embedding texts");
        model
            .embed(texts.to_vec(), None)
            .map_err(|e| AppError::Embedding(e.to_string()))
    }

    fn model_name(&self) -> &str {
        MODEL
    }
}

#[cfg(test)]
pub mod testing {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    const DIMENSIONS: usize = 512;

    /// Deterministic stand-in for the real model: character-bigram count vectors
    /// over the text padded with `^`/`$` markers.
    ///
    /// Identical strings score 1.0; unrelated skill names score well below 0.75.
    #[derive(Default)]
    pub struct BigramEmbedder {
        calls: AtomicUsize,
    }

    impl BigramEmbedder {
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn vector(text: &str) -> Vec<f32> {
            let mut v = vec![0.0_f32; DIMENSIONS];
            let bytes = format!("^{}$", text.to_lowercase()).into_bytes();
            for pair in bytes.windows(2) {
                let idx = (pair[0] as usize * 31 + pair[1] as usize) % DIMENSIONS;
                v[idx] += 1.0;
            }
            v
        }
    }

    impl Embedder for BigramEmbedder {
        fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(texts.iter().map(|t| Self::vector(t)).collect())
        }

        fn model_name(&self) -> &str {
            "test-bigram"
        }
    }

    /// Embedder that always fails, for error-path tests.
    pub struct FailingEmbedder;

    impl Embedder for FailingEmbedder {
        fn embed(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>, AppError> {
            Err(AppError::Embedding("model unavailable".to_string()))
        }

        fn model_name(&self) -> &str {
            "test-failing"
        }
    }
}

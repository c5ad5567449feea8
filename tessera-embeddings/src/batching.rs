//! Split texts into provider-sized batches and validate what comes back.

use tessera_core::traits::IEmbeddingProvider;
use tessera_core::{EmbeddingError, TesseraError, TesseraResult};
use tracing::{debug, warn};

/// Embed `texts` in chunks of at most `batch_size`.
///
/// Every batch must return one non-empty vector per text, and all vectors
/// must share one dimensionality (`expected_dims` when given). Any failure
/// aborts the whole call; nothing is returned for the batches that succeeded.
pub fn embed_in_batches(
    provider: &dyn IEmbeddingProvider,
    texts: &[String],
    batch_size: usize,
    expected_dims: Option<usize>,
) -> TesseraResult<Vec<Vec<f32>>> {
    let mut dims = expected_dims;
    let mut out = Vec::with_capacity(texts.len());

    for (batch_no, chunk) in texts.chunks(batch_size.max(1)).enumerate() {
        let vectors = provider.embed_batch(chunk).map_err(|e| {
            warn!(provider = provider.name(), batch = batch_no, error = %e, "embedding batch failed");
            as_embedding_failure(provider, e)
        })?;

        if vectors.len() != chunk.len() {
            return Err(EmbeddingError::LengthMismatch {
                expected: chunk.len(),
                actual: vectors.len(),
            }
            .into());
        }

        for (i, vector) in vectors.iter().enumerate() {
            if vector.is_empty() {
                return Err(EmbeddingError::EmptyEmbedding {
                    index: out.len() + i,
                }
                .into());
            }
            match dims {
                Some(expected) if expected != vector.len() => {
                    return Err(EmbeddingError::DimensionMismatch {
                        expected,
                        actual: vector.len(),
                    }
                    .into());
                }
                Some(_) => {}
                None => dims = Some(vector.len()),
            }
        }

        debug!(batch = batch_no, size = chunk.len(), "embedding batch complete");
        out.extend(vectors);
    }

    Ok(out)
}

/// Provider errors that are not already embedding errors are reported as
/// provider failures.
fn as_embedding_failure(provider: &dyn IEmbeddingProvider, error: TesseraError) -> TesseraError {
    match error {
        TesseraError::EmbeddingError(_) => error,
        other => EmbeddingError::ProviderFailed {
            provider: provider.name().to_string(),
            reason: other.to_string(),
        }
        .into(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct Counting {
        calls: AtomicUsize,
        dims: usize,
    }

    impl IEmbeddingProvider for Counting {
        fn embed_batch(&self, texts: &[String]) -> TesseraResult<Vec<Vec<f32>>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(texts.iter().map(|_| vec![1.0; self.dims]).collect())
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    fn texts(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("t{i}")).collect()
    }

    #[test]
    fn splits_into_batches() {
        let provider = Counting {
            calls: AtomicUsize::new(0),
            dims: 3,
        };
        let out = embed_in_batches(&provider, &texts(7), 3, None).unwrap();
        assert_eq!(out.len(), 7);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn empty_input_never_calls_provider() {
        let provider = Counting {
            calls: AtomicUsize::new(0),
            dims: 3,
        };
        assert!(embed_in_batches(&provider, &[], 3, None).unwrap().is_empty());
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn expected_dimensions_are_enforced() {
        let provider = Counting {
            calls: AtomicUsize::new(0),
            dims: 3,
        };
        let err = embed_in_batches(&provider, &texts(2), 10, Some(4)).unwrap_err();
        assert!(matches!(
            err,
            TesseraError::EmbeddingError(EmbeddingError::DimensionMismatch {
                expected: 4,
                actual: 3
            })
        ));
    }

    struct Short;

    impl IEmbeddingProvider for Short {
        fn embed_batch(&self, texts: &[String]) -> TesseraResult<Vec<Vec<f32>>> {
            Ok(texts.iter().skip(1).map(|_| vec![1.0]).collect())
        }

        fn name(&self) -> &str {
            "short"
        }
    }

    #[test]
    fn wrong_length_is_rejected() {
        let err = embed_in_batches(&Short, &texts(3), 10, None).unwrap_err();
        assert!(matches!(
            err,
            TesseraError::EmbeddingError(EmbeddingError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        ));
    }

    struct Failing;

    impl IEmbeddingProvider for Failing {
        fn embed_batch(&self, _texts: &[String]) -> TesseraResult<Vec<Vec<f32>>> {
            Err(TesseraError::ConfigError {
                reason: "no api key".to_string(),
            })
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn provider_errors_become_embedding_failures() {
        let err = embed_in_batches(&Failing, &texts(1), 10, None).unwrap_err();
        match err {
            TesseraError::EmbeddingError(EmbeddingError::ProviderFailed { provider, reason }) => {
                assert_eq!(provider, "failing");
                assert!(reason.contains("no api key"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

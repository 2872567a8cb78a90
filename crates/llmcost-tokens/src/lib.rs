use llmcost_core::{CoreError, Result, pricing::normalize_model_id};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tiktoken_rs::CoreBPE;
use tiktoken_rs::tokenizer::{Tokenizer, get_tokenizer};

/// Result of counting a prompt under a model's encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenCount {
    pub model_id: String,
    pub encoding_name: &'static str,
    pub token_count: usize,
}

/// Token counter using tiktoken, resolving the encoding from the model name
///
/// Encodings are built lazily and cached, since constructing a BPE is far
/// more expensive than encoding a prompt with it.
#[derive(Default)]
pub struct TokenCounter {
    encodings: RwLock<HashMap<Tokenizer, Arc<CoreBPE>>>,
}

impl TokenCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the encoding a model uses (e.g. `cl100k_base` for gpt-4)
    pub fn encoding_for_model(&self, model_id: &str) -> Result<&'static str> {
        resolve(model_id).map(encoding_name)
    }

    /// Count tokens for a single string
    pub fn count(&self, text: &str, model_id: &str) -> Result<TokenCount> {
        let tokenizer = resolve(model_id)?;
        let bpe = self.bpe(tokenizer)?;
        let token_count = bpe.encode_with_special_tokens(text).len();

        tracing::debug!(
            model = model_id,
            encoding = encoding_name(tokenizer),
            token_count,
            "Counted prompt tokens"
        );

        Ok(TokenCount {
            model_id: normalize_model_id(model_id),
            encoding_name: encoding_name(tokenizer),
            token_count,
        })
    }

    /// Count tokens for multiple strings (batch processing)
    pub fn count_batch(&self, texts: &[&str], model_id: &str) -> Result<Vec<usize>> {
        let bpe = self.bpe(resolve(model_id)?)?;
        Ok(texts
            .iter()
            .map(|text| bpe.encode_with_special_tokens(text).len())
            .collect())
    }

    fn bpe(&self, tokenizer: Tokenizer) -> Result<Arc<CoreBPE>> {
        {
            let cache = self.encodings.read().unwrap_or_else(|e| e.into_inner());
            if let Some(bpe) = cache.get(&tokenizer) {
                return Ok(Arc::clone(bpe));
            }
        }

        let bpe = tiktoken_rs::get_bpe_from_tokenizer(tokenizer)
            .map(Arc::new)
            .map_err(|e| CoreError::Tokenizer(format!("{}: {}", encoding_name(tokenizer), e)))?;

        let mut cache = self.encodings.write().unwrap_or_else(|e| e.into_inner());
        Ok(Arc::clone(cache.entry(tokenizer).or_insert(bpe)))
    }
}

fn resolve(model_id: &str) -> Result<Tokenizer> {
    let normalized = normalize_model_id(model_id);
    if normalized.is_empty() {
        return Err(CoreError::UnsupportedModel(model_id.to_string()));
    }
    get_tokenizer(&normalized).ok_or_else(|| CoreError::UnsupportedModel(model_id.to_string()))
}

fn encoding_name(tokenizer: Tokenizer) -> &'static str {
    match tokenizer {
        Tokenizer::O200kBase => "o200k_base",
        Tokenizer::Cl100kBase => "cl100k_base",
        Tokenizer::P50kBase => "p50k_base",
        Tokenizer::R50kBase => "r50k_base",
        Tokenizer::P50kEdit => "p50k_edit",
        Tokenizer::Gpt2 => "gpt2",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_count() {
        let counter = TokenCounter::new();

        let count = counter.count("Hello, world!", "gpt-3.5-turbo").unwrap();
        assert!(count.token_count > 0 && count.token_count < 10);
        assert_eq!(count.encoding_name, "cl100k_base");
        assert_eq!(count.model_id, "gpt-3.5-turbo");
    }

    #[test]
    fn test_empty_text_has_no_tokens() {
        let counter = TokenCounter::new();
        for model in ["gpt-3.5-turbo", "gpt-4"] {
            assert_eq!(counter.count("", model).unwrap().token_count, 0);
        }
    }

    #[test]
    fn test_count_is_deterministic() {
        let counter = TokenCounter::new();
        let text = "The quick brown fox jumps over the lazy dog. 🦊";

        let first = counter.count(text, "gpt-4").unwrap();
        let second = counter.count(text, "gpt-4").unwrap();
        assert_eq!(first, second);

        // A fresh counter builds its own encoding and must agree
        let other = TokenCounter::new().count(text, "gpt-4").unwrap();
        assert_eq!(first, other);
    }

    #[test]
    fn test_model_name_is_normalized() {
        let counter = TokenCounter::new();
        let count = counter.count("hello", "GPT-4").unwrap();
        assert_eq!(count.model_id, "gpt-4");
        assert_eq!(counter.encoding_for_model(" GPT-3.5-Turbo ").unwrap(), "cl100k_base");
    }

    #[test]
    fn test_unsupported_model() {
        let counter = TokenCounter::new();
        assert_eq!(
            counter.count("hello", "not-a-model"),
            Err(CoreError::UnsupportedModel("not-a-model".to_string()))
        );
        assert!(matches!(
            counter.count("hello", "  "),
            Err(CoreError::UnsupportedModel(_))
        ));
    }

    #[test]
    fn test_batch_count() {
        let counter = TokenCounter::new();

        let texts = vec!["Hello", "world", "!"];
        let counts = counter.count_batch(&texts, "gpt-4").unwrap();

        assert_eq!(counts.len(), 3);
        assert!(counts.iter().all(|&c| c > 0));
    }
}

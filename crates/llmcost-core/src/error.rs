use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Please enter a prompt")]
    EmptyInput,

    #[error("Please select a valid LLM (unsupported model: '{0}')")]
    UnsupportedModel(String),

    #[error("Invalid rate for '{model}': {rate} (rates must be finite and non-negative)")]
    InvalidRate { model: String, rate: f64 },

    #[error("Tokenizer error: {0}")]
    Tokenizer(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;

//! Form submissions and their results

use llmcost_core::{CostProjection, PodSize, PodType, UsageAssumptions, VectorStoreProvider};
use serde::{Deserialize, Serialize};

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

/// Prompt Token Counter submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenCountRequest {
    #[serde(default)]
    pub text: String,

    #[serde(default = "default_model")]
    pub model: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenCountResponse {
    pub model: String,
    pub encoding: String,
    pub token_count: usize,
}

/// LLM Cost Calculator submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmCostRequest {
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(flatten)]
    pub usage: UsageAssumptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmCostResponse {
    pub model: String,
    pub display_name: String,
    pub prompts_per_day: u64,
    /// Full precision
    pub projection: CostProjection,
    /// Rounded to cents
    pub display: CostProjection,
}

/// Vector Store Cost submission
///
/// Pod type and size only matter for paid managed tiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorStoreCostRequest {
    pub provider: VectorStoreProvider,

    #[serde(default)]
    pub pod_type: Option<PodType>,

    #[serde(default)]
    pub pod_size: Option<PodSize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorStoreCostResponse {
    pub provider: VectorStoreProvider,
    pub pod_type: PodType,
    pub pod_size: PodSize,
    pub hourly_rate: f64,
    pub projection: CostProjection,
    pub display: CostProjection,
}

/// A model offered by the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub id: String,
    pub display_name: String,
    pub prompt_per_1k: f64,
    pub completion_per_1k: f64,
    /// None when the tokenizer does not know the model
    pub encoding: Option<String>,
}

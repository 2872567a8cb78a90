//! Per-token model pricing

use crate::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Built-in list prices: (id, display name, prompt per 1K, completion per 1K).
pub const BUILTIN_MODELS: [(&str, &str, f64, f64); 2] = [
    ("gpt-3.5-turbo", "GPT-3.5-Turbo", 0.0015, 0.002),
    ("gpt-4", "GPT-4", 0.03, 0.06),
];

/// Published rates for a single model, in USD per token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPricing {
    pub model_id: String,
    pub display_name: String,
    pub prompt_rate_per_token: f64,
    pub completion_rate_per_token: f64,
}

impl ModelPricing {
    /// Create pricing from per-token rates. Rates must be finite and non-negative.
    pub fn new(
        model_id: impl Into<String>,
        display_name: impl Into<String>,
        prompt_rate_per_token: f64,
        completion_rate_per_token: f64,
    ) -> Result<Self> {
        let model_id = normalize_model_id(&model_id.into());
        for rate in [prompt_rate_per_token, completion_rate_per_token] {
            if !rate.is_finite() || rate < 0.0 {
                return Err(CoreError::InvalidRate {
                    model: model_id,
                    rate,
                });
            }
        }

        Ok(Self {
            model_id,
            display_name: display_name.into(),
            prompt_rate_per_token,
            completion_rate_per_token,
        })
    }

    /// Create pricing from rates quoted per 1K tokens (how providers publish them).
    pub fn per_thousand(
        model_id: impl Into<String>,
        display_name: impl Into<String>,
        prompt_per_1k: f64,
        completion_per_1k: f64,
    ) -> Result<Self> {
        Self::new(
            model_id,
            display_name,
            prompt_per_1k / 1000.0,
            completion_per_1k / 1000.0,
        )
    }

    pub fn prompt_rate_per_1k(&self) -> f64 {
        self.prompt_rate_per_token * 1000.0
    }

    pub fn completion_rate_per_1k(&self) -> f64 {
        self.completion_rate_per_token * 1000.0
    }
}

/// Lookup table from model id to pricing.
///
/// Keys are normalized (trimmed, lower-cased) so "GPT-4" and "gpt-4" resolve
/// to the same entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PricingTable {
    models: BTreeMap<String, ModelPricing>,
}

impl PricingTable {
    /// Empty table, for building from configuration.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in OpenAI list prices.
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for (id, name, prompt, completion) in BUILTIN_MODELS {
            if let Ok(pricing) = ModelPricing::per_thousand(id, name, prompt, completion) {
                table.insert(pricing);
            }
        }
        table
    }

    /// Insert or replace a model's pricing.
    pub fn insert(&mut self, pricing: ModelPricing) {
        self.models.insert(pricing.model_id.clone(), pricing);
    }

    pub fn get(&self, model_id: &str) -> Option<&ModelPricing> {
        self.models.get(&normalize_model_id(model_id))
    }

    /// Like [`PricingTable::get`], failing with `UnsupportedModel`.
    pub fn require(&self, model_id: &str) -> Result<&ModelPricing> {
        self.get(model_id)
            .ok_or_else(|| CoreError::UnsupportedModel(model_id.to_string()))
    }

    /// Models in id order.
    pub fn models(&self) -> impl Iterator<Item = &ModelPricing> {
        self.models.values()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// Canonical form of a model id.
pub fn normalize_model_id(model_id: &str) -> String {
    model_id.trim().to_lowercase()
}

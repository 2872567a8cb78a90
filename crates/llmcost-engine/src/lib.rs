use anyhow::Result as AnyResult;
use llmcost_config::{Config, UsageLimits};
use llmcost_core::{
    CoreError, PricingTable, Result, VectorStoreRateTable, VectorStoreTier, estimate_llm_cost,
    estimate_vector_store_cost,
};
use llmcost_tokens::TokenCounter;
use std::sync::Arc;

pub mod request;

pub use request::{
    LlmCostRequest, LlmCostResponse, ModelSummary, TokenCountRequest, TokenCountResponse,
    VectorStoreCostRequest, VectorStoreCostResponse,
};

/// Handles form submissions against read-only pricing tables
///
/// Cheap to clone; every clone shares the tables and the tokenizer cache.
#[derive(Clone)]
pub struct Calculator {
    pricing: Arc<PricingTable>,
    rates: Arc<VectorStoreRateTable>,
    token_counter: Arc<TokenCounter>,
    limits: UsageLimits,
}

impl Calculator {
    pub fn new(pricing: PricingTable, rates: VectorStoreRateTable) -> Self {
        Self {
            pricing: Arc::new(pricing),
            rates: Arc::new(rates),
            token_counter: Arc::new(TokenCounter::new()),
            limits: UsageLimits::default(),
        }
    }

    pub fn from_config(config: &Config) -> AnyResult<Self> {
        let calculator = Self::new(config.pricing_table()?, config.rate_table()?)
            .with_limits(config.limits);
        tracing::debug!(
            models = calculator.pricing.len(),
            pod_rates = calculator.rates.rates().len(),
            default_hourly_rate = calculator.rates.default_hourly_rate(),
            "Calculator ready"
        );
        Ok(calculator)
    }

    pub fn with_limits(mut self, limits: UsageLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> UsageLimits {
        self.limits
    }

    /// Count tokens in a prompt. An empty prompt is rejected with `EmptyInput`.
    pub fn count_prompt(&self, req: &TokenCountRequest) -> Result<TokenCountResponse> {
        if req.text.is_empty() {
            return Err(CoreError::EmptyInput);
        }

        let count = self.token_counter.count(&req.text, &req.model)?;
        Ok(TokenCountResponse {
            model: count.model_id,
            encoding: count.encoding_name.to_string(),
            token_count: count.token_count,
        })
    }

    /// Project LLM spend. The model must be in the pricing table.
    pub fn estimate_llm(&self, req: &LlmCostRequest) -> Result<LlmCostResponse> {
        let pricing = self.pricing.require(&req.model)?;
        let estimate = estimate_llm_cost(&req.usage, pricing);

        tracing::debug!(
            model = %pricing.model_id,
            prompts_per_day = estimate.prompts_per_day,
            cost_per_day = estimate.projection.per_day,
            "Estimated LLM cost"
        );

        Ok(LlmCostResponse {
            model: estimate.model_id,
            display_name: pricing.display_name.clone(),
            prompts_per_day: estimate.prompts_per_day,
            projection: estimate.projection,
            display: estimate.projection.rounded(),
        })
    }

    /// Project vector-store hosting cost. Always resolves to a rate.
    pub fn estimate_vector_store(&self, req: &VectorStoreCostRequest) -> VectorStoreCostResponse {
        let tier = VectorStoreTier::new(
            req.provider,
            req.pod_type.unwrap_or_default(),
            req.pod_size.unwrap_or_default(),
        );
        let estimate = estimate_vector_store_cost(&tier, &self.rates);

        tracing::debug!(
            provider = %tier.provider,
            pod = %format!("{}.{}", tier.pod_type, tier.pod_size),
            hourly_rate = estimate.hourly_rate,
            "Estimated vector store cost"
        );

        VectorStoreCostResponse {
            provider: tier.provider,
            pod_type: tier.pod_type,
            pod_size: tier.pod_size,
            hourly_rate: estimate.hourly_rate,
            projection: estimate.projection,
            display: estimate.projection.rounded(),
        }
    }

    /// Models in the pricing table, with the encoding each one uses
    pub fn models(&self) -> Vec<ModelSummary> {
        self.pricing
            .models()
            .map(|m| ModelSummary {
                id: m.model_id.clone(),
                display_name: m.display_name.clone(),
                prompt_per_1k: m.prompt_rate_per_1k(),
                completion_per_1k: m.completion_rate_per_1k(),
                encoding: self
                    .token_counter
                    .encoding_for_model(&m.model_id)
                    .ok()
                    .map(str::to_string),
            })
            .collect()
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(PricingTable::builtin(), VectorStoreRateTable::builtin())
    }
}

//! LLM usage cost estimation

use crate::{CostProjection, ModelPricing};
use serde::{Deserialize, Serialize};

/// Organizational usage assumptions for one estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageAssumptions {
    pub employee_count: u32,
    pub prompts_per_employee_per_day: u32,
    pub avg_prompt_tokens: u32,
    pub avg_completion_tokens: u32,
}

impl UsageAssumptions {
    /// Total prompts sent across the organization per day.
    pub fn prompts_per_day(&self) -> u64 {
        u64::from(self.employee_count) * u64::from(self.prompts_per_employee_per_day)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmCostEstimate {
    pub model_id: String,
    pub prompts_per_day: u64,
    pub projection: CostProjection,
}

/// Project spend on a model from usage assumptions.
///
/// Month and year assume business days only (see [`CostProjection::weekdays`]).
/// Any zero input yields a zero projection.
pub fn estimate_llm_cost(usage: &UsageAssumptions, pricing: &ModelPricing) -> LlmCostEstimate {
    let prompts_per_day = usage.prompts_per_day();
    let prompts = prompts_per_day as f64;

    let prompt_cost = prompts * f64::from(usage.avg_prompt_tokens) * pricing.prompt_rate_per_token;
    let completion_cost =
        prompts * f64::from(usage.avg_completion_tokens) * pricing.completion_rate_per_token;

    LlmCostEstimate {
        model_id: pricing.model_id.clone(),
        prompts_per_day,
        projection: CostProjection::weekdays(prompt_cost + completion_cost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PricingTable;

    fn usage(employees: u32, freq: u32, prompt: u32, completion: u32) -> UsageAssumptions {
        UsageAssumptions {
            employee_count: employees,
            prompts_per_employee_per_day: freq,
            avg_prompt_tokens: prompt,
            avg_completion_tokens: completion,
        }
    }

    #[test]
    fn test_turbo_scenario() {
        let table = PricingTable::builtin();
        let pricing = table.get("gpt-3.5-turbo").unwrap();

        let estimate = estimate_llm_cost(&usage(10, 5, 100, 50), pricing);

        assert_eq!(estimate.prompts_per_day, 50);
        assert!((estimate.projection.per_day - 0.0125).abs() < 1e-12);
        assert!((estimate.projection.per_year - 0.0125 * 365.0 * 5.0 / 7.0).abs() < 1e-12);
        assert!((estimate.projection.per_year - 3.259).abs() < 1e-3);
    }

    #[test]
    fn test_zero_usage_is_free_for_every_model() {
        let table = PricingTable::builtin();
        for pricing in table.models() {
            let estimate = estimate_llm_cost(&UsageAssumptions::default(), pricing);
            assert!(estimate.projection.is_zero(), "{}", pricing.model_id);
            assert_eq!(estimate.prompts_per_day, 0);
        }
    }

    #[test]
    fn test_any_zero_field_zeroes_cost() {
        let table = PricingTable::builtin();
        let pricing = table.get("gpt-4").unwrap();

        assert!(estimate_llm_cost(&usage(0, 300, 300, 1000), pricing).projection.is_zero());
        assert!(estimate_llm_cost(&usage(200, 0, 300, 1000), pricing).projection.is_zero());
        assert!(estimate_llm_cost(&usage(200, 300, 0, 0), pricing).projection.is_zero());
    }

    #[test]
    fn test_year_is_weekdays_multiple_of_day() {
        let table = PricingTable::builtin();
        let pricing = table.get("gpt-4").unwrap();

        for (e, f, p, c) in [(1, 1, 1, 1), (200, 300, 300, 1000), (17, 3, 250, 9)] {
            let projection = estimate_llm_cost(&usage(e, f, p, c), pricing).projection;
            assert!(projection.per_day >= 0.0);
            let expected = projection.per_day * 365.0 * 5.0 / 7.0;
            assert!((projection.per_year - expected).abs() <= expected.abs() * 1e-12);
            assert!((projection.per_month - expected / 12.0).abs() <= expected.abs() * 1e-12);
        }
    }

    #[test]
    fn test_large_inputs_do_not_overflow() {
        let u = usage(u32::MAX, u32::MAX, 1, 0);
        assert_eq!(u.prompts_per_day(), u64::from(u32::MAX) * u64::from(u32::MAX));
    }
}

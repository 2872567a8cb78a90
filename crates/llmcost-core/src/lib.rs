//! Core domain models and cost logic for llmcost
//!
//! This crate contains:
//! - Pricing tables (per-token model rates, hourly vector-store rates)
//! - Cost projections (day / month / year)
//! - The LLM and vector-store estimators

pub mod error;
pub mod llm;
pub mod pricing;
pub mod projection;
pub mod vector_store;

pub use error::{CoreError, Result};
pub use llm::{LlmCostEstimate, UsageAssumptions, estimate_llm_cost};
pub use pricing::{ModelPricing, PricingTable};
pub use projection::CostProjection;
pub use vector_store::{
    PodSize, PodType, VectorStoreCostEstimate, VectorStoreProvider, VectorStoreRate,
    VectorStoreRateTable, VectorStoreTier, estimate_vector_store_cost,
};

use anyhow::Result;
use llmcost_core::{PodSize, PodType, VectorStoreProvider};
use llmcost_engine::{Calculator, VectorStoreCostRequest};

pub fn handle(
    calculator: &Calculator,
    provider: VectorStoreProvider,
    pod_type: Option<PodType>,
    pod_size: Option<PodSize>,
    json: bool,
) -> Result<()> {
    let resp = calculator.estimate_vector_store(&VectorStoreCostRequest {
        provider,
        pod_type,
        pod_size,
    });

    if json {
        return super::print_json(&resp);
    }

    println!("Cost Analysis: {}", resp.provider.label());
    if !resp.provider.is_free() {
        println!("  Pod: {}.{}", resp.pod_type, resp.pod_size);
    }
    println!("  Hourly rate: {:.4} $", resp.hourly_rate);
    super::print_projection(&resp.projection);

    Ok(())
}

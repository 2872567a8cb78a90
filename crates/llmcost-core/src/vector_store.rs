//! Vector-store hosting cost estimation
//!
//! Managed stores are billed per pod-hour. The rate table is keyed by
//! (provider, pod type, pod size) and falls back to a default hourly rate
//! for combinations it does not list. Open-source and free-tier stores
//! always cost nothing.

use crate::projection::HOURS_PER_DAY;
use crate::CostProjection;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Hourly rate of a standard s1.x1 pod, applied to every paid configuration
/// that has no entry of its own.
pub const DEFAULT_HOURLY_RATE: f64 = 0.0960;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VectorStoreProvider {
    /// Self-hosted open-source store.
    #[serde(rename = "open-source")]
    OpenSource,
    #[serde(rename = "free")]
    ManagedServiceFree,
    #[serde(rename = "standard")]
    ManagedServiceStandard,
    #[serde(rename = "enterprise")]
    ManagedServiceEnterprise,
}

impl VectorStoreProvider {
    pub const ALL: [Self; 4] = [
        Self::OpenSource,
        Self::ManagedServiceFree,
        Self::ManagedServiceStandard,
        Self::ManagedServiceEnterprise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenSource => "open-source",
            Self::ManagedServiceFree => "free",
            Self::ManagedServiceStandard => "standard",
            Self::ManagedServiceEnterprise => "enterprise",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OpenSource => "Open Source",
            Self::ManagedServiceFree => "Pinecone (Free)",
            Self::ManagedServiceStandard => "Pinecone (Standard)",
            Self::ManagedServiceEnterprise => "Pinecone (Enterprise)",
        }
    }

    /// Whether this provider is never billed, whatever the pod.
    pub fn is_free(&self) -> bool {
        matches!(self, Self::OpenSource | Self::ManagedServiceFree)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PodType {
    /// Storage optimized.
    #[default]
    S1,
    /// Performance optimized.
    P1,
    /// Second generation performance.
    P2,
}

impl PodType {
    pub const ALL: [Self; 3] = [Self::S1, Self::P1, Self::P2];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S1 => "s1",
            Self::P1 => "p1",
            Self::P2 => "p2",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::S1 => "s1 - storage optimized",
            Self::P1 => "p1 - performance optimized",
            Self::P2 => "p2 - 2nd gen performance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PodSize {
    #[default]
    X1,
    X2,
    X4,
    X8,
}

impl PodSize {
    pub const ALL: [Self; 4] = [Self::X1, Self::X2, Self::X4, Self::X8];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::X1 => "x1",
            Self::X2 => "x2",
            Self::X4 => "x4",
            Self::X8 => "x8",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind} '{value}' (expected one of: {expected})")]
pub struct ParseTierError {
    kind: &'static str,
    value: String,
    expected: String,
}

impl ParseTierError {
    fn new(kind: &'static str, value: &str, expected: &[&str]) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}

impl FromStr for VectorStoreProvider {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "open-source" | "open source" | "opensource" => Ok(Self::OpenSource),
            "free" | "managed-free" => Ok(Self::ManagedServiceFree),
            "standard" | "managed-standard" => Ok(Self::ManagedServiceStandard),
            "enterprise" | "managed-enterprise" => Ok(Self::ManagedServiceEnterprise),
            _ => Err(ParseTierError::new(
                "provider",
                s,
                &Self::ALL.map(|p| p.as_str()),
            )),
        }
    }
}

impl FromStr for PodType {
    type Err = ParseTierError;

    /// Accepts the short id or the full label ("s1 - storage optimized").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| normalized.starts_with(t.as_str()))
            .ok_or_else(|| ParseTierError::new("pod type", s, &Self::ALL.map(|t| t.as_str())))
    }
}

impl FromStr for PodSize {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|size| normalized == size.as_str())
            .ok_or_else(|| ParseTierError::new("pod size", s, &Self::ALL.map(|z| z.as_str())))
    }
}

impl fmt::Display for VectorStoreProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PodSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selected vector-store configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VectorStoreTier {
    pub provider: VectorStoreProvider,
    #[serde(default)]
    pub pod_type: PodType,
    #[serde(default)]
    pub pod_size: PodSize,
}

impl VectorStoreTier {
    pub fn new(provider: VectorStoreProvider, pod_type: PodType, pod_size: PodSize) -> Self {
        Self {
            provider,
            pod_type,
            pod_size,
        }
    }
}

/// One row of the hourly rate table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VectorStoreRate {
    pub provider: VectorStoreProvider,
    pub pod_type: PodType,
    pub pod_size: PodSize,
    pub hourly_rate: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VectorStoreRateTable {
    default_hourly_rate: f64,
    rates: Vec<VectorStoreRate>,
}

impl VectorStoreRateTable {
    pub fn new(default_hourly_rate: f64) -> Self {
        Self {
            default_hourly_rate,
            rates: Vec::new(),
        }
    }

    /// Published list price: only the standard s1.x1 pod is populated.
    pub fn builtin() -> Self {
        let mut table = Self::new(DEFAULT_HOURLY_RATE);
        table.insert(VectorStoreRate {
            provider: VectorStoreProvider::ManagedServiceStandard,
            pod_type: PodType::S1,
            pod_size: PodSize::X1,
            hourly_rate: DEFAULT_HOURLY_RATE,
        });
        table
    }

    /// Insert a rate, replacing any existing row for the same configuration.
    pub fn insert(&mut self, rate: VectorStoreRate) {
        self.rates.retain(|r| {
            (r.provider, r.pod_type, r.pod_size) != (rate.provider, rate.pod_type, rate.pod_size)
        });
        self.rates.push(rate);
    }

    pub fn default_hourly_rate(&self) -> f64 {
        self.default_hourly_rate
    }

    pub fn rates(&self) -> &[VectorStoreRate] {
        &self.rates
    }

    /// Resolve the hourly rate for a configuration. Never fails.
    pub fn hourly_rate(&self, tier: &VectorStoreTier) -> f64 {
        if tier.provider.is_free() {
            return 0.0;
        }

        self.rates
            .iter()
            .find(|r| {
                r.provider == tier.provider
                    && r.pod_type == tier.pod_type
                    && r.pod_size == tier.pod_size
            })
            .map(|r| r.hourly_rate)
            .unwrap_or(self.default_hourly_rate)
    }
}

impl Default for VectorStoreRateTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorStoreCostEstimate {
    pub tier: VectorStoreTier,
    pub hourly_rate: f64,
    pub projection: CostProjection,
}

/// Project hosting cost for a vector-store configuration.
///
/// Unlike LLM usage, stores run every day, so the projection covers the
/// full year.
pub fn estimate_vector_store_cost(
    tier: &VectorStoreTier,
    rates: &VectorStoreRateTable,
) -> VectorStoreCostEstimate {
    let hourly_rate = rates.hourly_rate(tier);
    VectorStoreCostEstimate {
        tier: *tier,
        hourly_rate,
        projection: CostProjection::full_year(hourly_rate * HOURS_PER_DAY),
    }
}

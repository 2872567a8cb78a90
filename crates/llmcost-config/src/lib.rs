use anyhow::Context;
use llmcost_core::{
    ModelPricing, PricingTable, VectorStoreRate, VectorStoreRateTable,
    pricing::BUILTIN_MODELS, vector_store::DEFAULT_HOURLY_RATE,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV: &str = "LLMCOST_CONFIG";

/// Configuration for llmcost
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pricing: PricingConfig,

    #[serde(default)]
    pub vector_store: VectorStoreConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub limits: UsageLimits,
}

/// Model rates, layered over the built-in table (same id replaces)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default = "default_models")]
    pub models: Vec<ModelRateConfig>,
}

/// Rates in USD per 1K tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelRateConfig {
    pub id: String,

    #[serde(default)]
    pub display_name: Option<String>,

    pub prompt_per_1k: f64,

    pub completion_per_1k: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorStoreConfig {
    #[serde(default = "default_hourly_rate")]
    pub default_hourly_rate: f64,

    #[serde(default = "default_pod_rates")]
    pub rates: Vec<VectorStoreRate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Upper bounds for the web form's usage inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageLimits {
    #[serde(default = "default_max_employees")]
    pub max_employees: u32,

    #[serde(default = "default_max_prompts_per_day")]
    pub max_prompts_per_day: u32,

    #[serde(default = "default_max_prompt_tokens")]
    pub max_prompt_tokens: u32,

    #[serde(default = "default_max_completion_tokens")]
    pub max_completion_tokens: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pricing: PricingConfig::default(),
            vector_store: VectorStoreConfig::default(),
            server: ServerConfig::default(),
            limits: UsageLimits::default(),
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            models: default_models(),
        }
    }
}

impl Default for VectorStoreConfig {
    fn default() -> Self {
        Self {
            default_hourly_rate: default_hourly_rate(),
            rates: default_pod_rates(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for UsageLimits {
    fn default() -> Self {
        Self {
            max_employees: default_max_employees(),
            max_prompts_per_day: default_max_prompts_per_day(),
            max_prompt_tokens: default_max_prompt_tokens(),
            max_completion_tokens: default_max_completion_tokens(),
        }
    }
}

fn default_models() -> Vec<ModelRateConfig> {
    BUILTIN_MODELS
        .iter()
        .map(|&(id, name, prompt, completion)| ModelRateConfig {
            id: id.to_string(),
            display_name: Some(name.to_string()),
            prompt_per_1k: prompt,
            completion_per_1k: completion,
        })
        .collect()
}

fn default_hourly_rate() -> f64 {
    DEFAULT_HOURLY_RATE
}

fn default_pod_rates() -> Vec<VectorStoreRate> {
    VectorStoreRateTable::builtin().rates().to_vec()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

fn default_max_employees() -> u32 {
    200
}

fn default_max_prompts_per_day() -> u32 {
    300
}

fn default_max_prompt_tokens() -> u32 {
    300
}

fn default_max_completion_tokens() -> u32 {
    1000
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            // Create default config file
            let config = Config::default();
            config.save_to(&path)?;
            tracing::info!(path = %path.display(), "Wrote default config");
            Ok(config)
        }
    }

    /// Load config from an explicit file, which must exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Load from `explicit` if given, else the default location
    pub fn resolve(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        }
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "llmcost", "llmcost") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.llmcost/config.toml")
        }
    }

    /// Built-in model pricing with configured models layered on top
    pub fn pricing_table(&self) -> anyhow::Result<PricingTable> {
        let mut table = PricingTable::builtin();
        for model in &self.pricing.models {
            let display_name = model.display_name.clone().unwrap_or_else(|| model.id.clone());
            let pricing = ModelPricing::per_thousand(
                &model.id,
                display_name,
                model.prompt_per_1k,
                model.completion_per_1k,
            )?;
            table.insert(pricing);
        }
        Ok(table)
    }

    /// Built-in vector-store rates with configured rates layered on top
    pub fn rate_table(&self) -> anyhow::Result<VectorStoreRateTable> {
        let default_rate = self.vector_store.default_hourly_rate;
        anyhow::ensure!(
            default_rate.is_finite() && default_rate >= 0.0,
            "vector_store.default_hourly_rate must be non-negative, got {}",
            default_rate
        );

        let mut table = VectorStoreRateTable::new(default_rate);
        for rate in VectorStoreRateTable::builtin()
            .rates()
            .iter()
            .chain(&self.vector_store.rates)
        {
            anyhow::ensure!(
                rate.hourly_rate.is_finite() && rate.hourly_rate >= 0.0,
                "hourly rate for {} {}.{} must be non-negative, got {}",
                rate.provider,
                rate.pod_type,
                rate.pod_size,
                rate.hourly_rate
            );
            table.insert(*rate);
        }
        Ok(table)
    }
}

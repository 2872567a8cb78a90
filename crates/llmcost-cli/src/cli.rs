use clap::{Parser, Subcommand};
use llmcost_core::{PodSize, PodType, VectorStoreProvider};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "llmcost")]
#[command(about = "Token counts and cost estimates for LLM APIs and vector stores", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: platform config directory)
    #[arg(long, global = true, env = "LLMCOST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count the tokens in a prompt
    Tokens {
        /// Prompt text ("-" or omitted reads stdin)
        #[arg(conflicts_with = "file")]
        text: Option<String>,

        /// Read the prompt from a file
        #[arg(long)]
        file: Option<PathBuf>,

        /// Model whose encoding to use
        #[arg(long, short, default_value = "gpt-3.5-turbo")]
        model: String,
    },

    /// Project recurring LLM spend (weekdays only)
    Llm {
        /// Model to price
        #[arg(long, short, default_value = "gpt-3.5-turbo")]
        model: String,

        /// Average number of employees
        #[arg(long, default_value = "0")]
        employees: u32,

        /// Average prompts per employee per day
        #[arg(long, default_value = "0")]
        prompts_per_day: u32,

        /// Average prompt length in tokens
        #[arg(long, default_value = "0")]
        prompt_tokens: u32,

        /// Average completion length in tokens
        #[arg(long, default_value = "0")]
        completion_tokens: u32,
    },

    /// Project vector-store hosting cost (every day of the year)
    VectorStore {
        /// open-source, free, standard or enterprise
        #[arg(long, default_value = "standard")]
        provider: VectorStoreProvider,

        /// s1, p1 or p2
        #[arg(long)]
        pod_type: Option<PodType>,

        /// x1, x2, x4 or x8
        #[arg(long)]
        pod_size: Option<PodSize>,
    },

    /// List priced models
    Models,

    /// Start the web form
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,

        /// Do not open a browser
        #[arg(long)]
        no_open: bool,
    },

    /// Manage the config file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the config file location
    Path,

    /// Print the effective configuration
    Show,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_vector_store() {
        let cli = Cli::parse_from([
            "llmcost",
            "vector-store",
            "--provider",
            "enterprise",
            "--pod-type",
            "p1",
            "--pod-size",
            "x4",
        ]);
        match cli.command {
            Commands::VectorStore {
                provider,
                pod_type,
                pod_size,
            } => {
                assert_eq!(provider, VectorStoreProvider::ManagedServiceEnterprise);
                assert_eq!(pod_type, Some(PodType::P1));
                assert_eq!(pod_size, Some(PodSize::X4));
            }
            _ => panic!("expected vector-store"),
        }
    }

    #[test]
    fn test_parse_llm_with_global_json() {
        let cli = Cli::parse_from([
            "llmcost",
            "llm",
            "--model",
            "gpt-4",
            "--employees",
            "10",
            "--json",
        ]);
        assert!(cli.json);
        match cli.command {
            Commands::Llm {
                model, employees, ..
            } => {
                assert_eq!(model, "gpt-4");
                assert_eq!(employees, 10);
            }
            _ => panic!("expected llm"),
        }
    }

    #[test]
    fn test_invalid_pod_size_rejected() {
        let result = Cli::try_parse_from(["llmcost", "vector-store", "--pod-size", "x3"]);
        assert!(result.is_err());
    }
}

//! CLI command definitions and dispatch.

pub mod about;
pub mod health;
pub mod products;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use warehouse_client::infrastructure::api::ApiClient;
use warehouse_client::infrastructure::config::Config;

/// Warehouse Management System — inventory client
#[derive(Debug, Parser)]
#[command(name = "warehouse-cli", version, about, long_about = None)]
pub struct Cli {
    /// API base address (overrides WAREHOUSE_API_URL)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Browse, search and manage product records
    Products(products::ProductArgs),
    /// Check the remote service health
    Health,
    /// About the warehouse management system
    About,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        match &self.command {
            Commands::Products(args) => {
                products::execute(args, self.api_client(config)?, self.format).await
            }
            Commands::Health => health::execute(self.api_client(config)?, self.format).await,
            Commands::About => {
                about::execute();
                Ok(())
            }
        }
    }

    /// Build the API client against the resolved base address
    fn api_client(&self, config: &Config) -> anyhow::Result<ApiClient> {
        let base_url = self
            .api_url
            .clone()
            .unwrap_or_else(|| config.api_base_url.clone());
        Ok(ApiClient::new(base_url)?)
    }
}

//! Remote health probe command.

use crate::output::{self, OutputFormat};
use warehouse_client::infrastructure::api::{ApiClient, HealthService};

pub async fn execute(api: ApiClient, format: OutputFormat) -> anyhow::Result<()> {
    let health = HealthService::new(api);
    let status = health.get_health().await?;

    match format {
        OutputFormat::Table => output::print_success(&format!("Service is {}", status.status)),
        OutputFormat::Json => output::print_item(&status, format),
    }

    Ok(())
}

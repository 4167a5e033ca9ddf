//! Implementation of the `latchkey clear` command.

use anyhow::Result;

use crate::cli::output::{output, CommandOutput};
use crate::cli::types::ClearCommands;

#[derive(Debug, serde::Serialize)]
pub struct ClearOutput {
    pub tier: String,
    pub cleared: bool,
}

impl CommandOutput for ClearOutput {
    fn to_human(&self) -> String {
        match self.tier.as_str() {
            "store" => "Durable store cleared; cache entries may now be stale.".to_string(),
            _ => "Cache flushed; durable store untouched.".to_string(),
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(command: ClearCommands, json_mode: bool) -> Result<()> {
    let context = super::load_context().await?;

    let tier = match command {
        ClearCommands::Store => {
            context.coordinator.clear_durable().await?;
            "store"
        }
        ClearCommands::Cache => {
            context.coordinator.clear_cache().await;
            "cache"
        }
    };

    let output_data = ClearOutput {
        tier: tier.to_string(),
        cleared: true,
    };
    output(&output_data, json_mode);
    Ok(())
}

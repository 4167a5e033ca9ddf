//! Implementation of the `latchkey load` command.

use anyhow::Result;
use clap::Args;

use crate::cli::output::{output, CommandOutput};
use crate::cli::progress::{create_spinner, ProgressBarExt};

#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Number of synthetic credential pairs to load
    #[arg(default_value = "1000")]
    pub count: u64,
}

#[derive(Debug, serde::Serialize)]
pub struct LoadOutput {
    pub processed: u64,
}

impl CommandOutput for LoadOutput {
    fn to_human(&self) -> String {
        format!("Loaded {} synthetic credential(s) into store and cache", self.processed)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: LoadArgs, json_mode: bool) -> Result<()> {
    let context = super::load_context().await?;

    let spinner = if json_mode {
        None
    } else {
        Some(create_spinner(format!("Loading {} synthetic credentials...", args.count)))
    };

    let report = context.coordinator.bulk_load(args.count).await;

    match (&spinner, &report) {
        (Some(pb), Ok(_)) => pb.finish_success(format!("Loaded {} credentials", args.count)),
        (Some(pb), Err(_)) => pb.finish_error("Load failed"),
        (None, _) => {}
    }
    let report = report?;

    output(&LoadOutput { processed: report.processed }, json_mode);
    Ok(())
}

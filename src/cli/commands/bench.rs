//! Implementation of the `latchkey bench` command.
//!
//! Measures what the cache is actually buying: loads a synthetic corpus,
//! verifies it once against a cold cache (store path) and once against a
//! warm cache (cache path), and reports the latency ratio. Both passes run
//! in this process, so the warm pass really does hit the in-memory tier.

use anyhow::Result;
use clap::Args;
use console::style;

use crate::cli::output::{output, CommandOutput};
use crate::cli::progress::{create_spinner, ProgressBarExt};
use crate::domain::models::VerifierConfig;
use crate::services::BatchVerifier;

#[derive(Args, Debug)]
pub struct BenchArgs {
    /// Number of synthetic credential pairs to load and verify
    #[arg(default_value = "1000")]
    pub count: u64,

    /// Override the configured concurrency bound
    #[arg(short = 'C', long)]
    pub concurrency: Option<usize>,
}

#[derive(Debug, serde::Serialize)]
pub struct BenchOutput {
    pub count: u64,
    pub cold_successful: u64,
    pub warm_successful: u64,
    pub cold_average_seconds: f64,
    pub warm_average_seconds: f64,
}

impl BenchOutput {
    fn speedup(&self) -> f64 {
        if self.warm_average_seconds <= f64::EPSILON {
            0.0
        } else {
            self.cold_average_seconds / self.warm_average_seconds
        }
    }
}

impl CommandOutput for BenchOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![
            format!("Benchmarked {} credential(s):", self.count),
            format!(
                "  cold cache (store path): {:.3} ms/check, {} successful",
                self.cold_average_seconds * 1000.0,
                self.cold_successful
            ),
            format!(
                "  warm cache (cache path): {:.3} ms/check, {} successful",
                self.warm_average_seconds * 1000.0,
                self.warm_successful
            ),
        ];
        let speedup = self.speedup();
        if speedup > 0.0 {
            lines.push(format!(
                "  cache speedup: {}",
                style(format!("{speedup:.1}x")).green().bold()
            ));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: BenchArgs, json_mode: bool) -> Result<()> {
    let context = super::load_context().await?;

    // The override skips config validation, so re-bound it here.
    let config = VerifierConfig::bounded(
        args.concurrency.unwrap_or(context.config.verifier.max_concurrency),
    );
    let verifier = BatchVerifier::new(context.coordinator.clone()).with_config(config);
    let limit = usize::try_from(args.count).unwrap_or(usize::MAX);

    let spinner = if json_mode {
        None
    } else {
        Some(create_spinner(format!("Loading {} synthetic credentials...", args.count)))
    };

    context.coordinator.bulk_load(args.count).await?;

    // Cold pass: flush the mirror so every check falls through to the store.
    context.coordinator.clear_cache().await;
    if let Some(pb) = &spinner {
        pb.set_message("Verifying against cold cache...");
    }
    let cold = verifier.verify_batch(limit).await?;

    // Warm pass: the cold pass backfilled the cache, so this one stays in memory.
    if let Some(pb) = &spinner {
        pb.set_message("Verifying against warm cache...");
    }
    let warm = verifier.verify_batch(limit).await?;

    if let Some(pb) = &spinner {
        pb.finish_success("Benchmark complete");
    }

    let output_data = BenchOutput {
        count: args.count,
        cold_successful: cold.successful,
        warm_successful: warm.successful,
        cold_average_seconds: cold.average_seconds,
        warm_average_seconds: warm.average_seconds,
    };
    output(&output_data, json_mode);
    Ok(())
}

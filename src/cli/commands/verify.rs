//! Implementation of the `latchkey verify` command.

use anyhow::Result;
use clap::Args;
use console::style;

use crate::cli::display::{colorize_status, list_table, render_list};
use crate::cli::output::{output, truncate, CommandOutput};
use crate::domain::models::{CheckStatus, VerificationReport, VerifierConfig};
use crate::services::BatchVerifier;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Maximum number of stored credentials to verify
    #[arg(short, long, default_value = "100")]
    pub limit: usize,

    /// Override the configured concurrency bound
    #[arg(short, long)]
    pub concurrency: Option<usize>,
}

#[derive(Debug, serde::Serialize)]
pub struct VerifyOutput {
    #[serde(flatten)]
    pub report: VerificationReport,
}

impl CommandOutput for VerifyOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![
            format!(
                "Verified {} credential(s): {} succeeded, {} failed",
                self.report.total,
                style(self.report.successful).green().bold(),
                if self.report.failed == 0 {
                    style(self.report.failed).green()
                } else {
                    style(self.report.failed).red().bold()
                },
            ),
            format!(
                "Average check time: {:.3} ms ({:.1}% success)",
                self.report.average_seconds * 1000.0,
                self.report.success_rate() * 100.0
            ),
        ];

        // Only degraded checks are worth a table; a clean run stays short.
        let degraded: Vec<_> = self
            .report
            .results
            .iter()
            .filter(|r| r.status != CheckStatus::Success)
            .collect();
        if !degraded.is_empty() {
            let mut table = list_table(&["username", "status", "detail", "elapsed"]);
            for check in &degraded {
                table.add_row(vec![
                    check.username.clone(),
                    colorize_status(check.status.as_str()).to_string(),
                    truncate(check.error.as_deref().unwrap_or(""), 48),
                    format!("{:.3} ms", check.elapsed_secs * 1000.0),
                ]);
            }
            lines.push(String::new());
            lines.push(render_list("degraded check", &table, degraded.len()));
        }

        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: VerifyArgs, json_mode: bool) -> Result<()> {
    let context = super::load_context().await?;

    // The override skips config validation, so re-bound it here.
    let config = VerifierConfig::bounded(
        args.concurrency.unwrap_or(context.config.verifier.max_concurrency),
    );
    let verifier = BatchVerifier::new(context.coordinator.clone()).with_config(config);

    let report = verifier.verify_batch(args.limit).await?;

    output(&VerifyOutput { report }, json_mode);
    Ok(())
}

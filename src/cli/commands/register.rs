//! Implementation of the `latchkey register` command.

use anyhow::Result;
use clap::Args;

use crate::cli::display::colorize_status;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{Credential, RegistrationOutcome};

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Username to register (case-sensitive)
    pub username: String,

    /// Secret to associate with the username
    pub secret: String,
}

#[derive(Debug, serde::Serialize)]
pub struct RegisterOutput {
    pub username: String,
    pub outcome: RegistrationOutcome,
}

impl CommandOutput for RegisterOutput {
    fn to_human(&self) -> String {
        let styled = colorize_status(self.outcome.as_str());
        match self.outcome {
            RegistrationOutcome::Created => {
                format!("Credential '{}' registered [{styled}]", self.username)
            }
            RegistrationOutcome::AlreadyCached => format!(
                "Username '{}' already present in cache, store untouched [{styled}]",
                self.username
            ),
            RegistrationOutcome::AlreadyPersisted => format!(
                "Username '{}' already persisted, stored secret now cached [{styled}]",
                self.username
            ),
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: RegisterArgs, json_mode: bool) -> Result<()> {
    let context = super::load_context().await?;
    let credential = Credential::new(args.username, args.secret);

    let outcome = context.coordinator.register(&credential).await?;

    let output_data = RegisterOutput {
        username: credential.username,
        outcome,
    };
    output(&output_data, json_mode);
    Ok(())
}

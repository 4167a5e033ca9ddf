//! Implementation of the `latchkey login` command.

use anyhow::Result;
use clap::Args;

use crate::cli::display::colorize_auth_path;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{AuthPath, Credential};

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Username to authenticate
    pub username: String,

    /// Secret to check
    pub secret: String,
}

#[derive(Debug, serde::Serialize)]
pub struct LoginOutput {
    pub username: String,
    pub authenticated: bool,
    pub via: AuthPath,
}

impl CommandOutput for LoginOutput {
    fn to_human(&self) -> String {
        format!(
            "Authenticated '{}' via {}",
            self.username,
            colorize_auth_path(self.via.as_str())
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Authentication rejections surface as errors; the process exits
/// nonzero so shell callers can branch on the result.
pub async fn execute(args: LoginArgs, json_mode: bool) -> Result<()> {
    let context = super::load_context().await?;
    let credential = Credential::new(args.username, args.secret);

    let auth = context.coordinator.authenticate(&credential).await?;

    let output_data = LoginOutput {
        username: credential.username,
        authenticated: true,
        via: auth.via,
    };
    output(&output_data, json_mode);
    Ok(())
}

use crate::auth::{default_env_file, Credentials};
use crate::client::{input, ApiInvoker, Envelope};
use crate::commands::shared::RequestArgs;
use crate::commands::validators;
use crate::core::error::InvokeError;
use clap::Args;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct AuthArgs {
    #[arg(
        long = "env-file",
        value_name = "PATH",
        help = "Credentials file (default: .env next to the executable)",
        value_parser = validators::validate_path_exists
    )]
    pub env_file: Option<String>,

    #[command(flatten)]
    pub request: RequestArgs,
}

impl AuthArgs {
    fn env_file_path(&self) -> Option<PathBuf> {
        match &self.env_file {
            Some(path) => Some(PathBuf::from(path)),
            None => default_env_file(),
        }
    }
}

/// Prints `{success, data, status}` or `{success: false, error, type}`; always exits 0.
pub async fn execute(args: &AuthArgs) -> Result<(), Box<dyn std::error::Error>> {
    let envelope = match invoke(args).await {
        Ok((data, status)) => Envelope::success(data, status),
        Err(e) => Envelope::failure(&e),
    };
    envelope.emit();
    Ok(())
}

async fn invoke(args: &AuthArgs) -> Result<(Value, u16), InvokeError> {
    let credentials = Credentials::load(args.env_file_path().as_deref())?;
    let stdin = input::read_stdin().await?;
    ApiInvoker::new(args.request.invoke_config())
        .invoke(&stdin, &credentials)
        .await
}

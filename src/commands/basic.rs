use crate::client::{input, ApiInvoker, Envelope};
use crate::commands::shared::RequestArgs;
use crate::core::error::InvokeError;
use clap::Args;
use serde_json::Value;

#[derive(Debug, Args)]
pub struct BasicArgs {
    #[command(flatten)]
    pub request: RequestArgs,
}

/// Every failure is reported as `{error, type}` on stdout; the process exits 0.
pub async fn execute(args: &BasicArgs) -> Result<(), Box<dyn std::error::Error>> {
    let envelope = match fetch(args).await {
        Ok(data) => Envelope::Raw(data),
        Err(e) => Envelope::error(&e),
    };
    envelope.emit();
    Ok(())
}

async fn fetch(args: &BasicArgs) -> Result<Value, InvokeError> {
    let stdin = input::read_stdin().await?;
    ApiInvoker::new(args.request.invoke_config())
        .fetch(&stdin)
        .await
}

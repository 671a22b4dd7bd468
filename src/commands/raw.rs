use crate::client::{input, ApiInvoker, Envelope};
use crate::commands::shared::RequestArgs;
use clap::Args;

#[derive(Debug, Args)]
pub struct RawArgs {
    #[command(flatten)]
    pub request: RequestArgs,
}

/// Failures propagate to `main`, which prints them to stderr and exits non-zero.
pub async fn execute(args: &RawArgs) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = input::read_stdin().await?;
    let data = ApiInvoker::new(args.request.invoke_config())
        .fetch_unchecked(&stdin)
        .await?;
    Envelope::Raw(data).emit();
    Ok(())
}

use crate::client::InvokeConfig;
use crate::commands::validators;
use clap::Args;
use std::time::Duration;

#[derive(Debug, Args)]
pub struct RequestArgs {
    #[arg(
        short = 't',
        long = "timeout",
        value_name = "SECONDS",
        help = "Abort the request after this many seconds (default: wait indefinitely)",
        value_parser = validators::validate_timeout
    )]
    pub timeout: Option<Duration>,
}

impl RequestArgs {
    pub fn invoke_config(&self) -> InvokeConfig {
        InvokeConfig {
            timeout: self.timeout,
        }
    }
}

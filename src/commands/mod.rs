pub mod auth;
pub mod basic;
pub mod raw;
pub mod shared;
pub mod validators;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "GET the url from stdin; failures are printed as {error, type}")]
    Basic(basic::BasicArgs),
    #[command(about = "GET the url from stdin; failures exit non-zero without a JSON envelope")]
    Raw(raw::RawArgs),
    #[command(about = "Send an authenticated request described on stdin")]
    Auth(auth::AuthArgs),
}

use clap::Parser;

mod auth;
mod client;
mod commands;
mod core;

use commands::Commands;
use core::exit_code::ExitCode;

const SUBCOMMANDS: [&str; 4] = ["basic", "raw", "auth", "help"];

#[derive(Parser)]
#[command(name = "callapi")]
#[command(
    about = "Read a JSON request from stdin, send one HTTP request, print the JSON result. Defaults to 'basic' if no subcommand is provided."
)]
#[command(version = crate::core::version::app_version())]
struct Args {
    #[arg(short, long, help = "Enable debug logging", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser)]
#[command(name = "callapi")]
struct DefaultArgs {
    #[arg(short, long, help = "Enable debug logging", global = true)]
    debug: bool,
    #[command(flatten)]
    basic_args: commands::basic::BasicArgs,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        let exit_code = ExitCode::from(&e);
        std::process::exit(exit_code.code());
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let is_subcommand = std::env::args()
        .skip(1)
        .any(|arg| SUBCOMMANDS.contains(&arg.as_str()));

    if is_subcommand {
        let args = Args::parse();
        crate::core::logger::Logger::init(args.debug);
        match args.command {
            Some(Commands::Basic(basic_args)) => commands::basic::execute(&basic_args).await,
            Some(Commands::Raw(raw_args)) => commands::raw::execute(&raw_args).await,
            Some(Commands::Auth(auth_args)) => commands::auth::execute(&auth_args).await,
            None => Ok(()),
        }
    } else {
        match Args::try_parse() {
            Err(e)
                if e.kind() == clap::error::ErrorKind::DisplayHelp
                    || e.kind() == clap::error::ErrorKind::DisplayVersion =>
            {
                e.print()?;
                Ok(())
            }
            _ => {
                let default_args = DefaultArgs::parse();
                crate::core::logger::Logger::init(default_args.debug);
                commands::basic::execute(&default_args.basic_args).await
            }
        }
    }
}

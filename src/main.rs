use anyhow::Result;
use clap::Parser;
use recap::{
    app,
    cli::{handle_modes_command, Cli, CliCommand},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Some(CliCommand::Version) => {
            println!("recap {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(CliCommand::Modes) => {
            handle_modes_command();
            Ok(())
        }
        Some(CliCommand::Serve(args)) => app::run_service(args.port).await,
        None => app::run_service(None).await,
    }
}

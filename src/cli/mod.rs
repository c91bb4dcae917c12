use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::workspace::{SummaryMode, DEFAULT_INSTRUCTION};

#[derive(Parser, Debug)]
#[command(name = "recap")]
#[command(about = "Meeting notes summarizer service", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Run the API server
    Serve(ServeCliArgs),
    /// List the fixed summary instruction modes
    Modes,
    /// Print version information
    Version,
}

#[derive(ClapArgs, Debug)]
pub struct ServeCliArgs {
    /// Port to listen on (overrides the config file)
    #[arg(short, long)]
    pub port: Option<u16>,
}

pub fn handle_modes_command() {
    println!("Default instruction:");
    println!("  {DEFAULT_INSTRUCTION}");
    println!();
    println!("Modes:");
    for mode in SummaryMode::ALL {
        println!("  {:<12} {}", mode.key(), mode.label());
        println!("  {:<12} {}", "", mode.instruction());
    }
}

pub mod clock;
pub mod export;
pub mod history;
pub mod init;
pub mod status;
pub mod sum;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Record a clock-in or clock-out event", arg_required_else_help = true)]
    Clock(clock::ClockArgs),
    #[command(about = "Show today's attendance status")]
    Status,
    #[command(about = "Summarize work time over a period")]
    Sum(sum::SumArgs),
    #[command(about = "Browse attendance history")]
    History(history::HistoryArgs),
    #[command(about = "Export attendance records")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Clock(args) => clock::cmd(args),
            Commands::Status => status::cmd(),
            Commands::Sum(args) => sum::cmd(args),
            Commands::History(args) => history::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

//! CLI configuration and top-level dispatch.

use clap::Parser;

use crate::commands::Command;

/// Inspect and grow hash-ring partition maps.
#[derive(Parser, Debug)]
#[command(name = "ringctl", version, about)]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Emit machine-readable JSON instead of tables.
    #[arg(long, global = true)]
    pub json: bool,
}

impl CliConfig {
    pub fn run(self) -> anyhow::Result<()> {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .init();
        self.command.execute(self.json)
    }
}

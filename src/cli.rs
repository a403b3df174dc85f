use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "pidports")]
#[command(version, about = "Resolve which TCP ports a process has bound")]
pub struct Cli {
    /// Process id to inspect
    #[arg(allow_negative_numbers = true)]
    pub pid: Option<i64>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

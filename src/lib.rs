pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod platform;
pub mod resolver;
pub mod types;

pub use cli::Cli;
pub use error::ResolveError;
pub use resolver::resolve;
pub use types::PortSet;

use anyhow::Result;
use clap::CommandFactory;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(cli::Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
        None => match cli.pid {
            Some(pid) => commands::resolve::execute(pid, cli.json),
            None => {
                Cli::command().print_help()?;
                Ok(())
            }
        },
    }
}

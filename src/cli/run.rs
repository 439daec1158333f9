use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check, generate::generate, init::init},
};

/// Dispatch to the command handler for the parsed arguments.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Generate(cmd)) => generate(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

use std::{fs, io};

use anyhow::{Context, Result};

use super::super::args::CheckCommand;
use super::{
    CheckSummary, CommandResult, CommandSummary, OutputStatus,
    helper::{Settings, compile_project},
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let settings = Settings::resolve(&cmd.common)?;
    let compiled = compile_project(&settings)?;

    let status = match fs::read_to_string(&settings.output) {
        Ok(existing) if existing == compiled.text => OutputStatus::UpToDate,
        Ok(_) => OutputStatus::Stale,
        Err(err) if err.kind() == io::ErrorKind::NotFound => OutputStatus::Missing,
        Err(err) => {
            return Err(err)
                .with_context(|| format!("Failed to read {}", settings.output.display()));
        }
    };

    Ok(CommandResult::new(
        CommandSummary::Check(CheckSummary {
            output: settings.output,
            status,
            stats: compiled.stats,
        }),
        compiled.diagnostics,
    ))
}

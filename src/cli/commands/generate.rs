use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::super::args::GenerateCommand;
use super::{
    CommandResult, CommandSummary, GenerateSummary, WriteOutcome,
    helper::{Settings, compile_project},
};

pub fn generate(cmd: GenerateCommand) -> Result<CommandResult> {
    let settings = Settings::resolve(&cmd.common)?;
    let compiled = compile_project(&settings)?;

    let outcome = if cmd.stdout {
        WriteOutcome::Stdout(compiled.text)
    } else if is_unchanged(&settings.output, &compiled.text) {
        WriteOutcome::Unchanged
    } else {
        if let Some(parent) = settings.output.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }
        fs::write(&settings.output, &compiled.text)
            .with_context(|| format!("Failed to write {:?}", settings.output))?;
        WriteOutcome::Written
    };

    Ok(CommandResult::new(
        CommandSummary::Generate(GenerateSummary {
            output: settings.output,
            outcome,
            stats: compiled.stats,
        }),
        compiled.diagnostics,
    ))
}

/// True when `path` already holds exactly `text`.
fn is_unchanged(path: &Path, text: &str) -> bool {
    fs::read_to_string(path).is_ok_and(|existing| existing == text)
}

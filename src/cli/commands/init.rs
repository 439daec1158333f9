use std::{fs, path::Path};

use anyhow::{Context, Result, bail};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<CommandResult> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    Ok(CommandResult::new(
        CommandSummary::Init(InitSummary {
            path: config_path.to_path_buf(),
        }),
        Vec::new(),
    ))
}

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::CompileStats;
use crate::cli::args::CommonArgs;
use crate::config::{CONFIG_FILE_NAME, load_config};
use crate::core::parsers::json::scan_locale_files;
use crate::core::{EmitOptions, compile, emit};
use crate::issues::Diagnostic;

/// Effective settings for one run.
///
/// Priority (highest to lowest):
/// 1. CLI arguments (e.g., `--source-locale fr`)
/// 2. `.dictgenrc.json` config file
/// 3. Built-in defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub messages_root: PathBuf,
    pub source_locale: String,
    pub output: PathBuf,
    pub options: EmitOptions,
}

impl Settings {
    /// Load the config file nearest to the working directory and apply CLI
    /// overrides. Config paths are relative to the config file, CLI paths to
    /// the working directory.
    pub fn resolve(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to read the current directory")?;
        let mut loaded = load_config(&cwd)?;
        if let Ok(rel) = loaded.base_dir.strip_prefix(&cwd) {
            loaded.base_dir = Path::new(".").join(rel);
        }

        if common.verbose && !loaded.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let config = &loaded.config;
        let mut options = config.emit_options();
        if let Some(mode) = common.mode {
            options.mode = mode;
        }
        if let Some(schema) = common.schema {
            options.schema = schema;
        }

        Ok(Self {
            messages_root: common
                .messages_root
                .clone()
                .unwrap_or_else(|| loaded.resolve(&config.messages_root)),
            source_locale: common
                .source_locale
                .clone()
                .unwrap_or_else(|| config.source_locale.clone()),
            output: common
                .output
                .clone()
                .unwrap_or_else(|| loaded.resolve(&config.output)),
            options,
        })
    }
}

/// Emitted text plus what it took to produce it.
#[derive(Debug)]
pub struct Compiled {
    pub text: String,
    pub stats: CompileStats,
    pub diagnostics: Vec<Diagnostic>,
}

/// Load, compile and emit. Nothing is written here.
pub fn compile_project(settings: &Settings) -> Result<Compiled> {
    let scanned = scan_locale_files(&settings.messages_root, &settings.source_locale)?;
    let dictionary = compile(&scanned.locales, &settings.source_locale)?;
    let text = emit(&dictionary, &settings.options);

    let stats = CompileStats {
        counts: dictionary.counts(),
        locale_count: dictionary.locales.len(),
        fallback_count: dictionary.fallback_count(),
    };
    let mut diagnostics = scanned.diagnostics;
    diagnostics.extend(dictionary.diagnostics);

    Ok(Compiled {
        text,
        stats,
        diagnostics,
    })
}

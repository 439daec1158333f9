use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::{EmitOptions, Mode, OutputSchema};

pub const CONFIG_FILE_NAME: &str = ".dictgenrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_messages_root")]
    pub messages_root: String,
    #[serde(default = "default_source_locale")]
    pub source_locale: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub schema: OutputSchema,
    #[serde(default = "default_locale_type")]
    pub locale_type: String,
    #[serde(default = "default_locale_type_module")]
    pub locale_type_module: String,
}

fn default_messages_root() -> String {
    "./messages".to_string()
}

fn default_source_locale() -> String {
    "en".to_string()
}

fn default_output() -> String {
    "./locales.ts".to_string()
}

fn default_locale_type() -> String {
    EmitOptions::default().locale_type
}

fn default_locale_type_module() -> String {
    EmitOptions::default().locale_type_module
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages_root: default_messages_root(),
            source_locale: default_source_locale(),
            output: default_output(),
            mode: Mode::default(),
            schema: OutputSchema::default(),
            locale_type: default_locale_type(),
            locale_type_module: default_locale_type_module(),
        }
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.source_locale.trim().is_empty() {
            bail!("'sourceLocale' must not be empty");
        }
        if self.output.trim().is_empty() {
            bail!("'output' must not be empty");
        }
        if !is_identifier(&self.locale_type) {
            bail!(
                "Invalid 'localeType': \"{}\" is not a valid type name",
                self.locale_type
            );
        }
        if self.locale_type_module.trim().is_empty() {
            bail!("'localeTypeModule' must not be empty");
        }
        Ok(())
    }

    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            mode: self.mode,
            schema: self.schema,
            locale_type: self.locale_type.clone(),
            locale_type_module: self.locale_type_module.clone(),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory relative config paths resolve against: the config file's
    /// directory, or the start directory when no file was found.
    pub base_dir: PathBuf,
}

impl ConfigLoadResult {
    /// Resolve a configured path against [`Self::base_dir`].
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            return path.to_path_buf();
        }
        let is_cur_dir = self
            .base_dir
            .components()
            .all(|c| matches!(c, Component::CurDir));
        if is_cur_dir {
            path.to_path_buf()
        } else {
            let rel = path.strip_prefix(".").unwrap_or(path);
            self.base_dir.join(rel)
        }
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            let base_dir = path
                .parent()
                .map_or_else(|| start_dir.to_path_buf(), Path::to_path_buf);
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                base_dir,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            base_dir: start_dir.to_path_buf(),
        }),
    }
}

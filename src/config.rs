use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Export opened by `browse` when no file is given.
    pub default_file: Option<String>,
    /// Leave messages with a blank subject out of the browser list.
    pub hide_blank_subjects: bool,
    /// Length of the content preview under each list entry.
    pub snippet_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_file: None,
            hide_blank_subjects: true,
            snippet_chars: 80,
        }
    }
}

fn config_dir() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("no config dir available"))?
        .join("graph_mail_digest"))
}

pub fn config_path() -> Result<PathBuf> {
    let mut p = config_dir()?;
    fs::create_dir_all(&p)?;
    p.push("config.toml");
    Ok(p)
}

pub fn parse_config(s: &str) -> Result<Config> {
    Ok(toml::from_str(s)?)
}

pub fn load_config() -> Result<Config> {
    let path = config_path()?;
    if !path.exists() {
        // leave a template behind for users to edit
        let sample = Config::default();
        let tom = toml::to_string_pretty(&sample)?;
        fs::write(&path, format!("# default_file = \"/path/to/messages.json\"\n{tom}"))?;
        log::info!("Created template config at {}", path.display());
        return Ok(sample);
    }
    let s = fs::read_to_string(&path)?;
    parse_config(&s).map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))
}

/// Explicit path wins, then `default_file` from the config.
pub fn resolve_input(cfg: &Config, explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| cfg.default_file.as_ref().map(PathBuf::from))
}

//! Config layer: dotfile fallbacks for the api id and recipient number.
//!
//! When the corresponding CLI flag is absent, the api id is read from
//! `~/.smssendrc` and the recipient number from `~/.mynumber`. Both files are
//! plain text, user-maintained, and read-only as far as this tool is concerned.

use std::path::{Path, PathBuf};

/// Dotfile holding the api id.
pub const API_ID_FILE: &str = ".smssendrc";
/// Dotfile holding the default recipient number.
pub const RECIPIENT_FILE: &str = ".mynumber";

const HOME_VAR: &str = if cfg!(windows) { "USERPROFILE" } else { "HOME" };

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unable to determine the home directory ({var} is not set)")]
    HomeUnavailable { var: &'static str },

    #[error("unable to read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolve the user's home directory from the platform's conventional
/// environment variable (`HOME` on unix-likes, `USERPROFILE` on Windows).
pub fn home_dir() -> Result<PathBuf, ConfigError> {
    std::env::var_os(HOME_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .ok_or(ConfigError::HomeUnavailable { var: HOME_VAR })
}

/// Resolve the api id: the flag wins when present and non-empty, otherwise
/// `~/.smssendrc` is read with trailing line endings stripped.
pub fn resolve_api_id(flag: Option<String>) -> Result<String, ConfigError> {
    resolve_with_dotfile(flag, home_dir, API_ID_FILE)
}

/// Resolve the recipient number: the flag wins when present and non-empty,
/// otherwise `~/.mynumber` is read with trailing line endings stripped.
pub fn resolve_recipient(flag: Option<String>) -> Result<String, ConfigError> {
    resolve_with_dotfile(flag, home_dir, RECIPIENT_FILE)
}

fn resolve_with_dotfile(
    flag: Option<String>,
    home: impl FnOnce() -> Result<PathBuf, ConfigError>,
    file: &str,
) -> Result<String, ConfigError> {
    match flag {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => read_dotfile(&home()?, file),
    }
}

/// Read a dotfile under `dir` and strip trailing `\r` / `\n` characters.
///
/// No other normalization is performed; the resulting value may still be
/// empty, which the domain layer rejects.
pub fn read_dotfile(dir: &Path, file: &str) -> Result<String, ConfigError> {
    let path = dir.join(file);
    let data = std::fs::read_to_string(&path).map_err(|source| ConfigError::Unreadable {
        path: path.clone(),
        source,
    })?;
    Ok(data.trim_end_matches(['\r', '\n']).to_owned())
}

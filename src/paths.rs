//! Common paths for lemmydl
//!
//! The config file lives at `$XDG_CONFIG_HOME/lemmydl/config.toml`, falling
//! back to `~/.config/lemmydl/config.toml` on every platform.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Get the lemmydl config directory
pub fn config_dir() -> Result<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(xdg).join("lemmydl"));
    }
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("lemmydl"))
}

/// Get the config file path
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Expand a leading `~` to the home directory
pub fn expand_home(path: &str) -> Result<PathBuf> {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with(['/', '\\']) => rest,
        _ => return Ok(PathBuf::from(path)),
    };
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(join_under(&home, rest))
}

fn join_under(base: &Path, rest: &str) -> PathBuf {
    let rest = rest.trim_start_matches(['/', '\\']);
    if rest.is_empty() {
        base.to_path_buf()
    } else {
        base.join(rest)
    }
}

/// Resolve an output directory: `~` expanded, relative paths taken from `cwd`
pub fn resolve_output_dir(path: &str, cwd: &Path) -> Result<PathBuf> {
    let expanded = expand_home(path)?;
    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(cwd.join(expanded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_home("~").unwrap(), home);
        assert_eq!(expand_home("~/lemmy/out").unwrap(), home.join("lemmy/out"));
        assert_eq!(expand_home("/var/archive").unwrap(), PathBuf::from("/var/archive"));
        assert_eq!(expand_home("~other/dir").unwrap(), PathBuf::from("~other/dir"));
        assert_eq!(expand_home("dir/~").unwrap(), PathBuf::from("dir/~"));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_output_dir() {
        let cwd = Path::new("/work");
        assert_eq!(resolve_output_dir("out", cwd).unwrap(), PathBuf::from("/work/out"));
        assert_eq!(resolve_output_dir(".", cwd).unwrap(), PathBuf::from("/work/."));
        assert_eq!(resolve_output_dir("/abs", cwd).unwrap(), PathBuf::from("/abs"));
        assert!(resolve_output_dir("~/x", cwd).unwrap().ends_with("x"));
    }

    #[test]
    fn test_config_path_name() {
        let path = config_path().unwrap();
        assert!(path.ends_with("lemmydl/config.toml"));
    }
}

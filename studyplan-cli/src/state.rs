use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$STUDYPLAN_HOME`, else `~/.studyplan`.
pub fn studyplan_home() -> Result<PathBuf> {
    home_from(
        std::env::var("STUDYPLAN_HOME").ok(),
        std::env::var("HOME").ok(),
    )
}

fn home_from(override_dir: Option<String>, home: Option<String>) -> Result<PathBuf> {
    if let Some(dir) = override_dir.filter(|d| !d.trim().is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home = home.context("HOME is not set (or set STUDYPLAN_HOME)")?;
    Ok(PathBuf::from(home).join(".studyplan"))
}

pub fn ensure_studyplan_home() -> Result<PathBuf> {
    let dir = studyplan_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let p = home_from(Some("/tmp/sp".into()), Some("/home/u".into())).unwrap();
        assert_eq!(p, PathBuf::from("/tmp/sp"));
    }

    #[test]
    fn test_blank_override_ignored() {
        let p = home_from(Some("  ".into()), Some("/home/u".into())).unwrap();
        assert_eq!(p, PathBuf::from("/home/u/.studyplan"));
    }

    #[test]
    fn test_no_home() {
        assert!(home_from(None, None).is_err());
    }
}

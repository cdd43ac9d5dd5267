use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tally_core::PlanningBook;
use tracing::warn;

pub fn tally_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("TALLY_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".tally"))
}

/// Create the parent directory of a state file. Only writers call this,
/// so read-only commands leave the filesystem alone.
pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    Ok(())
}

pub fn planning_path() -> Result<PathBuf> {
    Ok(tally_home()?.join("planning.json"))
}

/// Load the planning book. A missing file is an empty book, and so is a
/// file that is not valid JSON (it gets overwritten on the next save).
pub fn read_book(path: &Path) -> Result<PlanningBook> {
    if !path.exists() {
        return Ok(PlanningBook::default());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    match serde_json::from_str(&s) {
        Ok(book) => Ok(book),
        Err(e) => {
            warn!("ignoring unreadable {}: {}", path.display(), e);
            Ok(PlanningBook::default())
        }
    }
}

pub fn write_book(path: &Path, book: &PlanningBook) -> Result<()> {
    let json = serde_json::to_string_pretty(book)?;
    ensure_parent(path)?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::{PlanningEntry, PlanningKind};

    #[test]
    fn test_missing_file_is_empty_book() {
        let dir = tempfile::tempdir().unwrap();
        let book = read_book(&dir.path().join("planning.json")).unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn test_corrupt_file_is_empty_book() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("planning.json");
        fs::write(&path, "not json").unwrap();
        assert!(read_book(&path).unwrap().is_empty());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("planning.json");

        let mut book = PlanningBook::default();
        book.add(PlanningEntry::new(PlanningKind::Prediction, "Housing", 1200.0, "rent").unwrap());
        write_book(&path, &book).unwrap();

        assert_eq!(read_book(&path).unwrap(), book);
    }

    #[test]
    fn test_read_does_not_create_home() {
        let dir = tempfile::tempdir().unwrap();
        let home = dir.path().join("home");
        assert!(read_book(&home.join("planning.json")).unwrap().is_empty());
        assert!(!home.exists());
    }

    #[test]
    fn test_write_creates_home() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("home").join("planning.json");

        let mut book = PlanningBook::default();
        book.add(PlanningEntry::new(PlanningKind::Income, "Salary", 10.0, "").unwrap());
        write_book(&path, &book).unwrap();

        assert_eq!(read_book(&path).unwrap(), book);
    }
}

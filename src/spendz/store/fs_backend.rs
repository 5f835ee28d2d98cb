use super::backend::StorageBackend;
use crate::error::{Result, SpendzError};
use crate::model::Expense;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// JSON file backend. The file holds a top-level array of records.
pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for FsBackend {
    fn load(&self) -> Result<Option<Vec<Expense>>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no data file yet");
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(SpendzError::Io)?;
        let expenses: Vec<Expense> =
            serde_json::from_str(&content).map_err(|e| SpendzError::CorruptData {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        tracing::debug!(path = %self.path.display(), count = expenses.len(), "loaded expenses");
        Ok(Some(expenses))
    }

    fn save(&self, expenses: &[Expense]) -> Result<()> {
        let content = serde_json::to_string_pretty(expenses).map_err(SpendzError::Serialization)?;
        write_atomic(&self.path, &content)?;
        tracing::debug!(path = %self.path.display(), count = expenses.len(), "saved expenses");
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

/// Writes `content` to a hidden sibling tmp file, then renames it over `target`.
pub(crate) fn write_atomic(target: &Path, content: &str) -> Result<()> {
    let dir = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !dir.exists() {
        fs::create_dir_all(&dir).map_err(SpendzError::Io)?;
    }

    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "expenses".to_string());
    let tmp_path = dir.join(format!(".{}-{}.tmp", name, Uuid::new_v4()));

    fs::write(&tmp_path, content).map_err(SpendzError::Io)?;
    if let Err(e) = fs::rename(&tmp_path, target) {
        let _ = fs::remove_file(&tmp_path);
        return Err(SpendzError::Io(e));
    }
    Ok(())
}

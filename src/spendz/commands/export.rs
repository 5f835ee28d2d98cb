use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SpendzError};
use crate::store::backend::StorageBackend;
use crate::store::fs_backend::write_atomic;
use crate::store::ExpenseStore;
use std::path::Path;

/// Writes every record, in list order, to `path` as a store-compatible JSON
/// array. The live data file is never a valid target.
pub fn run<B: StorageBackend>(store: &ExpenseStore<B>, path: &Path) -> Result<CmdResult> {
    if is_same_file(path, &store.location()) {
        return Err(SpendzError::invalid(
            "path",
            format!("{} is the live data file", path.display()),
        ));
    }

    let expenses = store.list_all();
    let content = serde_json::to_string_pretty(&expenses).map_err(SpendzError::Serialization)?;
    write_atomic(path, &content)?;
    tracing::debug!(path = %path.display(), count = expenses.len(), "exported expenses");

    let mut result = CmdResult::default();
    if expenses.is_empty() {
        result.add_message(CmdMessage::warning("No expenses recorded; the export is an empty list."));
    }
    result.add_message(CmdMessage::success(format!(
        "Exported {} expense(s) to {}",
        expenses.len(),
        path.display()
    )));
    result.exported_path = Some(path.to_path_buf());
    Ok(result)
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

use crate::error::Result;
use crate::model::Expense;
use std::path::PathBuf;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `ExpenseStore` handles the "what" (ids, validation, queries).
pub trait StorageBackend {
    /// Load the full record sequence.
    /// Returns Ok(None) when nothing has been stored yet (missing file).
    /// Returns Err for I/O failures and for data that does not parse.
    fn load(&self) -> Result<Option<Vec<Expense>>>;

    /// Replace the stored sequence with `expenses`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save(&self, expenses: &[Expense]) -> Result<()>;

    /// Where the data lives. For MemBackend, a virtual path.
    fn location(&self) -> PathBuf;
}

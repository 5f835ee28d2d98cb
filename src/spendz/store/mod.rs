//! # Storage Layer
//!
//! [`ExpenseStore`] is the one stateful component of spendz. It owns every
//! record in memory and persists the full sequence after each mutation.
//!
//! ## Store vs Backend
//!
//! - [`backend::StorageBackend`] is the raw medium: load the whole sequence,
//!   save the whole sequence. No ids, no validation, no queries.
//! - [`ExpenseStore`] is the logic: id assignment, invariant checks on load,
//!   sorting, totals, search, rollback when a save fails.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: a single JSON file (see [`FileStore`]).
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O
//!   (see [`InMemoryStore`]).
//!
//! ## File Format
//!
//! A top-level JSON array, one object per record:
//!
//! ```text
//! [
//!   { "id": 1, "amount": 12.5, "category": "food", "note": "lunch", "date": "2024-01-05" }
//! ]
//! ```
//!
//! Writes go to a hidden `.{name}-{uuid}.tmp` sibling which is renamed over
//! the target, so a crash mid-write leaves the previous file intact.
//!
//! ## Corrupt Files
//!
//! A file that exists but does not parse is never reset or overwritten:
//! opening the store fails with `CorruptData` and the user has to fix or move
//! the file.

pub mod backend;
pub mod expense_store;
pub mod fs_backend;
pub mod mem_backend;

pub use expense_store::{sort_expenses, ExpenseStore};

/// Production store, backed by a JSON file.
pub type FileStore = ExpenseStore<fs_backend::FsBackend>;

/// Non-persistent store for tests.
pub type InMemoryStore = ExpenseStore<mem_backend::MemBackend>;

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::mem_backend::MemBackend;
    use super::InMemoryStore;
    use crate::model::{parse_date, Expense, NewExpense};
    use rust_decimal::Decimal;

    pub const DEFAULT_CATEGORY: &str = "Uncategorized";

    /// Validated expense from literal test values.
    pub fn new_expense(amount: Decimal, category: &str, note: &str, date: &str) -> NewExpense {
        NewExpense::new(
            amount,
            category,
            note,
            parse_date(date).unwrap(),
            DEFAULT_CATEGORY,
        )
        .unwrap()
    }

    /// Stages records as if a previous run had saved them.
    #[derive(Default)]
    pub struct StoreFixture {
        expenses: Vec<Expense>,
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self::default()
        }

        /// Adds a record with the next sequential id.
        pub fn with_expense(self, amount: Decimal, category: &str, note: &str, date: &str) -> Self {
            let id = self.expenses.iter().map(|e| e.id).max().unwrap_or(0) + 1;
            self.with_raw(id, amount, category, note, date)
        }

        /// Adds a record verbatim, skipping validation.
        pub fn with_raw(
            mut self,
            id: u64,
            amount: Decimal,
            category: &str,
            note: &str,
            date: &str,
        ) -> Self {
            self.expenses.push(Expense {
                id,
                amount,
                category: category.to_string(),
                note: note.to_string(),
                date: parse_date(date).unwrap(),
            });
            self
        }

        pub fn into_backend(self) -> MemBackend {
            MemBackend::with_expenses(self.expenses)
        }

        pub fn open(self) -> InMemoryStore {
            InMemoryStore::open(self.into_backend()).unwrap()
        }
    }
}

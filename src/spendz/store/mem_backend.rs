use super::backend::StorageBackend;
use crate::error::{Result, SpendzError};
use crate::model::Expense;
use std::cell::RefCell;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since spendz is single-threaded,
/// so the `StorageBackend` trait can use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    expenses: RefCell<Option<Vec<Expense>>>,
    save_count: RefCell<usize>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the backend as if a previous run had saved `expenses`.
    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        Self {
            expenses: RefCell::new(Some(expenses)),
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Snapshot of what was last persisted.
    pub fn stored(&self) -> Option<Vec<Expense>> {
        self.expenses.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.save_count.borrow()
    }
}

impl StorageBackend for MemBackend {
    fn load(&self) -> Result<Option<Vec<Expense>>> {
        Ok(self.expenses.borrow().clone())
    }

    fn save(&self, expenses: &[Expense]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(SpendzError::Io(std::io::Error::other("simulated write error")));
        }
        *self.expenses.borrow_mut() = Some(expenses.to_vec());
        *self.save_count.borrow_mut() += 1;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://expenses.json")
    }
}

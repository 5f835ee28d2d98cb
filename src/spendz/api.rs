//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all spendz operations, regardless of the UI being used.
//!
//! It dispatches to `commands/*.rs`, turns raw user strings into a validated
//! [`NewExpense`], and returns structured [`CmdResult`]s. It never prints.
//!
//! `SpendzApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `SpendzApi<FsBackend>`
//! - Testing: `SpendzApi<MemBackend>`
//!
//! One instance is built at program start and handed to each handler by
//! reference; there is no process-wide store.
//!
//! Configuration does not go through the API: it needs only
//! [`SpendzPaths`], and must keep working when the data file is corrupt.

use crate::commands;
use crate::config::DEFAULT_CATEGORY;
use crate::error::Result;
use crate::model::NewExpense;
use crate::store::backend::StorageBackend;
use crate::store::ExpenseStore;
use std::path::Path;

/// Raw, unvalidated add request as typed by a user.
#[derive(Debug, Clone, Default)]
pub struct AddRequest {
    pub amount: String,
    pub category: String,
    pub note: String,
    pub date: Option<String>,
}

pub struct SpendzApi<B: StorageBackend> {
    store: ExpenseStore<B>,
    default_category: String,
}

impl<B: StorageBackend> SpendzApi<B> {
    pub fn new(store: ExpenseStore<B>) -> Self {
        Self {
            store,
            default_category: DEFAULT_CATEGORY.to_string(),
        }
    }

    pub fn with_default_category(mut self, category: impl Into<String>) -> Self {
        self.default_category = category.into();
        self
    }

    pub fn add_expense(&mut self, request: AddRequest) -> Result<commands::CmdResult> {
        let new = NewExpense::parse(
            &request.amount,
            &request.category,
            &request.note,
            request.date.as_deref(),
            &self.default_category,
        )?;
        commands::add::run(&mut self.store, new)
    }

    pub fn list_expenses(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn total(&self) -> Result<commands::CmdResult> {
        commands::total::run(&self.store)
    }

    pub fn total_by_category(&self) -> Result<commands::CmdResult> {
        commands::categories::run(&self.store)
    }

    pub fn search_expenses(&self, fragment: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, fragment)
    }

    pub fn delete_expense(&mut self, id: u64) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn export_expenses(&self, path: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, path)
    }

    pub fn store(&self) -> &ExpenseStore<B> {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CategoryTotal, CmdMessage, CmdResult, MessageLevel, SpendzPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpendzError;
    use crate::store::mem_backend::MemBackend;
    use crate::store::InMemoryStore;
    use rust_decimal_macros::dec;

    fn api() -> SpendzApi<MemBackend> {
        SpendzApi::new(InMemoryStore::open(MemBackend::new()).unwrap())
    }

    fn request(amount: &str, category: &str, date: &str) -> AddRequest {
        AddRequest {
            amount: amount.into(),
            category: category.into(),
            note: String::new(),
            date: Some(date.into()),
        }
    }

    #[test]
    fn add_parses_raw_input() {
        let mut api = api();
        let result = api.add_expense(request("12.50", "food", "2024-01-05")).unwrap();
        assert_eq!(result.affected_expenses[0].amount, dec!(12.50));
        assert_eq!(api.store().len(), 1);
    }

    #[test]
    fn add_rejects_invalid_input_without_touching_store() {
        let mut api = api();
        for (amount, date) in [("0", "2024-01-05"), ("abc", "2024-01-05"), ("3", "2024-13-01")] {
            let err = api.add_expense(request(amount, "food", date)).unwrap_err();
            assert!(matches!(err, SpendzError::InvalidInput { .. }));
        }
        assert!(api.store().is_empty());
    }

    #[test]
    fn add_uses_configured_default_category() {
        let mut api = api().with_default_category("General");
        let result = api.add_expense(request("1", "", "2024-01-05")).unwrap();
        assert_eq!(result.affected_expenses[0].category, "General");
    }

    #[test]
    fn dispatches_queries() {
        let mut api = api();
        api.add_expense(request("12.50", "food", "2024-01-05")).unwrap();
        api.add_expense(request("40", "rent", "2024-01-01")).unwrap();

        assert_eq!(api.list_expenses().unwrap().listed_expenses.len(), 2);
        assert_eq!(api.total().unwrap().total, Some(dec!(52.50)));
        assert_eq!(api.total_by_category().unwrap().category_totals.len(), 2);
        assert_eq!(api.search_expenses("rent").unwrap().listed_expenses.len(), 1);

        api.delete_expense(2).unwrap();
        assert!(matches!(api.delete_expense(2), Err(SpendzError::NotFound(2))));
    }
}

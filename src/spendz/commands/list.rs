use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::ExpenseStore;

pub fn run<B: StorageBackend>(store: &ExpenseStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_expenses(store.list_all()))
}

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::ExpenseStore;

pub fn run<B: StorageBackend>(store: &ExpenseStore<B>, fragment: &str) -> Result<CmdResult> {
    let matches = store.search(fragment);
    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No expenses match '{}'.",
            fragment.trim()
        )));
    }
    Ok(result.with_listed_expenses(matches))
}

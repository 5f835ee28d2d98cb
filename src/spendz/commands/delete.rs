use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::ExpenseStore;

pub fn run<B: StorageBackend>(store: &mut ExpenseStore<B>, id: u64) -> Result<CmdResult> {
    let removed = store.delete(id)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Expense deleted ({}): {} {} on {}",
        removed.id,
        removed.amount,
        removed.category,
        removed.date_string()
    )));
    Ok(result.with_affected_expenses(vec![removed]))
}

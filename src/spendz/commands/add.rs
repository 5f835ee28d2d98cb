use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NewExpense;
use crate::store::backend::StorageBackend;
use crate::store::ExpenseStore;

pub fn run<B: StorageBackend>(store: &mut ExpenseStore<B>, new: NewExpense) -> Result<CmdResult> {
    let expense = store.add(new)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Expense added ({}): {} {} on {}",
        expense.id,
        expense.amount,
        expense.category,
        expense.date_string()
    )));
    Ok(result.with_affected_expenses(vec![expense]))
}

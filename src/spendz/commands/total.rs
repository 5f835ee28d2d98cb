use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::ExpenseStore;

pub fn run<B: StorageBackend>(store: &ExpenseStore<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_total(store.total()?);
    result.add_message(CmdMessage::info(match store.len() {
        1 => "1 expense".to_string(),
        n => format!("{} expenses", n),
    }));
    Ok(result)
}

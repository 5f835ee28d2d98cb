use crate::commands::{CategoryTotal, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::ExpenseStore;

/// Per-category totals, biggest spend first (ties by name).
pub fn run<B: StorageBackend>(store: &ExpenseStore<B>) -> Result<CmdResult> {
    let mut totals: Vec<CategoryTotal> = store
        .total_by_category()?
        .into_iter()
        .map(|(category, amount)| CategoryTotal { category, amount })
        .collect();
    totals.sort_by(|a, b| {
        b.amount
            .cmp(&a.amount)
            .then_with(|| a.category.cmp(&b.category))
    });

    let mut result = CmdResult::default().with_total(store.total()?);
    if totals.is_empty() {
        result.add_message(CmdMessage::info("No category data."));
    }
    Ok(result.with_category_totals(totals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn orders_by_amount_descending() {
        let store = StoreFixture::new()
            .with_expense(dec!(12.50), "food", "", "2024-01-05")
            .with_expense(dec!(40), "rent", "", "2024-01-01")
            .with_expense(dec!(30), "food", "", "2024-01-07")
            .with_expense(dec!(5), "books", "", "2024-01-03")
            .with_expense(dec!(5), "apps", "", "2024-01-03")
            .open();

        let result = run(&store).unwrap();
        let names: Vec<&str> = result
            .category_totals
            .iter()
            .map(|t| t.category.as_str())
            .collect();
        assert_eq!(names, vec!["food", "rent", "apps", "books"]);
        assert_eq!(result.category_totals[0].amount, dec!(42.50));

        let sum: Decimal = result.category_totals.iter().map(|t| t.amount).sum();
        assert_eq!(Some(sum), result.total);
    }

    #[test]
    fn empty_store_has_no_categories() {
        let store = StoreFixture::new().open();
        let result = run(&store).unwrap();
        assert!(result.category_totals.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}

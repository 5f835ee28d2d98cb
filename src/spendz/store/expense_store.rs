use super::backend::StorageBackend;
use crate::error::{Result, SpendzError};
use crate::model::{Expense, NewExpense, MAX_AMOUNT};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

/// The expense store: a fully loaded snapshot of every record plus the
/// backend it is persisted to.
///
/// Every mutation goes through [`ExpenseStore::save`] before returning, so the
/// backend always reflects the in-memory state. When the save fails, the
/// snapshot is rolled back and the error is returned.
pub struct ExpenseStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    expenses: Vec<Expense>,
    /// Highest id handed out by this instance, so an id freed by deleting the
    /// newest record is not issued again in the same session.
    last_issued: u64,
}

impl<B: StorageBackend> ExpenseStore<B> {
    /// Creates a store over `backend` and loads its contents.
    pub fn open(backend: B) -> Result<Self> {
        let mut store = Self {
            backend,
            expenses: Vec::new(),
            last_issued: 0,
        };
        store.load()?;
        Ok(store)
    }

    /// Replaces the snapshot with what the backend holds.
    ///
    /// A missing file is an empty store. Data that does not parse, or that
    /// holds duplicate ids or amounts outside `(0, MAX_AMOUNT]`, is
    /// `CorruptData` and the snapshot is left untouched.
    pub fn load(&mut self) -> Result<usize> {
        let expenses = self.backend.load()?.unwrap_or_default();
        self.validate(&expenses)?;
        self.last_issued = self.last_issued.max(max_id(&expenses));
        self.expenses = expenses;
        Ok(self.expenses.len())
    }

    /// Writes the whole snapshot back to the backend.
    pub fn save(&self) -> Result<()> {
        self.backend.save(&self.expenses)
    }

    pub fn add(&mut self, new: NewExpense) -> Result<Expense> {
        if new.amount() <= Decimal::ZERO {
            return Err(SpendzError::invalid(
                "amount",
                format!("{} must be greater than zero", new.amount()),
            ));
        }

        let id = self
            .last_issued
            .max(max_id(&self.expenses))
            .checked_add(1)
            .ok_or(SpendzError::Overflow("next expense id"))?;
        let expense = new.into_expense(id);
        self.expenses.push(expense.clone());

        if let Err(e) = self.save() {
            self.expenses.pop();
            return Err(e);
        }

        self.last_issued = id;
        tracing::debug!(id, amount = %expense.amount, category = %expense.category, "expense added");
        Ok(expense)
    }

    /// All records, oldest date first, ties broken by id.
    pub fn list_all(&self) -> Vec<Expense> {
        let mut all = self.expenses.clone();
        sort_expenses(&mut all);
        all
    }

    pub fn total(&self) -> Result<Decimal> {
        checked_sum(self.expenses.iter().map(|e| e.amount))
    }

    pub fn total_by_category(&self) -> Result<BTreeMap<String, Decimal>> {
        let mut totals = BTreeMap::new();
        for expense in &self.expenses {
            let slot = totals
                .entry(expense.category.clone())
                .or_insert(Decimal::ZERO);
            *slot = checked_sum([*slot, expense.amount])?;
        }
        Ok(totals)
    }

    /// Case-insensitive substring search over category, note and date.
    /// An empty fragment matches every record.
    pub fn search(&self, fragment: &str) -> Vec<Expense> {
        let needle = fragment.trim().to_lowercase();
        let mut found: Vec<Expense> = self
            .expenses
            .iter()
            .filter(|e| e.matches(&needle))
            .cloned()
            .collect();
        sort_expenses(&mut found);
        found
    }

    pub fn get(&self, id: u64) -> Result<&Expense> {
        self.expenses
            .iter()
            .find(|e| e.id == id)
            .ok_or(SpendzError::NotFound(id))
    }

    /// Removes the record with `id` and returns it.
    pub fn delete(&mut self, id: u64) -> Result<Expense> {
        let pos = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or(SpendzError::NotFound(id))?;
        let removed = self.expenses.remove(pos);

        if let Err(e) = self.save() {
            self.expenses.insert(pos, removed);
            return Err(e);
        }

        tracing::debug!(id, "expense deleted");
        Ok(removed)
    }

    /// Records in insertion order.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn validate(&self, expenses: &[Expense]) -> Result<()> {
        let corrupt = |reason: String| SpendzError::CorruptData {
            path: self.backend.location(),
            reason,
        };

        let mut seen = HashSet::with_capacity(expenses.len());
        for expense in expenses {
            if !seen.insert(expense.id) {
                return Err(corrupt(format!("duplicate id {}", expense.id)));
            }
            if expense.amount <= Decimal::ZERO {
                return Err(corrupt(format!(
                    "expense {} has non-positive amount {}",
                    expense.id, expense.amount
                )));
            }
            if expense.amount > MAX_AMOUNT {
                return Err(corrupt(format!(
                    "expense {} amount {} exceeds {}",
                    expense.id, expense.amount, MAX_AMOUNT
                )));
            }
        }
        Ok(())
    }
}

pub fn sort_expenses(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
}

/// Sums amounts, failing instead of panicking when `Decimal` overflows.
pub fn checked_sum(amounts: impl IntoIterator<Item = Decimal>) -> Result<Decimal> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
        .ok_or(SpendzError::Overflow("total"))
}

fn max_id(expenses: &[Expense]) -> u64 {
    expenses.iter().map(|e| e.id).max().unwrap_or(0)
}

use crate::config::SpendzConfig;
use crate::model::Expense;
use rust_decimal::Decimal;
use std::path::PathBuf;

pub mod add;
pub mod categories;
pub mod config;
pub mod delete;
pub mod export;
pub mod list;
pub mod search;
pub mod total;

/// Where spendz keeps its files for this run.
#[derive(Debug, Clone)]
pub struct SpendzPaths {
    /// Directory holding `config.json` (and the default data file).
    pub home: PathBuf,
    /// The resolved backing data file.
    pub data_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Decimal,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_expenses: Vec<Expense>,
    pub listed_expenses: Vec<Expense>,
    pub total: Option<Decimal>,
    pub category_totals: Vec<CategoryTotal>,
    pub exported_path: Option<PathBuf>,
    pub config: Option<SpendzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_expenses(mut self, expenses: Vec<Expense>) -> Self {
        self.affected_expenses = expenses;
        self
    }

    pub fn with_listed_expenses(mut self, expenses: Vec<Expense>) -> Self {
        self.listed_expenses = expenses;
        self
    }

    pub fn with_total(mut self, total: Decimal) -> Self {
        self.total = Some(total);
        self
    }

    pub fn with_category_totals(mut self, totals: Vec<CategoryTotal>) -> Self {
        self.category_totals = totals;
        self
    }

    pub fn with_config(mut self, config: SpendzConfig) -> Self {
        self.config = Some(config);
        self
    }
}

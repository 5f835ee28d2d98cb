use crate::error::{Result, SpendzError};
use chrono::{Local, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Amounts are kept to cents.
pub const AMOUNT_SCALE: u32 = 2;

/// Largest accepted amount, `9_999_999_999_999.99`.
///
/// Amounts are stored as JSON numbers, which are read back as `f64`. Every
/// cent value up to this bound has at most 15 significant digits and so
/// survives that trip unchanged.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_7FFF, 0x0003_8D7E, 0, false, AMOUNT_SCALE);

/// A single stored expense. Records are never edited once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: u64,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: String,
    #[serde(default)]
    pub note: String,
    pub date: NaiveDate,
}

impl Expense {
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Case-insensitive match on category, note and the `YYYY-MM-DD` date.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.category.to_lowercase().contains(needle)
            || self.note.to_lowercase().contains(needle)
            || self.date_string().contains(needle)
    }
}

/// A validated, not yet stored expense. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    amount: Decimal,
    category: String,
    note: String,
    date: NaiveDate,
}

impl NewExpense {
    /// Builds an expense from typed values, rejecting amounts that are not
    /// positive or exceed [`MAX_AMOUNT`].
    pub fn new(
        amount: Decimal,
        category: &str,
        note: &str,
        date: NaiveDate,
        default_category: &str,
    ) -> Result<Self> {
        let amount = amount.round_dp(AMOUNT_SCALE);
        if amount <= Decimal::ZERO {
            return Err(SpendzError::invalid(
                "amount",
                format!("{} must be greater than zero", amount),
            ));
        }
        if amount > MAX_AMOUNT {
            return Err(SpendzError::invalid(
                "amount",
                format!("{} exceeds the maximum of {}", amount, MAX_AMOUNT),
            ));
        }

        let category = match category.trim() {
            "" => default_category.trim().to_string(),
            c => c.to_string(),
        };

        Ok(Self {
            amount,
            category,
            note: note.trim().to_string(),
            date,
        })
    }

    /// Builds an expense from raw user input. A missing date means today.
    pub fn parse(
        amount: &str,
        category: &str,
        note: &str,
        date: Option<&str>,
        default_category: &str,
    ) -> Result<Self> {
        let amount = parse_amount(amount)?;
        let date = match date {
            Some(raw) => parse_date(raw)?,
            None => Local::now().date_naive(),
        };
        Self::new(amount, category, note, date, default_category)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub(crate) fn into_expense(self, id: u64) -> Expense {
        Expense {
            id,
            amount: self.amount,
            category: self.category,
            note: self.note,
            date: self.date,
        }
    }
}

/// Plain decimals, or scientific notation such as `1.5e2`.
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| SpendzError::invalid("amount", format!("'{}' is not a number", trimmed)))
}

/// Accepts `YYYY-MM-DD`, or an ISO datetime whose date part is kept.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(date);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, DATETIME_FORMAT) {
        return Ok(dt.date());
    }
    Err(SpendzError::invalid(
        "date",
        format!("'{}' is not a valid YYYY-MM-DD date", trimmed),
    ))
}

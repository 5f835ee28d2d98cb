use colored::Colorize;
use rust_decimal::Decimal;
use spendz::api::{CategoryTotal, CmdMessage, MessageLevel};
use spendz::config::SpendzConfig;
use spendz::model::Expense;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const CATEGORY_WIDTH: usize = 18;
const NOTE_WIDTH: usize = 40;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_expenses(expenses: &[Expense]) {
    if expenses.is_empty() {
        println!("No expenses found.");
        return;
    }
    for line in render_expense_table(expenses) {
        println!("{}", line);
    }
}

/// Plain (uncolored) table lines: header then one row per expense.
pub(super) fn render_expense_table(expenses: &[Expense]) -> Vec<String> {
    let id_width = expenses
        .iter()
        .map(|e| e.id.to_string().len())
        .max()
        .unwrap_or(0)
        .max(2);
    let amount_width = expenses
        .iter()
        .map(|e| format_amount(e.amount).len())
        .max()
        .unwrap_or(0)
        .max(6);
    let category_width = expenses
        .iter()
        .map(|e| e.category.width())
        .max()
        .unwrap_or(0)
        .clamp(8, CATEGORY_WIDTH);

    let mut lines = Vec::with_capacity(expenses.len() + 1);
    lines.push(
        format!(
            "{:>id_w$}  {:<10}  {}  {:>amt_w$}  {}",
            "ID",
            "DATE",
            pad_to_width("CATEGORY", category_width),
            "AMOUNT",
            "NOTE",
            id_w = id_width,
            amt_w = amount_width,
        )
        .trim_end()
        .to_string(),
    );

    for e in expenses {
        let category = pad_to_width(&truncate_to_width(&e.category, category_width), category_width);
        let note = truncate_to_width(&e.note.replace('\n', " "), NOTE_WIDTH);
        lines.push(
            format!(
                "{:>id_w$}  {}  {}  {:>amt_w$}  {}",
                e.id,
                e.date_string(),
                category,
                format_amount(e.amount),
                note,
                id_w = id_width,
                amt_w = amount_width,
            )
            .trim_end()
            .to_string(),
        );
    }
    lines
}

pub(super) fn print_total(total: Decimal) {
    println!("Total spending: {}", format_amount(total).bold());
}

pub(super) fn print_category_totals(totals: &[CategoryTotal], total: Option<Decimal>) {
    if let Some(total) = total {
        print_total(total);
    }
    if totals.is_empty() {
        return;
    }
    println!();
    println!("Spending by category:");
    for line in render_category_totals(totals) {
        println!("{}", line);
    }
}

pub(super) fn render_category_totals(totals: &[CategoryTotal]) -> Vec<String> {
    let name_width = totals.iter().map(|t| t.category.width()).max().unwrap_or(0);
    let amount_width = totals
        .iter()
        .map(|t| format_amount(t.amount).len())
        .max()
        .unwrap_or(0);
    totals
        .iter()
        .map(|t| {
            format!(
                "  {}  {:>w$}",
                pad_to_width(&t.category, name_width),
                format_amount(t.amount),
                w = amount_width
            )
        })
        .collect()
}

pub(super) fn print_config(config: &SpendzConfig) {
    for key in ["data-file", "default-category"] {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

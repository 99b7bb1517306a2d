use serde::{Deserialize, Serialize};

use super::{Category, Transaction};

/// Aggregate totals over a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub balance: f64,
    pub income: f64,
    pub expense: f64,
}

/// Compute income, expense and balance over a sequence of transactions.
/// Transactions whose category matches neither canonical label are excluded
/// from both sums.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut income = 0.0;
    let mut expense = 0.0;

    for transaction in transactions {
        match transaction.category() {
            Some(Category::Income) => income += transaction.amount,
            Some(Category::Expense) => expense += transaction.amount,
            None => {}
        }
    }

    Summary {
        balance: income - expense,
        income,
        expense,
    }
}

/// Transactions whose category matches the given label, case-insensitively.
/// Original order preserved; empty when nothing matches.
pub fn filter_by_category(transactions: &[Transaction], label: &str) -> Vec<Transaction> {
    let folded = label.to_lowercase();
    transactions
        .iter()
        .filter(|t| t.category.to_lowercase() == folded)
        .cloned()
        .collect()
}

/// Transactions whose date equals the given date string exactly.
pub fn filter_by_date(transactions: &[Transaction], date: &str) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.date == date)
        .cloned()
        .collect()
}

/// Transactions whose amount equals the given value exactly.
pub fn filter_by_amount(transactions: &[Transaction], amount: f64) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.amount == amount)
        .cloned()
        .collect()
}

use std::path::Path;

use crate::domain::{
    self, Summary, Transaction, validate_amount, validate_category, validate_date,
    validate_description,
};
use crate::storage::Repository;

use super::AppError;

/// Application service holding the whole ledger in memory for the session.
/// This is the primary interface for any client (CLI, menu, tests).
///
/// The ledger is loaded wholesale when the service is opened, mutated in
/// memory, and written back wholesale on `save`. Every mutation validates all
/// fields first; nothing changes on failure.
pub struct LedgerService {
    repo: Repository,
    transactions: Vec<Transaction>,
}

impl LedgerService {
    /// Open the ledger at the given path, creating an empty data file if none
    /// exists yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let repo = Repository::new(path.as_ref());
        let transactions = repo.load()?;
        Ok(Self { repo, transactions })
    }

    /// The full transaction sequence, in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Write the in-memory ledger back to disk, overwriting the data file.
    pub fn save(&self) -> Result<(), AppError> {
        self.repo.save(&self.transactions)?;
        Ok(())
    }

    /// Validate the fields and append a new transaction. No file write.
    pub fn add_transaction(
        &mut self,
        date: &str,
        category: &str,
        amount: &str,
        description: &str,
    ) -> Result<Transaction, AppError> {
        let transaction = build_transaction(date, category, amount, description)?;
        self.transactions.push(transaction.clone());
        Ok(transaction)
    }

    /// Replace every field of the transaction at the given 0-based position.
    pub fn update_transaction(
        &mut self,
        index: usize,
        date: &str,
        category: &str,
        amount: &str,
        description: &str,
    ) -> Result<Transaction, AppError> {
        let len = self.transactions.len();
        if index >= len {
            return Err(AppError::IndexOutOfRange { index, len });
        }

        let transaction = build_transaction(date, category, amount, description)?;
        self.transactions[index] = transaction.clone();
        Ok(transaction)
    }

    /// Balance, total income and total expense over the whole ledger.
    pub fn summarize(&self) -> Summary {
        domain::summarize(&self.transactions)
    }

    /// Transactions matching the category label, case-insensitively.
    pub fn filter_by_category(&self, label: &str) -> Vec<Transaction> {
        domain::filter_by_category(&self.transactions, label)
    }

    /// Transactions with exactly the given date string.
    pub fn filter_by_date(&self, date: &str) -> Vec<Transaction> {
        domain::filter_by_date(&self.transactions, date)
    }

    /// Transactions with exactly the given amount.
    pub fn filter_by_amount(&self, amount: f64) -> Vec<Transaction> {
        domain::filter_by_amount(&self.transactions, amount)
    }
}

/// Validate all fields, then construct. Ordering matters: no transaction
/// exists until every field has passed.
fn build_transaction(
    date: &str,
    category: &str,
    amount: &str,
    description: &str,
) -> Result<Transaction, AppError> {
    let date = validate_date(date)?;
    let category = validate_category(category)?;
    let amount = validate_amount(amount)?;
    let description = validate_description(description)?;
    Ok(Transaction::new(date, category, amount, description))
}

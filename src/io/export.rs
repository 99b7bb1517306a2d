use std::io::Write;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::{Transaction, format_amount};

/// Ledger snapshot for JSON export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub version: String,
    pub transactions: Vec<Transaction>,
}

/// Exporter for converting ledger data to exchange formats. The flat text
/// data file stays the only store; CSV and JSON are one-way surfaces.
pub struct Exporter<'a> {
    transactions: &'a [Transaction],
}

impl<'a> Exporter<'a> {
    pub fn new(transactions: &'a [Transaction]) -> Self {
        Self { transactions }
    }

    /// Export transactions to CSV. Returns the number of rows written.
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["date", "category", "amount", "description"])?;

        let mut count = 0;
        for transaction in self.transactions {
            csv_writer.write_record([
                transaction.date.as_str(),
                transaction.category.as_str(),
                &format_amount(transaction.amount),
                transaction.description.as_str(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export the ledger as a JSON snapshot.
    pub fn export_json<W: Write>(&self, mut writer: W) -> Result<usize> {
        let snapshot = LedgerSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            transactions: self.transactions.to_vec(),
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;

        Ok(snapshot.transactions.len())
    }
}

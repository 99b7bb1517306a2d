use std::io::Read;

use anyhow::Result;

use crate::domain::{
    Transaction, validate_amount, validate_category, validate_date, validate_description,
};

/// Error that occurred on one CSV row during import.
#[derive(Debug, Clone)]
pub struct ImportError {
    pub line: usize,
    pub error: String,
}

/// Outcome of reading a CSV file: rows that passed field validation, and
/// per-line errors for the rows that did not.
#[derive(Debug, Clone)]
pub struct CsvImport {
    pub transactions: Vec<Transaction>,
    pub errors: Vec<ImportError>,
}

/// Read transactions from CSV with a `date,category,amount,description`
/// header. Every row goes through the same field validators as interactive
/// input; invalid rows are collected and skipped, not fatal.
pub fn read_transactions_csv<R: Read>(reader: R) -> Result<CsvImport> {
    // Flexible so that short rows surface as field-count errors rather than
    // aborting the whole read.
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut transactions = Vec::new();
    let mut errors = Vec::new();

    for (row_num, result) in csv_reader.records().enumerate() {
        let line = row_num + 2; // header row plus 0-indexing

        let record = match result {
            Ok(record) => record,
            Err(e) => {
                errors.push(ImportError {
                    line,
                    error: format!("CSV parse error: {}", e),
                });
                continue;
            }
        };

        if record.len() < 4 {
            errors.push(ImportError {
                line,
                error: format!("expected 4 fields, found {}", record.len()),
            });
            continue;
        }

        match row_to_transaction(&record[0], &record[1], &record[2], &record[3]) {
            Ok(transaction) => transactions.push(transaction),
            Err(e) => errors.push(ImportError {
                line,
                error: e.to_string(),
            }),
        }
    }

    Ok(CsvImport {
        transactions,
        errors,
    })
}

fn row_to_transaction(
    date: &str,
    category: &str,
    amount: &str,
    description: &str,
) -> Result<Transaction> {
    let date = validate_date(date)?;
    let category = validate_category(category)?;
    let amount = validate_amount(amount)?;
    let description = validate_description(description)?;
    Ok(Transaction::new(date, category, amount, description))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_valid_rows() {
        let csv = "date,category,amount,description\n\
                   2024-01-15,доход,1500.0,Salary\n\
                   2024-01-16,РАСХОД,12.5,Coffee\n";

        let import = read_transactions_csv(csv.as_bytes()).unwrap();
        assert_eq!(import.errors.len(), 0);
        assert_eq!(import.transactions.len(), 2);
        // Category is normalized on the way in
        assert_eq!(import.transactions[1].category, "расход");
    }

    #[test]
    fn test_invalid_rows_are_collected_not_fatal() {
        let csv = "date,category,amount,description\n\
                   2024-01-15,доход,1500.0,Salary\n\
                   2024-1-5,доход,10.0,bad date\n\
                   2024-01-17,расход,-3,bad amount\n";

        let import = read_transactions_csv(csv.as_bytes()).unwrap();
        assert_eq!(import.transactions.len(), 1);
        assert_eq!(import.errors.len(), 2);
        assert_eq!(import.errors[0].line, 3);
        assert_eq!(import.errors[1].line, 4);
    }

    #[test]
    fn test_short_row_is_an_error() {
        let csv = "date,category,amount,description\n2024-01-15,доход\n";

        let import = read_transactions_csv(csv.as_bytes()).unwrap();
        assert!(import.transactions.is_empty());
        assert_eq!(import.errors.len(), 1);
    }
}

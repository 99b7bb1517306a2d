use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::{Transaction, format_amount};

/// Field labels of the data file format. Fixed tokens, one per line, in this
/// order; changing them would break existing data files.
pub const DATE_LABEL: &str = "Дата";
pub const CATEGORY_LABEL: &str = "Категория";
pub const AMOUNT_LABEL: &str = "Сумма";
pub const DESCRIPTION_LABEL: &str = "Описание";

/// Lines per record.
const FIELD_COUNT: usize = 4;

#[derive(Error, Debug)]
pub enum StorageError {
    /// A record on disk does not follow the 4-line format. Fatal to load:
    /// aborting is preferred over silently dropping data.
    #[error("malformed record at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Repository for persisting the ledger to a flat text file.
///
/// One record per paragraph, blank-line separated, four `Label: value` lines
/// in fixed order. The whole file is read and written wholesale; there is no
/// append mode, no locking and no atomic replace.
pub struct Repository {
    path: PathBuf,
}

impl Repository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all transactions from the data file.
    ///
    /// A missing file is not an error: an empty file is created at the path
    /// and an empty ledger is returned. Any other I/O failure, and any
    /// malformed record, aborts the load.
    pub fn load(&self) -> Result<Vec<Transaction>, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                File::create(&self.path)?;
                return Ok(Vec::new());
            }
            Err(e) => return Err(StorageError::Io(e)),
        };

        parse_records(&contents)
    }

    /// Overwrite the data file with the given transactions.
    ///
    /// All-or-nothing from the caller's perspective only: a failure mid-write
    /// leaves the file in an undefined state. Callers keep their in-memory
    /// ledger and may retry.
    pub fn save(&self, transactions: &[Transaction]) -> Result<(), StorageError> {
        fs::write(&self.path, render_records(transactions))?;
        Ok(())
    }
}

/// Parse the textual ledger format into transactions.
///
/// Non-blank lines (trailing whitespace trimmed) accumulate into a record
/// buffer; a blank line flushes the buffer into one transaction. A trailing
/// record without its blank line is flushed at end of input.
pub fn parse_records(input: &str) -> Result<Vec<Transaction>, StorageError> {
    let mut transactions = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();
    let mut record_start = 1;

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim_end();
        if line.is_empty() {
            transactions.push(record_from_lines(&buffer, record_start)?);
            buffer.clear();
            record_start = idx + 2;
        } else {
            buffer.push(line);
        }
    }

    if !buffer.is_empty() {
        transactions.push(record_from_lines(&buffer, record_start)?);
    }

    Ok(transactions)
}

/// Serialize transactions into the textual ledger format, one blank line
/// after every record (including the last).
pub fn render_records(transactions: &[Transaction]) -> String {
    let mut out = String::new();
    for transaction in transactions {
        out.push_str(&format!("{}: {}\n", DATE_LABEL, transaction.date));
        out.push_str(&format!("{}: {}\n", CATEGORY_LABEL, transaction.category));
        out.push_str(&format!(
            "{}: {}\n",
            AMOUNT_LABEL,
            format_amount(transaction.amount)
        ));
        out.push_str(&format!(
            "{}: {}\n\n",
            DESCRIPTION_LABEL, transaction.description
        ));
    }
    out
}

/// Map one flushed record buffer to a transaction. The mapping is positional:
/// labels are not inspected, extra lines beyond the four fields are ignored.
fn record_from_lines(lines: &[&str], line_no: usize) -> Result<Transaction, StorageError> {
    if lines.len() < FIELD_COUNT {
        return Err(StorageError::Malformed {
            line: line_no,
            reason: format!(
                "expected {} field lines, found {}",
                FIELD_COUNT,
                lines.len()
            ),
        });
    }

    let date = field_value(lines[0], line_no)?;
    let category = field_value(lines[1], line_no + 1)?;
    let amount_text = field_value(lines[2], line_no + 2)?;
    let description = field_value(lines[3], line_no + 3)?;

    let amount: f64 = amount_text
        .trim()
        .parse()
        .map_err(|_| StorageError::Malformed {
            line: line_no + 2,
            reason: format!("amount is not a number: '{}'", amount_text),
        })?;

    Ok(Transaction::new(date, category, amount, description))
}

/// The value of a `Label: value` line: everything after the first colon, with
/// one leading space stripped. A bare `Label:` yields an empty value, which is
/// how an empty description survives the trailing-whitespace trim on read.
fn field_value<'a>(line: &'a str, line_no: usize) -> Result<&'a str, StorageError> {
    let (_, rest) = line.split_once(':').ok_or_else(|| StorageError::Malformed {
        line: line_no,
        reason: format!("missing ': ' separator in '{}'", line),
    })?;
    Ok(rest.strip_prefix(' ').unwrap_or(rest))
}

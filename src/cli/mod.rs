use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use crate::application::{AppError, LedgerService};
use crate::domain::{
    Transaction, format_amount, validate_amount, validate_category, validate_date,
};

/// Kassa - Plain-text Personal Finance Ledger
#[derive(Parser)]
#[command(name = "kassa")]
#[command(about = "A personal finance ledger stored in a plain text file")]
#[command(version)]
pub struct Cli {
    /// Ledger data file path (created if missing)
    #[arg(short, long, default_value = "data.txt")]
    pub file: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show balance, total income and total expense
    Balance,

    /// List all transactions with their positions
    List,

    /// Add a transaction
    Add {
        /// Transaction date (YYYY-MM-DD)
        date: String,

        /// Category: "доход" (income) or "расход" (expense), any case
        category: String,

        /// Amount (e.g. "1500" or "12.5"), must be positive
        amount: String,

        /// Free-form description
        #[arg(default_value = "")]
        description: String,
    },

    /// Replace a transaction at the position shown by `list`
    Edit {
        /// Position as printed by `list` (starting at 1)
        position: usize,

        /// New date (YYYY-MM-DD)
        date: String,

        /// New category: "доход" or "расход", any case
        category: String,

        /// New amount, must be positive
        amount: String,

        /// New description
        #[arg(default_value = "")]
        description: String,
    },

    /// Search transactions by exactly one criterion
    Search {
        /// Match by category, case-insensitive
        #[arg(long)]
        category: Option<String>,

        /// Match by exact date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Match by exact amount
        #[arg(long)]
        amount: Option<String>,
    },

    /// Export transactions to CSV or JSON
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Format: csv, json
        #[arg(short = 'F', long, default_value = "csv")]
        format: String,
    },

    /// Import transactions from CSV
    Import {
        /// Input file (stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,

        /// Validate without importing
        #[arg(long)]
        dry_run: bool,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let mut service = LedgerService::open(&self.file)
            .with_context(|| format!("Failed to load ledger from {}", self.file))?;

        match self.command {
            Commands::Balance => {
                let summary = service.summarize();
                println!("Balance: {}", format_amount(summary.balance));
                println!("Income:  {}", format_amount(summary.income));
                println!("Expense: {}", format_amount(summary.expense));
            }

            Commands::List => {
                print_transactions(service.transactions());
            }

            Commands::Add {
                date,
                category,
                amount,
                description,
            } => {
                let added = service.add_transaction(&date, &category, &amount, &description)?;
                service.save()?;
                println!(
                    "Added transaction: {} {} {}",
                    added.date,
                    added.category,
                    format_amount(added.amount)
                );
            }

            Commands::Edit {
                position,
                date,
                category,
                amount,
                description,
            } => {
                // `list` prints 1-based positions; the store is 0-based.
                let index = position.checked_sub(1).ok_or(AppError::IndexOutOfRange {
                    index: 0,
                    len: service.transactions().len(),
                })?;

                let updated =
                    service.update_transaction(index, &date, &category, &amount, &description)?;
                service.save()?;
                println!(
                    "Updated transaction {}: {} {} {}",
                    position,
                    updated.date,
                    updated.category,
                    format_amount(updated.amount)
                );
            }

            Commands::Search {
                category,
                date,
                amount,
            } => {
                run_search_command(&service, category, date, amount)?;
            }

            Commands::Export { output, format } => {
                run_export_command(&service, output.as_deref(), &format)?;
            }

            Commands::Import { input, dry_run } => {
                run_import_command(&mut service, input.as_deref(), dry_run)?;
            }
        }

        Ok(())
    }
}

fn run_search_command(
    service: &LedgerService,
    category: Option<String>,
    date: Option<String>,
    amount: Option<String>,
) -> Result<()> {
    let given = [category.is_some(), date.is_some(), amount.is_some()]
        .iter()
        .filter(|b| **b)
        .count();
    if given != 1 {
        bail!("Choose exactly one criterion: --category, --date or --amount");
    }

    // Inputs go through the same validators as `add`, so a typo is reported
    // instead of silently matching nothing.
    let matched = if let Some(label) = category {
        let label = validate_category(&label).map_err(AppError::from)?;
        service.filter_by_category(&label)
    } else if let Some(date) = date {
        let date = validate_date(&date).map_err(AppError::from)?;
        service.filter_by_date(&date)
    } else if let Some(amount) = amount {
        let amount = validate_amount(&amount).map_err(AppError::from)?;
        service.filter_by_amount(amount)
    } else {
        unreachable!("exactly one criterion was checked above")
    };

    print_transactions(&matched);
    Ok(())
}

fn run_export_command(service: &LedgerService, output: Option<&str>, format: &str) -> Result<()> {
    use std::fs::File;
    use std::io::{Write, stdout};

    use crate::io::Exporter;

    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            Box::new(file)
        }
        None => Box::new(stdout()),
    };

    let exporter = Exporter::new(service.transactions());
    let count = match format {
        "csv" => exporter.export_csv(writer)?,
        "json" => exporter.export_json(writer)?,
        _ => bail!("Invalid format '{}'. Valid formats: csv, json", format),
    };

    if output.is_some() {
        eprintln!("Exported {} transactions", count);
    }
    Ok(())
}

fn run_import_command(service: &mut LedgerService, input: Option<&str>, dry_run: bool) -> Result<()> {
    use std::fs::File;
    use std::io::{Read, stdin};

    use crate::io::read_transactions_csv;

    let reader: Box<dyn Read> = match input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("Failed to open input file: {}", path))?;
            Box::new(file)
        }
        None => Box::new(stdin()),
    };

    let import = read_transactions_csv(reader)?;

    if dry_run {
        println!("Validation complete (dry run, nothing imported)");
    } else {
        for transaction in &import.transactions {
            service.add_transaction(
                &transaction.date,
                &transaction.category,
                &format_amount(transaction.amount),
                &transaction.description,
            )?;
        }
        service.save()?;
        println!("Import complete");
    }
    println!("  Valid rows:   {}", import.transactions.len());
    println!("  Invalid rows: {}", import.errors.len());

    if !import.errors.is_empty() {
        println!("\nErrors:");
        for error in import.errors.iter().take(10) {
            println!("  Line {}: {}", error.line, error.error);
        }
        if import.errors.len() > 10 {
            println!("  ... and {} more errors", import.errors.len() - 10);
        }
    }

    Ok(())
}

fn print_transactions(transactions: &[Transaction]) {
    if transactions.is_empty() {
        println!("No transactions found.");
        return;
    }

    println!(
        "{:<4} {:<12} {:<10} {:>12} DESCRIPTION",
        "#", "DATE", "CATEGORY", "AMOUNT"
    );
    println!("{}", "-".repeat(70));

    for (position, transaction) in transactions.iter().enumerate() {
        println!(
            "{:<4} {:<12} {:<10} {:>12} {}",
            position + 1,
            transaction.date,
            transaction.category,
            format_amount(transaction.amount),
            truncate(&transaction.description, 30)
        );
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

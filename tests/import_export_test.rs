mod common;

use anyhow::Result;
use kassa::io::{Exporter, LedgerSnapshot, read_transactions_csv};

use common::{SAMPLE_FILE, test_service_with_contents};

#[test]
fn test_export_csv_shape() -> Result<()> {
    let (service, _temp) = test_service_with_contents(SAMPLE_FILE)?;

    let mut out = Vec::new();
    let count = Exporter::new(service.transactions()).export_csv(&mut out)?;
    assert_eq!(count, 2);

    let text = String::from_utf8(out)?;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "date,category,amount,description");
    assert_eq!(lines[1], "2024-01-15,доход,1500.0,Salary");
    assert_eq!(lines[2], "2024-01-16,расход,40.0,Groceries");
    Ok(())
}

#[test]
fn test_export_json_round_trips_through_serde() -> Result<()> {
    let (service, _temp) = test_service_with_contents(SAMPLE_FILE)?;

    let mut out = Vec::new();
    Exporter::new(service.transactions()).export_json(&mut out)?;

    let snapshot: LedgerSnapshot = serde_json::from_slice(&out)?;
    assert_eq!(snapshot.transactions, service.transactions());
    Ok(())
}

#[test]
fn test_exported_csv_imports_back() -> Result<()> {
    let (service, _temp) = test_service_with_contents(SAMPLE_FILE)?;

    let mut out = Vec::new();
    Exporter::new(service.transactions()).export_csv(&mut out)?;

    let import = read_transactions_csv(out.as_slice())?;
    assert!(import.errors.is_empty());
    assert_eq!(import.transactions, service.transactions());
    Ok(())
}

#[test]
fn test_import_collects_row_errors_and_keeps_valid_rows() -> Result<()> {
    let csv = "date,category,amount,description\n\
               2024-01-15,доход,1500.0,Salary\n\
               not-a-date,доход,10.0,oops\n\
               2024-01-17,groceries,10.0,wrong label\n\
               2024-01-18,расход,0,zero amount\n";

    let import = read_transactions_csv(csv.as_bytes())?;
    assert_eq!(import.transactions.len(), 1);
    assert_eq!(import.transactions[0].description, "Salary");

    assert_eq!(import.errors.len(), 3);
    let lines: Vec<usize> = import.errors.iter().map(|e| e.line).collect();
    assert_eq!(lines, vec![3, 4, 5]);
    Ok(())
}

#[test]
fn test_imported_rows_feed_the_service() -> Result<()> {
    let (mut service, _temp) = test_service_with_contents(SAMPLE_FILE)?;

    let csv = "date,category,amount,description\n2024-02-01,расход,5.5,Bus\n";
    let import = read_transactions_csv(csv.as_bytes())?;

    for t in &import.transactions {
        service.add_transaction(
            &t.date,
            &t.category,
            &kassa::domain::format_amount(t.amount),
            &t.description,
        )?;
    }

    assert_eq!(service.transactions().len(), 3);
    assert_eq!(service.transactions()[2].amount, 5.5);
    Ok(())
}

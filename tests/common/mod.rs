// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use kassa::application::LedgerService;
use tempfile::TempDir;

/// Helper to create a test service backed by a fresh temporary data file
pub fn test_service() -> Result<(LedgerService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let data_path = temp_dir.path().join("ledger.txt");
    let service = LedgerService::open(&data_path)?;
    Ok((service, temp_dir))
}

/// Helper to create a test service over pre-written file contents
pub fn test_service_with_contents(contents: &str) -> Result<(LedgerService, TempDir)> {
    let (path, temp_dir) = test_file_with_contents(contents)?;
    let service = LedgerService::open(&path)?;
    Ok((service, temp_dir))
}

/// Helper to write raw file contents into a temp dir and return the path
pub fn test_file_with_contents(contents: &str) -> Result<(PathBuf, TempDir)> {
    let temp_dir = TempDir::new()?;
    let data_path = temp_dir.path().join("ledger.txt");
    fs::write(&data_path, contents)?;
    Ok((data_path, temp_dir))
}

/// A small well-formed two-record ledger file
pub const SAMPLE_FILE: &str = "Дата: 2024-01-15\n\
                               Категория: доход\n\
                               Сумма: 1500.0\n\
                               Описание: Salary\n\
                               \n\
                               Дата: 2024-01-16\n\
                               Категория: расход\n\
                               Сумма: 40.0\n\
                               Описание: Groceries\n\
                               \n";

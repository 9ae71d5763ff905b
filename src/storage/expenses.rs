//! Expense store
//!
//! Append-only CSV log of expenses. The file is opened and closed around every
//! read or append; nothing is cached in memory between calls.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{parse_date, Amount, Expense, DATE_FORMAT};

/// Column header written once at the top of the store
pub const HEADER: [&str; 4] = ["date", "category", "description", "amount"];

/// One row as it appears on disk
#[derive(Debug, Serialize, Deserialize)]
struct ExpenseRow {
    date: String,
    category: String,
    description: String,
    amount: String,
}

impl From<&Expense> for ExpenseRow {
    fn from(expense: &Expense) -> Self {
        Self {
            date: expense.date.format(DATE_FORMAT).to_string(),
            category: expense.category.clone(),
            description: expense.description.clone(),
            amount: expense.amount.to_string(),
        }
    }
}

impl ExpenseRow {
    /// Apply the same date and amount rules as user input.
    /// Category and description are kept exactly as stored.
    fn into_expense(self) -> TrackerResult<Expense> {
        Ok(Expense {
            date: parse_date(&self.date)?,
            amount: Amount::parse(&self.amount)?,
            category: self.category,
            description: self.description,
        })
    }
}

/// Append-only store of expenses backed by a single CSV file
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the store with just the header if it is missing or empty
    ///
    /// Returns `true` if the header was written by this call. Calling it again
    /// leaves the file untouched.
    pub fn ensure_initialized(&self) -> TrackerResult<bool> {
        let needs_header = match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(e) if e.kind() == ErrorKind::NotFound => true,
            Err(e) => {
                return Err(TrackerError::Io(format!(
                    "Failed to inspect {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        if !needs_header {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                TrackerError::Io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let file = File::create(&self.path).map_err(|e| {
            TrackerError::Io(format!("Failed to create {}: {}", self.path.display(), e))
        })?;

        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(HEADER)?;
        writer
            .flush()
            .map_err(|e| TrackerError::Io(format!("Failed to flush header: {}", e)))?;

        log::info!("Initialized expense store at {}", self.path.display());
        Ok(true)
    }

    /// Append one expense as a new row
    ///
    /// The expense is written as given; validation happens before this point.
    pub fn append(&self, expense: &Expense) -> TrackerResult<()> {
        self.ensure_initialized()?;

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| TrackerError::Io(format!("Failed to open {}: {}", self.path.display(), e)))?;

        // A hand-edited file may lack the final line terminator
        if !ends_with_newline(&mut file)? {
            file.write_all(b"\n")?;
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.serialize(ExpenseRow::from(expense))?;
        writer
            .flush()
            .map_err(|e| TrackerError::Io(format!("Failed to write expense: {}", e)))?;

        log::debug!("Appended expense: {}", expense);
        Ok(())
    }

    /// Read every expense in storage order
    ///
    /// Initializes the store first if it is missing, so a fresh store loads as
    /// an empty list. Any row that fails to parse aborts the whole load.
    pub fn load_all(&self) -> TrackerResult<Vec<Expense>> {
        self.ensure_initialized()?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)
            .map_err(|e| TrackerError::Io(format!("Failed to open {}: {}", self.path.display(), e)))?;

        let headers = reader.headers().map_err(read_error)?.clone();
        if headers.iter().ne(HEADER.iter().copied()) {
            return Err(TrackerError::malformed(
                1,
                TrackerError::Csv(format!(
                    "unexpected header '{}', expected '{}'",
                    headers.iter().collect::<Vec<_>>().join(","),
                    HEADER.join(",")
                )),
            ));
        }

        let mut expenses = Vec::new();
        for result in reader.records() {
            let record = result.map_err(read_error)?;
            let line = record.position().map_or(0, |p| p.line());
            let row: ExpenseRow = record
                .deserialize(Some(&headers))
                .map_err(|e| TrackerError::malformed(line, e.into()))?;
            let expense = row
                .into_expense()
                .map_err(|e| TrackerError::malformed(line, e))?;
            expenses.push(expense);
        }

        log::debug!(
            "Loaded {} expenses from {}",
            expenses.len(),
            self.path.display()
        );
        Ok(expenses)
    }
}

/// Map a reader error to I/O failure or a malformed row at its line
fn read_error(err: csv::Error) -> TrackerError {
    if err.is_io_error() {
        return TrackerError::Io(err.to_string());
    }
    let line = err.position().map_or(0, |p| p.line());
    TrackerError::malformed(line, err.into())
}

fn ends_with_newline(file: &mut File) -> TrackerResult<bool> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

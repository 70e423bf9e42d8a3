//! CDR row parsing into typed call records
//!
//! Rows are comma-separated `phone,start,end` with timestamps in
//! `YYYY-MM-DD HH:MM:SS`. The first malformed row aborts the whole batch;
//! no partial results leave the parser.

use crate::error::BillingError;
use chrono::NaiveDateTime;

/// Fixed timestamp format for both call endpoints
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single validated call-detail record
///
/// Invariant: `end_time > start_time`, enforced at construction. The phone
/// number is stored as an integer (leading `+` stripped) so that frequency
/// tie-breaks can compare numerically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    pub phone_number: u64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

fn invalid(row: usize, reason: impl Into<String>) -> BillingError {
    BillingError::InvalidRecord {
        row,
        reason: reason.into(),
    }
}

impl CallRecord {
    /// Parse one CDR row. `row` is the 0-based line index, reported on failure.
    pub fn parse_row(line: &str, row: usize) -> Result<Self, BillingError> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 3 {
            return Err(invalid(
                row,
                format!("expected 3 fields, found {}", fields.len()),
            ));
        }

        let phone_field = fields[0].trim();
        let digits = phone_field.strip_prefix('+').unwrap_or(phone_field);
        let phone_number: u64 = digits
            .parse()
            .map_err(|_| invalid(row, format!("invalid phone number: {:?}", phone_field)))?;

        let start_time = NaiveDateTime::parse_from_str(fields[1].trim(), TIMESTAMP_FORMAT)
            .map_err(|e| invalid(row, format!("invalid start timestamp: {}", e)))?;
        let end_time = NaiveDateTime::parse_from_str(fields[2].trim(), TIMESTAMP_FORMAT)
            .map_err(|e| invalid(row, format!("invalid end timestamp: {}", e)))?;

        if end_time <= start_time {
            return Err(invalid(row, "end time is not after start time"));
        }

        Ok(Self {
            phone_number,
            start_time,
            end_time,
        })
    }
}

/// Parse a whole CDR file body into records, preserving input order.
///
/// Blank lines (a trailing newline at EOF is the common case) are skipped,
/// but row indices count every physical line so error messages point at the
/// real location in the file.
pub fn parse_batch(content: &str) -> Result<Vec<CallRecord>, BillingError> {
    let mut records = Vec::new();
    for (row, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        records.push(CallRecord::parse_row(line, row)?);
    }
    Ok(records)
}

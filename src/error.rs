//! Error taxonomy for the billing pipeline
//!
//! Every failure is fatal: this is a one-shot batch tool and no partial
//! output is ever written.

use thiserror::Error;

/// Errors raised while processing a CDR batch
#[derive(Error, Debug)]
pub enum BillingError {
    /// Malformed input row: wrong field count, bad phone number, unparsable
    /// timestamp, or end time not after start time. Carries the 0-based row
    /// index of the offending line.
    #[error("invalid record at row {row}: {reason}")]
    InvalidRecord { row: usize, reason: String },

    /// The input file contained no records; the free number is undefined.
    #[error("empty batch: input contains no call records")]
    EmptyBatch,

    /// File could not be read or written; wraps the underlying OS reason.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

//! Free-number resolution
//!
//! The most frequently called number in a batch is billed free. Resolution
//! needs the full record set before any per-call cost can be computed, so
//! the pipeline runs it as its own phase between parsing and tariffing.

use crate::error::BillingError;
use crate::record::CallRecord;
use std::collections::HashMap;

/// Resolve the phone number billed free for this batch.
///
/// Counts occurrences per phone number and returns the one with the highest
/// count. Ties are broken by picking the arithmetically largest number among
/// the tied candidates. An empty batch has no well-defined maximum and fails
/// with [`BillingError::EmptyBatch`].
pub fn resolve_free_number(records: &[CallRecord]) -> Result<u64, BillingError> {
    let mut counts: HashMap<u64, u64> = HashMap::new();
    for record in records {
        *counts.entry(record.phone_number).or_default() += 1;
    }

    // Max by (count, phone): highest count wins, ties fall to the larger number
    counts
        .into_iter()
        .max_by_key(|&(phone, count)| (count, phone))
        .map(|(phone, _)| phone)
        .ok_or(BillingError::EmptyBatch)
}

//! Batch billing pipeline
//!
//! Strict phase ordering: parse the whole file, resolve the free number
//! from the full record set, then compute per-call costs and aggregate.
//! The free number depends on the entire batch, so no per-record tariff
//! decision can be made before parsing completes. The report file is
//! written only after every phase has succeeded; a failing run leaves no
//! partial output behind.

use crate::error::BillingError;
use crate::frequency::resolve_free_number;
use crate::ledger::CostLedger;
use crate::record::parse_batch;
use crate::report;
use crate::tariff::{call_cost, TariffError};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Map a defensive tariff failure onto the record taxonomy.
///
/// `index` counts records, not physical lines (the parser skips blank
/// lines), so the reason spells out which basis the number is in.
fn tariff_failure(index: usize, err: TariffError) -> BillingError {
    BillingError::InvalidRecord {
        row: index,
        reason: format!("{} (row is the record index, blank lines excluded)", err),
    }
}

/// Run the full billing pipeline from input file to report file.
pub fn run(input: &Path, output: &Path) -> Result<(), BillingError> {
    let content = fs::read_to_string(input)?;
    let records = parse_batch(&content)?;
    info!(records = records.len(), "parsed CDR batch");

    let free_number = resolve_free_number(&records)?;
    info!(free_number, "resolved free number");

    let mut ledger = CostLedger::new();
    for (index, record) in records.iter().enumerate() {
        let cost = call_cost(record, free_number).map_err(|e| tariff_failure(index, e))?;
        debug!(
            phone = record.phone_number,
            %cost,
            "computed call cost"
        );
        ledger.add(record.phone_number, cost);
    }

    let rendered = report::render(&ledger);
    fs::write(output, rendered)?;
    info!(
        subscribers = ledger.len(),
        total = %ledger.grand_total(),
        "report written"
    );

    Ok(())
}

//! CSV report rendering
//!
//! Serializes the aggregated ledger into the summary report: a quoted
//! header line, then one `phone,cost` row per distinct number in
//! first-seen order. Rendering is pure; the pipeline writes the file only
//! once the whole computation has succeeded.

use crate::ledger::CostLedger;

/// Header line of the report
pub const REPORT_HEADER: &str = "\"Phone Number\",\"Cost\"";

/// Render the ledger as report text, costs always with 2 decimal places.
pub fn render(ledger: &CostLedger) -> String {
    let mut output = String::new();

    output.push_str(REPORT_HEADER);
    output.push('\n');

    for (phone, total) in ledger.iter() {
        output.push_str(&format!("{},{:.2}\n", phone, total));
    }

    output
}

//! Per-subscriber cost aggregation
//!
//! Folds (phone, cost) pairs into totals. The running total is rounded to
//! 2 decimal places after every addition, matching the reference behavior
//! rather than rounding once at the end. Iteration yields entries in
//! first-seen order so the report is deterministic.

use crate::tariff::round_money;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Accumulated cost per phone number, in first-seen insertion order
#[derive(Debug, Default)]
pub struct CostLedger {
    /// (phone, total) in first-seen order
    entries: Vec<(u64, Decimal)>,
    /// phone -> position in `entries`
    index: HashMap<u64, usize>,
}

impl CostLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one call's cost to its phone number's running total.
    pub fn add(&mut self, phone_number: u64, cost: Decimal) {
        match self.index.get(&phone_number) {
            Some(&pos) => {
                let total = &mut self.entries[pos].1;
                *total = round_money(*total + cost);
            }
            None => {
                self.index.insert(phone_number, self.entries.len());
                self.entries.push((phone_number, round_money(cost)));
            }
        }
    }

    /// Total for one phone number, if it appeared in the batch
    pub fn total_for(&self, phone_number: u64) -> Option<Decimal> {
        self.index.get(&phone_number).map(|&pos| self.entries[pos].1)
    }

    /// Grand total across all phone numbers
    pub fn grand_total(&self) -> Decimal {
        self.entries.iter().map(|(_, total)| *total).sum()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (u64, Decimal)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of distinct phone numbers seen
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no costs have been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_single_entry() {
        let mut ledger = CostLedger::new();
        ledger.add(111, dec!(5.00));
        assert_eq!(ledger.total_for(111), Some(dec!(5.00)));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_repeated_number_sums() {
        let mut ledger = CostLedger::new();
        ledger.add(111, dec!(5.00));
        ledger.add(111, dec!(1.50));
        ledger.add(111, dec!(0.20));
        assert_eq!(ledger.total_for(111), Some(dec!(6.70)));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_zero_cost_entry_is_recorded() {
        let mut ledger = CostLedger::new();
        ledger.add(987654321, Decimal::ZERO);
        assert_eq!(ledger.total_for(987654321), Some(dec!(0.00)));
    }

    #[test]
    fn test_iteration_is_first_seen_order() {
        let mut ledger = CostLedger::new();
        ledger.add(333, dec!(1.00));
        ledger.add(111, dec!(2.00));
        ledger.add(333, dec!(3.00));
        ledger.add(222, dec!(4.00));

        let order: Vec<u64> = ledger.iter().map(|(phone, _)| phone).collect();
        assert_eq!(order, vec![333, 111, 222]);
    }

    #[test]
    fn test_grand_total() {
        let mut ledger = CostLedger::new();
        ledger.add(111, dec!(5.00));
        ledger.add(222, dec!(0.00));
        ledger.add(333, dec!(1.00));
        assert_eq!(ledger.grand_total(), dec!(6.00));
    }

    #[test]
    fn test_running_total_rounded_each_addition() {
        let mut ledger = CostLedger::new();
        // Inputs the tariff never produces, but the contract is per-addition
        ledger.add(111, dec!(1.005));
        assert_eq!(ledger.total_for(111), Some(dec!(1.01)));
        ledger.add(111, dec!(0.005));
        assert_eq!(ledger.total_for(111), Some(dec!(1.02)));
    }

    #[test]
    fn test_missing_number() {
        let ledger = CostLedger::new();
        assert_eq!(ledger.total_for(999), None);
        assert!(ledger.is_empty());
    }
}

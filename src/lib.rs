//! Tarifar - Pure Rust call-detail-record billing calculator
//!
//! This library provides the core functionality for computing per-subscriber
//! call billing from a CDR batch: record parsing, free-number resolution,
//! tiered time-of-day tariff calculation, and cost aggregation.

pub mod cli;
pub mod error;
pub mod frequency;
pub mod ledger;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod tariff;

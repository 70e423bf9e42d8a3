//! Tiered time-of-day tariff calculation
//!
//! Cost for one call is a pure function of the record and the batch's free
//! number. Durations are billed in whole started minutes with the last
//! second of the stated end time excluded (exclusive end-of-call), so a
//! call of `start + 1s` still bills one minute. The business window is a
//! closed interval on wall-clock time-of-day; a call whose span leaves the
//! window at either end falls entirely into off-peak.

use crate::record::CallRecord;
use chrono::{Duration, NaiveTime};
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Minutes billed at the base rate before the long-call discount kicks in
pub const DISCOUNT_THRESHOLD_MINUTES: i64 = 5;

/// Errors from the tariff engine
///
/// The parser guarantees `end_time > start_time`, so a negative billable
/// duration can only mean that invariant was bypassed; the pipeline reports
/// it as an invalid record.
#[derive(Error, Debug)]
pub enum TariffError {
    #[error("negative billable duration ({seconds}s); call record invariant violated")]
    NegativeDuration { seconds: i64 },
}

/// Per-minute rate tier for a call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateTier {
    /// Wall-clock span inside 08:00:00-16:00:00 inclusive
    Business,
    /// Everything else, including spans crossing the window boundary
    OffPeak,
}

impl RateTier {
    /// Base rate per started minute, in monetary units
    pub fn per_minute(self) -> Decimal {
        match self {
            RateTier::Business => Decimal::ONE,
            RateTier::OffPeak => Decimal::new(50, 2),
        }
    }
}

/// Discounted rate for minutes beyond the threshold, regardless of tier
fn discount_per_minute() -> Decimal {
    Decimal::new(20, 2)
}

/// Round a monetary value to 2 decimal places, half away from zero.
///
/// All reachable costs are exact multiples of 0.10, so the strategy never
/// changes a result; it exists to pin the contract.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Classify a call into its rate tier from the time-of-day components only.
pub fn rate_tier(record: &CallRecord) -> RateTier {
    let window_open = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
    let window_close = NaiveTime::from_hms_opt(16, 0, 0).unwrap();

    if record.start_time.time() >= window_open && record.end_time.time() <= window_close {
        RateTier::Business
    } else {
        RateTier::OffPeak
    }
}

/// Billable duration in whole minutes: at least 1, counting only whole
/// elapsed minutes after the first started minute.
pub fn billable_minutes(record: &CallRecord) -> Result<i64, TariffError> {
    let effective_end = record.end_time - Duration::seconds(1);
    let duration_seconds = (effective_end - record.start_time).num_seconds();
    if duration_seconds < 0 {
        return Err(TariffError::NegativeDuration {
            seconds: duration_seconds,
        });
    }
    Ok(1 + duration_seconds / 60)
}

/// Compute the cost of one call given the batch's free number.
pub fn call_cost(record: &CallRecord, free_number: u64) -> Result<Decimal, TariffError> {
    if record.phone_number == free_number {
        return Ok(Decimal::ZERO);
    }

    let minutes = billable_minutes(record)?;
    let base_rate = rate_tier(record).per_minute();

    let cost = if minutes <= DISCOUNT_THRESHOLD_MINUTES {
        Decimal::from(minutes) * base_rate
    } else {
        Decimal::from(DISCOUNT_THRESHOLD_MINUTES) * base_rate
            + Decimal::from(minutes - DISCOUNT_THRESHOLD_MINUTES) * discount_per_minute()
    };

    Ok(round_money(cost))
}

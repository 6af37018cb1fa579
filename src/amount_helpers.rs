//! Helper methods for the string-encoded numbers in replies.
//!
//! The API reports token amounts as decimal strings, block fields as `0x`-prefixed
//! hex quantities and sync timestamps as Unix seconds. Everything here returns
//! `None` instead of panicking when the service sends something unexpected.

use chrono::{DateTime, Utc};

use crate::types::{
    Balance, Block, GetTokenPriceReply, HolderBalance, HolderCount, Log, SyncStatus,
    TokenTransfer, Transaction,
};

/// Parse a quantity that is either `0x`-prefixed hex or plain decimal.
pub fn parse_quantity(value: &str) -> Option<u128> {
    let value = value.trim();
    match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some("") => Some(0),
        Some(hex) => u128::from_str_radix(hex, 16).ok(),
        None => value.parse().ok(),
    }
}

fn parse_decimal(value: &str) -> Option<f64> {
    value.trim().parse().ok().filter(|v: &f64| v.is_finite())
}

fn unix_seconds(secs: u128) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(i64::try_from(secs).ok()?, 0)
}

// ---------------------------------------------------------------------------
// Token amounts
// ---------------------------------------------------------------------------

impl Balance {
    /// Amount in the token's smallest unit.
    pub fn raw_amount(&self) -> Option<u128> {
        parse_quantity(&self.balance_raw_integer)
    }

    /// Approximate human-readable amount (useful for display).
    pub fn amount_f64(&self) -> Option<f64> {
        parse_decimal(&self.balance)
    }

    /// Approximate USD value of the holding.
    pub fn usd_f64(&self) -> Option<f64> {
        parse_decimal(&self.balance_usd)
    }
}

impl HolderBalance {
    pub fn raw_amount(&self) -> Option<u128> {
        parse_quantity(&self.balance_raw_integer)
    }
}

impl TokenTransfer {
    pub fn raw_amount(&self) -> Option<u128> {
        parse_quantity(&self.value_raw_integer)
    }
}

impl GetTokenPriceReply {
    pub fn usd_price_f64(&self) -> Option<f64> {
        parse_decimal(&self.usd_price)
    }
}

// ---------------------------------------------------------------------------
// Block fields
// ---------------------------------------------------------------------------

impl Block {
    pub fn number_u64(&self) -> Option<u64> {
        parse_quantity(&self.number).and_then(|n| u64::try_from(n).ok())
    }

    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        parse_quantity(&self.timestamp).and_then(unix_seconds)
    }
}

impl Transaction {
    pub fn block_number_u64(&self) -> Option<u64> {
        parse_quantity(&self.block_number).and_then(|n| u64::try_from(n).ok())
    }

    /// Transferred native value in wei.
    pub fn value_wei(&self) -> Option<u128> {
        parse_quantity(&self.value)
    }

    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        parse_quantity(&self.timestamp).and_then(unix_seconds)
    }
}

impl Log {
    pub fn block_number_u64(&self) -> Option<u64> {
        parse_quantity(&self.block_number).and_then(|n| u64::try_from(n).ok())
    }
}

// ---------------------------------------------------------------------------
// Timestamps
// ---------------------------------------------------------------------------

impl SyncStatus {
    /// Time of the last indexed block.
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        if !self.timestamp.is_finite() || self.timestamp < 0.0 {
            return None;
        }
        let secs = self.timestamp.trunc() as i64;
        let nanos = (self.timestamp.fract() * 1e9) as u32;
        DateTime::from_timestamp(secs, nanos)
    }
}

impl HolderCount {
    pub fn last_updated_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.last_updated_at)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

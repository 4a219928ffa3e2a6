//! Typed records that cross from the contract boundary into board state.

use std::fmt;

use chrono::{Local, TimeZone};

use crate::error::ProviderError;

/// Display format for poem timestamps, rendered in the local time zone.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// An account address granted by a wallet provider.
///
/// The provider's string is kept verbatim; parsing only checks that it is a
/// `0x`-prefixed hex string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Parses an address returned by a provider.
    pub fn parse(raw: &str) -> Result<Self, ProviderError> {
        let digits = raw
            .strip_prefix("0x")
            .or_else(|| raw.strip_prefix("0X"))
            .ok_or_else(|| ProviderError::Malformed(format!("address without 0x prefix: {raw:?}")))?;

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ProviderError::Malformed(format!(
                "address is not hex: {raw:?}"
            )));
        }

        Ok(Self(raw.to_string()))
    }

    /// Returns the address as given by the provider.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One `(sender, text, unix seconds)` entry as read from the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPoem {
    pub sender: String,
    pub text: String,
    pub timestamp_secs: u64,
}

impl RawPoem {
    pub fn new(sender: impl Into<String>, text: impl Into<String>, timestamp_secs: u64) -> Self {
        Self {
            sender: sender.into(),
            text: text.into(),
            timestamp_secs,
        }
    }
}

/// A poem ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoemRecord {
    /// Author address.
    pub sender: String,
    /// The poem text.
    pub poem: String,
    /// Localized date/time the poem was written.
    pub timestamp: String,
}

impl PoemRecord {
    /// Converts a contract entry into a display record.
    pub fn from_raw(raw: RawPoem) -> Self {
        Self {
            timestamp: format_timestamp(raw.timestamp_secs),
            sender: raw.sender,
            poem: raw.text,
        }
    }
}

/// Renders unix seconds as a local date/time string.
///
/// Values outside chrono's range fall back to the raw seconds.
pub fn format_timestamp(secs: u64) -> String {
    i64::try_from(secs)
        .ok()
        .and_then(|secs| Local.timestamp_opt(secs, 0).single())
        .map(|dt| dt.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_else(|| format!("{secs}s"))
}

//! # Sale Entry Parsing
//!
//! Defines the textual form in which sales enter the tool.
//!
//! An entry can be:
//! * A bare total (e.g., `100`, `19.99`).
//! * A total with a tax component (e.g., `100:10`).
//! * A channelled sale (e.g., `100:10@online`, `100:10@onsite`).

use std::str::FromStr;

use rust_decimal::Decimal;

use super::channel::{Channel, ChannelSale};
use super::sale::{Sale, SaleError};
use crate::money::Amount;
use crate::success;

/// A parsed but not yet validated sale description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleEntry {
    pub total: Amount,
    pub tax: Option<Amount>,
    pub channel: Option<Channel>,
}

impl FromStr for SaleEntry {
    type Err = String;

    /// Parses a string into a `SaleEntry`.
    ///
    /// Supported formats:
    /// * **Total**: a bare decimal amount (e.g., "100").
    /// * **Taxed**: "Total:Tax" (e.g., "100:10").
    /// * **Channelled**: "Total:Tax@Channel" with a channel of "online" or
    ///   "onsite" (case-insensitive, "on-site" also accepted).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(String::from("empty sale entry"));
        }

        let (amounts, channel) = match s.split_once('@') {
            Some((amounts, channel_str)) => (amounts, Some(parse_channel(channel_str)?)),
            None => (s, None),
        };

        let (total, tax) = parse_amounts(amounts)?;

        // A channel without a tax component has no subtotal to report.
        if channel.is_some() && tax.is_none() {
            return Err(format!("channelled entry '{s}' needs a tax component"));
        }

        Ok(Self {
            total,
            tax,
            channel,
        })
    }
}

impl SaleEntry {
    /// Converts the entry into a validated [`Sale`], ignoring any channel.
    pub fn to_sale(&self) -> Result<Sale, SaleError> {
        match self.tax {
            Some(tax) => Sale::taxed(self.total, tax),
            None => Sale::plain(self.total),
        }
    }

    /// Converts the entry into a validated [`ChannelSale`], or `None` when
    /// it carries no channel.
    pub fn to_channel_sale(&self) -> Option<Result<ChannelSale, SaleError>> {
        let channel = self.channel?;
        let tax = self.tax.unwrap_or(Amount::ZERO);
        Some(ChannelSale::new(channel, self.total, tax))
    }
}

/// Parses a comma-separated list of entries (e.g., "100, 50:5, 80:8@online").
pub fn parse_list(s: &str) -> anyhow::Result<Vec<SaleEntry>> {
    let mut entries = Vec::new();

    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let entry = SaleEntry::from_str(part)
            .map_err(|e| anyhow::anyhow!("failed to parse sale entry '{}': {}", part, e))?;

        entries.push(entry);
    }

    let len: usize = entries.len();
    let unit: &str = if len == 1 {
        "sale entry has been"
    } else {
        "sale entries have been"
    };
    success!("{len} {unit} parsed");

    Ok(entries)
}

/// Parses the channel suffix ("online"/"onsite"/"on-site", case-insensitive).
fn parse_channel(s: &str) -> Result<Channel, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "online" => Ok(Channel::Online),
        "onsite" | "on-site" => Ok(Channel::OnSite),
        other => Err(format!("unknown sale channel: {other}")),
    }
}

/// Parses "Total" or "Total:Tax" into decimal amounts.
fn parse_amounts(s: &str) -> Result<(Amount, Option<Amount>), String> {
    match s.split_once(':') {
        Some((total_str, tax_str)) => {
            let total = parse_amount(total_str, "total")?;
            let tax = parse_amount(tax_str, "tax")?;
            Ok((total, Some(tax)))
        }
        None => Ok((parse_amount(s, "total")?, None)),
    }
}

fn parse_amount(s: &str, field: &str) -> Result<Amount, String> {
    let s = s.trim();
    Decimal::from_str(s).map_err(|e| format!("invalid {field} '{s}': {e}"))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_bare_total() {
        let entry = SaleEntry::from_str("19.99").unwrap();
        assert_eq!(
            entry,
            SaleEntry {
                total: dec!(19.99),
                tax: None,
                channel: None
            }
        );
    }

    #[test]
    fn parses_total_with_tax() {
        let entry = SaleEntry::from_str("100:10").unwrap();
        assert_eq!(entry.total, dec!(100));
        assert_eq!(entry.tax, Some(dec!(10)));
        assert_eq!(entry.channel, None);
    }

    #[test]
    fn parses_channel_suffix() {
        let online = SaleEntry::from_str("100:10@online").unwrap();
        assert_eq!(online.channel, Some(Channel::Online));

        let upper = SaleEntry::from_str("100:10@ONSITE").unwrap();
        assert_eq!(upper.channel, Some(Channel::OnSite));

        let dashed = SaleEntry::from_str("100:10@on-site").unwrap();
        assert_eq!(dashed.channel, Some(Channel::OnSite));
    }

    #[test]
    fn parses_comma_separated_list() {
        let entries = parse_list("100, 50:5 ,80:8@online").unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].total, dec!(100));
        assert_eq!(entries[2].channel, Some(Channel::Online));
    }

    #[test]
    fn validation_still_happens_at_conversion() {
        let entry = SaleEntry::from_str("10:11").unwrap();
        assert!(matches!(
            entry.to_sale(),
            Err(SaleError::TaxExceedsTotal { .. })
        ));
    }

    // --- Error cases ---

    #[test]
    fn rejects_malformed_entries() {
        assert!(SaleEntry::from_str("").is_err());
        assert!(SaleEntry::from_str("abc").is_err());
        assert!(SaleEntry::from_str("100:").is_err());
        assert!(SaleEntry::from_str("100:10@mail").is_err());
        assert!(SaleEntry::from_str("100@online").is_err());
    }
}

use std::fmt::{self, Display, Formatter};

use super::sale::{SaleError, check_amounts};
use crate::money::{self, Amount};

/// Where a sale was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Online,
    OnSite,
}

impl Display for Channel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Online => f.write_str("online"),
            Self::OnSite => f.write_str("on-site"),
        }
    }
}

/// Selects which amount a channel sale quotes in reports.
///
/// Historical on-site reports quoted the raw total where online reports
/// quoted the subtotal. `LegacyOnSiteTotal` keeps that output reproducible;
/// `Subtotal` quotes `total - tax` for every channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportingPolicy {
    #[default]
    Subtotal,
    LegacyOnSiteTotal,
}

/// A taxed sale attributed to a sales channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelSale {
    channel: Channel,
    total: Amount,
    tax: Amount,
}

impl ChannelSale {
    pub fn new(channel: Channel, total: Amount, tax: Amount) -> Result<Self, SaleError> {
        check_amounts(total, tax)?;
        Ok(Self {
            channel,
            total,
            tax,
        })
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn total(&self) -> Amount {
        self.total
    }

    pub fn tax(&self) -> Amount {
        self.tax
    }

    /// Pre-tax amount of the sale.
    pub fn subtotal(&self) -> Amount {
        self.total - self.tax
    }

    /// Amount quoted in reports under the given policy.
    pub fn reported_amount(&self, policy: ReportingPolicy) -> Amount {
        match (policy, self.channel) {
            (ReportingPolicy::LegacyOnSiteTotal, Channel::OnSite) => self.total,
            _ => self.subtotal(),
        }
    }

    /// One-line summary of the sale under the given policy.
    pub fn describe(&self, policy: ReportingPolicy) -> String {
        format!(
            "Venta {}: total {}, impuesto {}, reportado {}",
            self.channel,
            money::fixed(self.total),
            money::fixed(self.tax),
            money::fixed(self.reported_amount(policy))
        )
    }
}

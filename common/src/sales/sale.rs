use thiserror::Error;

use crate::money::{self, Amount};

/// Validation failures raised by the sale constructors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SaleError {
    #[error("total must not be negative, got {0}")]
    NegativeTotal(Amount),
    #[error("tax must not be negative, got {0}")]
    NegativeTax(Amount),
    #[error("tax {tax} exceeds total {total}")]
    TaxExceedsTotal { total: Amount, tax: Amount },
}

/// A finalized sale, optionally carrying a tax breakdown.
///
/// Both variants keep the full amount in `total`; `Taxed` additionally
/// records the tax portion contained in it. Values are immutable once
/// constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sale {
    Plain { total: Amount },
    Taxed { total: Amount, tax: Amount },
}

impl Sale {
    /// Builds a sale without a tax breakdown.
    pub fn plain(total: Amount) -> Result<Self, SaleError> {
        check_total(total)?;
        Ok(Self::Plain { total })
    }

    /// Builds a sale with a tax breakdown. The tax must fit inside the total.
    pub fn taxed(total: Amount, tax: Amount) -> Result<Self, SaleError> {
        check_amounts(total, tax)?;
        Ok(Self::Taxed { total, tax })
    }

    pub fn total(&self) -> Amount {
        match self {
            Self::Plain { total } | Self::Taxed { total, .. } => *total,
        }
    }

    pub fn tax(&self) -> Option<Amount> {
        match self {
            Self::Plain { .. } => None,
            Self::Taxed { tax, .. } => Some(*tax),
        }
    }

    /// One-line summary of the sale.
    ///
    /// The taxed form lists the total and the tax; it deliberately does not
    /// mention a subtotal.
    pub fn describe(&self) -> String {
        match self {
            Self::Plain { total } => format!("El total es: {}", money::fixed(*total)),
            Self::Taxed { total, tax } => format!(
                "El total es: {}, el impuesto es: {}",
                money::fixed(*total),
                money::fixed(*tax)
            ),
        }
    }
}

pub(crate) fn check_total(total: Amount) -> Result<(), SaleError> {
    if total < Amount::ZERO {
        return Err(SaleError::NegativeTotal(total));
    }
    Ok(())
}

pub(crate) fn check_amounts(total: Amount, tax: Amount) -> Result<(), SaleError> {
    check_total(total)?;
    if tax < Amount::ZERO {
        return Err(SaleError::NegativeTax(tax));
    }
    if tax > total {
        return Err(SaleError::TaxExceedsTotal { total, tax });
    }
    Ok(())
}

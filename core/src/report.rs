//! # Sale Report Engine
//!
//! Implements the "tally sales" use case: turns parsed entries into
//! validated sale values, collects one summary line per sale into a
//! capacity-bounded batch and keeps running totals over everything seen.
//!
//! The line batch is the only part of a report that can run out of room;
//! totals always cover every entry, including the ones whose lines were
//! omitted.

use caja_common::batch::Batch;
use caja_common::config::Config;
use caja_common::money::Amount;
use caja_common::sales::channel::{Channel, ChannelSale, ReportingPolicy};
use caja_common::sales::entry::SaleEntry;
use caja_common::sales::sale::{Sale, SaleError};
use caja_common::warn;

/// A validated sale ready for reporting.
#[derive(Debug, Clone, Copy)]
pub enum TalliedSale {
    Simple(Sale),
    Channelled(ChannelSale),
}

impl TalliedSale {
    pub fn from_entry(entry: &SaleEntry) -> Result<Self, SaleError> {
        match entry.to_channel_sale() {
            Some(sale) => Ok(Self::Channelled(sale?)),
            None => Ok(Self::Simple(entry.to_sale()?)),
        }
    }

    pub fn total(&self) -> Amount {
        match self {
            Self::Simple(sale) => sale.total(),
            Self::Channelled(sale) => sale.total(),
        }
    }

    pub fn tax(&self) -> Option<Amount> {
        match self {
            Self::Simple(sale) => sale.tax(),
            Self::Channelled(sale) => Some(sale.tax()),
        }
    }

    pub fn channel(&self) -> Option<Channel> {
        match self {
            Self::Simple(_) => None,
            Self::Channelled(sale) => Some(sale.channel()),
        }
    }

    /// Summary line under the given reporting policy.
    ///
    /// The policy only affects channelled sales; simple sales always use
    /// the plain total/tax format.
    pub fn describe(&self, policy: ReportingPolicy) -> String {
        match self {
            Self::Simple(sale) => sale.describe(),
            Self::Channelled(sale) => sale.describe(policy),
        }
    }
}

/// Running sums over every entry fed into a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// Number of sales tallied.
    pub count: usize,
    /// Sum of all sale totals, tax included.
    pub gross: Amount,
    /// Sum of all tax components.
    pub tax: Amount,
    /// Sum of all subtotals (gross minus tax).
    pub net: Amount,
}

impl Totals {
    fn zero() -> Self {
        Self {
            count: 0,
            gross: Amount::ZERO,
            tax: Amount::ZERO,
            net: Amount::ZERO,
        }
    }

    fn add(&mut self, total: Amount, tax: Amount) {
        self.count += 1;
        self.gross += total;
        self.tax += tax;
        self.net += total - tax;
    }
}

/// A finished report over a set of sale entries.
#[derive(Debug)]
pub struct Report {
    sales: Vec<TalliedSale>,
    lines: Batch<String>,
    totals: Totals,
    omitted: usize,
}

impl Report {
    /// Every validated sale, in entry order.
    pub fn sales(&self) -> &[TalliedSale] {
        &self.sales
    }

    /// The summary lines that fit the configured limit.
    pub fn lines(&self) -> &[String] {
        self.lines.items()
    }

    /// Single-string rendering of the summary lines.
    ///
    /// Each line is followed by `", "`, the last one included.
    pub fn render(&self) -> String {
        self.lines.render()
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    /// Number of sales whose summary line did not fit the batch.
    pub fn omitted(&self) -> usize {
        self.omitted
    }
}

/// Builds a report over the given entries.
///
/// The first entry failing validation aborts the build. A full line batch
/// does not: overflowing lines are dropped from the rendered output and
/// counted in [`Report::omitted`].
pub fn build_report(entries: &[SaleEntry], cfg: &Config) -> anyhow::Result<Report> {
    let policy: ReportingPolicy = cfg.policy();
    let mut sales: Vec<TalliedSale> = Vec::with_capacity(entries.len());
    let mut lines: Batch<String> = Batch::with_capacity(cfg.max_lines);
    let mut totals: Totals = Totals::zero();
    let mut omitted: usize = 0;

    for entry in entries {
        let sale = TalliedSale::from_entry(entry)?;
        totals.add(sale.total(), sale.tax().unwrap_or(Amount::ZERO));

        if !lines.try_push(sale.describe(policy)) {
            omitted += 1;
        }
        sales.push(sale);
    }

    if omitted > 0 {
        warn!("{omitted} sales omitted from the report (limit {})", cfg.max_lines);
    }

    Ok(Report {
        sales,
        lines,
        totals,
        omitted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    fn cfg(max_lines: usize, legacy_onsite: bool) -> Config {
        Config {
            quiet: 0,
            no_banner: true,
            legacy_onsite,
            max_lines,
        }
    }

    fn entries(inputs: &[&str]) -> Vec<SaleEntry> {
        inputs
            .iter()
            .map(|s| SaleEntry::from_str(s).unwrap())
            .collect()
    }

    #[test]
    fn totals_cover_all_entries() {
        let report = build_report(&entries(&["100:10", "50", "80:8@online"]), &cfg(10, false))
            .unwrap();

        let totals = report.totals();
        assert_eq!(totals.count, 3);
        assert_eq!(totals.gross, dec!(230));
        assert_eq!(totals.tax, dec!(18));
        assert_eq!(totals.net, dec!(212));
        assert_eq!(report.omitted(), 0);
    }

    #[test]
    fn lines_follow_the_describe_formats() {
        let report = build_report(&entries(&["100:10", "25"]), &cfg(10, false)).unwrap();

        assert_eq!(
            report.lines(),
            &[
                "El total es: 100.00, el impuesto es: 10.00",
                "El total es: 25.00",
            ]
        );
    }

    #[test]
    fn overflow_drops_lines_but_not_totals() {
        let report = build_report(
            &entries(&["10", "20", "30", "40", "50"]),
            &cfg(2, false),
        )
        .unwrap();

        assert_eq!(report.lines().len(), 2);
        assert_eq!(report.omitted(), 3);
        assert_eq!(report.sales().len(), 5);
        assert_eq!(report.totals().count, 5);
        assert_eq!(report.totals().gross, dec!(150));
    }

    #[test]
    fn render_joins_lines_with_trailing_separator() {
        let report = build_report(&entries(&["1", "2"]), &cfg(10, false)).unwrap();

        assert_eq!(report.render(), "El total es: 1.00, El total es: 2.00, ");
    }

    #[test]
    fn legacy_policy_changes_the_on_site_line() {
        let input = entries(&["100:10@onsite"]);

        let corrected = build_report(&input, &cfg(10, false)).unwrap();
        assert_eq!(
            corrected.lines()[0],
            "Venta on-site: total 100.00, impuesto 10.00, reportado 90.00"
        );

        let legacy = build_report(&input, &cfg(10, true)).unwrap();
        assert_eq!(
            legacy.lines()[0],
            "Venta on-site: total 100.00, impuesto 10.00, reportado 100.00"
        );
    }

    #[test]
    fn invalid_entry_aborts_the_build() {
        let result = build_report(&entries(&["10:11"]), &cfg(10, false));
        assert!(result.is_err(), "tax larger than total must not build");
    }
}

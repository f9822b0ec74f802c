#![cfg(test)]
use std::str::FromStr;

use caja_common::config::Config;
use caja_common::sales::entry::{self, SaleEntry};
use caja_core::report::build_report;
use rust_decimal_macros::dec;

fn test_config(max_lines: usize, legacy_onsite: bool) -> Config {
    Config {
        quiet: 0,
        no_banner: true,
        legacy_onsite,
        max_lines,
    }
}

/// Parses a mixed command line, builds the report and checks that every
/// surface (lines, render, totals) agrees.
#[test]
fn report_over_mixed_entries() {
    let entries = entry::parse_list("100:10, 25, 80:8@online, 60:6@onsite").unwrap();
    let report = build_report(&entries, &test_config(16, false)).unwrap();

    assert_eq!(report.lines().len(), 4, "every sale should produce a line");
    assert_eq!(
        report.lines()[0],
        "El total es: 100.00, el impuesto es: 10.00"
    );
    assert_eq!(report.lines()[1], "El total es: 25.00");
    assert_eq!(
        report.lines()[2],
        "Venta online: total 80.00, impuesto 8.00, reportado 72.00"
    );
    assert_eq!(
        report.lines()[3],
        "Venta on-site: total 60.00, impuesto 6.00, reportado 54.00"
    );

    let totals = report.totals();
    assert_eq!(totals.count, 4);
    assert_eq!(totals.gross, dec!(265));
    assert_eq!(totals.tax, dec!(24));
    assert_eq!(totals.net, dec!(241));
}

#[test]
fn legacy_policy_only_changes_on_site_lines() {
    let entries = entry::parse_list("80:8@online, 60:6@onsite").unwrap();
    let report = build_report(&entries, &test_config(16, true)).unwrap();

    assert_eq!(
        report.lines()[0],
        "Venta online: total 80.00, impuesto 8.00, reportado 72.00"
    );
    assert_eq!(
        report.lines()[1],
        "Venta on-site: total 60.00, impuesto 6.00, reportado 60.00"
    );
}

#[test]
fn line_limit_drops_lines_but_not_totals() {
    let entries: Vec<SaleEntry> = (1..=5)
        .map(|n| SaleEntry::from_str(&format!("{n}0")).unwrap())
        .collect();
    let report = build_report(&entries, &test_config(2, false)).unwrap();

    assert_eq!(report.lines().len(), 2, "batch should cap the listed lines");
    assert_eq!(report.omitted(), 3);
    assert_eq!(report.totals().count, 5);
    assert_eq!(report.totals().gross, dec!(150));
}

#[test]
fn render_matches_line_concatenation() {
    let entries = entry::parse_list("1, 2").unwrap();
    let report = build_report(&entries, &test_config(8, false)).unwrap();

    assert_eq!(report.render(), "El total es: 1.00, El total es: 2.00, ");
}

#[test]
fn invalid_amounts_surface_as_errors() {
    let entries = entry::parse_list("10:11").unwrap();
    let result = build_report(&entries, &test_config(8, false));

    assert!(result.is_err(), "tax larger than total must not build");
}

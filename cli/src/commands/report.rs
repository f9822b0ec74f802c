use caja_common::config::Config;
use caja_common::money;
use caja_common::sales::channel::ReportingPolicy;
use caja_common::sales::entry::{self, SaleEntry};
use caja_common::success;
use caja_core::report::{Report, TalliedSale, Totals, build_report};
use colored::*;

use crate::{
    cprint,
    terminal::{colors, format, print},
};

pub fn report(raw_entries: &[String], cfg: &Config) -> anyhow::Result<()> {
    let mut entries: Vec<SaleEntry> = Vec::new();
    for raw in raw_entries {
        entries.extend(entry::parse_list(raw)?);
    }

    let tallied: Report = build_report(&entries, cfg)?;

    report_ends(&tallied, cfg);
    Ok(())
}

fn report_ends(report: &Report, cfg: &Config) {
    if cfg.quiet >= 2 {
        let rendered: String = report.render();
        if !rendered.is_empty() {
            print::print(&rendered);
        }
        return;
    }

    if report.sales().is_empty() {
        no_sales(cfg);
        return;
    }

    print::header("Sales Report", cfg.quiet);
    print_sales(report, cfg);
    print_totals(&report.totals(), cfg);
}

fn no_sales(cfg: &Config) {
    print::header("NO SALES TALLIED", cfg.quiet);
    print::no_results(cfg.quiet);
}

fn print_sales(report: &Report, cfg: &Config) {
    let policy: ReportingPolicy = cfg.policy();
    let shown: usize = report.lines().len();

    match cfg.quiet {
        0 => {
            for (idx, sale) in report.sales().iter().take(shown).enumerate() {
                print_sale_tree(sale, idx, policy);
                if idx + 1 != shown {
                    cprint!();
                }
            }
        }
        _ => {
            for line in report.lines() {
                print::print_status(line);
            }
        }
    }
}

fn print_sale_tree(sale: &TalliedSale, idx: usize, policy: ReportingPolicy) {
    let label: String = match sale.channel() {
        Some(channel) => format!("Venta {channel}"),
        None => String::from("Venta"),
    };
    print::tree_head(idx, &label);
    print::as_tree_one_level(format::sale_to_details(sale, policy));
}

fn print_totals(totals: &Totals, cfg: &Config) {
    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::set_key_width(&["Ventas", "Bruto", "Impuestos", "Neto"]);
            print::aligned_line("Ventas", totals.count.to_string());
            print::aligned_line("Bruto", money::fixed(totals.gross).color(colors::AMOUNT));
            print::aligned_line("Impuestos", money::fixed(totals.tax).color(colors::TAX));
            print::aligned_line("Neto", money::fixed(totals.net).color(colors::AMOUNT));
            print::end_of_program();
        }
        _ => {
            cprint!();
            success!(
                "{} sales tallied, net {}",
                totals.count,
                money::fixed(totals.net)
            );
        }
    }
}

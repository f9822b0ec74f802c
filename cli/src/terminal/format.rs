use caja_common::money;
use caja_common::sales::channel::ReportingPolicy;
use caja_core::report::TalliedSale;
use colored::*;

use crate::terminal::colors;

type Detail = (String, ColoredString);

/// Key/value details for one sale, ready for the one-level tree printer.
pub fn sale_to_details(sale: &TalliedSale, policy: ReportingPolicy) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![(
        String::from("Total"),
        money::fixed(sale.total()).color(colors::AMOUNT),
    )];

    if let Some(tax) = sale.tax() {
        details.push((
            String::from("Impuesto"),
            money::fixed(tax).color(colors::TAX),
        ));
        details.push((
            String::from("Neto"),
            money::fixed(sale.total() - tax).color(colors::AMOUNT),
        ));
    }

    if let Some(channel) = sale.channel() {
        details.push((
            String::from("Canal"),
            channel.to_string().color(colors::ACCENT),
        ));
    }

    if let TalliedSale::Channelled(channel_sale) = sale {
        details.push((
            String::from("Reportado"),
            money::fixed(channel_sale.reported_amount(policy)).color(colors::AMOUNT),
        ));
    }

    details
}

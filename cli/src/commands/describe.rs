use caja_common::config::Config;
use caja_common::money::Amount;
use caja_common::sales::sale::Sale;

use crate::terminal::print;

pub fn describe(total: Amount, tax: Option<Amount>, cfg: &Config) -> anyhow::Result<()> {
    let sale: Sale = match tax {
        Some(tax) => Sale::taxed(total, tax)?,
        None => Sale::plain(total)?,
    };

    match cfg.quiet {
        0 => {
            print::header("sale summary", cfg.quiet);
            print::print_status(sale.describe());
            print::end_of_program();
        }
        _ => print::print(&sale.describe()),
    }

    Ok(())
}

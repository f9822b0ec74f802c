use caja_common::config::Config;
use caja_common::sales::channel::ReportingPolicy;

use crate::terminal::print;

pub fn info(cfg: &Config) {
    let policy: &str = match cfg.policy() {
        ReportingPolicy::Subtotal => "subtotal",
        ReportingPolicy::LegacyOnSiteTotal => "legacy on-site total",
    };

    match cfg.quiet {
        0 => {
            print::set_key_width(&["Version", "Channels", "Policy", "Precision"]);
            print::aligned_line("Version", env!("CARGO_PKG_VERSION"));
            print::aligned_line("Channels", "online, on-site");
            print::aligned_line("Policy", policy);
            print::aligned_line("Precision", "2 decimal places");
            print::end_of_program();
        }
        _ => print::print(&format!("caja v{} ({policy})", env!("CARGO_PKG_VERSION"))),
    }
}

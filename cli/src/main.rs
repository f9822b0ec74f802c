mod commands;
mod terminal;

use caja_common::config::Config;
use commands::{CommandLine, Commands, describe, info, report};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();
    print::banner(commands.no_banner, commands.quiet);

    let cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
        legacy_onsite: commands.legacy_onsite,
        max_lines: commands.limit,
    };

    match commands.command {
        Commands::Info => {
            print::header("about the tool", cfg.quiet);
            info::info(&cfg);
            Ok(())
        }
        Commands::Describe { total, tax } => describe::describe(total, tax, &cfg),
        Commands::Report { entries } => report::report(&entries, &cfg),
    }
}

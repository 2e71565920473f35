use anyhow::Result;
use clap::{Arg, ArgMatches, Command};

use crate::cmd::check::{add_check_args, resolve_site};
use crate::config::CompassConfig;

pub fn make_subcommand() -> Command {
    add_check_args(Command::new("resolve"))
        .about("Resolve the navigation tree and emit it as JSON")
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write the resolved site to a file instead of stdout"),
        )
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    let compass_config = CompassConfig::load(args)?;
    let resolved = resolve_site(&compass_config)?;

    for warning in &resolved.warnings {
        eprintln!("warning: {}", warning);
    }

    let json = serde_json::to_string_pretty(&resolved)?;

    match args.get_one::<String>("output") {
        Some(path) => {
            std::fs::write(path, json)?;
            println!("Resolved site written to {}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}

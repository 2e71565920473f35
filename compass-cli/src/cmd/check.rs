use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use compass_core::{ContentScanner, NavBuilder};
use std::path::Path;

use crate::config::CompassConfig;

pub fn add_check_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("source")
                .short('s')
                .long("source")
                .value_name("DIR")
                .help("Source directory containing the content tree")
                .default_value("./docs"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file")
                .default_value("./compass.toml"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Treat duplicate section labels as errors")
                .action(clap::ArgAction::SetTrue),
        )
}

pub fn make_subcommand() -> Command {
    add_check_args(Command::new("check")).about("Validate the site navigation configuration")
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    let compass_config = CompassConfig::load(args)?;
    let resolved = resolve_site(&compass_config)?;

    for warning in &resolved.warnings {
        println!("warning: {}", warning);
    }

    println!(
        "Configuration OK: {} ({} sections, base {})",
        resolved.title,
        resolved.sections.len(),
        resolved.base
    );

    Ok(())
}

/// Shared validate-and-normalize step for `check` and `resolve`.
///
/// Directory references are only checked against the content tree when
/// the source directory actually exists; otherwise content discovery is
/// left to the external site generator.
pub fn resolve_site(compass_config: &CompassConfig) -> Result<compass_core::ResolvedSite> {
    let build_config = compass_config.build_config();

    let mut builder = NavBuilder::new(compass_config.site_config().clone())
        .strict_labels(build_config.strict);

    let source_dir = Path::new(&build_config.source);
    if source_dir.is_dir() {
        let known = ContentScanner::new(source_dir).scan()?;
        builder = builder.known_directories(known);
    }

    Ok(builder.build()?)
}

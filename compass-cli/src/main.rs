use anyhow::Result;
use clap::Command;

mod cmd;
mod config;

fn main() -> Result<()> {
    let matches = Command::new("compass")
        .about("Validate and resolve documentation-site navigation configuration")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(cmd::check::make_subcommand())
        .subcommand(cmd::resolve::make_subcommand())
        .get_matches();

    match matches.subcommand() {
        Some(("check", args)) => cmd::check::execute(args),
        Some(("resolve", args)) => cmd::resolve::execute(args),
        _ => unreachable!(),
    }
}

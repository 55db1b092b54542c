//! Humanized relative-time command line

use std::process;

use clap::Parser;

use humanized_cli::args::Args;
use humanized_cli::config::{Profile, TableFile, TableSource};
use humanized_cli::constants::*;
use humanized_cli::report::{CliError, describe, instants, list_table};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("{}{}", ERR_PREFIX, e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let default_path = TableFile::default_path();
    let profile = Profile::resolve(args, default_path.as_deref())?;

    if args.debug {
        let prefix = match profile.source {
            TableSource::File(_) => MSG_USING_TABLE_FILE,
            TableSource::Builtin(_) => MSG_USING_LOCALE,
        };
        eprintln!("{}{}", prefix, profile.source);
    }

    if args.list {
        for line in list_table(&profile.table) {
            println!("{}", line);
        }
        return Ok(());
    }

    let (then, now) = instants(args, chrono::Utc::now)?;
    let report = describe(&profile, then, now);

    if args.debug {
        eprintln!("{}{:?}", MSG_DIFFERENCE, report.diff);
        eprintln!(
            "{}{} ({})",
            MSG_SELECTED_RULE, report.index, profile.table[report.index].template
        );
    }

    println!("{}", report.phrase);
    Ok(())
}

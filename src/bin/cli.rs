use vqf::lang::{to_filter, try_parse, BasicFilter, Category};

use clap::{AppSettings, Clap};
use colored::*;
use human_panic::setup_panic;

#[derive(Clap, Debug)]
#[clap(
    about,
    version,
    setting=AppSettings::ColoredHelp,
    setting=AppSettings::GlobalVersion,
    setting=AppSettings::VersionlessSubcommands,
)]
struct Arguments {
    #[clap(subcommand)]
    command: Command,

    /// Print intermediate data structures
    #[clap[short, long]]
    debug: bool,
}

#[derive(Clap, Debug)]
enum Command {
    Check(Check),
    Canon(Canon),
}

/// Checks whether a query is representable by the basic facet filter
#[derive(Clap, Debug)]
struct Check {
    /// Raw query string
    query: String,
}

/// Rewrites a query into its canonical form
#[derive(Clap, Debug)]
struct Canon {
    /// Raw query string
    query: String,
}

fn main() {
    setup_panic!();

    let args = Arguments::parse();
    match args.command {
        Command::Check(check) => {
            let filter = match try_parse(&check.query) {
                Some(filter) => filter,
                None => reject(),
            };

            if args.debug {
                println!("{}", "Filter:".bold());
                println!("{:#?}\n", filter);
            }

            print_facets(&filter);
            println!("{}", "Query is representable as a basic filter".bold().green());
        }
        Command::Canon(canon) => {
            let filter = match try_parse(&canon.query) {
                Some(filter) => filter,
                None => reject(),
            };

            if args.debug {
                println!("{}", "Filter:".bold());
                println!("{:#?}\n", filter);
            }

            println!("{}", to_filter(&filter));
        }
    }
}

fn reject() -> ! {
    eprintln!(
        "{}{}",
        "error: ".bold().red(),
        "query is not representable as a basic filter".bold(),
    );

    std::process::exit(1);
}

fn print_facets(filter: &BasicFilter) {
    for category in Category::ALL.iter() {
        let atoms = filter.atoms(*category);
        if atoms.is_empty() {
            continue;
        }

        let joined = atoms
            .iter()
            .map(|atom| atom.render())
            .collect::<Vec<_>>()
            .join(", ");

        println!("{}{}", format!("{:?}: ", category).bold(), joined);
    }

    if !filter.terms.is_empty() {
        println!("{}{}", "Terms: ".bold(), filter.terms.join(", "));
    }
}

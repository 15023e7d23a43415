//! A command line interface to epsilon-nondominated sort.

#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/commands.rs"]
mod helpers;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

mod commands;

mod cli {
    use super::commands::boxes::{get_boxes_app, run_boxes};
    use super::commands::compare::{get_compare_app, run_compare};
    use super::commands::create_write_buffer;
    use super::commands::flag::{get_flag_app, run_flag};
    use super::commands::sort::{get_sort_app, run_sort};
    use clap::{ArgMatches, Command};
    use std::process;

    pub fn get_app() -> Command {
        Command::new("Epsilon-Nondominated Sort")
            .version(env!("CARGO_PKG_VERSION"))
            .author(env!("CARGO_PKG_AUTHORS"))
            .about("A command line interface to epsilon-nondominated sort of delimited text tables")
            .subcommand(get_sort_app())
            .subcommand(get_flag_app())
            .subcommand(get_boxes_app())
            .subcommand(get_compare_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        if let Err(err) = match arg_matches.subcommand() {
            Some(("sort", sort_matches)) => run_sort(sort_matches, create_write_buffer),
            Some(("flag", flag_matches)) => run_flag(flag_matches, create_write_buffer),
            Some(("boxes", boxes_matches)) => run_boxes(boxes_matches, create_write_buffer),
            Some(("compare", compare_matches)) => run_compare(compare_matches, create_write_buffer),
            _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
        } {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn main() {
    let matches = cli::get_app().get_matches();

    cli::run_subcommand(matches);
}

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};

pub mod boxes;
pub mod compare;
pub mod flag;
pub mod sort;

use epsort_cli::config::*;
use epsort_cli::io::{ReaderOptions, Table, read_table};
use epsort_core::prelude::*;
use epsort_core::utils::create_stderr_logger;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write, stdin, stdout};

pub(crate) const INPUT_ARG_NAME: &str = "INPUT";
pub(crate) const OBJECTIVES_ARG_NAME: &str = "objectives";
pub(crate) const MAXIMIZE_ARG_NAME: &str = "maximize";
pub(crate) const MAXIMIZE_ALL_ARG_NAME: &str = "maximize-all";
pub(crate) const EPSILONS_ARG_NAME: &str = "epsilons";
pub(crate) const FROM_END_ARG_NAME: &str = "from-end";
pub(crate) const PARALLEL_THRESHOLD_ARG_NAME: &str = "parallel-threshold";
pub(crate) const DELIMITER_ARG_NAME: &str = "delimiter";
pub(crate) const TABS_ARG_NAME: &str = "tabs";
pub(crate) const COMMENT_ARG_NAME: &str = "comment";
pub(crate) const HEADER_ARG_NAME: &str = "header";
pub(crate) const BLANK_ARG_NAME: &str = "blank";
pub(crate) const CONTRIBUTION_ARG_NAME: &str = "contribution";
pub(crate) const LINE_NUMBER_ARG_NAME: &str = "line-number";
pub(crate) const CONFIG_ARG_NAME: &str = "config";
pub(crate) const OUTPUT_ARG_NAME: &str = "output";
pub(crate) const LOG_ARG_NAME: &str = "log";

const STDIN_NAME: &str = "<stdin>";

pub(crate) type OutWriterFunc = fn(Option<File>) -> BufWriter<Box<dyn Write>>;

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'"))
}

fn create_file(path: &str, description: &str) -> Result<File, String> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'"))
}

/// Adds arguments which specify how inputs are read and where results go.
fn add_input_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(INPUT_ARG_NAME)
                .help("Sets input files, '-' reads from stdin")
                .num_args(1..)
                .default_value("-"),
        )
        .arg(
            Arg::new(DELIMITER_ARG_NAME)
                .help("Specifies column delimiter, default is a single space")
                .short('d')
                .long(DELIMITER_ARG_NAME)
                .conflicts_with(TABS_ARG_NAME),
        )
        .arg(
            Arg::new(TABS_ARG_NAME).help("Uses tab as column delimiter").long(TABS_ARG_NAME).action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(COMMENT_ARG_NAME)
                .help("Skips lines which start with given prefix, can be used multiple times")
                .short('c')
                .long(COMMENT_ARG_NAME)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new(HEADER_ARG_NAME)
                .help("Skips given amount of lines at the beginning of every input")
                .long(HEADER_ARG_NAME)
                .value_parser(value_parser!(usize)),
        )
        .arg(Arg::new(BLANK_ARG_NAME).help("Skips blank lines").long(BLANK_ARG_NAME).action(ArgAction::SetTrue))
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to json config file, command line arguments override its values")
                .long(CONFIG_ARG_NAME),
        )
        .arg(Arg::new(OUTPUT_ARG_NAME).help("Writes results to the file instead of stdout").long(OUTPUT_ARG_NAME))
        .arg(Arg::new(LOG_ARG_NAME).help("Enables logging to stderr").long(LOG_ARG_NAME).action(ArgAction::SetTrue))
}

/// Adds arguments which specify objectives.
fn add_objective_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(OBJECTIVES_ARG_NAME)
                .help("Sets objective columns as indices or ranges, e.g. '0,2-4', default is all columns")
                .short('o')
                .long(OBJECTIVES_ARG_NAME)
                .value_delimiter(',')
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new(MAXIMIZE_ARG_NAME)
                .help("Sets objective columns to maximize as indices or ranges")
                .short('m')
                .long(MAXIMIZE_ARG_NAME)
                .value_delimiter(',')
                .action(ArgAction::Append)
                .conflicts_with(MAXIMIZE_ALL_ARG_NAME),
        )
        .arg(
            Arg::new(MAXIMIZE_ALL_ARG_NAME)
                .help("Maximizes all objectives")
                .short('M')
                .long(MAXIMIZE_ALL_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(EPSILONS_ARG_NAME)
                .help("Sets epsilons, one per objective, e.g. '0.1,0.5'")
                .short('e')
                .long(EPSILONS_ARG_NAME)
                .value_delimiter(',')
                .value_parser(value_parser!(f64))
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new(FROM_END_ARG_NAME)
                .help("Counts column indices from the last column")
                .long(FROM_END_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(PARALLEL_THRESHOLD_ARG_NAME)
                .help("Compares records in parallel once archive is larger than given size")
                .long(PARALLEL_THRESHOLD_ARG_NAME)
                .value_parser(value_parser!(usize)),
        )
}

/// Adds arguments which annotate output rows with their origin.
fn add_contribution_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(CONTRIBUTION_ARG_NAME)
                .help("Appends input file name to every row")
                .long(CONTRIBUTION_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(LINE_NUMBER_ARG_NAME)
                .help("Appends source line number to every row, used together with contribution")
                .long(LINE_NUMBER_ARG_NAME)
                .requires(CONTRIBUTION_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

fn get_value<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, arg_name: &str) -> Option<T> {
    matches.try_get_one::<T>(arg_name).ok().flatten().cloned()
}

fn get_values<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, arg_name: &str) -> Option<Vec<T>> {
    matches.try_get_many::<T>(arg_name).ok().flatten().map(|values| values.cloned().collect())
}

fn get_flag(matches: &ArgMatches, arg_name: &str) -> Option<bool> {
    get_value::<bool>(matches, arg_name).filter(|is_set| *is_set)
}

/// Reads config file, if specified, and overrides its values with command line arguments.
fn get_config(matches: &ArgMatches) -> Result<Config, String> {
    let file_config = match get_value::<String>(matches, CONFIG_ARG_NAME) {
        Some(path) => {
            read_config(BufReader::new(open_file(path.as_str(), "config")?)).map_err(|err| err.to_string())?
        }
        None => Config::default(),
    };

    let get_ranges = |arg_name: &str| {
        get_values::<String>(matches, arg_name)
            .map(|ranges| ranges.into_iter().map(ColumnRange::Range).collect::<Vec<_>>())
    };

    let delimiter = match get_flag(matches, TABS_ARG_NAME) {
        Some(_) => Some("\t".to_string()),
        None => get_value(matches, DELIMITER_ARG_NAME),
    };

    let args_config = Config {
        objectives: get_ranges(OBJECTIVES_ARG_NAME),
        maximize: get_ranges(MAXIMIZE_ARG_NAME),
        maximize_all: get_flag(matches, MAXIMIZE_ALL_ARG_NAME),
        epsilons: get_values(matches, EPSILONS_ARG_NAME),
        from_end: get_flag(matches, FROM_END_ARG_NAME),
        parallel_threshold: get_value(matches, PARALLEL_THRESHOLD_ARG_NAME),
        input: Some(InputConfig {
            delimiter,
            comment: get_values(matches, COMMENT_ARG_NAME),
            header: get_value(matches, HEADER_ARG_NAME),
            blank: get_flag(matches, BLANK_ARG_NAME),
        }),
        output: Some(OutputConfig {
            contribution: get_flag(matches, CONTRIBUTION_ARG_NAME),
            line_number: get_flag(matches, LINE_NUMBER_ARG_NAME),
            only_objectives: get_flag(matches, sort::ONLY_OBJECTIVES_ARG_NAME),
        }),
    };

    Ok(file_config.merge(args_config))
}

fn get_logger(matches: &ArgMatches) -> Option<InfoLogger> {
    get_flag(matches, LOG_ARG_NAME).map(|_| create_stderr_logger())
}

fn create_sorter(config: SortConfig, logger: Option<InfoLogger>) -> EpsilonSort {
    let sorter = EpsilonSort::new(config);

    match logger {
        Some(logger) => sorter.with_logger(logger),
        None => sorter,
    }
}

fn read_tables(
    matches: &ArgMatches,
    options: &ReaderOptions,
    logger: Option<&InfoLogger>,
) -> Result<Vec<Table>, String> {
    matches
        .get_many::<String>(INPUT_ARG_NAME)
        .into_iter()
        .flatten()
        .map(|path| read_input(path.as_str(), options, logger))
        .collect()
}

fn read_input(path: &str, options: &ReaderOptions, logger: Option<&InfoLogger>) -> Result<Table, String> {
    let table = if path == "-" {
        read_table(BufReader::new(stdin()), STDIN_NAME, options)
    } else {
        read_table(BufReader::new(open_file(path, "input")?), path, options)
    }
    .map_err(|err| err.to_string())?;

    if let Some(logger) = logger {
        (logger)(format!("read {} rows from '{}'", table.len(), table.name()).as_str());
    }

    Ok(table)
}

fn get_first_width(tables: &[Table]) -> Option<usize> {
    tables.iter().find_map(|table| table.rows().first()).map(|row| row.len())
}

/// Replaces table and row indices of a malformed record with input name and line number.
fn format_sort_error(err: SortError, tables: &[Table]) -> String {
    let location = err.provenance().and_then(|provenance| {
        let table = tables.get(provenance.table)?;
        table.line_number(provenance.row).map(|line| (line, table.name()))
    });

    match (&err, location) {
        (SortError::MalformedRecord { reason, .. }, Some((line, name))) => {
            format!("{reason} on line {line} of '{name}'")
        }
        _ => err.to_string(),
    }
}

fn get_writer(matches: &ArgMatches, out_writer_func: OutWriterFunc) -> Result<BufWriter<Box<dyn Write>>, String> {
    let out_file =
        get_value::<String>(matches, OUTPUT_ARG_NAME).map(|path| create_file(path.as_str(), "output")).transpose()?;

    Ok(out_writer_func(out_file))
}

fn flush(mut writer: BufWriter<Box<dyn Write>>) -> Result<(), String> {
    writer.flush().map_err(|err| format!("cannot write output: '{err}'"))
}

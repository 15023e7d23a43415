#[cfg(test)]
#[path = "../../tests/unit/commands/compare_test.rs"]
mod compare_test;

use super::*;
use epsort_cli::compare::{Comparison, compare_tables};
use epsort_cli::io::read_numeric_table;

const LEFT_ARG_NAME: &str = "LEFT";
const RIGHT_ARG_NAME: &str = "RIGHT";
const SEPARATOR_ARG_NAME: &str = "sep";
const TOLERANCE_ARG_NAME: &str = "tol";

pub fn get_compare_app() -> Command {
    Command::new("compare")
        .about("Checks whether two numeric files contain the same rows within a tolerance")
        .arg(Arg::new(LEFT_ARG_NAME).help("Sets first file to compare").required(true).index(1))
        .arg(Arg::new(RIGHT_ARG_NAME).help("Sets second file to compare").required(true).index(2))
        .arg(
            Arg::new(SEPARATOR_ARG_NAME)
                .help("Specifies field separator")
                .short('s')
                .long(SEPARATOR_ARG_NAME)
                .default_value(" "),
        )
        .arg(
            Arg::new(TOLERANCE_ARG_NAME)
                .help("Specifies tolerance")
                .short('t')
                .long(TOLERANCE_ARG_NAME)
                .value_parser(value_parser!(f64))
                .default_value("1e-6"),
        )
        .arg(Arg::new(OUTPUT_ARG_NAME).help("Writes results to the file instead of stdout").long(OUTPUT_ARG_NAME))
}

pub fn run_compare(matches: &ArgMatches, out_writer_func: OutWriterFunc) -> Result<(), String> {
    let options = ReaderOptions {
        delimiter: get_value::<String>(matches, SEPARATOR_ARG_NAME).unwrap_or_default(),
        skip_blank: true,
        ..ReaderOptions::default()
    };
    let tolerance = get_value::<f64>(matches, TOLERANCE_ARG_NAME).unwrap_or(1e-6);

    let read = |arg_name: &str| {
        let path = get_value::<String>(matches, arg_name).unwrap_or_default();
        let file = open_file(path.as_str(), "input")?;

        read_numeric_table(BufReader::new(file), path.as_str(), &options).map_err(|err| err.to_string())
    };

    let left = read(LEFT_ARG_NAME)?;
    let right = read(RIGHT_ARG_NAME)?;

    let comparison = compare_tables(&left, &right, tolerance).map_err(|err| err.to_string())?;

    let mut writer = get_writer(matches, out_writer_func)?;
    if let Comparison::Partial { matches, .. } = &comparison {
        writeln!(writer, "{matches:?}").map_err(|err| err.to_string())?;
    }
    writeln!(writer, "{comparison}").map_err(|err| err.to_string())?;

    flush(writer)
}

#[cfg(test)]
#[path = "../../tests/unit/commands/boxes_test.rs"]
mod boxes_test;

use super::*;
use epsort_cli::io::write_boxes;

pub fn get_boxes_app() -> Command {
    let command = Command::new("boxes").about("Prints epsilon box coordinates of every row of all inputs");

    add_objective_args(add_input_args(command))
}

pub fn run_boxes(matches: &ArgMatches, out_writer_func: OutWriterFunc) -> Result<(), String> {
    let config = get_config(matches)?;
    let sort_config = create_sort_config(&config).map_err(|err| err.to_string())?;
    let logger = get_logger(matches);
    let reader_options = create_reader_options(&config);
    let tables = read_tables(matches, &reader_options, logger.as_ref())?;

    let boxes =
        create_sorter(sort_config, logger).boxes(tables.as_slice()).map_err(|err| format_sort_error(err, &tables))?;

    let mut writer = get_writer(matches, out_writer_func)?;
    write_boxes(&mut writer, &boxes, reader_options.delimiter.as_str()).map_err(|err| err.to_string())?;

    flush(writer)
}

#[cfg(test)]
#[path = "../../tests/unit/commands/flag_test.rs"]
mod flag_test;

use super::*;
use epsort_cli::io::write_flags;

pub fn get_flag_app() -> Command {
    let command = Command::new("flag")
        .about("Prints every row of all inputs with trailing 1 if it is epsilon-nondominated and 0 otherwise");

    add_contribution_args(add_objective_args(add_input_args(command)))
}

pub fn run_flag(matches: &ArgMatches, out_writer_func: OutWriterFunc) -> Result<(), String> {
    let config = get_config(matches)?;
    let sort_config = create_sort_config(&config).map_err(|err| err.to_string())?;
    let logger = get_logger(matches);
    let tables = read_tables(matches, &create_reader_options(&config), logger.as_ref())?;
    let writer_options =
        create_writer_options(&config, &sort_config, get_first_width(&tables)).map_err(|err| err.to_string())?;

    let masks =
        create_sorter(sort_config, logger).flag(tables.as_slice()).map_err(|err| format_sort_error(err, &tables))?;

    let mut writer = get_writer(matches, out_writer_func)?;
    write_flags(&mut writer, &tables, &masks, &writer_options).map_err(|err| err.to_string())?;

    flush(writer)
}

#[cfg(test)]
#[path = "../../tests/unit/commands/sort_test.rs"]
mod sort_test;

use super::*;
use epsort_cli::io::write_survivors;

pub(crate) const ONLY_OBJECTIVES_ARG_NAME: &str = "print-only-objectives";

pub fn get_sort_app() -> Command {
    let command = Command::new("sort")
        .about("Prints epsilon-nondominated rows of all inputs")
        .arg(
            Arg::new(ONLY_OBJECTIVES_ARG_NAME)
                .help("Prints only objective columns")
                .long(ONLY_OBJECTIVES_ARG_NAME)
                .action(ArgAction::SetTrue),
        );

    add_contribution_args(add_objective_args(add_input_args(command)))
}

pub fn run_sort(matches: &ArgMatches, out_writer_func: OutWriterFunc) -> Result<(), String> {
    let config = get_config(matches)?;
    let only_objectives = config.output.as_ref().and_then(|output| output.only_objectives).unwrap_or(false);
    if only_objectives && config.objectives.is_none() {
        return Err("printing only objectives requires explicit objective columns".to_string());
    }

    let sort_config = create_sort_config(&config).map_err(|err| err.to_string())?;
    let logger = get_logger(matches);
    let tables = read_tables(matches, &create_reader_options(&config), logger.as_ref())?;
    let writer_options =
        create_writer_options(&config, &sort_config, get_first_width(&tables)).map_err(|err| err.to_string())?;

    let survivors =
        create_sorter(sort_config, logger).sort(tables.as_slice()).map_err(|err| format_sort_error(err, &tables))?;

    let mut writer = get_writer(matches, out_writer_func)?;
    write_survivors(&mut writer, &tables, &survivors, &writer_options).map_err(|err| err.to_string())?;

    flush(writer)
}

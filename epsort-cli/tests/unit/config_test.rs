use super::*;
use std::fs::File;

const FULL_CONFIG_PATH: &str = "../data/config/config.full.json";

fn read_json(json: &str) -> GenericResult<Config> {
    read_config(BufReader::new(json.as_bytes()))
}

#[test]
fn can_read_full_config() {
    let config = read_config(BufReader::new(File::open(FULL_CONFIG_PATH).unwrap())).unwrap();

    assert_eq!(config.objectives, Some(vec![ColumnRange::Index(0), ColumnRange::Range("2-3".to_string())]));
    assert_eq!(config.maximize, Some(vec![ColumnRange::Index(3)]));
    assert_eq!(config.epsilons, Some(vec![0.5, 0.1, 0.01]));
    assert_eq!(config.parallel_threshold, Some(512));

    let sort_config = create_sort_config(&config).unwrap();
    let layout = sort_config.resolve(None).unwrap().unwrap();
    assert_eq!(layout.columns(), &[0, 2, 3]);
    assert!(!layout.is_maximized(0));
    assert!(layout.is_maximized(2));
    assert_eq!(sort_config.parallel_threshold(), Some(512));

    let reader_options = create_reader_options(&config);
    assert_eq!(
        reader_options,
        ReaderOptions { delimiter: ",".to_string(), comments: vec!["#".to_string()], header: 1, skip_blank: true }
    );

    let writer_options = create_writer_options(&config, &sort_config, Some(4)).unwrap();
    assert_eq!(
        writer_options,
        WriterOptions { delimiter: ",".to_string(), contribution: true, line_number: true, columns: None }
    );
}

#[test]
fn can_use_defaults_for_empty_config() {
    let config = read_json("{}").unwrap();

    let sort_config = create_sort_config(&config).unwrap();

    assert_eq!(sort_config, SortConfig::default());
    assert_eq!(create_reader_options(&config), ReaderOptions::default());
    assert_eq!(create_writer_options(&config, &sort_config, Some(3)).unwrap(), WriterOptions::default());
}

#[test]
fn can_reject_negative_column_index() {
    let result = read_json(r#"{ "objectives": [-1] }"#);

    assert!(result.is_err());
}

#[test]
fn can_reject_invalid_range() {
    let config = read_json(r#"{ "objectives": ["5-3"] }"#).unwrap();

    let result = create_sort_config(&config);

    assert_eq!(result, Err(GenericError::from("index range '5-3' is decreasing")));
}

#[test]
fn can_reject_invalid_epsilon() {
    let config = read_json(r#"{ "objectives": [0, 1], "epsilons": [0.1, 0] }"#).unwrap();

    assert!(create_sort_config(&config).is_err());
}

#[test]
fn can_resolve_only_objectives_from_end() {
    let json = r#"{ "objectives": ["0-1"], "fromEnd": true, "output": { "onlyObjectives": true } }"#;
    let config = read_json(json).unwrap();
    let sort_config = create_sort_config(&config).unwrap();

    let writer_options = create_writer_options(&config, &sort_config, Some(5)).unwrap();

    assert_eq!(writer_options.columns, Some(vec![4, 3]));
}

#[test]
fn can_merge_configs_preferring_other() {
    let base = read_json(r#"{ "epsilons": [0.1], "input": { "delimiter": ",", "header": 2 } }"#).unwrap();
    let other = read_json(r#"{ "epsilons": [0.5], "input": { "header": 1 }, "maximizeAll": true }"#).unwrap();

    let config = base.merge(other);

    assert_eq!(config.epsilons, Some(vec![0.5]));
    assert_eq!(config.maximize_all, Some(true));
    let input = config.input.unwrap();
    assert_eq!(input.delimiter, Some(",".to_string()));
    assert_eq!(input.header, Some(1));
}

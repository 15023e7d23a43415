use super::*;
use crate::io::{ReaderOptions, read_table};
use epsort_core::prelude::*;
use std::io::BufReader;

fn create_tables() -> Vec<Table> {
    let options = ReaderOptions { comments: vec!["#".to_string()], ..ReaderOptions::default() };

    vec![
        read_table(BufReader::new("# run 1\n1 5 a\n2 2 b\n".as_bytes()), "run1.txt", &options).unwrap(),
        read_table(BufReader::new("5 1 c\n".as_bytes()), "run2.txt", &options).unwrap(),
    ]
}

fn write_to_string(action: impl FnOnce(&mut Vec<u8>) -> GenericResult<()>) -> String {
    let mut buffer = Vec::new();
    action(&mut buffer).unwrap();

    String::from_utf8(buffer).unwrap()
}

fn create_config() -> SortConfig {
    SortConfigBuilder::default().with_objectives(vec![0, 1]).with_epsilons(vec![0.1, 0.1]).build().unwrap()
}

parameterized_test! {can_write_survivors, (contribution, line_number, columns, expected), {
    let tables = create_tables();
    let survivors = eps_sort(&tables, &create_config()).unwrap();
    let options = WriterOptions { delimiter: " ".to_string(), contribution, line_number, columns };

    let result = write_to_string(|writer| write_survivors(writer, &tables, &survivors, &options));

    assert_eq!(result, expected);
}}

can_write_survivors! {
    case01_plain: (false, false, None, "1 5 a\n2 2 b\n5 1 c\n"),
    case02_contribution: (true, false, None, "1 5 a run1.txt\n2 2 b run1.txt\n5 1 c run2.txt\n"),
    case03_line_number: (true, true, None, "1 5 a run1.txt 2\n2 2 b run1.txt 3\n5 1 c run2.txt 1\n"),
    case04_line_number_without_contribution: (false, true, None, "1 5 a\n2 2 b\n5 1 c\n"),
    case05_only_objectives: (false, false, Some(vec![1, 0]), "5 1\n2 2\n1 5\n"),
    case06_only_objectives_with_contribution: (true, true, Some(vec![0, 1]), "1 5\n2 2\n5 1\n"),
}

#[test]
fn can_write_flags() {
    let tables = create_tables();
    let config = SortConfigBuilder::default().with_objectives(vec![0]).with_epsilons(vec![0.1]).build().unwrap();
    let masks = flag_nondominated(&tables, &config).unwrap();
    let options = WriterOptions { delimiter: ",".to_string(), ..WriterOptions::default() };

    let result = write_to_string(|writer| write_flags(writer, &tables, &masks, &options));

    assert_eq!(result, "1,5,a,1\n2,2,b,0\n5,1,c,0\n");
}

#[test]
fn can_write_boxes() {
    let boxes = vec![vec![BoxVector::new(vec![10., -0.]), BoxVector::new(vec![-3., 1e12])], vec![]];

    let result = write_to_string(|writer| write_boxes(writer, &boxes, " "));

    assert_eq!(result, "10 0\n-3 1000000000000\n");
}

use super::*;
use crate::config::SortConfigBuilder;
use crate::helpers::{create_config, get_sorted_rows};
use crate::utils::{Float, SortError};
use std::sync::{Arc, Mutex};

fn get_records<'a, R: Clone>(survivors: &[Survivor<'a, R>]) -> Vec<R> {
    survivors.iter().map(|survivor| survivor.record.clone()).collect()
}

#[test]
fn can_keep_only_dominating_row() {
    let tables = vec![vec![vec![1., 1.], vec![2., 2.], vec![1.5, 1.5]]];

    let survivors = eps_sort(&tables, &create_config(&[0.1, 0.1])).unwrap();

    assert_eq!(get_records(&survivors), vec![vec![1., 1.]]);
    assert_eq!(survivors[0].provenance, Provenance::new(0, 0));
}

#[test]
fn can_keep_all_incomparable_rows() {
    let tables = vec![vec![vec![1., 5.], vec![5., 1.], vec![3., 3.]]];

    let survivors = eps_sort(&tables, &create_config(&[0.1, 0.1])).unwrap();

    assert_eq!(get_sorted_rows(&survivors), vec![vec![1., 5.], vec![3., 3.], vec![5., 1.]]);
}

#[test]
fn can_keep_row_closest_to_box_corner() {
    let tables = vec![vec![vec![1.02, 1.02], vec![1.01, 1.01]]];

    let survivors = eps_sort(&tables, &create_config(&[0.1, 0.1])).unwrap();

    assert_eq!(get_records(&survivors), vec![vec![1.01, 1.01]]);
}

#[test]
fn can_maximize_objective() {
    let tables = vec![vec![vec![1., 5.], vec![1., 10.]]];
    let config = SortConfigBuilder::default().with_epsilons(vec![0.1, 0.1]).with_maximize(vec![1]).build().unwrap();

    let survivors = eps_sort(&tables, &config).unwrap();

    assert_eq!(get_records(&survivors), vec![vec![1., 10.]]);
}

#[test]
fn can_report_malformed_record_with_provenance() {
    let tables = vec![vec![vec!["1", "2"]], vec![vec!["0.5", "3"], vec!["1", "abc"], vec!["0", "0"]]];

    let result = eps_sort(&tables, &create_config(&[0.1, 0.1]));

    match result {
        Err(err) => {
            assert_eq!(err.provenance(), Some(Provenance::new(1, 1)));
            assert!(matches!(err, SortError::MalformedRecord { ref reason, .. } if reason.contains("abc")));
        }
        Ok(survivors) => panic!("unexpected survivors: {}", survivors.len()),
    }
}

#[test]
fn can_return_original_fields() {
    let tables = vec![vec![vec!["1.0", "10", "run-a"], vec!["1.0", "5", "run-b"]]];
    let config = SortConfigBuilder::default()
        .with_objectives(vec![0, 1])
        .with_maximize(vec![1])
        .with_epsilons(vec![0.1, 0.1])
        .build()
        .unwrap();

    let survivors = eps_sort(&tables, &config).unwrap();

    assert_eq!(get_records(&survivors), vec![vec!["1.0", "10", "run-a"]]);
}

#[test]
fn can_sort_tables_as_one_pool() {
    let tables = vec![vec![vec![2., 2.], vec![0., 9.]], vec![vec![1., 1.]], vec![], vec![vec![9., 0.]]];

    let survivors = eps_sort(&tables, &create_config(&[0.1, 0.1])).unwrap();

    assert_eq!(
        survivors.iter().map(|survivor| survivor.provenance).collect::<Vec<_>>(),
        vec![Provenance::new(0, 1), Provenance::new(1, 0), Provenance::new(3, 0)]
    );
}

#[test]
fn can_flag_rows_per_table() {
    let tables = vec![vec![vec![2., 2.], vec![0., 9.]], vec![vec![1., 1.]], vec![], vec![vec![9., 0.], vec![9., 1.]]];

    let masks = flag_nondominated(&tables, &create_config(&[0.1, 0.1])).unwrap();

    assert_eq!(masks, vec![vec![false, true], vec![true], vec![], vec![true, false]]);
}

#[test]
fn can_select_same_rows_with_flag_and_sort() {
    let table = (0..200)
        .map(|idx| {
            let x = (idx as Float * 0.37).sin().abs();
            let y = (idx as Float * 0.11).cos().abs();
            vec![x, y, 1. - x]
        })
        .collect::<Vec<_>>();
    let tables = vec![table];
    let config = create_config(&[0.05, 0.05, 0.05]);

    let survivors = eps_sort(&tables, &config).unwrap();
    let masks = flag_nondominated(&tables, &config).unwrap();

    let mut sorted_rows = survivors.iter().map(|survivor| survivor.provenance.row).collect::<Vec<_>>();
    sorted_rows.sort();
    let flagged_rows =
        masks[0].iter().enumerate().filter(|(_, is_kept)| **is_kept).map(|(idx, _)| idx).collect::<Vec<_>>();
    assert!(!flagged_rows.is_empty());
    assert_eq!(flagged_rows, sorted_rows);
    assert!(sorted_rows.iter().all(|&row| survivors.iter().any(|survivor| survivor.record == &tables[0][row])));
}

#[test]
fn can_sort_empty_input() {
    let tables: Vec<Vec<Vec<Float>>> = vec![vec![], vec![]];

    assert!(eps_sort(&tables, &create_config(&[0.1, 0.1])).unwrap().is_empty());
    assert_eq!(flag_nondominated(&tables, &create_config(&[0.1])).unwrap(), vec![Vec::<bool>::new(), vec![]]);
}

#[test]
fn can_detect_configuration_error_before_sorting() {
    let tables = vec![vec![vec![1., 2., 3.]]];

    let result = eps_sort(&tables, &create_config(&[0.1, 0.1]));

    assert!(matches!(result, Err(SortError::Configuration(_))));
}

#[test]
fn can_use_default_epsilons() {
    let tables = vec![vec![vec![1., 1.], vec![1. + 1e-12, 1.], vec![1. + 2e-9, 0.5]]];

    let survivors = eps_sort(&tables, &SortConfig::default()).unwrap();

    assert_eq!(get_records(&survivors), vec![vec![1., 1.], vec![1. + 2e-9, 0.5]]);
}

#[test]
fn can_get_boxes() {
    let tables = vec![vec![vec![1.05, 2.], vec![0.3, 0.25]]];
    let config = SortConfigBuilder::default().with_epsilons(vec![0.5, 0.25]).build().unwrap();

    let boxes = EpsilonSort::new(config).boxes(&tables).unwrap();

    assert_eq!(boxes.len(), 1);
    let coordinates = boxes[0].iter().map(|boxes| boxes.coordinates().to_vec()).collect::<Vec<_>>();
    assert_eq!(coordinates, vec![vec![2., 8.], vec![0., 1.]]);
}

#[test]
fn can_log_progress() {
    let messages = Arc::new(Mutex::new(Vec::<String>::new()));
    let logger = {
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    };
    let tables = vec![vec![vec![1., 1.], vec![2., 2.]], vec![vec![0., 3.]]];

    let archive = EpsilonSort::new(create_config(&[0.1, 0.1])).with_logger(logger).archive(&tables).unwrap();

    assert_eq!(archive.len(), 2);
    let messages = messages.lock().unwrap();
    assert!(messages.iter().any(|msg| msg.contains("table 0: 2 rows, 1 accepted, 0 evicted, archive size 1")));
    assert!(messages.iter().any(|msg| msg.contains("table 1: 1 rows, 1 accepted, 0 evicted, archive size 2")));
    assert!(messages.last().unwrap().contains("into 2 nondominated records"));
}

use super::*;

#[test]
fn can_use_parallel_collect() {
    let source = (0..100).collect::<Vec<_>>();

    let result = parallel_collect(source.as_slice(), |item| item * 2);

    assert_eq!(result, (0..100).map(|item| item * 2).collect::<Vec<_>>());
}

parameterized_test! {can_use_maybe_parallel_collect, threshold, {
    let source = vec![3, 1, 2];

    let result = maybe_parallel_collect(source.as_slice(), threshold, |item| item + 1);

    assert_eq!(result, vec![4, 2, 3]);
}}

can_use_maybe_parallel_collect! {
    case01_no_threshold: None,
    case02_below_threshold: Some(10),
    case03_above_threshold: Some(1),
}

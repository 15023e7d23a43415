use crate::cli::{get_app, run_subcommand};
use crate::helpers::*;

#[test]
fn can_compare_sorted_output_with_reference() {
    let dir = tempfile::tempdir().unwrap();
    let sorted_path = dir.path().join("sorted.txt");
    let sorted_path = sorted_path.to_str().unwrap();

    let sort_args =
        ["epsort", "sort", "-c", "#", "--blank", "-o", "0,1", "-e", "0.1,0.1", "--print-only-objectives", "--output"];
    let sort_args = [sort_args.as_slice(), &[sorted_path, RUN2_PATH, RUN1_PATH]].concat();
    run_subcommand(get_app().try_get_matches_from(sort_args).unwrap());

    let result = run_with_output_file(|path| {
        let args = ["epsort", "compare", sorted_path, REFERENCE_PATH, "--output", path];
        run_subcommand(get_app().try_get_matches_from(args).unwrap());

        Ok(())
    });

    assert_eq!(result, Ok("Equal within 1e-06\n".to_string()));
}

use super::*;
use crate::helpers::*;

fn run_flag_with_args(params: &[&str]) -> Result<String, String> {
    run_with_output_file(|path| {
        let args = [&["flag", "--output", path], params].concat();
        let matches = get_flag_app().try_get_matches_from(args).unwrap();

        run_flag(&matches, create_write_buffer)
    })
}

#[test]
fn can_flag_every_row() {
    let result = run_flag_with_args(&["-c", "#", "--blank", "-o", "0,1", "-e", "0.1,0.1", RUN1_PATH, RUN2_PATH]);

    assert_eq!(
        result,
        Ok("1 5 0.2 a 1\n2 2 0.5 b 1\n4 4 0.1 c 0\n5 1 0.3 d 1\n1.05 5.04 0.9 e 0\n3 3 0.4 f 0\n".to_string())
    );
}

#[test]
fn can_flag_with_tabs_and_contribution() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("input.tsv");
    std::fs::write(&input_path, "1\t2\n2\t1\n3\t3\n").unwrap();
    let input_path = input_path.to_str().unwrap();

    let result = run_flag_with_args(&["--tabs", "--contribution", "-e", "0.5,0.5", input_path]);

    assert_eq!(
        result,
        Ok(format!("1\t2\t{input_path}\t1\n2\t1\t{input_path}\t1\n3\t3\t{input_path}\t0\n"))
    );
}

#[test]
fn can_flag_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("empty.txt");
    std::fs::write(&input_path, "# nothing here\n").unwrap();

    let result = run_flag_with_args(&["-c", "#", input_path.to_str().unwrap()]);

    assert_eq!(result, Ok(String::new()));
}

#[test]
fn can_reject_line_number_without_contribution() {
    let result = get_flag_app().try_get_matches_from(["flag", "--line-number", RUN1_PATH]);

    assert!(result.is_err());
}

//! Parses column index ranges, e.g. `3` or `3-5`.

#[cfg(test)]
#[path = "../tests/unit/ranges_test.rs"]
mod ranges_test;

use epsort_core::utils::GenericError;

/// Converts an argument like `3` or `3-5` into a list of column indices. Range bounds are
/// inclusive; a decreasing range is an error.
pub fn parse_index_range(arg: &str) -> Result<Vec<usize>, GenericError> {
    let err = || GenericError::from(format!("could not convert '{arg}' to index range"));

    if arg.is_empty() || !arg.chars().all(|c| c.is_ascii_digit() || c == '-') {
        return Err(err());
    }

    let parse = |value: &str| value.parse::<usize>().map_err(|_| err());

    match arg.split_once('-') {
        None => Ok(vec![parse(arg)?]),
        Some((first, second)) => {
            let (first, second) = (parse(first)?, parse(second)?);
            if first > second {
                return Err(GenericError::from(format!("index range '{arg}' is decreasing")));
            }

            Ok((first..=second).collect())
        }
    }
}

/// Converts many range arguments into one list of column indices, keeping their order.
pub fn parse_index_ranges<'a>(args: impl IntoIterator<Item = &'a str>) -> Result<Vec<usize>, GenericError> {
    args.into_iter().try_fold(Vec::new(), |mut acc, arg| {
        acc.extend(parse_index_range(arg)?);
        Ok(acc)
    })
}

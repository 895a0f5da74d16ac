// Input array helpers: random generation and custom parsing

use std::fmt;

use rand::Rng;

/// Bounds for generated arrays: 5..=12 elements, values 1..=100.
pub const MIN_LEN: usize = 5;
pub const MAX_LEN: usize = 12;
pub const MIN_VALUE: i64 = 1;
pub const MAX_VALUE: i64 = 100;

/// Controller-side validation failures for custom array input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The input contained no values at all.
    EmptyInput,
    /// A comma-separated token did not parse as an integer.
    InvalidNumber { token: String },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::EmptyInput => {
                write!(f, "Please enter array elements first!")
            }
            InputError::InvalidNumber { token } => {
                write!(
                    f,
                    "Invalid input '{}'! Please enter valid numbers separated by commas.",
                    token
                )
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Parse a comma-separated list of integers: `"5, 3, 1"` -> `[5, 3, 1]`.
/// Whitespace around tokens is ignored; empty trailing tokens are not.
pub fn parse_array(text: &str) -> Result<Vec<i64>, InputError> {
    if text.trim().is_empty() {
        return Err(InputError::EmptyInput);
    }

    let mut values = Vec::new();
    for token in text.split(',') {
        let token = token.trim();
        match token.parse::<i64>() {
            Ok(v) => values.push(v),
            Err(_) => {
                return Err(InputError::InvalidNumber {
                    token: token.to_string(),
                })
            }
        }
    }
    Ok(values)
}

/// A fresh random array: 5-12 elements in 1..=100.
pub fn random_array<R: Rng>(rng: &mut R) -> Vec<i64> {
    let len = rng.gen_range(MIN_LEN..=MAX_LEN);
    (0..len).map(|_| rng.gen_range(MIN_VALUE..=MAX_VALUE)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn parses_spaced_csv() {
        assert_eq!(parse_array("5, 3 ,1").unwrap(), vec![5, 3, 1]);
        assert_eq!(parse_array("-2,0,7").unwrap(), vec![-2, 0, 7]);
    }

    #[test]
    fn rejects_blank_and_malformed_input() {
        assert_eq!(parse_array("   "), Err(InputError::EmptyInput));
        assert!(matches!(
            parse_array("1,two,3"),
            Err(InputError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_array("1,,3"),
            Err(InputError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn random_arrays_respect_bounds_and_seed() {
        let mut rng = StdRng::seed_from_u64(7);
        let arr = random_array(&mut rng);
        assert!((MIN_LEN..=MAX_LEN).contains(&arr.len()));
        assert!(arr.iter().all(|v| (MIN_VALUE..=MAX_VALUE).contains(v)));

        let again = random_array(&mut StdRng::seed_from_u64(7));
        assert_eq!(arr, again);
    }
}

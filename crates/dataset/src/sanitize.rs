use crate::{MAX_VALUE, MIN_VALUE};

/// Result of sanitizing free-text input: the usable values plus how many
/// tokens were dropped as non-numeric and how many were clamped into range.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParsedInput {
    pub values: Vec<i64>,
    pub dropped: usize,
    pub clamped: usize,
}

pub fn parse_input(input: &str) -> Vec<i64> {
    sanitize_input(input, MIN_VALUE, MAX_VALUE).values
}

/// Splits on commas and whitespace, drops tokens that fail to parse, and
/// clamps the rest into `[min, max]`.
pub fn sanitize_input(input: &str, min: i64, max: i64) -> ParsedInput {
    debug_assert!(min <= max);
    let mut parsed = ParsedInput::default();

    for token in input.split(|c: char| c.is_whitespace() || c == ',') {
        if token.is_empty() {
            continue;
        }
        let Ok(value) = token.parse::<i64>() else {
            parsed.dropped += 1;
            continue;
        };
        if value < min {
            parsed.clamped += 1;
            parsed.values.push(min);
        } else if value > max {
            parsed.clamped += 1;
            parsed.values.push(max);
        } else {
            parsed.values.push(value);
        }
    }

    parsed
}

//! encodes and decodes durations written in `MM:SS` format, as they appear in the
//! scenario table and on the dashboard.
use super::ScenarioError;
use itertools::Itertools;

pub const DURATION_SEPARATOR: char = ':';

const SECONDS_PER_MINUTE: u32 = 60;

/// parses a `MM:SS` string into a count of seconds.
///
/// # Arguments
///
/// * `text` - duration text with exactly one `:` separating two non-negative integers
///
/// # Returns
///
/// `minutes * 60 + seconds`, or a [`ScenarioError::DurationFormatError`] if the text
/// does not split into exactly two integer parts.
pub fn parse(text: &str) -> Result<u32, ScenarioError> {
    let parts = text.split(DURATION_SEPARATOR).collect_vec();
    let (minutes, seconds) = match parts.as_slice() {
        [m, s] => (parse_part(text, m, "minutes")?, parse_part(text, s, "seconds")?),
        _ => {
            return Err(ScenarioError::DurationFormatError {
                text: text.to_string(),
                message: format!("expected 2 parts separated by ':', found {}", parts.len()),
            })
        }
    };
    minutes
        .checked_mul(SECONDS_PER_MINUTE)
        .and_then(|m| m.checked_add(seconds))
        .ok_or_else(|| ScenarioError::DurationFormatError {
            text: text.to_string(),
            message: String::from("duration overflows a 32-bit count of seconds"),
        })
}

/// formats a count of seconds as `MM:SS`. minutes are padded to two digits and
/// otherwise unrestricted, seconds are always two digits.
pub fn format(seconds: u32) -> String {
    format!(
        "{:02}{}{:02}",
        seconds / SECONDS_PER_MINUTE,
        DURATION_SEPARATOR,
        seconds % SECONDS_PER_MINUTE
    )
}

fn parse_part(text: &str, part: &str, name: &str) -> Result<u32, ScenarioError> {
    part.trim()
        .parse::<u32>()
        .map_err(|e| ScenarioError::DurationFormatError {
            text: text.to_string(),
            message: format!("{name} part '{part}' is not a non-negative integer: {e}"),
        })
}

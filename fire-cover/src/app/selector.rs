//! the selector surface: turns user input into a station count within the
//! table's range before anything reaches the scenario lookup.
use crate::model::FireCoverCliError;
use fire_cover_core::model::ScenarioTable;

/// a line of selector input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectorInput {
    Select(u32),
    Quit,
}

const QUIT_COMMANDS: [&str; 3] = ["q", "quit", "exit"];

/// reads one line of selector input. blank lines are not accepted; values
/// outside `[1, 11]` are rejected here rather than clamped.
pub fn parse_selection(line: &str) -> Result<SelectorInput, FireCoverCliError> {
    let trimmed = line.trim();
    if QUIT_COMMANDS.iter().any(|q| q.eq_ignore_ascii_case(trimmed)) {
        return Ok(SelectorInput::Quit);
    }
    let value = trimmed.parse::<u32>().map_err(|_| {
        FireCoverCliError::SelectionError(format!(
            "'{trimmed}' is not a whole number of stations"
        ))
    })?;
    validate_selection(value).map(SelectorInput::Select)
}

pub fn validate_selection(value: u32) -> Result<u32, FireCoverCliError> {
    let range = ScenarioTable::MIN_STATIONS..=ScenarioTable::MAX_STATIONS;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(FireCoverCliError::SelectionError(format!(
            "{} is outside [{}, {}]",
            value,
            range.start(),
            range.end()
        )))
    }
}

mod baseline;
pub mod duration_codec;
mod scenario_error;
mod scenario_record;
mod scenario_source;
mod scenario_table;

pub use baseline::{Baseline, BASELINE};
pub use scenario_error::ScenarioError;
pub use scenario_record::ScenarioRecord;
pub use scenario_source::{ScenarioSourceRow, SCENARIO_SOURCE_ROWS};
pub use scenario_table::ScenarioTable;

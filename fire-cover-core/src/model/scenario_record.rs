use super::{duration_codec, ScenarioError, ScenarioSourceRow};
use serde::{Deserialize, Serialize};

/// one modelled scenario: the impact of moving `stations_moved` stations from
/// 24-hour to 12-hour operation. the `*_avg_seconds` fields are derived from the
/// display strings when the record is built.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScenarioRecord {
    pub stations_moved: u32,
    pub yearly_savings: f64,
    pub overall_impact_seconds: u32,
    pub overall_avg_display: String,
    pub night_impact_seconds: u32,
    pub night_avg_display: String,
    pub invest_20yr_million: f64,
    pub overall_avg_seconds: u32,
    pub night_avg_seconds: u32,
}

impl TryFrom<&ScenarioSourceRow> for ScenarioRecord {
    type Error = ScenarioError;

    fn try_from(row: &ScenarioSourceRow) -> Result<Self, Self::Error> {
        validate_amount(row.stations_moved, "yearly_savings", row.yearly_savings)?;
        validate_amount(
            row.stations_moved,
            "invest_20yr_million",
            row.invest_20yr_million,
        )?;
        let overall_avg_seconds = duration_codec::parse(row.overall_avg_display)?;
        let night_avg_seconds = duration_codec::parse(row.night_avg_display)?;
        Ok(ScenarioRecord {
            stations_moved: row.stations_moved,
            yearly_savings: row.yearly_savings,
            overall_impact_seconds: row.overall_impact_seconds,
            overall_avg_display: row.overall_avg_display.to_string(),
            night_impact_seconds: row.night_impact_seconds,
            night_avg_display: row.night_avg_display.to_string(),
            invest_20yr_million: row.invest_20yr_million,
            overall_avg_seconds,
            night_avg_seconds,
        })
    }
}

fn validate_amount(stations_moved: u32, field: &str, value: f64) -> Result<(), ScenarioError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ScenarioError::InvalidSourceRow {
            stations_moved,
            message: format!("{field} must be a finite, non-negative amount, found {value}"),
        })
    }
}

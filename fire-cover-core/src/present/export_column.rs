use crate::model::ScenarioRecord;
use serde::{Deserialize, Serialize};

/// a column of the scenario table, in declared field order.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportColumn {
    StationsMoved,
    YearlySavings,
    OverallImpactSeconds,
    OverallAvgDisplay,
    NightImpactSeconds,
    NightAvgDisplay,
    Invest20yrMillion,
    OverallAvgSeconds,
    NightAvgSeconds,
}

/// which columns are written when the table is exported.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExportColumnSet {
    /// the seven source columns
    #[default]
    Source,
    /// the source columns followed by the derived seconds columns
    SourceAndDerived,
}

const SOURCE_COLUMNS: [ExportColumn; 7] = [
    ExportColumn::StationsMoved,
    ExportColumn::YearlySavings,
    ExportColumn::OverallImpactSeconds,
    ExportColumn::OverallAvgDisplay,
    ExportColumn::NightImpactSeconds,
    ExportColumn::NightAvgDisplay,
    ExportColumn::Invest20yrMillion,
];

const ALL_COLUMNS: [ExportColumn; 9] = [
    ExportColumn::StationsMoved,
    ExportColumn::YearlySavings,
    ExportColumn::OverallImpactSeconds,
    ExportColumn::OverallAvgDisplay,
    ExportColumn::NightImpactSeconds,
    ExportColumn::NightAvgDisplay,
    ExportColumn::Invest20yrMillion,
    ExportColumn::OverallAvgSeconds,
    ExportColumn::NightAvgSeconds,
];

impl ExportColumnSet {
    pub fn columns(&self) -> &'static [ExportColumn] {
        match self {
            ExportColumnSet::Source => &SOURCE_COLUMNS,
            ExportColumnSet::SourceAndDerived => &ALL_COLUMNS,
        }
    }

    pub fn from_include_derived(include_derived: bool) -> ExportColumnSet {
        if include_derived {
            ExportColumnSet::SourceAndDerived
        } else {
            ExportColumnSet::Source
        }
    }
}

impl ExportColumn {
    /// field name used in the CSV header
    pub fn header(&self) -> &'static str {
        match self {
            ExportColumn::StationsMoved => "StationsMoved",
            ExportColumn::YearlySavings => "YearlySavings",
            ExportColumn::OverallImpactSeconds => "OverallImpact_s",
            ExportColumn::OverallAvgDisplay => "OverallAvg_mmss",
            ExportColumn::NightImpactSeconds => "NightImpact_s",
            ExportColumn::NightAvgDisplay => "NightAvg_mmss",
            ExportColumn::Invest20yrMillion => "Invest_20yr_million",
            ExportColumn::OverallAvgSeconds => "OverallAvg_s",
            ExportColumn::NightAvgSeconds => "NightAvg_s",
        }
    }

    /// column name shown in the on-screen table
    pub fn display_header(&self) -> &'static str {
        match self {
            ExportColumn::StationsMoved => "Stations moved",
            ExportColumn::YearlySavings => "Yearly savings (£)",
            ExportColumn::OverallImpactSeconds => "Overall impact (sec)",
            ExportColumn::OverallAvgDisplay => "Overall avg (mm:ss)",
            ExportColumn::NightImpactSeconds => "Night impact (sec)",
            ExportColumn::NightAvgDisplay => "Night avg (mm:ss)",
            ExportColumn::Invest20yrMillion => "Investment over 20 yrs (£m)",
            ExportColumn::OverallAvgSeconds => "Overall avg (sec)",
            ExportColumn::NightAvgSeconds => "Night avg (sec)",
        }
    }

    /// the field's value. reals use the shortest representation that reads back
    /// to the same number, keeping a trailing `.0` on whole amounts.
    pub fn value(&self, record: &ScenarioRecord) -> String {
        match self {
            ExportColumn::StationsMoved => record.stations_moved.to_string(),
            ExportColumn::YearlySavings => format!("{:?}", record.yearly_savings),
            ExportColumn::OverallImpactSeconds => record.overall_impact_seconds.to_string(),
            ExportColumn::OverallAvgDisplay => record.overall_avg_display.clone(),
            ExportColumn::NightImpactSeconds => record.night_impact_seconds.to_string(),
            ExportColumn::NightAvgDisplay => record.night_avg_display.clone(),
            ExportColumn::Invest20yrMillion => format!("{:?}", record.invest_20yr_million),
            ExportColumn::OverallAvgSeconds => record.overall_avg_seconds.to_string(),
            ExportColumn::NightAvgSeconds => record.night_avg_seconds.to_string(),
        }
    }
}

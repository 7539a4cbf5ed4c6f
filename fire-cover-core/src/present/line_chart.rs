use crate::model::{duration_codec, ScenarioTable};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub const RESPONSE_TIME_TITLE: &str = "Modelled average attendance time by scenario";
pub const INVESTMENT_TITLE: &str = "Total reinvestment capacity over 20 years";
pub const OVERALL_SERIES: &str = "Overall avg";
pub const NIGHT_SERIES: &str = "Night-time avg";
pub const INVESTMENT_SERIES: &str = "Reinvestment capacity";
pub const STATIONS_AXIS_LABEL: &str = "Stations moved";

/// how y values of a chart are written as tick labels.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AxisFormat {
    /// plain number with two decimal places
    Number,
    /// seconds written as `MM:SS`
    MinutesSeconds,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChartPoint {
    pub x: u32,
    pub y: f64,
    pub series: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerticalMarker {
    pub x: u32,
}

/// a line chart dataset in long format: every point carries its series label.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub y_format: AxisFormat,
    pub points: Vec<ChartPoint>,
    pub marker: Option<VerticalMarker>,
}

impl LineChart {
    /// series labels in order of first appearance
    pub fn series_names(&self) -> Vec<&str> {
        self.points
            .iter()
            .map(|p| p.series.as_str())
            .unique()
            .collect_vec()
    }

    pub fn series<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ChartPoint> + 'a {
        self.points.iter().filter(move |p| p.series == name)
    }

    /// distinct x values across all series, ascending
    pub fn x_values(&self) -> Vec<u32> {
        self.points.iter().map(|p| p.x).sorted().dedup().collect_vec()
    }

    pub fn format_y(&self, y: f64) -> String {
        match self.y_format {
            AxisFormat::Number => format!("{y:.2}"),
            AxisFormat::MinutesSeconds => duration_codec::format(y.max(0.0).round() as u32),
        }
    }
}

/// overall and night-time average attendance time for every scenario, with a
/// marker at the selected station count. the whole table is always projected.
pub fn project_response_time_chart(table: &ScenarioTable, selected: u32) -> LineChart {
    let overall = table.iter().map(|r| ChartPoint {
        x: r.stations_moved,
        y: r.overall_avg_seconds as f64,
        series: OVERALL_SERIES.to_string(),
    });
    let night = table.iter().map(|r| ChartPoint {
        x: r.stations_moved,
        y: r.night_avg_seconds as f64,
        series: NIGHT_SERIES.to_string(),
    });
    LineChart {
        title: RESPONSE_TIME_TITLE.to_string(),
        x_label: STATIONS_AXIS_LABEL.to_string(),
        y_label: String::from("Seconds (mm:ss)"),
        y_format: AxisFormat::MinutesSeconds,
        points: overall.chain(night).collect_vec(),
        marker: Some(VerticalMarker { x: selected }),
    }
}

/// 20-year reinvestment capacity for every scenario, in millions.
pub fn project_investment_chart(table: &ScenarioTable, selected: u32) -> LineChart {
    let points = table
        .iter()
        .map(|r| ChartPoint {
            x: r.stations_moved,
            y: r.invest_20yr_million,
            series: INVESTMENT_SERIES.to_string(),
        })
        .collect_vec();
    LineChart {
        title: INVESTMENT_TITLE.to_string(),
        x_label: STATIONS_AXIS_LABEL.to_string(),
        y_label: String::from("£ million"),
        y_format: AxisFormat::Number,
        points,
        marker: Some(VerticalMarker { x: selected }),
    }
}

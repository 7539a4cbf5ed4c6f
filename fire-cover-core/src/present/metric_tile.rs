use super::currency_ops;
use crate::model::{Baseline, ScenarioRecord};
use serde::{Deserialize, Serialize};

pub const YEARLY_SAVINGS_LABEL: &str = "Yearly savings";
pub const OVERALL_RESPONSE_LABEL: &str = "Overall response: avg time";
pub const NIGHT_RESPONSE_LABEL: &str = "Night-time only: avg time";
pub const REINVESTMENT_LABEL: &str = "Reinvestment capacity (20-yr)";

/// a single headline figure on the dashboard with an optional change annotation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MetricTile {
    pub label: String,
    pub value: String,
    pub delta: Option<String>,
}

impl MetricTile {
    fn new(label: &str, value: String, delta: Option<String>) -> MetricTile {
        MetricTile {
            label: label.to_string(),
            value,
            delta,
        }
    }
}

/// maps a scenario onto the four headline tiles: yearly savings, overall and
/// night-time average response, and 20-year reinvestment capacity.
pub fn project_metrics(record: &ScenarioRecord, baseline: &Baseline) -> [MetricTile; 4] {
    [
        MetricTile::new(
            YEARLY_SAVINGS_LABEL,
            currency_ops::format_currency(record.yearly_savings, 2),
            None,
        ),
        MetricTile::new(
            OVERALL_RESPONSE_LABEL,
            record.overall_avg_display.clone(),
            Some(delta_annotation(
                record.overall_impact_seconds,
                &baseline.overall_display(),
            )),
        ),
        MetricTile::new(
            NIGHT_RESPONSE_LABEL,
            record.night_avg_display.clone(),
            Some(delta_annotation(
                record.night_impact_seconds,
                &baseline.night_display(),
            )),
        ),
        MetricTile::new(
            REINVESTMENT_LABEL,
            currency_ops::format_millions(record.invest_20yr_million),
            None,
        ),
    ]
}

pub fn baseline_caption(baseline: &Baseline) -> String {
    format!(
        "Baseline is current modelled average: Overall **{}**, Night-time **{}**.",
        baseline.overall_display(),
        baseline.night_display()
    )
}

fn delta_annotation(impact_seconds: u32, baseline_display: &str) -> String {
    format!("+{impact_seconds} sec vs baseline ({baseline_display})")
}

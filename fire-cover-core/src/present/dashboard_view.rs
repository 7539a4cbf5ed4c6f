use super::{
    baseline_caption, compose_narrative, export_ops, project_investment_chart, project_metrics,
    project_response_time_chart, project_table_view, LineChart, MetricTile, TableView,
};
use crate::model::{ScenarioError, ScenarioTable, BASELINE};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_TITLE: &str = "Fire Cover Consultation Tool";
pub const DEFAULT_INTRO: &str = "Select how many stations would move from 24-hour to 12-hour operations and review the modelled impact below.";
pub const SELECTOR_LABEL: &str = "Number of stations moving to 12-hour";
pub const METRICS_HEADING: &str = "Impact Overview";
pub const NARRATIVE_HEADING: &str = "Scenario Summary";
pub const CHARTS_HEADING: &str = "How impacts change as more stations move";
pub const TABLE_HEADING: &str = "See the full scenario table";
pub const DOWNLOAD_LABEL: &str = "Download scenario CSV";

/// page title and introduction, the only free text a host may override.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PageText {
    pub title: String,
    pub intro: String,
}

impl Default for PageText {
    fn default() -> Self {
        Self {
            title: DEFAULT_PAGE_TITLE.to_string(),
            intro: DEFAULT_INTRO.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SelectorState {
    pub label: String,
    pub min: u32,
    pub max: u32,
    pub value: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DownloadLink {
    pub label: String,
    pub filename: String,
    pub media_type: String,
}

/// everything a host needs to draw the dashboard for one selection.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DashboardView {
    pub page: PageText,
    pub selector: SelectorState,
    pub metrics: Vec<MetricTile>,
    pub baseline_caption: String,
    pub narrative: String,
    pub response_time_chart: LineChart,
    pub investment_chart: LineChart,
    pub table: TableView,
    pub download: DownloadLink,
}

/// re-evaluates the dashboard for a selected station count. the result depends
/// only on the table and the selection.
///
/// # Arguments
///
/// * `table` - the scenario table built at startup
/// * `page` - page title and introduction
/// * `stations_moved` - current selector value, expected within `[1, 11]`
///
/// # Returns
///
/// the dashboard view, or an integrity error if the selection has no unique scenario
pub fn evaluate(
    table: &ScenarioTable,
    page: &PageText,
    stations_moved: u32,
) -> Result<DashboardView, ScenarioError> {
    let record = table.lookup(stations_moved)?;
    log::debug!("evaluating dashboard for {stations_moved} station(s)");
    Ok(DashboardView {
        page: page.clone(),
        selector: SelectorState {
            label: SELECTOR_LABEL.to_string(),
            min: ScenarioTable::MIN_STATIONS,
            max: ScenarioTable::MAX_STATIONS,
            value: stations_moved,
        },
        metrics: project_metrics(record, &BASELINE).to_vec(),
        baseline_caption: baseline_caption(&BASELINE),
        narrative: compose_narrative(record),
        response_time_chart: project_response_time_chart(table, stations_moved),
        investment_chart: project_investment_chart(table, stations_moved),
        table: project_table_view(table),
        download: DownloadLink {
            label: DOWNLOAD_LABEL.to_string(),
            filename: export_ops::EXPORT_FILENAME.to_string(),
            media_type: export_ops::EXPORT_MEDIA_TYPE.to_string(),
        },
    })
}

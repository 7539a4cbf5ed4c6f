pub mod currency_ops;
mod dashboard_view;
mod export_column;
pub mod export_ops;
mod line_chart;
mod metric_tile;
mod narrative;
mod table_view;

pub use dashboard_view::{
    evaluate, DashboardView, DownloadLink, PageText, SelectorState, CHARTS_HEADING,
    METRICS_HEADING, NARRATIVE_HEADING, SELECTOR_LABEL, TABLE_HEADING,
};
pub use export_column::{ExportColumn, ExportColumnSet};
pub use export_ops::ExportPayload;
pub use line_chart::{
    project_investment_chart, project_response_time_chart, AxisFormat, ChartPoint, LineChart,
    VerticalMarker,
};
pub use metric_tile::{baseline_caption, project_metrics, MetricTile};
pub use narrative::compose_narrative;
pub use table_view::{project_table_view, TableView};

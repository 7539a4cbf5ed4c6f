//! renders a [`DashboardView`] as plain text for a terminal.
use fire_cover_core::present::{
    DashboardView, LineChart, MetricTile, SelectorState, TableView, CHARTS_HEADING,
    METRICS_HEADING, NARRATIVE_HEADING, TABLE_HEADING,
};
use itertools::Itertools;

const MARKER: &str = "<- selected";

pub fn render_text(view: &DashboardView) -> String {
    let mut lines: Vec<String> = vec![];
    lines.extend(heading(&view.page.title, '='));
    lines.push(view.page.intro.clone());
    lines.push(String::new());
    lines.push(render_selector(&view.selector));
    lines.push(String::new());

    lines.extend(heading(METRICS_HEADING, '-'));
    lines.extend(view.metrics.iter().map(render_metric));
    lines.push(strip_emphasis(&view.baseline_caption));
    lines.push(String::new());

    lines.extend(heading(NARRATIVE_HEADING, '-'));
    lines.push(strip_emphasis(&view.narrative));
    lines.push(String::new());

    lines.extend(heading(CHARTS_HEADING, '-'));
    lines.extend(render_chart(&view.response_time_chart));
    lines.push(String::new());
    lines.extend(render_chart(&view.investment_chart));
    lines.push(String::new());

    lines.extend(heading(TABLE_HEADING, '-'));
    lines.extend(render_table(&view.table));
    lines.push(String::new());
    lines.push(format!(
        "{}: {} ({})",
        view.download.label, view.download.filename, view.download.media_type
    ));
    lines.join("\n")
}

fn heading(title: &str, underline: char) -> Vec<String> {
    let rule = underline.to_string().repeat(title.chars().count());
    vec![title.to_string(), rule]
}

/// draws the selector as a track with the current value marked, `1 ──●──── 11`
pub fn render_selector(selector: &SelectorState) -> String {
    let track = (selector.min..=selector.max)
        .map(|v| if v == selector.value { "●" } else { "─" })
        .join("");
    format!(
        "{}: {}  [{} {} {}]",
        selector.label, selector.value, selector.min, track, selector.max
    )
}

fn render_metric(tile: &MetricTile) -> String {
    match &tile.delta {
        Some(delta) => format!("{}: {} ({})", tile.label, tile.value, delta),
        None => format!("{}: {}", tile.label, tile.value),
    }
}

/// writes a chart as a table with one column per series and the marker
/// flagged on its row.
fn render_chart(chart: &LineChart) -> Vec<String> {
    let series = chart.series_names();
    let marker_x = chart.marker.map(|m| m.x);
    let headers = std::iter::once(chart.x_label.as_str())
        .chain(series.iter().copied())
        .map(String::from)
        .collect_vec();
    let rows = chart
        .x_values()
        .into_iter()
        .map(|x| {
            let values = series.iter().map(|name| {
                chart
                    .series(name)
                    .find(|p| p.x == x)
                    .map(|p| chart.format_y(p.y))
                    .unwrap_or_default()
            });
            let mut row = std::iter::once(x.to_string()).chain(values).collect_vec();
            if marker_x == Some(x) {
                row.push(MARKER.to_string());
            }
            row
        })
        .collect_vec();
    let mut lines = vec![format!("{} [{}]", chart.title, chart.y_label)];
    lines.extend(render_grid(&headers, &rows));
    lines
}

fn render_table(table: &TableView) -> Vec<String> {
    render_grid(&table.headers, &table.rows)
}

/// aligns cells into columns separated by ` | `. cells beyond the header
/// count are appended without alignment.
fn render_grid(headers: &[String], rows: &[Vec<String>]) -> Vec<String> {
    let widths = headers
        .iter()
        .enumerate()
        .map(|(idx, h)| {
            rows.iter()
                .filter_map(|r| r.get(idx))
                .map(|c| c.chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or_default()
        })
        .collect_vec();
    let format_row = |cells: &[String]| {
        let aligned = cells
            .iter()
            .take(widths.len())
            .zip(widths.iter())
            .map(|(c, w)| pad(c, *w))
            .join(" | ");
        let extra = cells.iter().skip(widths.len()).join(" ");
        if extra.is_empty() {
            aligned
        } else {
            format!("{aligned}  {extra}")
        }
    };
    let rule = widths.iter().map(|w| "-".repeat(*w)).join("-+-");
    let mut lines = vec![format_row(headers), rule];
    lines.extend(rows.iter().map(|r| format_row(r.as_slice())));
    lines
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.chars().count());
    format!("{cell}{}", " ".repeat(fill))
}

fn strip_emphasis(text: &str) -> String {
    text.replace("**", "")
}

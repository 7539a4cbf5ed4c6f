/// a literal row of the modelled scenario table, before any derived fields
/// are computed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScenarioSourceRow {
    pub stations_moved: u32,
    /// modelled yearly savings in pounds
    pub yearly_savings: f64,
    pub overall_impact_seconds: u32,
    pub overall_avg_display: &'static str,
    pub night_impact_seconds: u32,
    pub night_avg_display: &'static str,
    /// cumulative reinvestment capacity over 20 years, in millions of pounds
    pub invest_20yr_million: f64,
}

const fn row(
    stations_moved: u32,
    yearly_savings: f64,
    overall_impact_seconds: u32,
    overall_avg_display: &'static str,
    night_impact_seconds: u32,
    night_avg_display: &'static str,
    invest_20yr_million: f64,
) -> ScenarioSourceRow {
    ScenarioSourceRow {
        stations_moved,
        yearly_savings,
        overall_impact_seconds,
        overall_avg_display,
        night_impact_seconds,
        night_avg_display,
        invest_20yr_million,
    }
}

/// modelled impact of moving stations from 24-hour to 12-hour operation.
pub const SCENARIO_SOURCE_ROWS: [ScenarioSourceRow; 11] = [
    row(1, 678_642.90, 1, "04:48", 0, "04:47", 8.079082143),
    row(2, 1_357_285.80, 1, "04:48", 1, "04:48", 16.15816429),
    row(3, 2_035_928.70, 2, "04:49", 3, "04:50", 24.23724643),
    row(4, 2_714_571.60, 2, "04:49", 5, "04:52", 32.31632857),
    row(5, 3_393_214.50, 3, "04:50", 6, "04:53", 40.39541071),
    row(6, 4_071_857.40, 4, "04:51", 7, "04:54", 48.47449286),
    row(7, 4_750_500.30, 5, "04:52", 9, "04:56", 56.55357514),
    row(8, 5_429_143.20, 6, "04:53", 13, "05:00", 64.63265714),
    row(9, 6_107_786.10, 7, "04:54", 13, "05:03", 72.71173929),
    row(10, 6_786_429.00, 8, "04:55", 18, "05:05", 80.79082143),
    row(11, 7_465_071.90, 9, "04:56", 20, "05:07", 88.86990357),
];

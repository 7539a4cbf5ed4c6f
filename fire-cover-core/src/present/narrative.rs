use super::currency_ops;
use crate::model::ScenarioRecord;

/// writes the scenario summary paragraph. the template is identical for every
/// scenario; `**` marks emphasis for hosts that render markdown.
pub fn compose_narrative(record: &ScenarioRecord) -> String {
    format!(
        "Moving **{}** station(s) to 12-hour operation is modelled to save **{} per year**. \
         Average brigade-wide attendance time increases by **{} seconds** to **{}**. \
         At night only, the increase is **{} seconds** to **{}**. \
         Across a 20-year asset life, cumulative efficiencies could enable **~{}** of investment.",
        record.stations_moved,
        currency_ops::format_currency(record.yearly_savings, 0),
        record.overall_impact_seconds,
        record.overall_avg_display,
        record.night_impact_seconds,
        record.night_avg_display,
        currency_ops::format_millions(record.invest_20yr_million),
    )
}

#[cfg(test)]
mod tests {
    use super::compose_narrative;
    use crate::model::ScenarioTable;

    #[test]
    fn test_narrative_for_five_stations() {
        let table = ScenarioTable::try_new().unwrap();
        let text = compose_narrative(table.lookup(5).unwrap());
        for expected in [
            "**5**",
            "£3,393,215 per year",
            "3 seconds",
            "04:50",
            "6 seconds",
            "04:53",
            "£40.40m",
        ] {
            assert!(text.contains(expected), "missing '{expected}' in: {text}");
        }
    }

    #[test]
    fn test_narrative_boundaries_share_template() {
        let table = ScenarioTable::try_new().unwrap();
        let first = compose_narrative(table.lookup(1).unwrap());
        let last = compose_narrative(table.lookup(11).unwrap());
        assert!(first.starts_with("Moving **1** station(s) to 12-hour operation"));
        assert!(first.contains("**0 seconds** to **04:47**"));
        assert!(last.starts_with("Moving **11** station(s) to 12-hour operation"));
        assert!(last.contains("£7,465,072 per year"));
        assert!(last.ends_with("**~£88.87m** of investment."));
    }
}

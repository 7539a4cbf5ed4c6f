use super::{ScenarioError, ScenarioRecord, ScenarioSourceRow, SCENARIO_SOURCE_ROWS};
use itertools::Itertools;

/// the fixed, ordered table of modelled scenarios. built once at startup and
/// shared by reference; nothing mutates a record after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioTable {
    records: Vec<ScenarioRecord>,
}

impl ScenarioTable {
    pub const MIN_STATIONS: u32 = 1;
    pub const MAX_STATIONS: u32 = 11;
    pub const SCENARIO_COUNT: usize = 11;

    /// builds the table from the modelled scenario literals.
    pub fn try_new() -> Result<ScenarioTable, ScenarioError> {
        Self::try_from_rows(&SCENARIO_SOURCE_ROWS)
    }

    /// builds a table from literal source rows, computing the derived seconds of
    /// each record. fails if any row is malformed or if the `stations_moved`
    /// sequence is not exactly `1..=11` in order.
    pub fn try_from_rows(rows: &[ScenarioSourceRow]) -> Result<ScenarioTable, ScenarioError> {
        let records = rows
            .iter()
            .map(ScenarioRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        validate_sequence(&records)?;
        log::debug!("built scenario table with {} records", records.len());
        Ok(ScenarioTable { records })
    }

    pub fn records(&self) -> &[ScenarioRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScenarioRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// finds the unique record for a selection. a selection outside the table's
    /// range, or one matching more than one record, is an integrity failure and
    /// never falls back to a default row.
    pub fn lookup(&self, stations_moved: u32) -> Result<&ScenarioRecord, ScenarioError> {
        let matches = self
            .records
            .iter()
            .filter(|r| r.stations_moved == stations_moved)
            .collect_vec();
        match matches.as_slice() {
            [record] => Ok(*record),
            [] => Err(ScenarioError::IntegrityError(format!(
                "no scenario for {} station(s), selection must be within [{}, {}]",
                stations_moved,
                Self::MIN_STATIONS,
                Self::MAX_STATIONS
            ))),
            many => Err(ScenarioError::IntegrityError(format!(
                "{} scenarios match {} station(s)",
                many.len(),
                stations_moved
            ))),
        }
    }
}

fn validate_sequence(records: &[ScenarioRecord]) -> Result<(), ScenarioError> {
    if records.len() != ScenarioTable::SCENARIO_COUNT {
        return Err(ScenarioError::IntegrityError(format!(
            "expected {} scenarios, found {}",
            ScenarioTable::SCENARIO_COUNT,
            records.len()
        )));
    }
    let expected = ScenarioTable::MIN_STATIONS..=ScenarioTable::MAX_STATIONS;
    for (record, stations) in records.iter().zip(expected) {
        if record.stations_moved != stations {
            return Err(ScenarioError::IntegrityError(format!(
                "expected scenario for {} station(s) at position {}, found {}",
                stations,
                stations - 1,
                record.stations_moved
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::ScenarioTable;
    use crate::model::{duration_codec, ScenarioError, SCENARIO_SOURCE_ROWS};
    use itertools::Itertools;

    fn table() -> ScenarioTable {
        ScenarioTable::try_new().expect("scenario literals should build")
    }

    #[test]
    fn test_table_is_dense_range() {
        let table = table();
        assert_eq!(table.len(), 11);
        let keys = table.iter().map(|r| r.stations_moved).collect_vec();
        assert_eq!(keys, (1..=11u32).collect_vec());
    }

    #[test]
    fn test_display_durations_round_trip() {
        for record in table().iter() {
            let overall = duration_codec::parse(&record.overall_avg_display).unwrap();
            let night = duration_codec::parse(&record.night_avg_display).unwrap();
            assert_eq!(duration_codec::format(overall), record.overall_avg_display);
            assert_eq!(duration_codec::format(night), record.night_avg_display);
            assert_eq!(overall, record.overall_avg_seconds);
            assert_eq!(night, record.night_avg_seconds);
        }
    }

    #[test]
    fn test_values_are_monotonic() {
        let table = table();
        for (a, b) in table.iter().tuple_windows() {
            assert!(a.yearly_savings <= b.yearly_savings);
            assert!(a.overall_impact_seconds <= b.overall_impact_seconds);
            assert!(a.night_impact_seconds <= b.night_impact_seconds);
            assert!(a.invest_20yr_million <= b.invest_20yr_million);
        }
    }

    #[test]
    fn test_savings_are_linear_in_stations() {
        let table = table();
        let unit = table.lookup(1).unwrap().yearly_savings;
        for record in table.iter() {
            let expected = unit * record.stations_moved as f64;
            assert!(
                (record.yearly_savings - expected).abs() < 0.01,
                "savings for {} stations: {} != {}",
                record.stations_moved,
                record.yearly_savings,
                expected
            );
        }
    }

    #[test]
    fn test_lookup_succeeds_for_every_selection() {
        let table = table();
        for stations in 1..=11 {
            let record = table.lookup(stations).unwrap();
            assert_eq!(record.stations_moved, stations);
        }
    }

    #[test]
    fn test_lookup_out_of_range_is_integrity_error() {
        let table = table();
        for stations in [0, 12, u32::MAX] {
            assert!(matches!(
                table.lookup(stations),
                Err(ScenarioError::IntegrityError(_))
            ));
        }
    }

    #[test]
    fn test_first_scenario() {
        let table = table();
        let record = table.lookup(1).unwrap();
        assert_eq!(record.yearly_savings, 678_642.90);
        assert_eq!(record.overall_avg_display, "04:48");
        assert_eq!(record.overall_impact_seconds, 1);
        assert_eq!(record.night_avg_display, "04:47");
        assert_eq!(record.night_impact_seconds, 0);
        assert_eq!(record.invest_20yr_million, 8.079082143);
    }

    #[test]
    fn test_last_scenario() {
        let table = table();
        let record = table.lookup(11).unwrap();
        assert_eq!(record.yearly_savings, 7_465_071.90);
        assert_eq!(record.overall_avg_display, "04:56");
        assert_eq!(record.overall_impact_seconds, 9);
        assert_eq!(record.night_avg_display, "05:07");
        assert_eq!(record.night_impact_seconds, 20);
        assert!((record.invest_20yr_million - 88.87).abs() < 0.005);
    }

    #[test]
    fn test_rejects_missing_rows() {
        let result = ScenarioTable::try_from_rows(&SCENARIO_SOURCE_ROWS[..10]);
        assert!(matches!(result, Err(ScenarioError::IntegrityError(_))));
    }

    #[test]
    fn test_rejects_out_of_order_rows() {
        let mut rows = SCENARIO_SOURCE_ROWS;
        rows.swap(3, 4);
        let result = ScenarioTable::try_from_rows(&rows);
        assert!(matches!(result, Err(ScenarioError::IntegrityError(_))));
    }

    #[test]
    fn test_rejects_duplicate_key() {
        let mut rows = SCENARIO_SOURCE_ROWS;
        rows[10] = rows[9];
        assert!(ScenarioTable::try_from_rows(&rows).is_err());
    }
}

//! serializes the scenario table for download.
use super::ExportColumnSet;
use crate::model::{ScenarioError, ScenarioTable};
use serde::{Deserialize, Serialize};

pub const EXPORT_FILENAME: &str = "fire_cover_scenarios.csv";
pub const EXPORT_MEDIA_TYPE: &str = "text/csv";

/// a file offered for download: its name, media type and UTF-8 contents.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExportPayload {
    pub filename: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

/// writes the whole table as comma-separated text, a header row followed by one
/// line per scenario in table order. the output is byte-stable for a given table.
pub fn serialize_table(
    table: &ScenarioTable,
    column_set: ExportColumnSet,
) -> Result<Vec<u8>, ScenarioError> {
    let columns = column_set.columns();
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(vec![]);
    writer.write_record(columns.iter().map(|c| c.header()))?;
    for record in table.iter() {
        writer.write_record(columns.iter().map(|c| c.value(record)))?;
    }
    writer
        .into_inner()
        .map_err(|e| ScenarioError::CsvFinalizeError(e.to_string()))
}

pub fn export_payload(
    table: &ScenarioTable,
    column_set: ExportColumnSet,
) -> Result<ExportPayload, ScenarioError> {
    let bytes = serialize_table(table, column_set)?;
    log::debug!(
        "serialized {} scenarios into {} bytes of {}",
        table.len(),
        bytes.len(),
        EXPORT_MEDIA_TYPE
    );
    Ok(ExportPayload {
        filename: EXPORT_FILENAME.to_string(),
        media_type: EXPORT_MEDIA_TYPE.to_string(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn export(column_set: ExportColumnSet) -> String {
        let table = ScenarioTable::try_new().unwrap();
        let bytes = serialize_table(&table, column_set).unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_export_has_header_and_eleven_rows() {
        let text = export(ExportColumnSet::Source);
        let lines = text.lines().collect_vec();
        assert_eq!(lines.len(), 12);
        assert_eq!(
            lines[0],
            "StationsMoved,YearlySavings,OverallImpact_s,OverallAvg_mmss,NightImpact_s,NightAvg_mmss,Invest_20yr_million"
        );
        assert_eq!(lines[1], "1,678642.9,1,04:48,0,04:47,8.079082143");
        assert_eq!(lines[11], "11,7465071.9,9,04:56,20,05:07,88.86990357");
    }

    #[test]
    fn test_export_is_byte_stable() {
        assert_eq!(
            export(ExportColumnSet::Source),
            export(ExportColumnSet::Source)
        );
    }

    #[test]
    fn test_export_with_derived_columns() {
        let text = export(ExportColumnSet::SourceAndDerived);
        let lines = text.lines().collect_vec();
        assert_eq!(lines.len(), 12);
        assert!(lines[0].ends_with(",Invest_20yr_million,OverallAvg_s,NightAvg_s"));
        assert_eq!(lines[8], "8,5429143.2,6,04:53,13,05:00,64.63265714,293,300");
    }

    #[test]
    fn test_payload_metadata() {
        let table = ScenarioTable::try_new().unwrap();
        let payload = export_payload(&table, ExportColumnSet::Source).unwrap();
        assert_eq!(payload.filename, "fire_cover_scenarios.csv");
        assert_eq!(payload.media_type, "text/csv");
        assert!(payload.bytes.ends_with(b"88.86990357\n"));
    }
}

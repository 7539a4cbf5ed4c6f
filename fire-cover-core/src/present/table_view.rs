use super::ExportColumnSet;
use crate::model::ScenarioTable;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// the scenario table as shown on screen, with human-readable column names.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub fn project_table_view(table: &ScenarioTable) -> TableView {
    let columns = ExportColumnSet::Source.columns();
    let headers = columns
        .iter()
        .map(|c| c.display_header().to_string())
        .collect_vec();
    let rows = table
        .iter()
        .map(|record| columns.iter().map(|c| c.value(record)).collect_vec())
        .collect_vec();
    TableView { headers, rows }
}

#[cfg(test)]
mod tests {
    use super::project_table_view;
    use crate::model::ScenarioTable;

    #[test]
    fn test_renamed_headers() {
        let table = ScenarioTable::try_new().unwrap();
        let view = project_table_view(&table);
        assert_eq!(
            view.headers,
            vec![
                "Stations moved",
                "Yearly savings (£)",
                "Overall impact (sec)",
                "Overall avg (mm:ss)",
                "Night impact (sec)",
                "Night avg (mm:ss)",
                "Investment over 20 yrs (£m)",
            ]
        );
        assert_eq!(view.rows.len(), 11);
        assert!(view.rows.iter().all(|r| r.len() == view.headers.len()));
        assert_eq!(view.rows[4][3], "04:50");
    }
}

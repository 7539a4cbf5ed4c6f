use crate::model::FireCoverCliError;
use fire_cover_core::model::ScenarioTable;
use fire_cover_core::present::{ExportColumnSet, PageText};
use serde::{Deserialize, Serialize};

/// defines behaviors of a dashboard run
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct DashboardConfiguration {
    pub page_title: String,
    pub intro: String,
    /// selector position before any interaction
    pub default_stations: u32,
    /// directory receiving the scenario CSV download
    pub output_directory: String,
    /// append the derived seconds columns to the CSV download
    pub include_derived_columns: bool,
    pub overwrite: bool,
}

impl Default for DashboardConfiguration {
    fn default() -> Self {
        let page = PageText::default();
        Self {
            page_title: page.title,
            intro: page.intro,
            default_stations: ScenarioTable::MIN_STATIONS,
            output_directory: String::from("."),
            include_derived_columns: false,
            overwrite: false,
        }
    }
}

impl DashboardConfiguration {
    pub fn page_text(&self) -> PageText {
        PageText {
            title: self.page_title.clone(),
            intro: self.intro.clone(),
        }
    }

    pub fn export_column_set(&self) -> ExportColumnSet {
        ExportColumnSet::from_include_derived(self.include_derived_columns)
    }

    /// confirms the default selection is one the selector can offer.
    pub fn validate(&self) -> Result<(), FireCoverCliError> {
        let range = ScenarioTable::MIN_STATIONS..=ScenarioTable::MAX_STATIONS;
        if !range.contains(&self.default_stations) {
            return Err(FireCoverCliError::ConfigurationError(format!(
                "default_stations must be within [{}, {}], found {}",
                range.start(),
                range.end(),
                self.default_stations
            )));
        }
        if self.page_title.trim().is_empty() {
            return Err(FireCoverCliError::ConfigurationError(String::from(
                "page_title must not be empty",
            )));
        }
        Ok(())
    }
}

impl TryFrom<&String> for DashboardConfiguration {
    type Error = FireCoverCliError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let conf: DashboardConfiguration = if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                FireCoverCliError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                FireCoverCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                FireCoverCliError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                FireCoverCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else {
            return Err(FireCoverCliError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )));
        };
        conf.validate()?;
        Ok(conf)
    }
}

#[cfg(test)]
mod tests {
    use super::DashboardConfiguration;
    use crate::model::FireCoverCliError;
    use std::path::PathBuf;

    fn write_temp(filename: &str, contents: &str) -> String {
        let path: PathBuf = std::env::temp_dir().join(filename);
        std::fs::write(&path, contents).unwrap();
        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let conf: DashboardConfiguration =
            toml::from_str("default_stations = 5\noverwrite = true\n").unwrap();
        assert_eq!(conf.default_stations, 5);
        assert!(conf.overwrite);
        assert_eq!(conf.page_title, "Fire Cover Consultation Tool");
        assert_eq!(conf.output_directory, ".");
    }

    #[test]
    fn test_read_json_file() {
        let f = write_temp(
            "fire_cover_test_read_json_file.json",
            r#"{"page_title": "Station Cover", "include_derived_columns": true}"#,
        );
        let conf = DashboardConfiguration::try_from(&f).unwrap();
        assert_eq!(conf.page_text().title, "Station Cover");
        assert!(conf.include_derived_columns);
        assert_eq!(conf.default_stations, 1);
    }

    #[test]
    fn test_read_toml_file_rejects_out_of_range_default() {
        let f = write_temp(
            "fire_cover_test_out_of_range.toml",
            "default_stations = 12\n",
        );
        let result = DashboardConfiguration::try_from(&f);
        assert!(matches!(
            result,
            Err(FireCoverCliError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        let f = String::from("dashboard.yaml");
        assert!(matches!(
            DashboardConfiguration::try_from(&f),
            Err(FireCoverCliError::ConfigurationError(_))
        ));
    }
}

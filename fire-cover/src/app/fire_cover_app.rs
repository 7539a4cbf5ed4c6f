use super::interactive::run_interactive;
use super::render::OutputFormat;
use crate::{config::DashboardConfiguration, model::FireCoverCliError, util::fs};
use clap::{value_parser, Parser, Subcommand};
use fire_cover_core::model::ScenarioTable;
use fire_cover_core::present::{
    self, export_ops, project_investment_chart, project_response_time_chart, ExportColumnSet,
};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// command line dashboard for reviewing the modelled impact of moving fire
/// stations from 24-hour to 12-hour operation
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct FireCoverApp {
    /// path to a .toml or .json file with dashboard configuration
    #[arg(long, global = true)]
    pub configuration_file: Option<String>,
    /// select the dashboard operation to run
    #[command(subcommand)]
    pub op: FireCoverOperation,
}

impl FireCoverApp {
    /// loads configuration, builds the scenario table once and runs the selected
    /// operation against it, writing to stdout.
    pub fn run(&self) -> Result<(), FireCoverCliError> {
        let conf = match &self.configuration_file {
            None => DashboardConfiguration::default(),
            Some(f) => {
                log::info!("reading dashboard configuration from {f}");
                DashboardConfiguration::try_from(f)?
            }
        };
        let table = ScenarioTable::try_new()?;
        let stdout = std::io::stdout();
        let mut writer = stdout.lock();
        self.op.run(&table, &conf, &mut writer)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum FireCoverOperation {
    /// render the dashboard for a single selection
    Dashboard {
        /// number of stations moving to 12-hour operation, defaults to the
        /// configured selection
        #[arg(long, value_parser = value_parser!(u32).range(1..=11))]
        stations: Option<u32>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// read selections from stdin, one per line, re-rendering after each
    Interactive {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// print both chart datasets as JSON
    Charts {
        #[arg(long, value_parser = value_parser!(u32).range(1..=11))]
        stations: Option<u32>,
    },
    /// write the scenario table download as CSV
    Export {
        /// output directory path, defaults to the configured directory
        #[arg(long)]
        output_directory: Option<String>,
        /// append the derived seconds columns
        #[arg(long)]
        include_derived: bool,
        /// replace an existing download file
        #[arg(long)]
        overwrite: bool,
    },
}

impl FireCoverOperation {
    pub fn run<W: Write>(
        &self,
        table: &ScenarioTable,
        conf: &DashboardConfiguration,
        writer: &mut W,
    ) -> Result<(), FireCoverCliError> {
        let page = conf.page_text();
        match self {
            FireCoverOperation::Dashboard { stations, format } => {
                let selected = stations.unwrap_or(conf.default_stations);
                let view = present::evaluate(table, &page, selected)?;
                writeln!(writer, "{}", format.render(&view)?)?;
                Ok(())
            }
            FireCoverOperation::Interactive { format } => {
                let stdin = std::io::stdin();
                let renders = run_interactive(
                    table,
                    &page,
                    conf.default_stations,
                    *format,
                    stdin.lock(),
                    writer,
                )?;
                log::debug!("rendered dashboard {renders} time(s)");
                Ok(())
            }
            FireCoverOperation::Charts { stations } => {
                let selected = stations.unwrap_or(conf.default_stations);
                // confirms the selection before projecting the whole table
                table.lookup(selected)?;
                let charts = serde_json::json!({
                    "response_time_chart": project_response_time_chart(table, selected),
                    "investment_chart": project_investment_chart(table, selected),
                });
                writeln!(writer, "{}", serde_json::to_string_pretty(&charts)?)?;
                Ok(())
            }
            FireCoverOperation::Export {
                output_directory,
                include_derived,
                overwrite,
            } => {
                let directory = output_directory
                    .as_deref()
                    .unwrap_or(conf.output_directory.as_str());
                let column_set = if *include_derived {
                    ExportColumnSet::SourceAndDerived
                } else {
                    conf.export_column_set()
                };
                let payload = export_ops::export_payload(table, column_set)?;
                let filepath = fs::write_file(
                    Path::new(directory),
                    &payload.filename,
                    &payload.bytes,
                    *overwrite || conf.overwrite,
                )?;
                log::info!(
                    "wrote {} ({}, {} bytes)",
                    filepath.to_string_lossy(),
                    payload.media_type,
                    payload.bytes.len()
                );
                writeln!(writer, "{}", filepath.to_string_lossy())?;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FireCoverApp, FireCoverOperation};
    use crate::app::render::OutputFormat;
    use crate::config::DashboardConfiguration;
    use clap::Parser;
    use fire_cover_core::model::ScenarioTable;

    fn run_op(op: &FireCoverOperation, conf: &DashboardConfiguration) -> String {
        let table = ScenarioTable::try_new().unwrap();
        let mut out: Vec<u8> = vec![];
        op.run(&table, conf, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_dashboard_args() {
        let app = FireCoverApp::parse_from(["fire-cover", "dashboard", "--stations", "5"]);
        match app.op {
            FireCoverOperation::Dashboard { stations, format } => {
                assert_eq!(stations, Some(5));
                assert_eq!(format, OutputFormat::Text);
            }
            _ => panic!("expected dashboard operation"),
        }
    }

    #[test]
    fn test_selector_range_enforced_by_parser() {
        for value in ["0", "12"] {
            let result =
                FireCoverApp::try_parse_from(["fire-cover", "dashboard", "--stations", value]);
            assert!(result.is_err(), "{value} should be rejected");
        }
    }

    #[test]
    fn test_dashboard_uses_configured_default() {
        let conf = DashboardConfiguration {
            default_stations: 6,
            ..Default::default()
        };
        let op = FireCoverOperation::Dashboard {
            stations: None,
            format: OutputFormat::Text,
        };
        let text = run_op(&op, &conf);
        assert!(text.contains("Moving 6 station(s)"));
    }

    #[test]
    fn test_charts_json() {
        let op = FireCoverOperation::Charts { stations: Some(9) };
        let text = run_op(&op, &DashboardConfiguration::default());
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["response_time_chart"]["marker"]["x"], 9);
        assert_eq!(
            json["investment_chart"]["points"].as_array().map(|a| a.len()),
            Some(11)
        );
    }

    #[test]
    fn test_export_writes_download() {
        let dir = std::env::temp_dir().join("fire_cover_test_export_writes_download");
        let _ = std::fs::remove_dir_all(&dir);
        let op = FireCoverOperation::Export {
            output_directory: Some(dir.to_string_lossy().to_string()),
            include_derived: false,
            overwrite: false,
        };
        run_op(&op, &DashboardConfiguration::default());
        let written = std::fs::read_to_string(dir.join("fire_cover_scenarios.csv")).unwrap();
        assert_eq!(written.lines().count(), 12);
    }
}

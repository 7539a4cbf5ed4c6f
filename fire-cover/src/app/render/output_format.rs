use super::render_text;
use crate::model::FireCoverCliError;
use clap::ValueEnum;
use fire_cover_core::present::DashboardView;
use serde::{Deserialize, Serialize};

/// how an evaluated dashboard is written to the terminal.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// aligned, human-readable text
    Text,
    /// the full dashboard view as pretty-printed JSON
    Json,
}

impl OutputFormat {
    pub fn render(&self, view: &DashboardView) -> Result<String, FireCoverCliError> {
        match self {
            OutputFormat::Text => Ok(render_text(view)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(view)?),
        }
    }
}

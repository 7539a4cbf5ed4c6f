use fire_cover_core::model::ScenarioError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FireCoverCliError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("invalid selection: {0}")]
    SelectionError(String),
    #[error("scenario failure: {source}")]
    ScenarioError {
        #[from]
        source: ScenarioError,
    },
    #[error("failure reading or writing: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum ScenarioError {
    #[error("failure parsing duration '{text}' as MM:SS: {message}")]
    DurationFormatError { text: String, message: String },
    #[error("scenario table integrity violated: {0}")]
    IntegrityError(String),
    #[error("invalid scenario source row for {stations_moved} station(s): {message}")]
    InvalidSourceRow { stations_moved: u32, message: String },
    #[error("failure writing scenario CSV: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("failure finalizing scenario CSV: {0}")]
    CsvFinalizeError(String),
}

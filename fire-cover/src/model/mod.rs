mod fire_cover_cli_error;

pub use fire_cover_cli_error::FireCoverCliError;

mod fire_cover_app;
mod interactive;
pub mod render;
pub mod selector;

pub use fire_cover_app::{FireCoverApp, FireCoverOperation};
pub use interactive::run_interactive;

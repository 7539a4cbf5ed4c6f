mod output_format;
mod text_renderer;

pub use output_format::OutputFormat;
pub use text_renderer::{render_selector, render_text};

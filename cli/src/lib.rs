pub mod app;
pub mod args;
pub mod colors;
pub mod dataset;
pub mod display;
pub mod export;
pub mod json_output;
pub mod logging;
pub mod utils;

// Re-export commonly used items
pub use app::CastPathApp;
pub use args::{Args, Command};
pub use dataset::{load_index, read_records, DatasetError};
pub use export::{save_tgf, write_tgf};
pub use utils::format_number;

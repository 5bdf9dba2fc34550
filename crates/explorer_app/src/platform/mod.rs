mod app;
mod config;
mod effects;
pub mod logging;
mod terminal;
pub mod ui;

pub use app::{run_app, Controller};
pub use config::{Args, DEFAULT_BASE_URL};
pub use effects::EffectRunner;
pub use terminal::{run_interactive, run_once, write_page};

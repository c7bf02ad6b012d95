pub mod console;
pub mod log;

pub use console::render_console;
pub use log::render_log;

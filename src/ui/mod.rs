//! Terminal front end for the coin listing.

pub mod alert;
pub mod app;
pub mod command;
pub mod input;
pub mod render;

pub use alert::{Alert, AlertAction};
pub use app::InteractiveApp;
pub use command::{parse_filter_list, Command, CommandError};
pub use input::spawn_stdin_reader;

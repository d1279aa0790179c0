//! Headless host for the trackboard drag-and-drop engine.
//!
//! Loads a board document, replays a recorded gesture script through a
//! [`trackboard_dnd::DragSession`] and prints the resulting board together
//! with the committed move records.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod script;

pub use cli::{Cli, Commands};
pub use config::{CliConfig, OutputFormat, RoleMode};
pub use script::{GestureEvent, GestureScript};

pub mod app;
pub mod events;
pub mod menu;
pub mod ui;

pub use app::{App, Settings};
pub use events::{CrosstermKeys, KeySource, NavEvent, ScriptedKeys};
pub use menu::{run_menu, Menu, MenuOutcome, MenuState};

use crate::logger::Logger;
use crate::shutdown::NativeShutdown;
use anyhow::Result;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use std::io;
use tracing::debug;

/// Run the interactive menu on the current terminal.
pub fn run(settings: Settings) -> Result<()> {
    enable_raw_mode()?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;

    let power = NativeShutdown::default();
    debug!("Using {} shutdown commands", power.platform());

    let mut app = App::new(terminal, CrosstermKeys, power, Logger::stdout(), settings);
    let result = app.run();

    disable_raw_mode()?;
    app.terminal.show_cursor()?;

    result
}

use crate::logger::{Logger, Severity};
use crate::shutdown::{self, PowerControl};
use crate::tui::events::KeySource;
use crate::tui::menu::{run_menu, Menu, MenuOutcome};
use crate::tui::ui;
use anyhow::Result;
use ratatui::{backend::Backend, Terminal};
use std::io::Write;
use std::thread;
use std::time::Duration;
use tracing::info;

pub const APP_TITLE: &str = "Shutdown Scheduler";
pub const DELAY_TITLE: &str = "Schedule Shutdown";

/// Minutes offered by the delay menu, in display order.
pub const DELAY_MINUTES: [u32; 6] = [15, 25, 35, 45, 60, 120];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    Schedule,
    Cancel,
    Exit,
}

pub fn main_menu() -> Menu<MainChoice> {
    Menu::new(
        APP_TITLE,
        [
            ("Schedule Shutdown", MainChoice::Schedule),
            ("Cancel Shutdown", MainChoice::Cancel),
            ("Exit", MainChoice::Exit),
        ],
    )
}

pub fn delay_menu() -> Menu<u32> {
    Menu::new(
        DELAY_TITLE,
        DELAY_MINUTES.map(|minutes| (format!("{} minutes", minutes), minutes)),
    )
    .cancellable()
}

#[derive(Debug, Clone)]
pub struct Settings {
    /// How long a result line stays on screen before the menu comes back.
    pub pause: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pause: Duration::from_millis(1000),
        }
    }
}

pub struct App<B: Backend, K: KeySource, P: PowerControl, W: Write> {
    pub terminal: Terminal<B>,
    pub keys: K,
    pub power: P,
    pub logger: Logger<W>,
    pub settings: Settings,
}

impl<B, K, P, W> App<B, K, P, W>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    K: KeySource,
    P: PowerControl,
    W: Write,
{
    pub fn new(terminal: Terminal<B>, keys: K, power: P, logger: Logger<W>, settings: Settings) -> Self {
        Self {
            terminal,
            keys,
            power,
            logger,
            settings,
        }
    }

    /// Run the main menu until the user picks Exit.
    pub fn run(&mut self) -> Result<()> {
        let main = main_menu();
        let delays = delay_menu();

        loop {
            let choice = match run_menu(&mut self.terminal, &mut self.keys, &main)? {
                MenuOutcome::Selected(choice) => choice,
                MenuOutcome::Cancelled => continue,
            };

            ui::clear_screen(&mut self.terminal)?;

            match choice {
                MainChoice::Schedule => self.schedule(&delays)?,
                MainChoice::Cancel => {
                    shutdown::report(&self.logger, "Canceling shutdown...", Severity::Warning);
                    shutdown::abort_shutdown(&self.power, &self.logger);
                }
                MainChoice::Exit => {
                    info!("Exit selected");
                    shutdown::report(&self.logger, "Exiting application.", Severity::Success);
                    return Ok(());
                }
            }

            self.pause();
        }
    }

    fn schedule(&mut self, delays: &Menu<u32>) -> Result<()> {
        let outcome = run_menu(&mut self.terminal, &mut self.keys, delays)?;
        ui::clear_screen(&mut self.terminal)?;

        if let MenuOutcome::Selected(minutes) = outcome {
            shutdown::schedule_shutdown(&self.power, &self.logger, minutes);
        }
        Ok(())
    }

    fn pause(&self) {
        if !self.settings.pause.is_zero() {
            thread::sleep(self.settings.pause);
        }
    }
}

//! Generic arrow-key menu: selection state and the render/read loop.

use crate::tui::events::{KeySource, NavEvent};
use crate::tui::ui;
use anyhow::Result;
use ratatui::{backend::Backend, Terminal};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct MenuItem<T> {
    pub label: String,
    pub value: T,
}

/// A fixed, titled list of options.
#[derive(Debug, Clone)]
pub struct Menu<T> {
    pub title: String,
    pub items: Vec<MenuItem<T>>,
    /// Whether Escape leaves the menu without a selection.
    pub cancellable: bool,
}

impl<T> Menu<T> {
    pub fn new<L: Into<String>>(
        title: impl Into<String>,
        items: impl IntoIterator<Item = (L, T)>,
    ) -> Self {
        Self {
            title: title.into(),
            items: items
                .into_iter()
                .map(|(label, value)| MenuItem {
                    label: label.into(),
                    value,
                })
                .collect(),
            cancellable: false,
        }
    }

    pub fn cancellable(mut self) -> Self {
        self.cancellable = true;
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome<T> {
    Selected(T),
    Cancelled,
}

/// Highlighted index into a menu of `len` options, wrapping at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    selected: usize,
    len: usize,
}

impl MenuState {
    pub fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.selected = (self.selected + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        } else {
            self.selected = self.len.saturating_sub(1);
        }
    }

    /// Apply one navigation event. Returns the outcome once the menu is done.
    pub fn handle<T: Clone>(&mut self, menu: &Menu<T>, event: NavEvent) -> Option<MenuOutcome<T>> {
        match event {
            NavEvent::Up => self.prev(),
            NavEvent::Down => self.next(),
            NavEvent::Confirm => {
                return Some(MenuOutcome::Selected(
                    menu.items[self.selected].value.clone(),
                ))
            }
            NavEvent::Cancel if menu.cancellable => return Some(MenuOutcome::Cancelled),
            NavEvent::Cancel => {}
        }
        None
    }
}

/// Show `menu` until the user confirms an option or, if allowed, cancels.
///
/// Selection starts at the first option on every call. The screen is
/// redrawn after each key press.
pub fn run_menu<B, K, T>(
    terminal: &mut Terminal<B>,
    keys: &mut K,
    menu: &Menu<T>,
) -> Result<MenuOutcome<T>>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    K: KeySource + ?Sized,
    T: Clone,
{
    anyhow::ensure!(!menu.is_empty(), "menu '{}' has no options", menu.title);

    let mut state = MenuState::new(menu.len());
    loop {
        ui::render_menu(terminal, menu, &state)?;

        let Some(event) = keys.next_event()? else {
            continue;
        };
        debug!("{}: {:?}", menu.title, event);

        if let Some(outcome) = state.handle(menu, event) {
            return Ok(outcome);
        }
    }
}

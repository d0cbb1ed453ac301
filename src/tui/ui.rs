use crate::tui::menu::{Menu, MenuState};
use anyhow::Result;
use ratatui::{
    backend::Backend,
    layout::Position,
    prelude::*,
    widgets::{List, ListItem, Paragraph},
    Terminal,
};

const SEPARATOR: &str = "-----------------------------------";
const CANCEL_HINT: &str = "Press ESC to go back";

/// Clear the screen and leave the cursor at the top-left corner, ready for log lines.
pub fn clear_screen<B>(terminal: &mut Terminal<B>) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    terminal.clear()?;
    terminal.set_cursor_position(Position::ORIGIN)?;
    Ok(())
}

/// Clear the screen and draw the whole menu.
///
/// The full clear (rather than a diffed redraw) wipes any log lines printed
/// since the previous frame.
pub fn render_menu<B, T>(terminal: &mut Terminal<B>, menu: &Menu<T>, state: &MenuState) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    terminal.clear()?;
    terminal.draw(|f| draw(f, menu, state))?;
    Ok(())
}

pub fn draw<T>(frame: &mut Frame, menu: &Menu<T>, state: &MenuState) {
    let footer_height = if menu.cancellable { 2 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(menu.len() as u16),
            Constraint::Length(footer_height),
            Constraint::Min(0),
        ])
        .split(frame.area());

    let header = Paragraph::new(vec![
        Line::from(format!("         {}", menu.title)),
        Line::from(SEPARATOR),
    ])
    .style(Style::default().fg(Color::White));
    frame.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = menu
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if i == state.selected() {
                ListItem::new(format!("> {}", item.label)).style(Style::default().fg(Color::Green))
            } else {
                ListItem::new(format!("  {}", item.label))
            }
        })
        .collect();
    frame.render_widget(List::new(items), chunks[1]);

    if menu.cancellable {
        let hint = Paragraph::new(vec![Line::default(), Line::from(CANCEL_HINT)]);
        frame.render_widget(hint, chunks[2]);
    }
}

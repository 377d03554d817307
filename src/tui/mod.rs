// TUI shell: tab switcher composing the capability views
mod app;
mod events;
mod layout;
mod rendering;
mod timestamps;

use std::io;

use anyhow::Result;
pub use app::{App, AppTab, MessageType, StatusMessage};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::gateway::AiGateway;
use crate::history::{HistoryStore, StorageBackend};

/// Run the interactive shell
pub fn run_interactive<G: AiGateway, B: StorageBackend>(
    gateway: G,
    store: HistoryStore<B>,
) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(gateway, store);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

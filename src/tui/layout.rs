use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Fixed frame layout: tab bar on top, content in the middle, then the
/// prompt input box and a one-row status bar.
pub struct AppLayout {
    pub tabs_area: Rect,
    pub content_area: Rect,
    pub input_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(3),    // Content (at least 3 rows)
                Constraint::Length(3), // Prompt input
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            tabs_area: chunks[0],
            content_area: chunks[1],
            input_area: chunks[2],
            status_area: chunks[3],
        }
    }
}

/// Split the content area for the history view:
/// record list on the left (40%), preview pane on the right (60%)
pub fn split_history(content: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(content);
    (chunks[0], chunks[1])
}

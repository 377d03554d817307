use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Tabs, Wrap};

use super::app::{AppTab, MessageType, StatusMessage};
use super::layout::{AppLayout, split_history};
use super::timestamps::format_millis;
use crate::markdown::{DocumentBlock, InlineSpan, render};
use crate::models::ActivityRecord;
use crate::utils::strip_ansi_codes;

// Palette
const ACCENT: Color = Color::Rgb(139, 92, 246); // Violet
const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const SELECTED_BG: Color = Color::Rgb(16, 185, 129); // Emerald
const STATUS_BG: Color = Color::Rgb(24, 24, 27);
const ERROR_FG: Color = Color::Rgb(239, 68, 68);
const CODE_FG: Color = Color::Rgb(110, 231, 183);

/// Everything the draw pass needs, borrowed from the app state
pub struct RenderState<'a> {
    pub active_tab: AppTab,
    pub input: &'a str,
    pub output: Option<&'a str>,
    pub scroll: u16,
    pub records: &'a [ActivityRecord],
    pub selected_idx: usize,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_tabs(frame, layout.tabs_area, state.active_tab);
    if state.active_tab == AppTab::History {
        render_history(frame, layout.content_area, state.records, state.selected_idx);
    } else {
        render_feature_view(frame, layout.content_area, state);
    }
    render_input(frame, layout.input_area, state.active_tab, state.input);
    render_status_bar(frame, layout.status_area, state);
}

fn render_tabs(frame: &mut Frame, area: Rect, active: AppTab) {
    let titles: Vec<Line> = AppTab::ALL.iter().map(|tab| Line::from(tab.title())).collect();
    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(Style::default().fg(MUTED))
        .highlight_style(Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" GlamStride "),
        );
    frame.render_widget(tabs, area);
}

fn render_feature_view(frame: &mut Frame, area: Rect, state: &RenderState) {
    let content = match state.output {
        Some(output) => markdown_text(output),
        None => Text::from(Span::styled(state.active_tab.placeholder(), Style::default().fg(MUTED))),
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(format!(" {} ", state.active_tab.title())),
        )
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0));

    frame.render_widget(paragraph, area);
}

fn render_history(frame: &mut Frame, area: Rect, records: &[ActivityRecord], selected_idx: usize) {
    let (list_area, preview_area) = split_history(area);

    let items: Vec<ListItem> = records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let content = format!(
                "{:9} | {} | {}",
                record.kind.label(),
                format_millis(record.timestamp),
                record.title
            );
            let style = if idx == selected_idx {
                Style::default().fg(BRIGHT).bg(SELECTED_BG).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED)
            };
            ListItem::new(content).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(" Activity "),
    );
    frame.render_widget(list, list_area);

    render_preview(frame, preview_area, records.get(selected_idx));
}

fn render_preview(frame: &mut Frame, area: Rect, record: Option<&ActivityRecord>) {
    let content = if let Some(record) = record {
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Kind: ", Style::default().fg(MUTED)),
                Span::raw(record.kind.label()),
            ]),
            Line::from(vec![
                Span::styled("When: ", Style::default().fg(MUTED)),
                Span::raw(format_millis(record.timestamp)),
            ]),
            Line::from(vec![
                Span::styled("Prompt: ", Style::default().fg(MUTED)),
                Span::raw(record.details.clone()),
            ]),
            Line::from(""),
        ];

        if record.kind.is_image() {
            let kb = record.result.len() / 1024;
            lines.push(Line::from(Span::styled(
                format!("(image data, {kb} KB, export with the CLI)"),
                Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
            )));
            Text::from(lines)
        } else {
            let mut text = Text::from(lines);
            text.extend(markdown_text(&record.result));
            text
        }
    } else {
        Text::from("No activity recorded yet")
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" Details "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_input(frame: &mut Frame, area: Rect, tab: AppTab, input: &str) {
    let paragraph = Paragraph::new(input).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(format!(" {} ", tab.input_hint())),
    );
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let (text, style) = if let Some(message) = state.status_message {
        let fg = match message.message_type {
            MessageType::Success => BRIGHT,
            MessageType::Error => ERROR_FG,
        };
        (format!(" {} ", message.text), Style::default().fg(fg).bg(STATUS_BG))
    } else if state.active_tab == AppTab::History {
        (
            format!(
                " {} records | ↑/↓: select | Ctrl+Y: copy | Ctrl+D: delete | Ctrl+X: clear | Ctrl+C: quit ",
                state.records.len()
            ),
            Style::default().fg(BRIGHT).bg(STATUS_BG),
        )
    } else {
        (
            " Tab: switch view | Enter: send | ↑/↓: scroll | Ctrl+Y: copy result | Ctrl+C: quit "
                .to_string(),
            Style::default().fg(BRIGHT).bg(STATUS_BG),
        )
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}

/// Convert model output to styled terminal text via the markdown-lite
/// renderer. ANSI sequences are stripped first; the service's text is
/// untrusted as far as the terminal is concerned.
pub fn markdown_text(source: &str) -> Text<'static> {
    let clean = strip_ansi_codes(source);
    let mut lines = Vec::new();

    for block in render(&clean) {
        match block {
            DocumentBlock::Heading { level, spans } => {
                let style = match level {
                    1 => Style::default().fg(ACCENT).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                    2 => Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                    _ => Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
                };
                lines.push(Line::from(inline_spans(&spans, style)));
            }
            DocumentBlock::Paragraph(spans) => {
                lines.push(Line::from(inline_spans(&spans, Style::default())));
            }
            DocumentBlock::BulletItem(spans) => {
                let mut parts = vec![Span::styled("• ", Style::default().fg(ACCENT))];
                parts.extend(inline_spans(&spans, Style::default()));
                lines.push(Line::from(parts));
            }
            DocumentBlock::NumberedItem { label, spans } => {
                let mut parts =
                    vec![Span::styled(format!("{label}. "), Style::default().fg(ACCENT))];
                parts.extend(inline_spans(&spans, Style::default()));
                lines.push(Line::from(parts));
            }
            DocumentBlock::Blockquote(spans) => {
                let mut parts = vec![Span::styled("│ ", Style::default().fg(MUTED))];
                parts.extend(inline_spans(
                    &spans,
                    Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
                ));
                lines.push(Line::from(parts));
            }
            DocumentBlock::CodeBlock(content) => {
                for code_line in content.lines() {
                    lines.push(Line::from(Span::styled(
                        format!("  {code_line}"),
                        Style::default().fg(CODE_FG).bg(STATUS_BG),
                    )));
                }
            }
            DocumentBlock::Spacer => lines.push(Line::from("")),
        }
    }

    Text::from(lines)
}

fn inline_spans(spans: &[InlineSpan], base: Style) -> Vec<Span<'static>> {
    spans
        .iter()
        .map(|span| match span {
            InlineSpan::Plain(text) => Span::styled(text.clone(), base),
            InlineSpan::Bold(text) => {
                Span::styled(text.clone(), base.fg(ACCENT).add_modifier(Modifier::BOLD))
            }
        })
        .collect()
}

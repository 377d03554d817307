//! TUI application state and event handling.
//!
//! The `App` struct owns the active tab, per-view prompt inputs and
//! outputs, the assistant conversation, and the activity store. Its
//! `run()` loop redraws only when state changes (or every 100ms to pick
//! up terminal resizes) and dispatches keyboard actions.
//!
//! Gateway calls are synchronous: submitting a prompt blocks the loop
//! until the service answers, then the result is rendered and - for
//! every capability except the assistant - recorded in the activity
//! history. Failed calls set an error status and record nothing.

use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::clipboard::copy_to_clipboard;
use crate::gateway::AiGateway;
use crate::history::{HistoryStore, StorageBackend};
use crate::models::{
    ActivityDraft, ActivityKind, ActivityRecord, AspectRatio, ChatTurn, ResearchMode,
};
use crate::utils::file_to_data_uri;

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;

/// Upper bound on prompt length
const MAX_INPUT_LEN: usize = 2000;

pub const TAB_COUNT: usize = 7;

/// The views composed by the shell, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppTab {
    Studio,
    Retouch,
    Research,
    Strategy,
    Copy,
    Assistant,
    History,
}

impl AppTab {
    pub const ALL: [AppTab; TAB_COUNT] = [
        AppTab::Studio,
        AppTab::Retouch,
        AppTab::Research,
        AppTab::Strategy,
        AppTab::Copy,
        AppTab::Assistant,
        AppTab::History,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            AppTab::Studio => "Studio",
            AppTab::Retouch => "Retouch",
            AppTab::Research => "Research",
            AppTab::Strategy => "Strategy",
            AppTab::Copy => "Copy",
            AppTab::Assistant => "Assistant",
            AppTab::History => "History",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> AppTab {
        Self::ALL[(self.index() + 1) % TAB_COUNT]
    }

    pub fn prev(&self) -> AppTab {
        Self::ALL[(self.index() + TAB_COUNT - 1) % TAB_COUNT]
    }

    /// Title of the prompt input box
    pub fn input_hint(&self) -> &'static str {
        match self {
            AppTab::Studio => "Describe the product image to generate",
            AppTab::Retouch => "image path | edit instruction",
            AppTab::Research => "Market query (prefix with product: for a product report)",
            AppTab::Strategy => "Describe the strategy brief",
            AppTab::Copy => "Topic for marketing taglines",
            AppTab::Assistant => "Message the assistant",
            AppTab::History => "History is read-only",
        }
    }

    /// Shown in the content area before the first result arrives
    pub fn placeholder(&self) -> &'static str {
        match self {
            AppTab::Studio => "Generated images land in the activity history.",
            AppTab::Retouch => "Point at an image file and describe the edit.",
            AppTab::Research => "Search-grounded market and product reports.",
            AppTab::Strategy => "Long-form business strategy drafts.",
            AppTab::Copy => "Three short marketing lines per topic.",
            AppTab::Assistant => "Ask anything about running your store.",
            AppTab::History => "",
        }
    }
}

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

#[derive(Debug, Default)]
struct ViewState {
    output: Option<String>,
    scroll: u16,
}

pub struct App<G: AiGateway, B: StorageBackend> {
    gateway: G,
    store: HistoryStore<B>,
    active_tab: AppTab,
    inputs: [String; TAB_COUNT],
    views: [ViewState; TAB_COUNT],
    chat_turns: Vec<ChatTurn>,
    // Cached record list so drawing never hits the backend
    records: Vec<ActivityRecord>,
    selected_idx: usize,
    status_message: Option<StatusMessage>,
    should_quit: bool,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl<G: AiGateway, B: StorageBackend> App<G, B> {
    pub fn new(gateway: G, store: HistoryStore<B>) -> Self {
        let records = store.list();
        Self {
            gateway,
            store,
            active_tab: AppTab::Studio,
            inputs: Default::default(),
            views: Default::default(),
            chat_turns: Vec::new(),
            records,
            selected_idx: 0,
            status_message: None,
            should_quit: false,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    fn check_and_clear_expired_status(&mut self) {
        let expired = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if expired {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<T: Backend>(&mut self, terminal: &mut Terminal<T>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            if self.needs_redraw || now.duration_since(self.last_draw_time) >= Duration::from_millis(100)
            {
                let view = &self.views[self.active_tab.index()];
                let state = RenderState {
                    active_tab: self.active_tab,
                    input: &self.inputs[self.active_tab.index()],
                    output: view.output.as_deref(),
                    scroll: view.scroll,
                    records: &self.records,
                    selected_idx: self.selected_idx,
                    status_message: self.status_message.as_ref(),
                };
                terminal.draw(|f| render_ui(f, &state))?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::NextTab => self.switch_tab(self.active_tab.next()),
            Action::PrevTab => self.switch_tab(self.active_tab.prev()),
            Action::ClearInput => {
                let input = &mut self.inputs[self.active_tab.index()];
                if !input.is_empty() {
                    input.clear();
                    self.needs_redraw = true;
                }
            }
            Action::InputChar(c) => {
                let input = &mut self.inputs[self.active_tab.index()];
                if self.active_tab != AppTab::History && input.len() < MAX_INPUT_LEN {
                    input.push(c);
                    self.needs_redraw = true;
                }
            }
            Action::DeleteChar => {
                if self.inputs[self.active_tab.index()].pop().is_some() {
                    self.needs_redraw = true;
                }
            }
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::Submit => self.submit(),
            Action::CopyResult => self.copy_result(),
            Action::DeleteEntry => self.delete_entry(),
            Action::ClearHistory => self.clear_history(),
            Action::None => {}
        }
    }

    fn switch_tab(&mut self, tab: AppTab) {
        self.active_tab = tab;
        self.needs_redraw = true;
    }

    fn move_selection(&mut self, delta: isize) {
        if self.active_tab == AppTab::History {
            let total = self.records.len();
            if total == 0 {
                self.selected_idx = 0;
                return;
            }
            let old = self.selected_idx;
            let new = (self.selected_idx as isize + delta).max(0) as usize;
            self.selected_idx = new.min(total - 1);
            if old != self.selected_idx {
                self.needs_redraw = true;
            }
        } else {
            // Scroll the output pane
            let view = &mut self.views[self.active_tab.index()];
            let old = view.scroll;
            view.scroll = if delta < 0 {
                view.scroll.saturating_sub(1)
            } else {
                view.scroll.saturating_add(1)
            };
            if old != view.scroll {
                self.needs_redraw = true;
            }
        }
    }

    fn submit(&mut self) {
        if self.active_tab == AppTab::History {
            return;
        }
        let input = self.inputs[self.active_tab.index()].trim().to_string();
        if input.is_empty() {
            self.set_status("✗ Enter a prompt first", MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        }

        match self.dispatch(self.active_tab, &input) {
            Ok(output) => {
                let idx = self.active_tab.index();
                self.views[idx].output = Some(output);
                self.views[idx].scroll = 0;
                self.inputs[idx].clear();
                self.set_status("✓ Done", MessageType::Success, STATUS_SUCCESS_DURATION_MS);
            }
            Err(e) => {
                self.set_status(format!("✗ {e:#}"), MessageType::Error, STATUS_ERROR_DURATION_MS);
            }
        }
    }

    /// Run the active capability. Appends to history only on success,
    /// and returns the text for the view's output pane.
    fn dispatch(&mut self, tab: AppTab, input: &str) -> Result<String> {
        match tab {
            AppTab::Studio => {
                let data_uri = self.gateway.generate_image(input, AspectRatio::Square)?;
                let kb = data_uri.len() / 1024;
                self.record(ActivityKind::ImageGen, input, data_uri);
                Ok(format!(
                    "## Image ready\n\nGenerated a {kb} KB image for:\n\n> {input}\n\n\
                     Stored in history. Export it with:\n\n\
                     ```\nglamstride imagine \"{input}\" --out image.png\n```"
                ))
            }
            AppTab::Retouch => {
                let Some((path, instruction)) = input.split_once('|') else {
                    bail!("expected: image path | edit instruction");
                };
                let path = path.trim();
                let instruction = instruction.trim();
                let source = file_to_data_uri(std::path::Path::new(path))?;
                let edited = self.gateway.edit_image(&source, instruction)?;
                let kb = edited.len() / 1024;
                self.record(ActivityKind::ImageEdit, instruction, edited);
                Ok(format!(
                    "## Edit applied\n\nRetouched **{path}** ({kb} KB result):\n\n> {instruction}\n\n\
                     Stored in history."
                ))
            }
            AppTab::Research => {
                let (query, mode) = match input.strip_prefix("product:") {
                    Some(rest) => (rest.trim(), ResearchMode::Product),
                    None => (input, ResearchMode::Trend),
                };
                let findings = self.gateway.research(query, mode)?;
                self.record(ActivityKind::MarketResearch, query, findings.text.clone());
                let mut output = findings.text;
                if !findings.sources.is_empty() {
                    output.push_str("\n\n### Sources\n");
                    for source in &findings.sources {
                        output.push_str(&format!("- **{}** {}\n", source.title, source.uri));
                    }
                }
                Ok(output)
            }
            AppTab::Strategy => {
                let plan = self.gateway.draft_strategy(input)?;
                self.record(ActivityKind::Strategy, input, plan.clone());
                Ok(plan)
            }
            AppTab::Copy => {
                let copy = self.gateway.quick_copy(input)?;
                self.record(ActivityKind::QuickCopy, input, copy.clone());
                Ok(copy)
            }
            AppTab::Assistant => {
                let reply = self.gateway.chat(&self.chat_turns, input)?;
                self.chat_turns.push(ChatTurn::user(input));
                self.chat_turns.push(ChatTurn::model(reply));
                Ok(self.transcript())
            }
            AppTab::History => unreachable!("history tab has no submit"),
        }
    }

    fn record(&mut self, kind: ActivityKind, prompt: &str, result: String) {
        self.store.append(ActivityDraft::from_prompt(kind, prompt, result));
        self.refresh_records();
    }

    fn refresh_records(&mut self) {
        self.records = self.store.list();
        if self.selected_idx >= self.records.len() {
            self.selected_idx = self.records.len().saturating_sub(1);
        }
        self.needs_redraw = true;
    }

    fn transcript(&self) -> String {
        let mut text = String::new();
        for turn in &self.chat_turns {
            match turn.role {
                crate::models::ChatRole::User => {
                    text.push_str(&format!("> **You:** {}\n\n", turn.text));
                }
                crate::models::ChatRole::Model => {
                    text.push_str(&turn.text);
                    text.push_str("\n\n");
                }
            }
        }
        text
    }

    fn copy_result(&mut self) {
        let result = self.copyable_text();
        match result {
            Ok(text) => match copy_to_clipboard(&text) {
                Ok(()) => self.set_status(
                    "✓ Copied to clipboard",
                    MessageType::Success,
                    STATUS_SUCCESS_DURATION_MS,
                ),
                Err(e) => self.set_status(
                    format!("✗ Clipboard error: {e}"),
                    MessageType::Error,
                    STATUS_ERROR_DURATION_MS,
                ),
            },
            Err(message) => {
                self.set_status(message, MessageType::Error, STATUS_ERROR_DURATION_MS)
            }
        }
    }

    fn copyable_text(&self) -> Result<String, &'static str> {
        if self.active_tab == AppTab::History {
            self.records
                .get(self.selected_idx)
                .map(|r| r.result.clone())
                .ok_or("✗ No entry to copy")
        } else {
            self.views[self.active_tab.index()]
                .output
                .clone()
                .ok_or("✗ Nothing to copy yet")
        }
    }

    fn delete_entry(&mut self) {
        if self.active_tab != AppTab::History {
            return;
        }
        let Some(record) = self.records.get(self.selected_idx) else {
            return;
        };
        let id = record.id.clone();
        self.store.remove(&id);
        self.refresh_records();
        self.set_status("✓ Entry deleted", MessageType::Success, STATUS_SUCCESS_DURATION_MS);
    }

    fn clear_history(&mut self) {
        if self.active_tab != AppTab::History {
            return;
        }
        self.store.clear();
        self.refresh_records();
        self.set_status("✓ History cleared", MessageType::Success, STATUS_SUCCESS_DURATION_MS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryBackend;
    use crate::models::ResearchFindings;

    /// Gateway stub that answers every capability with canned text
    struct ScriptedGateway {
        fail: bool,
    }

    impl ScriptedGateway {
        fn ok() -> Self {
            Self { fail: false }
        }

        fn failing() -> Self {
            Self { fail: true }
        }

        fn guard(&self) -> Result<()> {
            if self.fail {
                bail!("service unavailable");
            }
            Ok(())
        }
    }

    impl AiGateway for ScriptedGateway {
        fn generate_image(&self, _prompt: &str, _aspect_ratio: AspectRatio) -> Result<String> {
            self.guard()?;
            Ok("data:image/png;base64,QUJD".to_string())
        }

        fn edit_image(&self, _image: &str, _instruction: &str) -> Result<String> {
            self.guard()?;
            Ok("data:image/png;base64,REVG".to_string())
        }

        fn research(&self, query: &str, _mode: ResearchMode) -> Result<ResearchFindings> {
            self.guard()?;
            Ok(ResearchFindings { text: format!("report on {query}"), sources: Vec::new() })
        }

        fn draft_strategy(&self, brief: &str) -> Result<String> {
            self.guard()?;
            Ok(format!("strategy for {brief}"))
        }

        fn quick_copy(&self, topic: &str) -> Result<String> {
            self.guard()?;
            Ok(format!("copy for {topic}"))
        }

        fn chat(&self, _turns: &[ChatTurn], message: &str) -> Result<String> {
            self.guard()?;
            Ok(format!("reply to {message}"))
        }
    }

    fn test_app(gateway: ScriptedGateway) -> App<ScriptedGateway, MemoryBackend> {
        App::new(gateway, HistoryStore::new(MemoryBackend::new()))
    }

    fn type_input(app: &mut App<ScriptedGateway, MemoryBackend>, text: &str) {
        for c in text.chars() {
            app.handle_action(Action::InputChar(c));
        }
    }

    #[test]
    fn test_new_initializes_state() {
        let app = test_app(ScriptedGateway::ok());
        assert_eq!(app.active_tab, AppTab::Studio);
        assert!(app.records.is_empty());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_tab_cycling_wraps() {
        let mut app = test_app(ScriptedGateway::ok());
        for _ in 0..TAB_COUNT {
            app.handle_action(Action::NextTab);
        }
        assert_eq!(app.active_tab, AppTab::Studio);

        app.handle_action(Action::PrevTab);
        assert_eq!(app.active_tab, AppTab::History);
    }

    #[test]
    fn test_submit_records_history_and_sets_output() {
        let mut app = test_app(ScriptedGateway::ok());
        app.switch_tab(AppTab::Copy);
        type_input(&mut app, "velvet loafers");
        app.handle_action(Action::Submit);

        assert_eq!(
            app.views[AppTab::Copy.index()].output.as_deref(),
            Some("copy for velvet loafers")
        );
        assert!(app.inputs[AppTab::Copy.index()].is_empty());
        assert_eq!(app.records.len(), 1);
        assert_eq!(app.records[0].kind, ActivityKind::QuickCopy);
        assert_eq!(app.records[0].details, "velvet loafers");
    }

    #[test]
    fn test_submit_empty_input_sets_error() {
        let mut app = test_app(ScriptedGateway::ok());
        app.switch_tab(AppTab::Strategy);
        app.handle_action(Action::Submit);

        let status = app.status_message.as_ref().expect("status set");
        assert_eq!(status.message_type, MessageType::Error);
        assert!(app.records.is_empty());
    }

    #[test]
    fn test_failed_gateway_call_records_nothing() {
        let mut app = test_app(ScriptedGateway::failing());
        app.switch_tab(AppTab::Copy);
        type_input(&mut app, "anything");
        app.handle_action(Action::Submit);

        let status = app.status_message.as_ref().expect("status set");
        assert_eq!(status.message_type, MessageType::Error);
        assert!(status.text.contains("service unavailable"));
        assert!(app.records.is_empty());
        assert!(app.views[AppTab::Copy.index()].output.is_none());
        // Input is kept so the user can retry
        assert_eq!(app.inputs[AppTab::Copy.index()], "anything");
    }

    #[test]
    fn test_research_product_prefix_switches_mode() {
        let mut app = test_app(ScriptedGateway::ok());
        app.switch_tab(AppTab::Research);
        type_input(&mut app, "product: chelsea boots");
        app.handle_action(Action::Submit);

        assert_eq!(app.records[0].details, "chelsea boots");
        assert_eq!(app.records[0].kind, ActivityKind::MarketResearch);
    }

    #[test]
    fn test_assistant_chat_keeps_turns_and_skips_history() {
        let mut app = test_app(ScriptedGateway::ok());
        app.switch_tab(AppTab::Assistant);
        type_input(&mut app, "hello");
        app.handle_action(Action::Submit);

        assert_eq!(app.chat_turns.len(), 2);
        assert!(app.records.is_empty());
        let output = app.views[AppTab::Assistant.index()].output.as_deref().unwrap();
        assert!(output.contains("**You:** hello"));
        assert!(output.contains("reply to hello"));
    }

    #[test]
    fn test_image_generation_stores_data_uri() {
        let mut app = test_app(ScriptedGateway::ok());
        type_input(&mut app, "red boots");
        app.handle_action(Action::Submit);

        assert_eq!(app.records[0].kind, ActivityKind::ImageGen);
        assert_eq!(app.records[0].result, "data:image/png;base64,QUJD");
        let output = app.views[AppTab::Studio.index()].output.as_deref().unwrap();
        assert!(output.contains("Image ready"));
    }

    #[test]
    fn test_retouch_requires_pipe_separator() {
        let mut app = test_app(ScriptedGateway::ok());
        app.switch_tab(AppTab::Retouch);
        type_input(&mut app, "no separator here");
        app.handle_action(Action::Submit);

        let status = app.status_message.as_ref().expect("status set");
        assert_eq!(status.message_type, MessageType::Error);
        assert!(app.records.is_empty());
    }

    #[test]
    fn test_delete_entry_removes_selected() {
        let mut app = test_app(ScriptedGateway::ok());
        app.switch_tab(AppTab::Copy);
        type_input(&mut app, "first");
        app.handle_action(Action::Submit);
        type_input(&mut app, "second");
        app.handle_action(Action::Submit);
        assert_eq!(app.records.len(), 2);

        app.switch_tab(AppTab::History);
        app.handle_action(Action::DeleteEntry); // Newest first: deletes "second"
        assert_eq!(app.records.len(), 1);
        assert_eq!(app.records[0].details, "first");
    }

    #[test]
    fn test_clear_history_only_applies_on_history_tab() {
        let mut app = test_app(ScriptedGateway::ok());
        app.switch_tab(AppTab::Copy);
        type_input(&mut app, "keep me");
        app.handle_action(Action::Submit);

        app.handle_action(Action::ClearHistory); // Still on Copy tab
        assert_eq!(app.records.len(), 1);

        app.switch_tab(AppTab::History);
        app.handle_action(Action::ClearHistory);
        assert!(app.records.is_empty());
    }

    #[test]
    fn test_history_selection_bounds() {
        let mut app = test_app(ScriptedGateway::ok());
        app.switch_tab(AppTab::Copy);
        for topic in ["a", "b", "c"] {
            type_input(&mut app, topic);
            app.handle_action(Action::Submit);
        }

        app.switch_tab(AppTab::History);
        app.handle_action(Action::MoveUp);
        assert_eq!(app.selected_idx, 0);

        for _ in 0..10 {
            app.handle_action(Action::MoveDown);
        }
        assert_eq!(app.selected_idx, 2);
    }

    #[test]
    fn test_input_editing_per_tab() {
        let mut app = test_app(ScriptedGateway::ok());
        type_input(&mut app, "studio prompt");
        app.switch_tab(AppTab::Copy);
        type_input(&mut app, "copy topic");

        assert_eq!(app.inputs[AppTab::Studio.index()], "studio prompt");
        assert_eq!(app.inputs[AppTab::Copy.index()], "copy topic");

        app.handle_action(Action::DeleteChar);
        assert_eq!(app.inputs[AppTab::Copy.index()], "copy topi");

        app.handle_action(Action::ClearInput);
        assert!(app.inputs[AppTab::Copy.index()].is_empty());
        assert_eq!(app.inputs[AppTab::Studio.index()], "studio prompt");
    }
}

use serde::{Deserialize, Serialize};

/// Which AI capability produced an activity record.
///
/// Serialized in SCREAMING_SNAKE_CASE so stored blobs read as
/// `"type": "IMAGE_GEN"` etc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityKind {
    ImageGen,
    ImageEdit,
    MarketResearch,
    Strategy,
    QuickCopy,
}

impl ActivityKind {
    /// Human label for list views and CLI output
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::ImageGen => "Image",
            ActivityKind::ImageEdit => "Retouch",
            ActivityKind::MarketResearch => "Research",
            ActivityKind::Strategy => "Strategy",
            ActivityKind::QuickCopy => "Copy",
        }
    }

    /// True for kinds whose `result` field holds an image data URI
    /// rather than display text
    pub fn is_image(&self) -> bool {
        matches!(self, ActivityKind::ImageGen | ActivityKind::ImageEdit)
    }
}

/// One completed AI action, as persisted in the activity log.
///
/// Records are immutable once stored; the only mutations the store
/// performs are deletion and truncation of the oldest entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub title: String,
    /// The user's original prompt
    pub details: String,
    /// Textual result, or a data URI for image kinds
    pub result: String,
    /// Creation time in epoch milliseconds
    pub timestamp: i64,
}

/// Input to `HistoryStore::append` - everything except the fields the
/// store generates (`id`, `timestamp`)
#[derive(Debug, Clone)]
pub struct ActivityDraft {
    pub kind: ActivityKind,
    pub title: String,
    pub details: String,
    pub result: String,
}

impl ActivityDraft {
    /// Build a draft whose title is a summarized form of the prompt
    pub fn from_prompt(kind: ActivityKind, prompt: &str, result: String) -> Self {
        Self {
            kind,
            title: summarize_title(prompt),
            details: prompt.to_string(),
            result,
        }
    }
}

/// Shorten a prompt into a one-line title for list views
pub fn summarize_title(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or("").trim();
    let mut title: String = first_line.chars().take(60).collect();
    if first_line.chars().count() > 60 {
        title.push('…');
    }
    title
}

use crate::model::Entry;

pub mod add;
pub mod list;
pub mod open;
pub mod resolve;
pub mod save;
pub mod search;
pub mod stats;

pub use resolve::DuplicateAction;
pub use search::SearchField;
pub use stats::{Statistics, Summary};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_entries: Vec<Entry>,
    pub listed_entries: Vec<Entry>,
    /// Set by `add` when the new entry matches an existing one; holds its position.
    pub duplicate_of: Option<usize>,
    pub statistics: Option<Statistics>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_entries(mut self, entries: Vec<Entry>) -> Self {
        self.affected_entries = entries;
        self
    }

    pub fn with_listed_entries(mut self, entries: Vec<Entry>) -> Self {
        self.listed_entries = entries;
        self
    }

    pub fn with_duplicate_of(mut self, index: usize) -> Self {
        self.duplicate_of = Some(index);
        self
    }

    pub fn with_statistics(mut self, statistics: Statistics) -> Self {
        self.statistics = Some(statistics);
        self
    }
}

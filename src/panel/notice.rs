//! Panel notices — the error slot, generalized to a small bounded list.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Most recent notices, oldest evicted first.
///
/// With a capacity of 1 this is the single overwritable error slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notices {
    capacity: usize,
    entries: VecDeque<Notice>,
}

impl Notices {
    /// A zero capacity is treated as 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a notice, evicting the oldest success before any error.
    ///
    /// A success never displaces an error: when the list holds only errors
    /// the success is dropped. Errors leave only through [`clear_errors`]
    /// or by being pushed out by newer errors.
    ///
    /// [`clear_errors`]: Self::clear_errors
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) {
        while self.entries.len() >= self.capacity {
            match self
                .entries
                .iter()
                .position(|n| n.level == NoticeLevel::Success)
            {
                Some(i) => {
                    self.entries.remove(i);
                }
                None if level == NoticeLevel::Success => return,
                None => {
                    self.entries.pop_front();
                }
            }
        }
        self.entries.push_back(Notice {
            level,
            message: message.into(),
        });
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Error, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Success, message);
    }

    /// The current error message, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|n| n.level == NoticeLevel::Error)
            .map(|n| n.message.as_str())
    }

    pub fn clear_errors(&mut self) {
        self.entries.retain(|n| n.level != NoticeLevel::Error);
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for Notices {
    fn default() -> Self {
        Self::new(1)
    }
}

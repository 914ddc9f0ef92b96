//! Notice types
//!
//! User-visible messages shown in the notice banner.

/// Tone of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeTone {
    /// Something worked
    Success,
    /// Something was rejected or failed
    Error,
}

/// A message to show the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub tone: NoticeTone,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            tone: NoticeTone::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            tone: NoticeTone::Error,
            message: message.into(),
        }
    }
}

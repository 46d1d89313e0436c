//! Display text for mail-fetch outcomes.
//!
//! The mail collaborator reports `(subject, sender, error)` through its
//! completion callback; nothing else of it is visible here. This module
//! folds that result into the single string handed to the text region, so
//! the firmware's callback body stays one line.

use alloc::format;
use alloc::string::String;

/// Shown when the mailbox has no unread message left.
pub const IDLE_TEXT: &str = "Sorry, all the messages have been consumed.";

/// Failure reported by the mail collaborator.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FetchError {
    NoNetwork,
    ConnectionFailed,
    FolderNotFound,
    NoMessage,
    FlagSetFailed,
    ConnectionInProgress,
}

impl FetchError {
    /// The status text shown in place of a message.
    pub const fn text(self) -> &'static str {
        match self {
            Self::NoNetwork => "WiFi not connected",
            Self::ConnectionFailed => "IMAP not connected",
            Self::FolderNotFound => "Folder not found",
            Self::NoMessage => IDLE_TEXT,
            Self::FlagSetFailed => "Could not mark the message as read",
            Self::ConnectionInProgress => "Previous fetch still in progress",
        }
    }
}

/// Fold a fetch result into the string shown on the panel.
///
/// A successful fetch shows the sender ahead of the subject; an empty
/// sender shows the subject alone. Any error replaces both with its
/// status text.
pub fn fetch_text(subject: &str, sender: &str, error: Option<FetchError>) -> String {
    match error {
        Some(error) => String::from(error.text()),
        None if sender.is_empty() => String::from(subject),
        None => format!("{sender}: {subject}"),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

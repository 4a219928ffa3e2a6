//! Text and class helpers the components render from board state.

use eterna_core::{BoardState, PoemRecord, StatusMessage};

/// Shown when the board has no poems.
pub const EMPTY_BOARD: &str = "No verses yet... be the first to whisper.";

/// Placeholder for the composer.
pub const DRAFT_PLACEHOLDER: &str = "Write your soul's whisper here...";

/// CSS class for the status line.
pub fn status_class(status: &StatusMessage) -> &'static str {
    match status {
        StatusMessage::Writing => "status status-pending",
        StatusMessage::Written => "status status-ok",
        _ => "status status-error",
    }
}

/// Attribution line under a poem.
pub fn byline(record: &PoemRecord) -> String {
    format!("by {} on {}", record.sender, record.timestamp)
}

/// Poem text as displayed, in quotes.
pub fn quoted(record: &PoemRecord) -> String {
    format!("\u{201c}{}\u{201d}", record.poem)
}

/// Label for the submit button.
pub fn submit_label(state: &BoardState) -> &'static str {
    if state.submitting {
        "✍️ Writing..."
    } else {
        "📜 Submit Poem"
    }
}

/// Label for the connect button.
pub fn connect_label(connecting: bool) -> &'static str {
    if connecting {
        "⏳ Connecting..."
    } else {
        "🔑 Connect Wallet"
    }
}

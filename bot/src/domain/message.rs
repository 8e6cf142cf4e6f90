//! Inbound chat message filtering.

/// Messages older than this, by their own timestamp, are ignored.
pub const MAX_MESSAGE_AGE_SECS: i64 = 30;

/// Extract the command text from a chat message.
///
/// The command is everything after the first `/`, trimmed. Returns `None`
/// when there is no `/` or nothing follows it.
#[must_use]
pub fn extract_command(text: &str) -> Option<&str> {
    let (_, rest) = text.split_once('/')?;
    let rest = rest.trim();
    (!rest.is_empty()).then_some(rest)
}

/// `true` when a message sent at `sent_at` (unix seconds) was missed for
/// longer than [`MAX_MESSAGE_AGE_SECS`] by `now`.
#[must_use]
pub fn is_stale(sent_at: i64, now: i64) -> bool {
    now.saturating_sub(sent_at) > MAX_MESSAGE_AGE_SECS
}

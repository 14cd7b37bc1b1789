//! Text exports for a displayed quote: clipboard text and share links.

use crate::Quote;

pub const SHARE_INTENT_URL: &str = "https://twitter.com/intent/tweet";

/// Longest quote text embedded in a share link, ellipsis included.
pub const MAX_SHARE_TEXT_CHARS: usize = 240;

const ELLIPSIS: &str = "...";

/// `"<text>" - <author> [Tags: t1, t2]`, tags suffix omitted when empty.
pub fn clipboard_text(quote: &Quote) -> String {
    let mut text = format!("\"{}\" - {}", quote.text(), quote.author());
    if !quote.tags().is_empty() {
        text.push_str(" [Tags: ");
        text.push_str(&quote.tags().join(", "));
        text.push(']');
    }
    text
}

/// Truncates to [`MAX_SHARE_TEXT_CHARS`] characters, ending in `...` when cut.
pub fn truncate_for_share(text: &str) -> String {
    if text.chars().count() <= MAX_SHARE_TEXT_CHARS {
        return text.to_owned();
    }

    let keep = MAX_SHARE_TEXT_CHARS - ELLIPSIS.len();
    let mut truncated = text.chars().take(keep).collect::<String>();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Share-intent URL carrying the percent-encoded `"<text>" - <author>`.
pub fn share_url(quote: &Quote) -> String {
    let message = format!(
        "\"{}\" - {}",
        truncate_for_share(quote.text()),
        quote.author()
    );
    format!("{SHARE_INTENT_URL}?text={}", urlencoding::encode(&message))
}

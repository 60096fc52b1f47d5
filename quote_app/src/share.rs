//! Share payload formatting and clipboard access.
use arboard::Clipboard;
use log::{error, info};
use quote_provider::Quote;

/// Attribution line appended to every shared quote.
const ATTRIBUTION: &str = "Shared from Daily Quotes";

/// Formats the outbound share payload for `quote`.
pub fn share_text(quote: &Quote) -> String {
    format!("\"{}\"\n\n- {}\n\n{}", quote.text, quote.author, ATTRIBUTION)
}

/// Places the share payload on the system clipboard.
///
/// Clipboard problems are logged and otherwise ignored; copying must never
/// take the application down.
pub fn copy_to_clipboard(quote: &Quote) {
    match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(share_text(quote))) {
        Ok(()) => info!("Quote copied to clipboard"),
        Err(e) => error!("Could not copy quote to clipboard: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_payload_has_the_expected_shape() {
        let quote = Quote {
            text: String::from("Hi"),
            author: String::from("Bob"),
        };
        assert_eq!(
            share_text(&quote),
            "\"Hi\"\n\n- Bob\n\nShared from Daily Quotes"
        );
    }
}

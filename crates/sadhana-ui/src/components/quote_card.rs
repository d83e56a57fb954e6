//! Bilingual quote card.

use dioxus::prelude::*;
use sadhana_core::Quote;

/// Wraps a line in curly quotes for display
pub fn quoted(text: &str) -> String {
    format!("\u{201C}{}\u{201D}", text)
}

/// English line on top, Hindi rendering beneath.
#[component]
pub fn QuoteCard(quote: Quote) -> Element {
    let english = quoted(&quote.english);
    let hindi = quoted(&quote.hindi);

    rsx! {
        div { class: "quote-card",
            p { class: "quote-english", "{english}" }
            p { class: "quote-hindi", "{hindi}" }
        }
    }
}

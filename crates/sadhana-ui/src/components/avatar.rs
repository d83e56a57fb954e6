//! Avatar glyph in a rounded card.

use dioxus::prelude::*;

#[component]
pub fn AvatarGlyph(
    /// Emoji or short glyph; callers resolve the fallback
    glyph: String,
) -> Element {
    rsx! {
        div { class: "avatar-card",
            span { class: "avatar-glyph", "{glyph}" }
        }
    }
}

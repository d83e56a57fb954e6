//! Reusable UI components.

mod avatar;
mod button;
mod quote_card;
mod welcome_popup;

pub use avatar::*;
pub use button::*;
pub use quote_card::*;
pub use welcome_popup::*;

//! Open/close state of the welcome popup.
//!
//! Kept free of any UI framework so the quote refresh rule can be tested
//! directly: every closed -> open transition pulls a new quote.

use crate::quotes::{Quote, QuoteSource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupState {
    open: bool,
    quote: Quote,
}

impl PopupState {
    /// Closed popup holding an initial quote from `quotes`
    pub fn new(quotes: &dyn QuoteSource) -> Self {
        Self {
            open: false,
            quote: quotes.random_quote(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn quote(&self) -> &Quote {
        &self.quote
    }

    /// Set visibility. Returns `true` when this call opened a closed popup,
    /// in which case the quote was replaced.
    pub fn set_open(&mut self, open: bool, quotes: &dyn QuoteSource) -> bool {
        let opened = open && !self.open;
        self.open = open;
        if opened {
            self.quote = quotes.random_quote();
        }
        opened
    }

    /// Close action. Touches nothing but visibility.
    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotes::CyclingQuotes;

    fn numbered() -> CyclingQuotes {
        CyclingQuotes::new((0..5).map(|i| Quote::new(format!("q{}", i), format!("h{}", i))).collect())
    }

    #[test]
    fn test_starts_closed_with_initial_quote() {
        let quotes = numbered();
        let state = PopupState::new(&quotes);
        assert!(!state.is_open());
        assert_eq!(state.quote().english, "q0");
    }

    #[test]
    fn test_each_open_refreshes_quote() {
        let quotes = numbered();
        let mut state = PopupState::new(&quotes);

        assert!(state.set_open(true, &quotes));
        assert_eq!(state.quote().english, "q1");

        state.close();
        assert!(state.set_open(true, &quotes));
        assert_eq!(state.quote().english, "q2");
        assert_eq!(quotes.calls(), 3);
    }

    #[test]
    fn test_reopening_while_open_keeps_quote() {
        let quotes = numbered();
        let mut state = PopupState::new(&quotes);
        state.set_open(true, &quotes);

        assert!(!state.set_open(true, &quotes));
        assert_eq!(state.quote().english, "q1");
    }

    #[test]
    fn test_close_keeps_quote() {
        let quotes = numbered();
        let mut state = PopupState::new(&quotes);
        state.set_open(true, &quotes);
        state.close();

        assert!(!state.is_open());
        assert_eq!(state.quote().english, "q1");
        assert!(!state.set_open(false, &quotes));
    }
}

//! Bilingual quotes shown inside the welcome popup.

use std::sync::atomic::{AtomicUsize, Ordering};

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One message in two renderings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub english: String,
    pub hindi: String,
}

impl Quote {
    pub fn new(english: impl Into<String>, hindi: impl Into<String>) -> Self {
        Self {
            english: english.into(),
            hindi: hindi.into(),
        }
    }

    /// Quote used when a source has nothing to offer
    pub fn fallback() -> Self {
        Self::new(
            "The soul is neither born, and nor does it die.",
            "आत्मा न कभी जन्म लेती है, न कभी मरती है।",
        )
    }
}

/// Supplies a quote on demand. Must always succeed.
pub trait QuoteSource: Send + Sync {
    fn random_quote(&self) -> Quote;
}

const BUILTIN_QUOTES: &[(&str, &str)] = &[
    (
        "You have the right to work, but never to the fruit of work.",
        "कर्म करने में ही तुम्हारा अधिकार है, फल में कभी नहीं।",
    ),
    (
        "The mind is restless, but it can be controlled by practice and detachment.",
        "मन चंचल है, परन्तु अभ्यास और वैराग्य से वश में होता है।",
    ),
    (
        "Truth alone triumphs.",
        "सत्यमेव जयते।",
    ),
    (
        "The world is one family.",
        "वसुधैव कुटुम्बकम्।",
    ),
    (
        "Lead me from darkness to light.",
        "तमसो मा ज्योतिर्गमय।",
    ),
    (
        "Yoga is the stilling of the fluctuations of the mind.",
        "योगश्चित्तवृत्तिनिरोधः।",
    ),
];

/// Random pick from a fixed list (built-in by default).
#[derive(Debug, Clone)]
pub struct DefaultQuotes {
    quotes: Vec<Quote>,
}

impl Default for DefaultQuotes {
    fn default() -> Self {
        Self {
            quotes: BUILTIN_QUOTES
                .iter()
                .map(|(english, hindi)| Quote::new(*english, *hindi))
                .collect(),
        }
    }
}

impl DefaultQuotes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom list. An empty list yields [`Quote::fallback`].
    pub fn with_quotes(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }
}

impl QuoteSource for DefaultQuotes {
    fn random_quote(&self) -> Quote {
        if self.quotes.is_empty() {
            return Quote::fallback();
        }
        let idx = rand::rng().random_range(0..self.quotes.len());
        self.quotes[idx].clone()
    }
}

/// Round-robin over a list, starting at the first entry.
#[derive(Debug)]
pub struct CyclingQuotes {
    quotes: Vec<Quote>,
    cursor: AtomicUsize,
}

impl CyclingQuotes {
    pub fn new(quotes: Vec<Quote>) -> Self {
        Self {
            quotes,
            cursor: AtomicUsize::new(0),
        }
    }

    /// How many quotes have been handed out so far
    pub fn calls(&self) -> usize {
        self.cursor.load(Ordering::Relaxed)
    }
}

impl QuoteSource for CyclingQuotes {
    fn random_quote(&self) -> Quote {
        if self.quotes.is_empty() {
            return Quote::fallback();
        }
        let n = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.quotes[n % self.quotes.len()].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_quotes_come_from_builtin_list() {
        let source = DefaultQuotes::new();
        assert!(!source.quotes().is_empty());
        for _ in 0..20 {
            let q = source.random_quote();
            assert!(source.quotes().contains(&q));
        }
    }

    #[test]
    fn test_empty_source_falls_back() {
        assert_eq!(DefaultQuotes::with_quotes(vec![]).random_quote(), Quote::fallback());
        assert_eq!(CyclingQuotes::new(vec![]).random_quote(), Quote::fallback());
    }

    #[test]
    fn test_cycling_quotes_wrap() {
        let source = CyclingQuotes::new(vec![Quote::new("a", "अ"), Quote::new("b", "ब")]);
        assert_eq!(source.random_quote().english, "a");
        assert_eq!(source.random_quote().english, "b");
        assert_eq!(source.random_quote().english, "a");
        assert_eq!(source.calls(), 3);
    }

    #[test]
    fn test_quote_json_shape() {
        let json = serde_json::to_value(Quote::new("x", "y")).unwrap();
        assert_eq!(json, serde_json::json!({ "english": "x", "hindi": "y" }));
    }
}

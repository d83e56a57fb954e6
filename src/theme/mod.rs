//! Visual theme for Sadhana.

mod styles;

pub use styles::GLOBAL_STYLES;

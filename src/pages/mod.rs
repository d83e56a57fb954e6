//! Page components for Sadhana.

mod home;

pub use home::Home;

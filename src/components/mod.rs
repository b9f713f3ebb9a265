//! UI Components
//!
//! Reusable Leptos components for the panels.

pub mod chart;
pub mod feedback;
pub mod loading;
pub mod map;
pub mod nav;

pub use chart::SentimentChart;
pub use feedback::{ErrorText, SuccessText};
pub use loading::{InlineLoading, Loading};
pub use map::MapView;
pub use nav::Nav;

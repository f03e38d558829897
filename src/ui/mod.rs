//! Client-side orchestration: the page view model and the gestures that drive it

pub mod controller;
pub mod debounce;
pub mod page;
pub mod tilt;

pub use controller::{Controller, Enrichment};
pub use page::Page;

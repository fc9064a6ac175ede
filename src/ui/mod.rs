//! Terminal host: plays the host page and presentation layer for the carousel.

pub mod app;
pub mod events;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod strip;
pub mod terminal_guard;
pub mod theme;

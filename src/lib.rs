//! Looping awards carousel: a small state machine for slide position,
//! transition locking, autoplay, swipe gestures and visibility-aware pausing,
//! plus a terminal host that drives and draws it.

pub mod carousel;
pub mod cli;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod presenter;
pub mod scheduler;
pub mod ui;

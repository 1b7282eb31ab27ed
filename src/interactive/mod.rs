//! Full-screen terminal game
//!
//! `app` holds the front-end state around a [`crate::game::Session`];
//! `rendering` draws it with ratatui.

mod app;
mod rendering;

pub use app::{Alert, App, MessageStyle, run_tui};

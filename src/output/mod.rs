//! Terminal output formatting
//!
//! Message selection and pretty-printing for the line-based front end.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_game_over, print_keyboard, print_statistics};
pub use formatters::{category_message, rejection_message, row_to_emoji};

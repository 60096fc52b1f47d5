//! Client-side data model.
//!
//! - `command` — commands typed by the user on stdin.
pub mod command;

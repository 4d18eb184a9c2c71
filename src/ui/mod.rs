//! UI utilities for terminal interaction
//!
//! This module provides the interactive list selector used when a command
//! needs a context name and none was given on the command line.

mod selector;

pub use selector::{run_selector, Selection};

//! Subprocess environment injection and launching

mod env;
mod launcher;

pub use env::{inject_credentials, injected_process_env};
pub use launcher::{find_executable, run_with_context};

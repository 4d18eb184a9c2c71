//! Context management module
//!
//! Provides named contexts that bundle Claude API connection credentials
//! (base URL, auth token, optional model hints) loaded from a TOML file.

mod models;
mod resolve;
mod store;

pub use models::{Context, ContextConfig};
pub use resolve::resolve_env_indirection;
pub use store::ContextStore;

// Module declarations
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod profile;
pub mod session;

// Re-export commonly used items
pub use cli_context::{CliContext, CliContextBuilder};
pub use client::ApiClient;
pub use config::{load_config, save_config, Config};
pub use error::{TaskHubError, TaskHubResult};
pub use models::*;
pub use session::Session;

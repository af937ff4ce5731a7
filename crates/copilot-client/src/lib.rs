//! Client for the copilot message listing and report lookup sources.

mod client;
mod error;
mod types;

pub use client::CopilotClient;
pub use error::CopilotError;
pub use types::*;

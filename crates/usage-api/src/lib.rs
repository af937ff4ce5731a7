//! Usage API - per-message credit usage for the current billing period.
//!
//! Messages are listed from the copilot message source. Each message linked
//! to a report is charged that report's cost; everything else is charged by
//! the credit scoring formula over the message text.

pub mod api;
pub mod config;
pub mod error;
pub mod usage;

pub use config::Config;
pub use error::UsageError;
pub use usage::{Credits, UsageAggregator, UsageItem, UsageSource};

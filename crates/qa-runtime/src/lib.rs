//! # Knowledge Base Runtime Library
//!
//! Exposes the runtime pieces for testing. The entry point is the
//! `main.rs` binary.
//!
//! - `config` - environment-driven `RuntimeConfig`
//! - `scenarios` - reference walkthrough and concurrent comment burst

pub mod config;
pub mod scenarios;

pub use config::{load_config, load_config_from, log_level_from_env, RuntimeConfig};
pub use scenarios::{run_comment_burst, run_reference_scenario, ScenarioError, ScenarioReport};

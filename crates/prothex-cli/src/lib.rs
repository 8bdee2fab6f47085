//! prothex-cli
//!
//! Command-line front end: configuration, AWS setup, a JSON file store
//! implementing the core source traits, and the subcommand handlers.

pub mod aws;
pub mod commands;
pub mod config;
pub mod store;

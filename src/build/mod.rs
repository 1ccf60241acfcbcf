//! Scene builder state machine and its configuration.

pub mod builder;
pub mod config;

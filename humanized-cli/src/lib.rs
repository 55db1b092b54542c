//! Humanized Command Line Library
//!
//! This library exposes the binary's internal modules for integration testing.

pub mod args;
pub mod config;
pub mod constants;
pub mod instant;
pub mod report;

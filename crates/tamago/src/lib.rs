//! Headless driver support for Tamago
//!
//! The binary wires these together: layered configuration in, a plain-text
//! run summary out.

pub mod config;
pub mod report;

pub use config::TamagoConfig;
pub use report::RunSummary;

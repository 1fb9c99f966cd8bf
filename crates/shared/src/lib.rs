//! Shared types, errors, and configuration for Tally.
//!
//! This crate provides common types used across all other crates:
//! - Currency descriptors and display templates
//! - The numeric input union accepted by money constructors
//! - The money error taxonomy
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{CurrencyConfig, LoggingConfig, RegistryConfig, TallyConfig};
pub use error::{MoneyError, MoneyResult};

pub mod aggregator;
pub mod audit;
pub mod brand;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod patterns;
pub mod scanner;

pub use error::{AuditError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_TOKENS_FOUND: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 1;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

//! Password composition.

pub mod charset;
mod generate;

pub use generate::{Config, ConfigError, Generator};

//! Configuration management for sheetplate
//!
//! Settings come from an optional `sheetplate.{json,yaml,yml}` file and are
//! overridden by command-line flags.

pub mod loader;

#[cfg(test)]
mod tests;

pub use loader::Config;

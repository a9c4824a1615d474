//! Error types for the scanner and its driver.
//!
//! - `Error` for the fail-fast scanning mode, with position and the tokens
//!   scanned before the failure
//! - `DriverError` for reading the input and writing the listing

pub mod errors;

#[cfg(test)]
mod tests;

//! Command implementations.
//!
//! - `check`: run the configured rules and collect issues
//! - `init`: write a default configuration file

pub mod check;
pub mod init;

pub use check::{CheckOutcome, run_check};
pub use init::init;

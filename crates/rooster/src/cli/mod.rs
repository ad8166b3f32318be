//! # CLI Behavior
//!
//! One process, one operation:
//!
//! 1. Parse arguments (`setup`)
//! 2. Install the log subscriber on stderr
//! 3. Load configuration from the environment
//! 4. Build an empty registry and, with `--seed`, load the seed document
//! 5. Run the command and print its JSON result on stdout
//!
//! stdout carries only results, so it can be piped into `jq`. Logs and errors
//! go to stderr.
//!
//! ## Module Structure
//!
//! - `setup`: argument parsing via clap
//! - `commands`: context setup and dispatch

mod commands;
pub mod setup;

pub use commands::run;

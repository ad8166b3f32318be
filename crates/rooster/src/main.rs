//! # Rooster CLI
//!
//! The binary is deliberately thin: the CLI lives in `src/cli/`, and this file
//! only invokes `cli::run()` and turns failures into an exit status.
//!
//! ## Workspace Structure
//!
//! - `crates/roosterapp/`: the resource core, UI agnostic
//! - `crates/rooster/`: this CLI, depends on `roosterapp`
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/rooster/src/cli/)                        │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - logging, config, seeding and dispatch (commands.rs)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/roosterapp/src/api.rs)                   │
//! │  - JSON bodies in, resources or error bodies out            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every invocation starts from an empty registry. State does not survive the
//! process; `--seed` is how a run gets data to work on.
//!
//! ## Errors
//!
//! A failure reported by the core is printed to stderr as the same
//! `{"code": 400, "message": "..."}` body an HTTP client would receive. Anything
//! else (an unreadable seed file, bad configuration) is printed as plain text.
//! Both exit with status 1.

use roosterapp::api::ErrorBody;
use roosterapp::error::RoosterError;

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        match e.downcast_ref::<RoosterError>() {
            Some(err) => match serde_json::to_string(&ErrorBody::from(err)) {
                Ok(body) => eprintln!("{body}"),
                Err(_) => eprintln!("Error: {err}"),
            },
            None => eprintln!("Error: {e:#}"),
        }
        std::process::exit(1);
    }
}

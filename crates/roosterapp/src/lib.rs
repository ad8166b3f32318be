//! # Rooster Architecture
//!
//! Rooster is the **resource core** of an internet-radio alarm clock. It keeps
//! three independent collections (alarms, podcasts and internet radio
//! stations) and gives each the same four operations: create, read-all,
//! read-one and delete.
//!
//! It is a library that happens to have a CLI client; any REST server can sit on
//! top of it instead.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - JSON bodies and raw query strings in                     │
//! │  - Resources or {code, message} error bodies out            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Registry (registry.rs)                                     │
//! │  - One collection per kind, dispatch by ResourceKind        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Collection<R>: ordered, locked, id-keyed                 │
//! │  - Record impls: validate drafts, assemble records          │
//! └─────────────────────────────────────────────────────────────┘
//!          │                   │                    │
//!          ▼                   ▼                    ▼
//!   validation.rs         identity.rs         pagination.rs
//! ```
//!
//! ## Contract Highlights
//!
//! - Validation always happens before mutation; a rejected create changes nothing.
//! - Insertion order is the listing order. Nothing is ever sorted.
//! - Ranging is lenient (bad offsets give short or empty pages), identity is
//!   strict (unknown ids fail).
//! - An unknown id answers status 400 with `no item for this UUID`, not 404.
//!
//! ## Key Principle: No I/O in Core
//!
//! Nothing in this crate reads files, opens sockets or writes to stdout. It logs
//! through `tracing` and leaves installing a subscriber to the binary.
//!
//! ## Module Overview
//!
//! - [`api`]: JSON-facing facade
//! - [`registry`]: per-kind dispatch
//! - [`store`]: collections and per-kind records
//! - [`model`]: resource types, drafts and kinds
//! - [`identity`]: UUID identity and assignment
//! - [`validation`]: field checks
//! - [`pagination`]: offset/length windows
//! - [`seed`]: bulk loading from a seed document
//! - [`config`]: server-side defaults
//! - [`error`]: error types

pub mod api;
pub mod config;
pub mod error;
pub mod identity;
pub mod model;
pub mod pagination;
pub mod registry;
pub mod seed;
pub mod store;
pub mod validation;

//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types (validated, view-ready)
//! - `wire.rs` — Raw serde structs matching backend responses, where they differ
//! - `convert.rs` — `TryFrom`/`From` conversions with validation
//! - `client.rs` — Sub-client with HTTP methods, cached reads and mutations

pub mod concept;
pub mod exercise;
pub mod health;
pub mod lesson;
pub mod progress;
pub mod stats;
pub mod vocabulary;
pub mod word;
pub mod wordbook;

//! Ordered collage model
//!
//! This module contains the headless state of a collage:
//! - Entries and their identity tokens
//! - The ordered model with add, remove and move operations
//! - A lock-guarded handle for concurrent ingestion

/// Ordered entry list with bounds-checked mutations
pub mod collage;
/// Entries and identity tokens
pub mod entry;
/// Thread-safe collage handle
pub mod shared;

pub use collage::{CollageChange, CollageModel};
pub use entry::{CollageEntry, EntryId};
pub use shared::SharedCollage;

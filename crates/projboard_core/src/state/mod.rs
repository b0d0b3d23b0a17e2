//! Shared board state and change notification.
//!
//! # Responsibility
//! - Keep the canonical project list behind a single writer.
//! - Fan out snapshots to subscribed views.

pub mod project_store;
pub mod subject;

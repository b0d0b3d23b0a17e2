//! Project board domain model.
//!
//! # Responsibility
//! - Define canonical data structures shared by store, views and form.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Projects are never deleted; only their status changes.

pub mod project;

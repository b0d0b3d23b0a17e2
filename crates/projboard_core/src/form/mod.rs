//! Input forms feeding the project store.

pub mod project_input;

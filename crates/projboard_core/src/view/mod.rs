//! View layer: status lists and their rendered items.

pub mod project_item;
pub mod project_list;

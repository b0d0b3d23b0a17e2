//! Drag-and-drop transfer protocol.
//!
//! # Responsibility
//! - Model the payload carried from a draggable item to a drop target.
//! - Define the source and target roles independently of any browser.
//!
//! # Invariants
//! - The project payload is a single `text/plain` string equal to the id.
//! - A target accepts only when the first declared kind is `text/plain`.
//! - The drop-zone affordance starts and ends `Idle`.

/// Payload kind used for project ids.
pub const TEXT_PLAIN: &str = "text/plain";

/// Effects the source allows the target to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    #[default]
    None,
    Copy,
    Move,
    Link,
    All,
}

/// Data carried by one drag gesture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    entries: Vec<(String, String)>,
    pub effect_allowed: DropEffect,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` under `kind`, replacing an earlier value of that kind
    /// without changing its declared position.
    pub fn set_data(&mut self, kind: impl Into<String>, data: impl Into<String>) {
        let kind = kind.into();
        let data = data.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == kind) {
            Some(entry) => entry.1 = data,
            None => self.entries.push((kind, data)),
        }
    }

    pub fn get_data(&self, kind: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == kind)
            .map(|(_, data)| data.as_str())
    }

    /// Declared kinds in insertion order.
    pub fn types(&self) -> Vec<&str> {
        self.entries.iter().map(|(kind, _)| kind.as_str()).collect()
    }
}

/// One drag event delivered to a source or target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragEvent {
    pub data_transfer: DataTransfer,
    default_prevented: bool,
}

impl DragEvent {
    pub fn new(data_transfer: DataTransfer) -> Self {
        Self {
            data_transfer,
            default_prevented: false,
        }
    }

    /// Marks the event as accepted by a drop target.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Returns whether the first declared kind is `kind`.
    pub fn carries(&self, kind: &str) -> bool {
        self.data_transfer.types().first() == Some(&kind)
    }
}

/// Source role of a drag gesture.
pub trait Draggable {
    fn drag_start(&self, event: &mut DragEvent);
    fn drag_end(&self, event: &DragEvent);
}

/// Target role of a drag gesture.
pub trait DragTarget {
    /// Accepts the gesture by calling `prevent_default` when the payload kind
    /// is supported.
    fn drag_over(&self, event: &mut DragEvent);
    fn drop(&self, event: &DragEvent);
    fn drag_leave(&self, event: &DragEvent);
}

/// Visual affordance of a drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropZoneState {
    #[default]
    Idle,
    Highlighted,
}

impl DropZoneState {
    /// CSS-style class applied while highlighted.
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Highlighted => Some("droppable"),
        }
    }
}

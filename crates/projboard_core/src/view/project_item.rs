//! Rendered project entry and drag source.

use crate::drag::{DragEvent, Draggable, DropEffect, TEXT_PLAIN};
use crate::model::project::{Project, ProjectId};

/// One rendered entry inside a `ProjectList`.
///
/// Holds its own copy of the project taken from a store snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    project: Project,
}

impl ProjectItem {
    pub fn new(project: Project) -> Self {
        Self { project }
    }

    pub fn id(&self) -> ProjectId {
        self.project.id
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// `"1 person"` or `"{n} people"`.
    pub fn people_label(&self) -> String {
        if self.project.people == 1 {
            "1 person".to_string()
        } else {
            format!("{} people", self.project.people)
        }
    }

    pub fn assigned_label(&self) -> String {
        format!("{} assigned", self.people_label())
    }
}

impl Draggable for ProjectItem {
    fn drag_start(&self, event: &mut DragEvent) {
        event
            .data_transfer
            .set_data(TEXT_PLAIN, self.project.id.to_string());
        event.data_transfer.effect_allowed = DropEffect::Move;
    }

    fn drag_end(&self, _event: &DragEvent) {}
}

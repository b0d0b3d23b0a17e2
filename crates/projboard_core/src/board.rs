//! Composition root for one project board.
//!
//! # Responsibility
//! - Own the single `ProjectStore` instance and wire every view and form to it.
//! - Run complete drag gestures between the two lists.
//!
//! # Invariants
//! - Exactly one store per board; views and form share it through `Rc`.
//! - The active list subscribes before the finished list.

use crate::drag::{DragEvent, DragTarget, Draggable, DropEffect, TEXT_PLAIN};
use crate::form::project_input::{Alert, ProjectInput};
use crate::model::project::{ProjectId, ProjectStatus};
use crate::state::project_store::ProjectStore;
use crate::view::project_list::ProjectList;
use log::debug;
use std::rc::Rc;

/// Store, form and both status lists of one page session.
pub struct ProjectBoard {
    store: Rc<ProjectStore>,
    input: ProjectInput,
    active: ProjectList,
    finished: ProjectList,
}

impl ProjectBoard {
    pub fn new(alert: Rc<dyn Alert>) -> Self {
        let store = Rc::new(ProjectStore::new());
        let input = ProjectInput::new(Rc::clone(&store), alert);
        let active = ProjectList::new(Rc::clone(&store), ProjectStatus::Active);
        let finished = ProjectList::new(Rc::clone(&store), ProjectStatus::Finished);
        debug!("event=board_init module=board status=ok");

        Self {
            store,
            input,
            active,
            finished,
        }
    }

    pub fn store(&self) -> &Rc<ProjectStore> {
        &self.store
    }

    pub fn input_mut(&mut self) -> &mut ProjectInput {
        &mut self.input
    }

    pub fn list(&self, status: ProjectStatus) -> &ProjectList {
        match status {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }

    pub fn lists(&self) -> [&ProjectList; 2] {
        [&self.active, &self.finished]
    }

    /// Drags project `id` onto the list for `target`.
    ///
    /// The rendered item is the drag source when one exists; otherwise the
    /// bare id is sent as payload. Returns whether the target accepted.
    pub fn drag_project(&self, id: ProjectId, target: ProjectStatus) -> bool {
        let source = self.lists().into_iter().find_map(|list| list.item(id));
        let mut event = DragEvent::default();
        match &source {
            Some(item) => item.drag_start(&mut event),
            None => {
                event.data_transfer.set_data(TEXT_PLAIN, id.to_string());
                event.data_transfer.effect_allowed = DropEffect::Move;
            }
        }

        let target_list = self.list(target);
        target_list.drag_over(&mut event);
        let accepted = event.default_prevented();
        if accepted {
            target_list.drop(&event);
        } else {
            target_list.drag_leave(&event);
        }

        if let Some(item) = &source {
            item.drag_end(&event);
        }
        accepted
    }
}

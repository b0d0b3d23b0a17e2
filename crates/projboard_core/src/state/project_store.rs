//! Canonical project registry.
//!
//! # Responsibility
//! - Own the only mutable list of projects on the board.
//! - Publish a full snapshot to listeners after every effective change.
//!
//! # Invariants
//! - Project ids are unique; insertion order is preserved forever.
//! - Only `add_project` and `move_project` mutate the list.
//! - A transition to the current status (or an unknown id) publishes nothing.
//! - Listeners receive a copy taken after the internal borrow is released.
//! - Notification rounds never interleave: a change requested by a listener
//!   is queued and applied, with its own round, after the current round ends.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::state::subject::{Subject, Subscription};
use log::{debug, info};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Result of a status transition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Status changed and listeners were notified.
    Moved,
    /// Project already had the requested status.
    Unchanged,
    /// No project with the requested id.
    NotFound,
    /// Requested from inside a notification; applied once that round ends.
    Queued,
}

#[derive(Debug)]
enum Change {
    Add(Project),
    Move { id: ProjectId, status: ProjectStatus },
}

/// Clears the notifying flag even when a listener panics.
struct NotifyingGuard<'a>(&'a Cell<bool>);

impl Drop for NotifyingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Single source of truth for project state.
///
/// One instance is created by the composition root and shared through `Rc`.
#[derive(Debug, Default)]
pub struct ProjectStore {
    projects: RefCell<Vec<Project>>,
    subject: Subject<Project>,
    notifying: Cell<bool>,
    pending: RefCell<VecDeque<Change>>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an active project and notifies every listener.
    ///
    /// Callers validate input first; this never fails. When called from a
    /// listener, the project becomes visible after the current round.
    pub fn add_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id;
        self.dispatch(Change::Add(project));
        id
    }

    /// Moves a project into `new_status`.
    ///
    /// Unknown ids and same-status requests are silent no-ops.
    pub fn move_project(&self, id: ProjectId, new_status: ProjectStatus) -> MoveOutcome {
        self.dispatch(Change::Move {
            id,
            status: new_status,
        })
    }

    fn dispatch(&self, change: Change) -> MoveOutcome {
        if self.notifying.get() {
            self.pending.borrow_mut().push_back(change);
            debug!("event=change_queued module=store status=ok");
            return MoveOutcome::Queued;
        }

        let outcome = self.commit(change);
        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(next) = next else {
                break;
            };
            self.commit(next);
        }
        outcome
    }

    fn commit(&self, change: Change) -> MoveOutcome {
        let snapshot = match self.apply(change) {
            Ok(snapshot) => snapshot,
            Err(outcome) => return outcome,
        };

        self.notifying.set(true);
        let _guard = NotifyingGuard(&self.notifying);
        self.subject.publish(&snapshot);
        MoveOutcome::Moved
    }

    fn apply(&self, change: Change) -> Result<Vec<Project>, MoveOutcome> {
        let mut projects = self.projects.borrow_mut();
        match change {
            Change::Add(project) => {
                let id = project.id;
                projects.push(project);
                info!(
                    "event=project_added module=store status=ok id={} total={}",
                    id,
                    projects.len()
                );
            }
            Change::Move { id, status } => {
                let Some(project) = projects.iter_mut().find(|project| project.id == id) else {
                    debug!("event=project_move module=store status=not_found id={id}");
                    return Err(MoveOutcome::NotFound);
                };
                if project.status == status {
                    debug!(
                        "event=project_move module=store status=unchanged id={id} target={status}"
                    );
                    return Err(MoveOutcome::Unchanged);
                }
                project.status = status;
                info!("event=project_move module=store status=ok id={id} target={status}");
            }
        }
        Ok(projects.clone())
    }

    /// Registers a listener for future snapshots.
    ///
    /// The listener is not invoked for the current state.
    pub fn add_listener(&self, listener: impl Fn(&[Project]) + 'static) -> Subscription {
        let subscription = self.subject.subscribe(listener);
        debug!(
            "event=listener_added module=store status=ok listeners={}",
            self.subject.len()
        );
        subscription
    }

    /// Returns a copy of every project in insertion order.
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.borrow().clone()
    }

    pub fn get(&self, id: ProjectId) -> Option<Project> {
        self.projects
            .borrow()
            .iter()
            .find(|project| project.id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.projects.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.borrow().is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.subject.len()
    }
}

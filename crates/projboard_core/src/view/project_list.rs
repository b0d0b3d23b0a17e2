//! Status-partitioned project list and drop target.
//!
//! # Responsibility
//! - Mirror one status partition of the store.
//! - Accept dropped project ids and request the matching transition.
//!
//! # Invariants
//! - Every notification fully replaces the rendered items.
//! - Rendered order follows the store snapshot order.
//! - The target status is fixed at construction.
//! - The list never mutates store state directly.

use crate::drag::{DragEvent, DragTarget, DropZoneState, TEXT_PLAIN};
use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::state::project_store::{MoveOutcome, ProjectStore};
use crate::state::subject::Subscription;
use crate::view::project_item::ProjectItem;
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

#[derive(Debug, Default)]
struct ListState {
    items: Vec<ProjectItem>,
    drop_zone: DropZoneState,
    render_count: usize,
}

/// View over one status partition.
#[derive(Debug)]
pub struct ProjectList {
    status: ProjectStatus,
    store: Rc<ProjectStore>,
    state: Rc<RefCell<ListState>>,
    subscription: RefCell<Option<Subscription>>,
}

impl ProjectList {
    /// Creates the list, renders the current store content and subscribes
    /// to future snapshots.
    pub fn new(store: Rc<ProjectStore>, status: ProjectStatus) -> Self {
        let state = Rc::new(RefCell::new(ListState::default()));
        render_projects(&state, status, &store.snapshot());

        let listener_state = Rc::clone(&state);
        let subscription = store.add_listener(move |snapshot| {
            render_projects(&listener_state, status, snapshot);
        });

        Self {
            status,
            store,
            state,
            subscription: RefCell::new(Some(subscription)),
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.status.as_str().to_ascii_uppercase())
    }

    pub fn element_id(&self) -> String {
        format!("{}-projects", self.status)
    }

    pub fn list_id(&self) -> String {
        format!("{}-projects-list", self.status)
    }

    /// Currently rendered items.
    pub fn items(&self) -> Vec<ProjectItem> {
        self.state.borrow().items.clone()
    }

    pub fn item(&self, id: ProjectId) -> Option<ProjectItem> {
        self.state
            .borrow()
            .items
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }

    pub fn project_ids(&self) -> Vec<ProjectId> {
        self.state.borrow().items.iter().map(ProjectItem::id).collect()
    }

    pub fn len(&self) -> usize {
        self.state.borrow().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().items.is_empty()
    }

    pub fn drop_zone(&self) -> DropZoneState {
        self.state.borrow().drop_zone
    }

    /// Number of full redraws, including the initial one.
    pub fn render_count(&self) -> usize {
        self.state.borrow().render_count
    }

    /// Stops following the store. Returns `false` when already detached.
    pub fn detach(&self) -> bool {
        match self.subscription.borrow_mut().take() {
            Some(subscription) => subscription.unsubscribe(),
            None => false,
        }
    }

    fn set_drop_zone(&self, drop_zone: DropZoneState) {
        self.state.borrow_mut().drop_zone = drop_zone;
    }
}

impl DragTarget for ProjectList {
    fn drag_over(&self, event: &mut DragEvent) {
        if event.carries(TEXT_PLAIN) {
            event.prevent_default();
            self.set_drop_zone(DropZoneState::Highlighted);
        }
    }

    fn drop(&self, event: &DragEvent) {
        self.set_drop_zone(DropZoneState::Idle);

        let payload = event.data_transfer.get_data(TEXT_PLAIN).unwrap_or_default();
        let Ok(id) = Uuid::parse_str(payload.trim()) else {
            debug!(
                "event=project_drop module=view status=ignored list={} reason=invalid_payload",
                self.status
            );
            return;
        };

        match self.store.move_project(id, self.status) {
            MoveOutcome::Moved => {}
            MoveOutcome::Queued => debug!(
                "event=project_drop module=view status=queued list={}",
                self.status
            ),
            outcome => debug!(
                "event=project_drop module=view status=noop list={} outcome={outcome:?}",
                self.status
            ),
        }
    }

    fn drag_leave(&self, _event: &DragEvent) {
        self.set_drop_zone(DropZoneState::Idle);
    }
}

fn render_projects(state: &RefCell<ListState>, status: ProjectStatus, snapshot: &[Project]) {
    let items: Vec<ProjectItem> = snapshot
        .iter()
        .filter(|project| project.is_in(status))
        .cloned()
        .map(ProjectItem::new)
        .collect();

    let mut state = state.borrow_mut();
    state.items = items;
    state.render_count += 1;
    debug!(
        "event=list_rendered module=view status=ok list={} items={} renders={}",
        status,
        state.items.len(),
        state.render_count
    );
}

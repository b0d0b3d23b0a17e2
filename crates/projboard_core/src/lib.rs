//! Core logic for the project board.
//! This crate is the single source of truth for project state, status
//! transitions and input validation.

pub mod board;
pub mod console;
pub mod drag;
pub mod form;
pub mod logging;
pub mod model;
pub mod state;
pub mod validation;
pub mod view;

pub use board::ProjectBoard;
pub use console::{tokenize, Console, ConsoleError};
pub use drag::{
    DataTransfer, DragEvent, DragTarget, Draggable, DropEffect, DropZoneState, TEXT_PLAIN,
};
pub use form::project_input::{
    parse_leading_int, Alert, InputField, LogAlert, ProjectDraft, ProjectInput,
    ProjectInputError, INVALID_INPUT_MESSAGE,
};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::project::{Project, ProjectId, ProjectStatus, UnknownStatus};
pub use state::project_store::{MoveOutcome, ProjectStore};
pub use state::subject::{Subject, Subscription};
pub use validation::{validate_input, Validatable, ValidationValue};
pub use view::project_item::ProjectItem;
pub use view::project_list::ProjectList;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

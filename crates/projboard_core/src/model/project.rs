//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project record owned by `ProjectStore`.
//! - Define the two status partitions a project can belong to.
//!
//! # Invariants
//! - `id` is generated once and never reused for another project.
//! - `status` only changes through `ProjectStore::move_project`.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for every project on the board.
///
/// The hyphenated text form is the drag transfer payload.
pub type ProjectId = Uuid;

/// Status partition a project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work still in progress.
    Active,
    /// Work completed.
    Finished,
}

impl ProjectStatus {
    /// Lowercase name used for element ids and console input.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse error for status names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl Display for UnknownStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown project status `{}`; expected active|finished", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for ProjectStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Canonical project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Number of people assigned. Callers validate `> 0` before creation.
    pub people: u32,
    pub status: ProjectStatus,
}

impl Project {
    /// Creates an active project with a freshly generated id.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    /// Returns whether this project belongs to the given partition.
    pub fn is_in(&self, status: ProjectStatus) -> bool {
        self.status == status
    }
}

#[cfg(test)]
mod tests {
    use super::{Project, ProjectStatus};

    #[test]
    fn new_project_starts_active() {
        let project = Project::new("Ship", "Ship the board", 3);
        assert!(!project.id.is_nil());
        assert_eq!(project.status, ProjectStatus::Active);
        assert!(project.is_in(ProjectStatus::Active));
        assert!(!project.is_in(ProjectStatus::Finished));
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!(
            " Finished ".parse::<ProjectStatus>().expect("status should parse"),
            ProjectStatus::Finished
        );
        let err = "done"
            .parse::<ProjectStatus>()
            .expect_err("unknown status must be rejected");
        assert!(err.to_string().contains("active|finished"));
    }
}

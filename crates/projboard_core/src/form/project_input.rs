//! Project creation form.
//!
//! # Responsibility
//! - Hold raw field values as typed by the user.
//! - Validate them and forward valid tuples to the store.
//!
//! # Invariants
//! - Invalid input never reaches `ProjectStore::add_project`.
//! - Every rejected submit raises exactly one alert.
//! - Fields are cleared only after a successful submit.

use crate::model::project::ProjectId;
use crate::state::project_store::ProjectStore;
use crate::validation::{validate_input, Validatable};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// Message shown to the user when a submit is rejected.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please retry!";

const TITLE_MIN_LENGTH: usize = 1;
const DESCRIPTION_MIN_LENGTH: usize = 5;
const PEOPLE_MIN: f64 = 0.0;

/// User-facing blocking alert collaborator.
pub trait Alert {
    fn alert(&self, message: &str);
}

/// Alert sink that only records the rejection in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAlert;

impl Alert for LogAlert {
    fn alert(&self, _message: &str) {
        warn!("event=alert_raised module=form status=invalid_input");
    }
}

/// Form field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Title,
    Description,
    People,
}

impl Display for InputField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Title => f.write_str("title"),
            Self::Description => f.write_str("description"),
            Self::People => f.write_str("people"),
        }
    }
}

/// Submit rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectInputError {
    /// First field that failed validation.
    InvalidInput { field: InputField },
}

impl Display for ProjectInputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field } => write!(f, "invalid input in field `{field}`"),
        }
    }
}

impl Error for ProjectInputError {}

/// Validated `(title, description, people)` tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// Form collecting new project input.
pub struct ProjectInput {
    store: Rc<ProjectStore>,
    alert: Rc<dyn Alert>,
    title: String,
    description: String,
    people: String,
}

impl ProjectInput {
    pub fn new(store: Rc<ProjectStore>, alert: Rc<dyn Alert>) -> Self {
        Self {
            store,
            alert,
            title: String::new(),
            description: String::new(),
            people: String::new(),
        }
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    pub fn set_people(&mut self, value: impl Into<String>) {
        self.people = value.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn people(&self) -> &str {
        &self.people
    }

    /// Validates the current fields and adds the project on success.
    ///
    /// # Errors
    /// - Returns `InvalidInput` naming the first failing field. The alert
    ///   collaborator has been notified and the store is untouched.
    pub fn submit(&mut self) -> Result<ProjectId, ProjectInputError> {
        let draft = match self.gather_user_input() {
            Ok(draft) => draft,
            Err(err) => {
                let ProjectInputError::InvalidInput { field } = &err;
                warn!("event=project_submit module=form status=rejected field={field}");
                self.alert.alert(INVALID_INPUT_MESSAGE);
                return Err(err);
            }
        };

        let id = self
            .store
            .add_project(draft.title, draft.description, draft.people);
        info!("event=project_submit module=form status=ok id={id}");
        self.clear_inputs();
        Ok(id)
    }

    fn gather_user_input(&self) -> Result<ProjectDraft, ProjectInputError> {
        let people = parse_leading_int(&self.people);

        let checks = [
            (
                InputField::Title,
                Validatable::text(self.title.as_str())
                    .required()
                    .min_length(TITLE_MIN_LENGTH),
            ),
            (
                InputField::Description,
                Validatable::text(self.description.as_str())
                    .required()
                    .min_length(DESCRIPTION_MIN_LENGTH),
            ),
            (
                InputField::People,
                Validatable::number(people.map_or(f64::NAN, |value| value as f64))
                    .required()
                    .min(PEOPLE_MIN),
            ),
        ];

        if let Some((field, _)) = checks.iter().find(|(_, check)| !validate_input(check)) {
            return Err(ProjectInputError::InvalidInput { field: *field });
        }

        let people = people
            .and_then(|value| u32::try_from(value).ok())
            .ok_or(ProjectInputError::InvalidInput {
                field: InputField::People,
            })?;

        Ok(ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            people,
        })
    }

    fn clear_inputs(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }
}

/// Parses the leading integer of `raw`.
///
/// Accepts leading whitespace, an optional sign and at least one digit;
/// trailing characters are ignored (`"3 devs"` -> `3`).
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if end == 0 {
        return None;
    }

    let magnitude = unsigned[..end].parse::<i64>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::parse_leading_int;

    #[test]
    fn parse_leading_int_follows_prefix_semantics() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  7 people"), Some(7));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+5"), Some(5));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("3.9"), Some(3));
    }
}

//! Input validation for raw form values.
//!
//! # Responsibility
//! - Check one labeled value against optional constraints.
//!
//! # Invariants
//! - All present constraints are ANDed; absent constraints always pass.
//! - Length and range bounds are strict (`>` / `<`), never inclusive.
//! - `min_length`/`max_length` only apply to text, `min`/`max` only to
//!   numbers. A type mismatch skips the check instead of failing it.

use std::fmt::{Display, Formatter};

/// Raw value under validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationValue {
    Text(String),
    Number(f64),
}

impl Display for ValidationValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

/// Value plus the constraints it must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: ValidationValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    fn unconstrained(value: ValidationValue) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::unconstrained(ValidationValue::Text(value.into()))
    }

    pub fn number(value: f64) -> Self {
        Self::unconstrained(ValidationValue::Number(value))
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Returns whether `input.value` satisfies every declared constraint.
///
/// Text length counts Unicode scalar values of the untrimmed value; only the
/// `required` check trims.
pub fn validate_input(input: &Validatable) -> bool {
    let mut is_valid = true;

    if input.required {
        is_valid = is_valid && !input.value.to_string().trim().is_empty();
    }

    match &input.value {
        ValidationValue::Text(text) => {
            let length = text.chars().count();
            if let Some(min_length) = input.min_length {
                is_valid = is_valid && length > min_length;
            }
            if let Some(max_length) = input.max_length {
                is_valid = is_valid && length < max_length;
            }
        }
        ValidationValue::Number(number) => {
            // NaN compares false against every bound, so it fails min/max.
            if let Some(min) = input.min {
                is_valid = is_valid && *number > min;
            }
            if let Some(max) = input.max {
                is_valid = is_valid && *number < max;
            }
        }
    }

    is_valid
}

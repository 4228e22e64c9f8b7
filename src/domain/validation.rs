use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single field-level validation failure.
pub enum ValidationError {
    /// A required collection is empty.
    EmptyCollection { field: &'static str },
    /// A collection exceeds the allowed item count.
    TooManyItems {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    /// A required value is empty or blank.
    EmptyValue { field: &'static str },
    /// An enumerated field holds a value outside the recognized set.
    UnknownValue { field: &'static str, value: String },
    /// A string value falls outside the allowed length range.
    LengthOutOfRange {
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCollection { field } => write!(f, "{field} must not be empty"),
            Self::TooManyItems { field, max, actual } => {
                write!(f, "too many items in {field}: {actual} (max {max})")
            }
            Self::EmptyValue { field } => write!(f, "{field} must not be blank"),
            Self::UnknownValue { field, value } => {
                write!(f, "{field} holds unrecognized value: {value}")
            }
            Self::LengthOutOfRange {
                field,
                min,
                max,
                actual,
            } => {
                write!(
                    f,
                    "{field} length out of range: {actual} (expected {min}..={max})"
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Outcome of validating a request before dispatch.
///
/// Collects every field-level failure instead of stopping at the first one,
/// so callers can report the full picture.
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// A result with no errors.
    pub fn valid() -> Self {
        Self::default()
    }

    /// `true` when no errors were recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Recorded errors, in the order they were found.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Record a single failure.
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Absorb all failures from another result.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return f.write_str("valid");
        }
        for (idx, error) in self.errors.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl From<ValidationError> for ValidationResult {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

/// Request DTOs that are checked before any bytes go over the wire.
pub trait Validate {
    /// Produce the full set of field-level errors for this request.
    fn validate(&self) -> ValidationResult;
}

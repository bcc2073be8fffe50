//! Validation error types

use std::collections::BTreeMap;
use std::fmt;

/// Validation error for a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field was not sent at all
    Required { field: &'static str },

    /// Field is empty or whitespace when it shouldn't be
    Empty { field: &'static str },

    /// Value doesn't parse as the expected type
    InvalidFormat { field: &'static str, reason: String },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Required { field } | Self::Empty { field } | Self::InvalidFormat { field, .. } => {
                *field
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// All field errors collected while validating one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Messages grouped by field name, in field order.
    pub fn by_field(&self) -> BTreeMap<&'static str, Vec<String>> {
        let mut fields: BTreeMap<&'static str, Vec<String>> = BTreeMap::new();
        for error in &self.0 {
            fields.entry(error.field()).or_default().push(error.to_string());
        }
        fields
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(e: ValidationError) -> Self {
        Self(vec![e])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

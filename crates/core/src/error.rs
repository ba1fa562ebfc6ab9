//! Validation error model.

use std::collections::BTreeMap;

use serde::Serialize;

/// Result type used across the validation layer.
pub type ValidationResult<T> = Result<T, ValidationErrors>;

/// The kind of constraint a field value violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Wrong primitive type for a declared field.
    TypeMismatch,
    /// Value not in an enumerated set.
    InvalidChoice,
    /// Numeric value outside its allowed bound.
    OutOfRange,
    /// Empty or absent required field.
    RequiredFieldMissing,
    /// String below its minimum length.
    TooShort,
    /// Foreign identifier does not resolve to a record.
    ReferenceNotFound,
}

/// A single constraint violation on one named field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub message: String,
}

impl Violation {
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self::new(ViolationKind::TypeMismatch, message)
    }

    pub fn invalid_choice(message: impl Into<String>) -> Self {
        Self::new(ViolationKind::InvalidChoice, message)
    }

    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ViolationKind::OutOfRange, message)
    }

    pub fn required(message: impl Into<String>) -> Self {
        Self::new(ViolationKind::RequiredFieldMissing, message)
    }

    pub fn too_short(message: impl Into<String>) -> Self {
        Self::new(ViolationKind::TooShort, message)
    }

    pub fn reference_not_found(message: impl Into<String>) -> Self {
        Self::new(ViolationKind::ReferenceNotFound, message)
    }
}

/// Every failing field of one validation call, keyed by wire field name.
///
/// Violations are collected, never short-circuited: a single call reports all
/// failing fields at once, and any violation blocks the create/update
/// entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<Violation>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation against a field.
    pub fn push(&mut self, field: impl Into<String>, violation: Violation) {
        self.fields.entry(field.into()).or_default().push(violation);
    }

    /// Fold a per-field result into the collection, passing a success through.
    pub fn collect<T>(&mut self, field: &str, result: Result<T, Violation>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(violation) => {
                self.push(field, violation);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Violations recorded against a field; empty if the field passed.
    pub fn field(&self, field: &str) -> &[Violation] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Per-field message lists, in the shape handed back to callers.
    pub fn messages(&self) -> BTreeMap<String, Vec<String>> {
        self.fields
            .iter()
            .map(|(field, violations)| {
                let messages = violations.iter().map(|v| v.message.clone()).collect();
                (field.clone(), messages)
            })
            .collect()
    }

    /// Finish a collection pass: the value survives only if nothing failed.
    pub fn into_result<T>(self, value: T) -> ValidationResult<T> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl core::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let fields: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        write!(f, "validation failed: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

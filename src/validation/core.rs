//! Validation primitives shared by the schema validators
//!
//! Validators walk a `serde_json::Value`, record every violation as a
//! [`ValidationIssue`] and only build a typed value when no issue was found.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

// ===============================
// ISSUE PATHS
// ===============================

/// One step into a JSON document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Location of an issue inside the validated document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn key(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Key(key.to_string()));
        Self(segments)
    }

    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        Self(segments)
    }

    /// Nest this path under `prefix`
    #[must_use]
    pub fn prefixed(self, prefix: &Self) -> Self {
        let mut segments = prefix.0.clone();
        segments.extend(self.0);
        Self(segments)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        for (position, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if position == 0 => write!(f, "{key}")?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

// ===============================
// ISSUES
// ===============================

/// What went wrong at a given path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum IssueKind {
    /// A required field is absent
    Required,
    /// The value has the wrong JSON type
    InvalidType {
        expected: &'static str,
        received: &'static str,
    },
    /// The value is not one of the allowed options
    InvalidEnumValue {
        options: Vec<&'static str>,
        received: String,
    },
    /// The object carries a field the schema does not know
    UnrecognizedKey,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("required field is missing"),
            Self::InvalidType { expected, received } => {
                write!(f, "expected {expected}, received {received}")
            }
            Self::InvalidEnumValue { options, received } => {
                write!(f, "expected one of {options:?}, received {received:?}")
            }
            Self::UnrecognizedKey => f.write_str("unrecognized field"),
        }
    }
}

/// A single schema violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub path: FieldPath,
    #[serde(flatten)]
    pub kind: IssueKind,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

/// Raised when a value does not conform to a schema
///
/// Always carries at least one issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    issues: Vec<ValidationIssue>,
}

impl ValidationError {
    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Whether any issue points at `path` (rendered form, e.g. `"[1].userLink"`)
    #[must_use]
    pub fn has_issue_at(&self, path: &str) -> bool {
        self.issues.iter().any(|issue| issue.path.to_string() == path)
    }

    /// Rendered paths of every offending field
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        self.issues.iter().map(|issue| issue.path.to_string()).collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed: ")?;
        for (position, issue) in self.issues.iter().enumerate() {
            if position > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ===============================
// ISSUE COLLECTION
// ===============================

/// Accumulates issues while a validator walks a document
#[derive(Debug, Default)]
pub struct IssueCollector {
    issues: Vec<ValidationIssue>,
}

impl IssueCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: FieldPath, kind: IssueKind) {
        self.issues.push(ValidationIssue { path, kind });
    }

    /// Merge another validator's failure under `prefix`
    pub fn absorb(&mut self, prefix: &FieldPath, error: ValidationError) {
        self.issues
            .extend(error.issues.into_iter().map(|issue| ValidationIssue {
                path: issue.path.prefixed(prefix),
                kind: issue.kind,
            }));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Hand back `value` when nothing was recorded
    ///
    /// # Errors
    ///
    /// Returns the collected issues if any were recorded.
    pub fn finish<T>(self, value: T) -> Result<T, ValidationError> {
        if self.issues.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError {
                issues: self.issues,
            })
        }
    }

    /// Build the error directly; used when no typed value can be produced
    #[must_use]
    pub fn into_error(self) -> ValidationError {
        ValidationError {
            issues: self.issues,
        }
    }
}

// ===============================
// FIELD EXTRACTION PATTERNS
// ===============================

/// JSON type name used in issue messages
#[must_use]
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Require `value` to be an object
///
/// # Errors
///
/// Returns a single-issue error at `path` when the value is not an object.
pub fn expect_object<'a>(
    value: &'a Value,
    path: &FieldPath,
) -> Result<&'a Map<String, Value>, ValidationError> {
    value.as_object().ok_or_else(|| {
        let mut issues = IssueCollector::new();
        issues.push(
            path.clone(),
            IssueKind::InvalidType {
                expected: "object",
                received: json_type_name(value),
            },
        );
        issues.into_error()
    })
}

/// Extract a required string field, recording an issue on failure
pub fn required_string(
    object: &Map<String, Value>,
    field_name: &str,
    path: &FieldPath,
    issues: &mut IssueCollector,
) -> Option<String> {
    match object.get(field_name) {
        None => {
            issues.push(path.key(field_name), IssueKind::Required);
            None
        }
        Some(Value::String(text)) => Some(text.clone()),
        Some(other) => {
            issues.push(
                path.key(field_name),
                IssueKind::InvalidType {
                    expected: "string",
                    received: json_type_name(other),
                },
            );
            None
        }
    }
}

/// Extract a required number field, recording an issue on failure
pub fn required_number(
    object: &Map<String, Value>,
    field_name: &str,
    path: &FieldPath,
    issues: &mut IssueCollector,
) -> Option<f64> {
    match object.get(field_name) {
        None => {
            issues.push(path.key(field_name), IssueKind::Required);
            None
        }
        Some(Value::Number(number)) => {
            let parsed = number.as_f64();
            if parsed.is_none() {
                issues.push(
                    path.key(field_name),
                    IssueKind::InvalidType {
                        expected: "number",
                        received: "number",
                    },
                );
            }
            parsed
        }
        Some(other) => {
            issues.push(
                path.key(field_name),
                IssueKind::InvalidType {
                    expected: "number",
                    received: json_type_name(other),
                },
            );
            None
        }
    }
}

/// Extract a required boolean field, recording an issue on failure
pub fn required_bool(
    object: &Map<String, Value>,
    field_name: &str,
    path: &FieldPath,
    issues: &mut IssueCollector,
) -> Option<bool> {
    match object.get(field_name) {
        None => {
            issues.push(path.key(field_name), IssueKind::Required);
            None
        }
        Some(Value::Bool(flag)) => Some(*flag),
        Some(other) => {
            issues.push(
                path.key(field_name),
                IssueKind::InvalidType {
                    expected: "boolean",
                    received: json_type_name(other),
                },
            );
            None
        }
    }
}

/// Record every key of `object` that is not in `allowed`
pub fn reject_unknown_keys(
    object: &Map<String, Value>,
    allowed: &[&str],
    path: &FieldPath,
    issues: &mut IssueCollector,
) {
    for key in object.keys() {
        if !allowed.contains(&key.as_str()) {
            log::debug!("Rejecting unrecognized field {key} at {path}");
            issues.push(path.key(key), IssueKind::UnrecognizedKey);
        }
    }
}

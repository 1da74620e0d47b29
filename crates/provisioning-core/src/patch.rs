//! JSON Patch application with field-level validation.
//!
//! Entities publish a static table of their JSON fields through [`Document`].
//! [`apply`] runs an ordered list of [`PatchOperation`]s against the
//! serialized entity, then [`conform`]s the result against the field table
//! before deserializing it back. Create payloads go through [`conform`] alone.
//!
//! Paths address a single top-level field (`"active"` or `"/active"`) and are
//! matched case-insensitively.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

/// JSON type a field must hold after coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Boolean,
    Integer,
}

/// One entry of an entity's field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Serialized (camelCase) field name.
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Read-only fields (store-assigned ids) reject every mutating operation.
    pub writable: bool,
}

impl Field {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            writable: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            writable: true,
        }
    }

    pub const fn read_only(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            writable: false,
        }
    }

    /// `employeeId` -> `EmployeeId`, used in messages.
    fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }
}

/// A type whose JSON form is described by a field table.
pub trait Document: Serialize + DeserializeOwned {
    const FIELDS: &'static [Field];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Op {
    Add,
    Remove,
    Replace,
    Move,
    Copy,
    Test,
}

/// A single RFC 6902 style operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchOperation {
    pub op: Op,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

impl PatchOperation {
    pub fn replace(path: impl Into<String>, value: Value) -> Self {
        Self {
            op: Op::Replace,
            path: path.into(),
            value: Some(value),
            from: None,
        }
    }

    pub fn remove(path: impl Into<String>) -> Self {
        Self {
            op: Op::Remove,
            path: path.into(),
            value: None,
            from: None,
        }
    }
}

/// Field name -> messages, in field-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("validation failed: {0}")]
    Invalid(ValidationErrors),
    #[error("document is not a JSON object")]
    NotAnObject,
    #[error("document serialization failed")]
    Json(#[from] serde_json::Error),
}

impl From<ValidationErrors> for PatchError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Invalid(errors)
    }
}

/// Apply `operations` in order to a copy of `target` and validate the result.
///
/// The first failing operation aborts the patch. Field validation after the
/// operations reports every offending field at once.
pub fn apply<T: Document>(target: &T, operations: &[PatchOperation]) -> Result<T, PatchError> {
    let mut doc = match serde_json::to_value(target)? {
        Value::Object(map) => map,
        _ => return Err(PatchError::NotAnObject),
    };
    for operation in operations {
        apply_operation(T::FIELDS, &mut doc, operation)?;
    }
    let doc = conform_object(T::FIELDS, doc)?;
    Ok(serde_json::from_value(Value::Object(doc))?)
}

/// Coerce and validate a raw JSON payload against `T`'s field table.
///
/// Fields outside the table are dropped.
pub fn conform<T: Document>(payload: Value) -> Result<T, PatchError> {
    let Value::Object(doc) = payload else {
        return Err(PatchError::NotAnObject);
    };
    let doc = conform_object(T::FIELDS, doc)?;
    Ok(serde_json::from_value(Value::Object(doc))?)
}

fn apply_operation(
    fields: &[Field],
    doc: &mut Map<String, Value>,
    operation: &PatchOperation,
) -> Result<(), ValidationErrors> {
    match operation.op {
        Op::Add | Op::Replace => {
            let target = resolve_writable(fields, &operation.path)?;
            let value = operation.value.clone().unwrap_or(Value::Null);
            doc.insert(target.name.to_owned(), value);
        }
        Op::Remove => {
            let target = resolve_writable(fields, &operation.path)?;
            doc.insert(target.name.to_owned(), Value::Null);
        }
        Op::Copy | Op::Move => {
            let target = resolve_writable(fields, &operation.path)?;
            let Some(from) = operation.from.as_deref() else {
                return Err(ValidationErrors::single(
                    target.name,
                    "The 'from' location is required for this operation.",
                ));
            };
            let source = if operation.op == Op::Move {
                resolve_writable(fields, from)?
            } else {
                resolve(fields, from)?
            };
            let value = doc.get(source.name).cloned().unwrap_or(Value::Null);
            if operation.op == Op::Move {
                doc.insert(source.name.to_owned(), Value::Null);
            }
            doc.insert(target.name.to_owned(), value);
        }
        Op::Test => {
            let field = resolve(fields, &operation.path)?;
            // Earlier operations may have left an uncoerced value behind.
            let raw = doc.get(field.name).cloned().unwrap_or(Value::Null);
            let current = coerce(field, raw.clone()).unwrap_or(raw);
            let expected = operation.value.clone().unwrap_or(Value::Null);
            if current != expected {
                return Err(ValidationErrors::single(
                    field.name,
                    format!(
                        "The current value '{}' at path '{}' is not equal to the test value '{}'.",
                        render(&current),
                        operation.path,
                        render(&expected)
                    ),
                ));
            }
        }
    }
    Ok(())
}

fn resolve<'a>(fields: &'a [Field], path: &str) -> Result<&'a Field, ValidationErrors> {
    let name = path.strip_prefix('/').unwrap_or(path);
    fields
        .iter()
        .find(|f| !name.contains('/') && f.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| {
            ValidationErrors::single(
                name,
                format!("The target location specified by path '{path}' was not found."),
            )
        })
}

fn resolve_writable<'a>(fields: &'a [Field], path: &str) -> Result<&'a Field, ValidationErrors> {
    let field = resolve(fields, path)?;
    if !field.writable {
        return Err(ValidationErrors::single(
            field.name,
            format!("The property at path '{path}' could not be updated."),
        ));
    }
    Ok(field)
}

fn conform_object(
    fields: &[Field],
    mut doc: Map<String, Value>,
) -> Result<Map<String, Value>, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let mut out = Map::with_capacity(fields.len());
    for field in fields {
        let raw = doc.remove(field.name).unwrap_or(Value::Null);
        match coerce(field, raw) {
            Ok(value) => {
                out.insert(field.name.to_owned(), value);
            }
            Err(message) => errors.add(field.name, message),
        }
    }
    if errors.is_empty() {
        Ok(out)
    } else {
        Err(errors)
    }
}

fn coerce(field: &Field, raw: Value) -> Result<Value, String> {
    let required = || format!("{} is required", field.display_name());
    let invalid = |v: &Value| {
        format!(
            "The value '{}' is not valid for {}.",
            render(v),
            field.display_name()
        )
    };

    let value = match (field.kind, raw) {
        (_, Value::Null) => Value::Null,
        (FieldKind::String, Value::String(s)) if s.trim().is_empty() && field.required => {
            Value::Null
        }
        (FieldKind::String, v @ Value::String(_)) => v,
        (FieldKind::String, v @ (Value::Number(_) | Value::Bool(_))) => Value::String(render(&v)),
        (FieldKind::Boolean, v @ Value::Bool(_)) => v,
        (FieldKind::Boolean, Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => return Err(invalid(&Value::String(s))),
        },
        (FieldKind::Integer, Value::Number(n)) => match n.as_i64().and_then(|i| i32::try_from(i).ok())
        {
            Some(i) => Value::from(i),
            None => return Err(invalid(&Value::Number(n))),
        },
        (FieldKind::Integer, Value::String(s)) => match s.trim().parse::<i32>() {
            Ok(i) => Value::from(i),
            Err(_) => return Err(invalid(&Value::String(s))),
        },
        (_, other) => return Err(invalid(&other)),
    };

    if value.is_null() && field.required {
        return Err(required());
    }
    Ok(value)
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

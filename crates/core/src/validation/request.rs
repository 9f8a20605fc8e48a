//! The structured request a rule chain reads from and normalizes into.

use std::fmt;

use serde_json::{Map, Value};

/// Namespace of a request value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    Path,
    Query,
    Body,
}

impl Location {
    pub fn as_str(self) -> &'static str {
        match self {
            Location::Path => "path",
            Location::Query => "query",
            Location::Body => "body",
        }
    }
}

/// A location-qualified field name, e.g. `body.email` or `query.page`.
///
/// Body names may be dotted (`address.city`) to reach into nested objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldRef {
    pub location: Location,
    pub name: &'static str,
}

impl FieldRef {
    pub const fn new(location: Location, name: &'static str) -> Self {
        Self { location, name }
    }

    pub const fn path(name: &'static str) -> Self {
        Self::new(Location::Path, name)
    }

    pub const fn query(name: &'static str) -> Self {
        Self::new(Location::Query, name)
    }

    pub const fn body(name: &'static str) -> Self {
        Self::new(Location::Body, name)
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.location.as_str(), self.name)
    }
}

/// Inbound request values, partitioned by namespace.
///
/// Path and query values arrive as strings; the body is whatever JSON the
/// client sent. A non-object body simply has no addressable fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestData {
    pub path: Map<String, Value>,
    pub query: Map<String, Value>,
    pub body: Value,
}

impl RequestData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    pub fn with_query<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.query.extend(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), Value::String(v.into()))),
        );
        self
    }

    pub fn with_path<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.path.extend(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), Value::String(v.into()))),
        );
        self
    }

    /// Current value of `field`, if present.
    pub fn get(&self, field: &FieldRef) -> Option<&Value> {
        let mut segments = field.name.split('.');
        let first = segments.next()?;
        let mut current = match field.location {
            Location::Path => self.path.get(first)?,
            Location::Query => self.query.get(first)?,
            Location::Body => self.body.as_object()?.get(first)?,
        };
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    fn get_mut(&mut self, field: &FieldRef) -> Option<&mut Value> {
        let mut segments = field.name.split('.');
        let first = segments.next()?;
        let mut current = match field.location {
            Location::Path => self.path.get_mut(first)?,
            Location::Query => self.query.get_mut(first)?,
            Location::Body => self.body.as_object_mut()?.get_mut(first)?,
        };
        for segment in segments {
            current = current.as_object_mut()?.get_mut(segment)?;
        }
        Some(current)
    }

    /// Replace the value of an existing field. Returns `false` (and changes
    /// nothing) when the field is not present; the shape is never altered.
    pub fn replace(&mut self, field: &FieldRef, value: Value) -> bool {
        match self.get_mut(field) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
}

/// Missing, `null`, or a string that is blank after trimming.
pub fn is_absent(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        _ => false,
    }
}

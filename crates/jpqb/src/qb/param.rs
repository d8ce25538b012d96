//! Named parameter storage shared between a builder and its sub-builders.

use crate::error::QbResult;
use crate::handle::QueryHandle;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Binding semantics for date/time parameter values.
///
/// Disambiguates how an engine should treat a calendar value: date-only,
/// time-of-day, or a full timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalKind {
    /// Date-only, no time component
    Date,
    /// Time-of-day, no date component
    Time,
    /// Full date and time
    Timestamp,
}

/// An owned parameter value.
///
/// Covers the scalar kinds a JPQL named binding carries. The builder never
/// inspects values; they are handed through to the execution handle as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    Time(NaiveTime),
    Timestamp(DateTime<Utc>),
    Uuid(uuid::Uuid),
    Json(serde_json::Value),
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<NaiveDate> for ParamValue {
    fn from(v: NaiveDate) -> Self {
        Self::Date(v)
    }
}

impl From<NaiveTime> for ParamValue {
    fn from(v: NaiveTime) -> Self {
        Self::Time(v)
    }
}

impl From<DateTime<Utc>> for ParamValue {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Timestamp(v)
    }
}

impl From<uuid::Uuid> for ParamValue {
    fn from(v: uuid::Uuid) -> Self {
        Self::Uuid(v)
    }
}

impl From<serde_json::Value> for ParamValue {
    fn from(v: serde_json::Value) -> Self {
        Self::Json(v)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

/// A single named binding accumulated by a builder.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamEntry {
    /// Parameter name as referenced by `:name` in a fragment
    pub name: String,
    /// The value to bind
    pub value: ParamValue,
    /// Temporal semantics, when the value is a date/time
    pub temporal: Option<TemporalKind>,
}

/// An insertion-ordered collection of named bindings.
///
/// A top-level builder and the sub-builders it spawns alias one `ParamList`
/// through a shared handle, so a parameter declared on either side is
/// flushed whenever any of them binds. Names are not required to be unique;
/// duplicates overwrite per the execution handle's own semantics.
#[derive(Debug, Clone, Default)]
pub struct ParamList {
    entries: Vec<ParamEntry>,
}

impl ParamList {
    /// Create a new empty parameter list.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a named binding.
    pub fn push(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ParamValue>,
        temporal: Option<TemporalKind>,
    ) {
        self.entries.push(ParamEntry {
            name: name.into(),
            value: value.into(),
            temporal,
        });
    }

    /// Get the current parameter count.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// View the entries in declaration order.
    pub fn entries(&self) -> &[ParamEntry] {
        &self.entries
    }

    /// Apply every entry onto a compiled query, in declaration order.
    ///
    /// Temporal-tagged entries go through the temporal binding path, all
    /// others through the plain path.
    pub fn apply<Q: QueryHandle>(&self, query: &mut Q) -> QbResult<()> {
        for entry in &self.entries {
            tracing::trace!(name = %entry.name, kind = ?entry.temporal, "binding parameter");
            match entry.temporal {
                Some(kind) => query.set_temporal_parameter(&entry.name, &entry.value, kind)?,
                None => query.set_parameter(&entry.name, &entry.value)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_declaration_order() {
        let mut params = ParamList::new();
        params.push("lastName", "Smith", None);
        params.push("age", 3i64, None);
        params.push("lastName", "Jones", None);

        let names: Vec<&str> = params.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["lastName", "age", "lastName"]);
    }

    #[test]
    fn test_value_conversions() {
        assert_eq!(ParamValue::from("Smith"), ParamValue::Text("Smith".into()));
        assert_eq!(ParamValue::from(42i32), ParamValue::Int(42));
        assert_eq!(ParamValue::from(None::<i64>), ParamValue::Null);
        assert_eq!(ParamValue::from(Some(true)), ParamValue::Bool(true));

        let date = NaiveDate::from_ymd_opt(2012, 6, 1).unwrap();
        assert_eq!(ParamValue::from(date), ParamValue::Date(date));
    }
}

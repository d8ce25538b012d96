//! Execution-handle traits for compiling and binding rendered queries.
//!
//! The builder is engine-agnostic: it only produces query text and feeds
//! named parameters into whatever handle the caller supplies. Anything that
//! can compile a query string into a query object and accept named-parameter
//! bindings can execute what the builder renders. Compile- and bind-time
//! failures (bad syntax, unknown parameter name, type mismatch) are the
//! handle's responsibility and propagate unchanged through
//! [`QbError::Compile`](crate::QbError::Compile) /
//! [`QbError::Bind`](crate::QbError::Bind).

use crate::error::QbResult;
use crate::qb::{ParamValue, TemporalKind};

/// A compiled query object accepting named-parameter bindings.
pub trait QueryHandle {
    /// Bind a plain named parameter.
    fn set_parameter(&mut self, name: &str, value: &ParamValue) -> QbResult<()>;

    /// Bind a date/time parameter with explicit temporal semantics.
    fn set_temporal_parameter(
        &mut self,
        name: &str,
        value: &ParamValue,
        kind: TemporalKind,
    ) -> QbResult<()>;
}

/// An engine that compiles query text into an executable query object.
pub trait ExecutionHandle {
    /// The compiled query type produced by this engine.
    type Query: QueryHandle;

    /// Compile a query string.
    fn compile(&mut self, query: &str) -> QbResult<Self::Query>;
}

/// An engine that can compile query text with an expected result element
/// type `T`.
pub trait TypedExecutionHandle<T>: ExecutionHandle {
    /// The compiled query type carrying the expected result element type.
    type TypedQuery: QueryHandle;

    /// Compile a query string for results of element type `T`.
    fn compile_typed(&mut self, query: &str) -> QbResult<Self::TypedQuery>;
}

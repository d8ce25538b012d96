//! # jpqb
//!
//! A fluent, engine-agnostic builder for JPQL query strings.
//!
//! ## Features
//!
//! - **Fragment assembly only**: clause fragments are opaque caller text —
//!   no grammar parsing, no semantic checking
//! - **Fixed-order rendering**: select / from / where / group by / having /
//!   order by, with empty clauses omitted
//! - **Boolean composition**: `conjunction` / `disjunction` helpers that
//!   parenthesize and-/or-joined predicates
//! - **Named parameters**: accumulated in declaration order and flushed
//!   onto any [`ExecutionHandle`] at bind time, with temporal-kind routing
//!   for date/time values
//! - **Nested sub-queries**: spawned builders share the parent's parameter
//!   store and render a whitespace-padded wrapped form for inline splicing
//!
//! ## Example
//!
//! ```
//! use jpqb::qb;
//!
//! let builder = qb::start()
//!     .select("cat.name")
//!     .from("Cat cat")
//!     .and_where("cat.owner = :owner")
//!     .set_parameter("owner", "Smith");
//!
//! assert_eq!(
//!     builder.to_jpql(),
//!     "select cat.name from Cat cat where cat.owner = :owner"
//! );
//! ```
//!
//! Execution is an external concern: implement [`ExecutionHandle`] /
//! [`QueryHandle`] over your engine and `create_query` will compile the
//! rendered string and apply every recorded parameter onto it.

pub mod error;
pub mod handle;
pub mod qb;

pub use error::{QbError, QbResult};
pub use handle::{ExecutionHandle, QueryHandle, TypedExecutionHandle};

// Re-export qb module surface for easy access
pub use qb::{
    ParamEntry, ParamList, ParamValue, QueryBuilder, SubQueryBuilder, TemporalKind, conjunction,
    conjunction_of, disjunction, disjunction_of, start, start_distinct,
};

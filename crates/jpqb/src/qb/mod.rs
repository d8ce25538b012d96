//! Fluent JPQL query builder.
//!
//! This module holds the two cooperating builders and the pieces they
//! share:
//!
//! - **[`QueryBuilder`]** — full fluent surface (select/from/where/group
//!   by/having/order by plus named parameters), started with [`start`] or
//!   [`start_distinct`].
//! - **[`SubQueryBuilder`]** — restricted to select/from/where, spawned
//!   from a parent builder and sharing its parameter store.
//! - **[`compose`]** — pure conjunction/disjunction of predicate
//!   fragments.
//! - **[`ParamList`]** — insertion-ordered named bindings, flushed onto an
//!   execution handle at bind time.
//!
//! Fragments are opaque: the builder assembles caller-supplied clause text
//! and never parses or validates it.
//!
//! # Usage
//!
//! ```
//! use jpqb::{disjunction, qb};
//!
//! let builder = qb::start()
//!     .select("cat.name")
//!     .from("Cat cat")
//!     .and_where("cat.age > :minAge")
//!     .and_where(&disjunction(&["cat.sex = 'male'", "cat.sex = 'female'"])?)
//!     .set_parameter("minAge", 2i64)
//!     .order_by("cat.name");
//!
//! assert_eq!(
//!     builder.to_jpql(),
//!     "select cat.name from Cat cat \
//!      where cat.age > :minAge and (cat.sex = 'male' or cat.sex = 'female') \
//!      order by cat.name"
//! );
//! # Ok::<(), jpqb::QbError>(())
//! ```

mod clause;
pub mod compose;
mod param;
mod query;
mod subquery;

pub use compose::{conjunction, conjunction_of, disjunction, disjunction_of};
pub use param::{ParamEntry, ParamList, ParamValue, TemporalKind};
pub use query::QueryBuilder;
pub use subquery::SubQueryBuilder;

/// Create a query builder rendering `select ...`.
///
/// # Example
/// ```
/// let builder = jpqb::qb::start().select("foo").from("Foo foo");
/// assert_eq!(builder.to_jpql(), "select foo from Foo foo");
/// ```
pub fn start() -> QueryBuilder {
    QueryBuilder::new(false)
}

/// Create a query builder rendering `select distinct ...`.
///
/// # Example
/// ```
/// let builder = jpqb::qb::start_distinct().select("foo").from("Foo foo");
/// assert_eq!(builder.to_jpql(), "select distinct foo from Foo foo");
/// ```
pub fn start_distinct() -> QueryBuilder {
    QueryBuilder::new(true)
}

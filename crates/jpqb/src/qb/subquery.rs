//! Restricted builder for sub-queries nested inside a parent predicate.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::QbResult;
use crate::handle::{ExecutionHandle, TypedExecutionHandle};
use crate::qb::clause::Clauses;
use crate::qb::compose;
use crate::qb::param::{ParamList, ParamValue, TemporalKind};

/// Fluent builder for a sub-query spliced into a parent predicate.
///
/// Spawned via [`QueryBuilder::sub_query_builder`] or
/// [`QueryBuilder::distinct_sub_query_builder`], and restricted to
/// select/from/where: a sub-query carries no group-by, having, or order-by,
/// and its distinctness is fixed at spawn time.
///
/// The parameter store is shared with the parent by reference, so binding
/// either builder flushes parameters declared on both.
///
/// [`QueryBuilder::sub_query_builder`]: crate::QueryBuilder::sub_query_builder
/// [`QueryBuilder::distinct_sub_query_builder`]: crate::QueryBuilder::distinct_sub_query_builder
#[derive(Debug)]
pub struct SubQueryBuilder {
    clauses: Clauses,
    distinct: bool,
    params: Rc<RefCell<ParamList>>,
}

impl SubQueryBuilder {
    pub(crate) fn new(distinct: bool, params: Rc<RefCell<ParamList>>) -> Self {
        Self {
            clauses: Clauses::new(),
            distinct,
            params,
        }
    }

    /// Append a SELECT projection fragment (comma-joined at render time).
    pub fn select(mut self, fragment: &str) -> Self {
        self.clauses.select.push(fragment.to_string());
        self
    }

    /// Append a FROM fragment (space-joined at render time).
    pub fn from(mut self, fragment: &str) -> Self {
        self.clauses.from.push(fragment.to_string());
        self
    }

    /// Append a WHERE predicate fragment (and-joined at render time).
    pub fn and_where(mut self, fragment: &str) -> Self {
        self.clauses.predicates.push(fragment.to_string());
        self
    }

    /// Record a named parameter binding on the shared store.
    pub fn set_parameter(self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.params.borrow_mut().push(name, value, None);
        self
    }

    /// Record a named date/time parameter binding with explicit temporal
    /// semantics on the shared store.
    pub fn set_temporal_parameter(
        self,
        name: &str,
        value: impl Into<ParamValue>,
        kind: TemporalKind,
    ) -> Self {
        self.params.borrow_mut().push(name, value, Some(kind));
        self
    }

    /// Join predicates with `and`, parenthesized. Delegates to
    /// [`compose::conjunction`].
    pub fn conjunction<S: AsRef<str>>(&self, predicates: &[S]) -> QbResult<String> {
        compose::conjunction(predicates)
    }

    /// Join predicates with `or`, parenthesized. Delegates to
    /// [`compose::disjunction`].
    pub fn disjunction<S: AsRef<str>>(&self, predicates: &[S]) -> QbResult<String> {
        compose::disjunction(predicates)
    }

    /// Render the bare sub-query string.
    pub fn to_jpql(&self) -> String {
        self.clauses.render(self.distinct)
    }

    /// Render the sub-query wrapped as `" (" + to_jpql() + ") "`.
    ///
    /// The single leading and trailing space let the result be spliced
    /// directly after an operator inside a parent predicate, e.g.
    /// `format!("foo.id in{}", sub.to_wrapped_jpql())`.
    pub fn to_wrapped_jpql(&self) -> String {
        format!(" ({}) ", self.to_jpql())
    }

    /// Compile the bare sub-query through `handle`, then apply every
    /// parameter in the shared store in declaration order — including
    /// parameters declared on the parent builder.
    pub fn create_query<H: ExecutionHandle>(&self, handle: &mut H) -> QbResult<H::Query> {
        let jpql = self.to_jpql();
        tracing::debug!(query = %jpql, "compiling sub-query");
        let mut query = handle.compile(&jpql)?;
        self.params.borrow().apply(&mut query)?;
        Ok(query)
    }

    /// Like [`SubQueryBuilder::create_query`], compiling for results of
    /// element type `T`.
    pub fn create_typed_query<T, H: TypedExecutionHandle<T>>(
        &self,
        handle: &mut H,
    ) -> QbResult<H::TypedQuery> {
        let jpql = self.to_jpql();
        tracing::debug!(query = %jpql, "compiling typed sub-query");
        let mut query = handle.compile_typed(&jpql)?;
        self.params.borrow().apply(&mut query)?;
        Ok(query)
    }
}

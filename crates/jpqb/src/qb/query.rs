//! Top-level query builder with fluent clause accumulation.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::QbResult;
use crate::handle::{ExecutionHandle, TypedExecutionHandle};
use crate::qb::clause::Clauses;
use crate::qb::compose;
use crate::qb::param::{ParamList, ParamValue, TemporalKind};
use crate::qb::subquery::SubQueryBuilder;

/// Fluent builder for a complete JPQL query string.
///
/// Every fragment method appends opaque caller text to the matching clause
/// list and returns the builder for chaining. Rendering is idempotent and
/// side-effect-free, and there is no terminal state: accumulating more
/// fragments after a render or bind and rendering again simply reflects the
/// updated state.
///
/// # Example
///
/// ```
/// use jpqb::qb;
///
/// let builder = qb::start()
///     .select("cat.name")
///     .from("Cat cat")
///     .and_where("cat.name = :name")
///     .set_parameter("name", "Tom")
///     .order_by("cat.name");
///
/// assert_eq!(
///     builder.to_jpql(),
///     "select cat.name from Cat cat where cat.name = :name order by cat.name"
/// );
/// ```
#[derive(Debug)]
pub struct QueryBuilder {
    clauses: Clauses,
    distinct: bool,
    params: Rc<RefCell<ParamList>>,
}

impl QueryBuilder {
    pub(crate) fn new(distinct: bool) -> Self {
        Self {
            clauses: Clauses::new(),
            distinct,
            params: Rc::new(RefCell::new(ParamList::new())),
        }
    }

    /// Append a SELECT projection fragment (comma-joined at render time).
    pub fn select(mut self, fragment: &str) -> Self {
        self.clauses.select.push(fragment.to_string());
        self
    }

    /// Append a FROM fragment (space-joined at render time).
    ///
    /// Pass whole join clauses as separate fragments, e.g.
    /// `.from("Cat cat").from("inner join cat.owner owner")`.
    pub fn from(mut self, fragment: &str) -> Self {
        self.clauses.from.push(fragment.to_string());
        self
    }

    /// Append a WHERE predicate fragment.
    ///
    /// Top-level predicates are and-joined at render time; wrap alternative
    /// branches with [`disjunction`](crate::disjunction) first.
    pub fn and_where(mut self, fragment: &str) -> Self {
        self.clauses.predicates.push(fragment.to_string());
        self
    }

    /// Append a GROUP BY fragment (comma-joined at render time).
    pub fn group_by(mut self, fragment: &str) -> Self {
        self.clauses.group_by.push(fragment.to_string());
        self
    }

    /// Append a HAVING predicate fragment (and-joined at render time).
    pub fn having(mut self, fragment: &str) -> Self {
        self.clauses.having.push(fragment.to_string());
        self
    }

    /// Append an ORDER BY fragment (comma-joined at render time).
    pub fn order_by(mut self, fragment: &str) -> Self {
        self.clauses.order_by.push(fragment.to_string());
        self
    }

    /// Record a named parameter binding for `:name` in some fragment.
    pub fn set_parameter(self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.params.borrow_mut().push(name, value, None);
        self
    }

    /// Record a named date/time parameter binding with explicit temporal
    /// semantics.
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

    /// Spawn a sub-query builder sharing this builder's parameter store.
    ///
    /// Parameters declared on the sub-query are flushed when either the
    /// parent or the sub-query binds; this aliasing is intentional so
    /// callers never track which builder "owns" a parameter.
    pub fn sub_query_builder(&self) -> SubQueryBuilder {
        SubQueryBuilder::new(false, Rc::clone(&self.params))
    }

    /// Spawn a `select distinct` sub-query builder sharing this builder's
    /// parameter store.
    pub fn distinct_sub_query_builder(&self) -> SubQueryBuilder {
        SubQueryBuilder::new(true, Rc::clone(&self.params))
    }

    /// Render the accumulated clauses into a single query string.
    pub fn to_jpql(&self) -> String {
        self.clauses.render(self.distinct)
    }

    /// Compile the rendered query through `handle`, then apply every
    /// recorded parameter in declaration order. The compiled query is
    /// returned unchanged for direct use.
    pub fn create_query<H: ExecutionHandle>(&self, handle: &mut H) -> QbResult<H::Query> {
        let jpql = self.to_jpql();
        tracing::debug!(query = %jpql, "compiling query");
        let mut query = handle.compile(&jpql)?;
        self.params.borrow().apply(&mut query)?;
        Ok(query)
    }

    /// Like [`QueryBuilder::create_query`], compiling for results of
    /// element type `T`.
    pub fn create_typed_query<T, H: TypedExecutionHandle<T>>(
        &self,
        handle: &mut H,
    ) -> QbResult<H::TypedQuery> {
        let jpql = self.to_jpql();
        tracing::debug!(query = %jpql, "compiling typed query");
        let mut query = handle.compile_typed(&jpql)?;
        self.params.borrow().apply(&mut query)?;
        Ok(query)
    }
}

//! Ordered clause accumulation and fixed-order rendering.

/// Ordered fragment lists for each clause of a query.
///
/// Fragments are opaque text: insertion order is preserved, duplicates are
/// kept, and nothing is parsed or validated. Both builder kinds delegate
/// their clause state to this one accumulator; the sub-query builder simply
/// never pushes onto `group_by`, `having`, or `order_by`.
#[derive(Debug, Clone, Default)]
pub(crate) struct Clauses {
    pub(crate) select: Vec<String>,
    pub(crate) from: Vec<String>,
    pub(crate) predicates: Vec<String>,
    pub(crate) group_by: Vec<String>,
    pub(crate) having: Vec<String>,
    pub(crate) order_by: Vec<String>,
}

impl Clauses {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Render the accumulated clauses into one query string.
    ///
    /// Clause order is fixed; empty clauses contribute nothing, and each
    /// present clause is separated from the previous by exactly one space.
    /// FROM fragments are space-joined (callers pass whole join clauses as
    /// separate fragments); WHERE and HAVING fragments are and-joined; the
    /// rest are comma-joined. An empty select or from list renders a
    /// deliberately incomplete string for the execution handle to reject.
    pub(crate) fn render(&self, distinct: bool) -> String {
        let mut jpql = String::from("select");
        if distinct {
            jpql.push_str(" distinct");
        }

        if !self.select.is_empty() {
            jpql.push(' ');
            jpql.push_str(&self.select.join(", "));
        }

        if !self.from.is_empty() {
            jpql.push_str(" from ");
            jpql.push_str(&self.from.join(" "));
        }

        if !self.predicates.is_empty() {
            jpql.push_str(" where ");
            jpql.push_str(&self.predicates.join(" and "));
        }

        if !self.group_by.is_empty() {
            jpql.push_str(" group by ");
            jpql.push_str(&self.group_by.join(", "));
        }

        if !self.having.is_empty() {
            jpql.push_str(" having ");
            jpql.push_str(&self.having.join(" and "));
        }

        if !self.order_by.is_empty() {
            jpql.push_str(" order by ");
            jpql.push_str(&self.order_by.join(", "));
        }

        jpql
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_select_from_only() {
        let mut clauses = Clauses::new();
        clauses.select.push("foo".into());
        clauses.from.push("Foo foo".into());
        assert_eq!(clauses.render(false), "select foo from Foo foo");
        assert_eq!(clauses.render(true), "select distinct foo from Foo foo");
    }

    #[test]
    fn test_from_fragments_are_space_joined() {
        let mut clauses = Clauses::new();
        clauses.select.push("cat.name".into());
        clauses.from.push("Cat cat".into());
        clauses.from.push("inner join cat.owner owner".into());
        assert_eq!(
            clauses.render(false),
            "select cat.name from Cat cat inner join cat.owner owner"
        );
    }

    #[test]
    fn test_where_fragments_are_and_joined() {
        let mut clauses = Clauses::new();
        clauses.select.push("c".into());
        clauses.from.push("Cat c".into());
        clauses.predicates.push("c.age > 1".into());
        clauses.predicates.push("c.age < 9".into());
        assert_eq!(
            clauses.render(false),
            "select c from Cat c where c.age > 1 and c.age < 9"
        );
    }

    #[test]
    fn test_empty_clauses_contribute_nothing() {
        let mut clauses = Clauses::new();
        clauses.select.push("foo".into());
        clauses.from.push("Foo foo".into());
        let jpql = clauses.render(false);
        assert!(!jpql.contains("where"));
        assert!(!jpql.contains("group by"));
        assert!(!jpql.contains("having"));
        assert!(!jpql.contains("order by"));
        assert!(!jpql.ends_with(' '));
    }

    #[test]
    fn test_all_clauses_in_fixed_order() {
        let mut clauses = Clauses::new();
        clauses.select.push("c.color".into());
        clauses.from.push("Cat c".into());
        clauses.predicates.push("c.age > 1".into());
        clauses.group_by.push("c.color".into());
        clauses.having.push("count(c) > 2".into());
        clauses.order_by.push("c.color".into());
        assert_eq!(
            clauses.render(false),
            "select c.color from Cat c where c.age > 1 \
             group by c.color having count(c) > 2 order by c.color"
        );
    }

    #[test]
    fn test_duplicate_fragments_preserved() {
        let mut clauses = Clauses::new();
        clauses.select.push("foo".into());
        clauses.select.push("foo".into());
        clauses.from.push("Foo foo".into());
        assert_eq!(clauses.render(false), "select foo, foo from Foo foo");
    }
}

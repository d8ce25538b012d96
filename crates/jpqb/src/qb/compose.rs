//! Pure composition of predicate fragments with `and` / `or`.
//!
//! Both builders delegate here for composite predicates; there is exactly
//! one joining implementation behind the slice and iterator call shapes.

use crate::error::{QbError, QbResult};

/// Join predicate fragments with `" and "`, parenthesizing the result.
///
/// ```
/// # use jpqb::conjunction;
/// assert_eq!(conjunction(&["A", "B", "C"]).unwrap(), "(A and B and C)");
/// ```
///
/// Returns [`QbError::InvalidArgument`] for an empty slice: a conjunction
/// over zero predicates is undefined.
pub fn conjunction<S: AsRef<str>>(predicates: &[S]) -> QbResult<String> {
    compose(predicates.iter().map(AsRef::as_ref), "and")
}

/// Join predicate fragments with `" or "`, parenthesizing the result.
///
/// ```
/// # use jpqb::disjunction;
/// assert_eq!(disjunction(&["A", "B"]).unwrap(), "(A or B)");
/// ```
///
/// Returns [`QbError::InvalidArgument`] for an empty slice.
pub fn disjunction<S: AsRef<str>>(predicates: &[S]) -> QbResult<String> {
    compose(predicates.iter().map(AsRef::as_ref), "or")
}

/// [`conjunction`] over any ordered collection of predicate fragments.
pub fn conjunction_of<I>(predicates: I) -> QbResult<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let items: Vec<I::Item> = predicates.into_iter().collect();
    compose(items.iter().map(AsRef::as_ref), "and")
}

/// [`disjunction`] over any ordered collection of predicate fragments.
pub fn disjunction_of<I>(predicates: I) -> QbResult<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let items: Vec<I::Item> = predicates.into_iter().collect();
    compose(items.iter().map(AsRef::as_ref), "or")
}

fn compose<'a>(predicates: impl Iterator<Item = &'a str>, joiner: &str) -> QbResult<String> {
    let mut out = String::from("(");
    let mut count = 0usize;
    for predicate in predicates {
        if count > 0 {
            out.push(' ');
            out.push_str(joiner);
            out.push(' ');
        }
        out.push_str(predicate);
        count += 1;
    }
    if count == 0 {
        return Err(QbError::invalid_argument(format!(
            "cannot build a {joiner} over zero predicates"
        )));
    }
    out.push(')');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conjunction() {
        assert_eq!(conjunction(&["A", "B", "C"]).unwrap(), "(A and B and C)");
        assert_eq!(
            conjunction(&["A", "B", "C", "D"]).unwrap(),
            "(A and B and C and D)"
        );
    }

    #[test]
    fn test_disjunction() {
        assert_eq!(disjunction(&["A", "B", "C"]).unwrap(), "(A or B or C)");
        assert_eq!(
            disjunction(&["A", "B", "C", "D"]).unwrap(),
            "(A or B or C or D)"
        );
    }

    #[test]
    fn test_single_predicate_still_parenthesized() {
        assert_eq!(conjunction(&["A"]).unwrap(), "(A)");
        assert_eq!(disjunction(&["A"]).unwrap(), "(A)");
    }

    #[test]
    fn test_collection_shape_matches_slice_shape() {
        let fragments = vec!["a = 1".to_string(), "b = 2".to_string()];
        assert_eq!(
            conjunction_of(fragments.clone()).unwrap(),
            conjunction(&fragments).unwrap()
        );
        assert_eq!(
            disjunction_of(fragments.clone()).unwrap(),
            disjunction(&fragments).unwrap()
        );
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(conjunction::<&str>(&[]).unwrap_err().is_invalid_argument());
        assert!(disjunction::<&str>(&[]).unwrap_err().is_invalid_argument());
        assert!(
            conjunction_of(Vec::<String>::new())
                .unwrap_err()
                .is_invalid_argument()
        );
        assert!(
            disjunction_of(Vec::<String>::new())
                .unwrap_err()
                .is_invalid_argument()
        );
    }

    #[test]
    fn test_duplicates_and_order_preserved() {
        assert_eq!(disjunction(&["A", "A", "B"]).unwrap(), "(A or A or B)");
    }
}

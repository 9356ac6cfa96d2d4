//! Predicate compiler subsystem for dirsql
//!
//! Compiles SQL WHERE-clause text into directory-filter syntax.
//!
//! # Design Principles
//!
//! - Pure: no I/O, same text always compiles to the same filter
//! - Total: compilation never fails; unrecognized conditions pass
//!   through wrapped rather than erroring
//! - Separated: parsing builds an explicit AST, rendering turns the
//!   AST into filter text, so precedence is testable in isolation
//!
//! # Operator Precedence
//!
//! OR binds loosest, AND tighter, NOT tightest; parenthesized groups
//! override. Operator scanning tracks paren depth and quoted literals.

mod ast;
mod parse;
mod render;

pub use ast::{CompareOp, Predicate};
pub use parse::parse;
pub use render::{render, FilterExpression};

/// Filter that matches every entry
const MATCH_ALL: &str = "(objectClass=*)";

/// An object-class equality constraint chosen by the planner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassConstraint {
    /// Filter attribute: `objectClass`, or `objectCategory` for
    /// directories where the category index is the reliable one
    pub attribute: String,
    /// Object-class name to match
    pub class_name: String,
}

impl ClassConstraint {
    /// Creates a constraint on the given filter attribute
    pub fn new(attribute: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            class_name: class_name.into(),
        }
    }

    /// True when the predicate text already names this filter
    /// attribute in an equality, in which case adding the constraint
    /// again would duplicate or conflict with the caller's own filter.
    fn mentioned_in(&self, predicate_text: &str) -> bool {
        let text = predicate_text.to_lowercase();
        let attr = self.attribute.to_lowercase();
        text.contains(&format!("{}=", attr)) || text.contains(&format!("{} =", attr))
    }

    fn to_predicate(&self) -> Predicate {
        Predicate::eq(self.attribute.clone(), self.class_name.clone())
    }
}

/// Compiles optional predicate text plus an optional object-class
/// constraint into one directory filter.
///
/// With both present the two join in a single top-level AND group; the
/// constraint is dropped when the predicate already mentions its filter
/// attribute. With neither, the result matches everything.
pub fn compile(
    predicate_text: Option<&str>,
    constraint: Option<&ClassConstraint>,
) -> FilterExpression {
    let text = predicate_text.map(str::trim).filter(|t| !t.is_empty());

    let constraint = constraint.filter(|c| match text {
        Some(t) => !c.mentioned_in(t),
        None => true,
    });

    match (constraint, text) {
        (Some(c), Some(t)) => render(&Predicate::and(c.to_predicate(), parse(t))),
        (Some(c), None) => render(&c.to_predicate()),
        (None, Some(t)) => render(&parse(t)),
        (None, None) => FilterExpression::from_rendered(MATCH_ALL.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_predicate_no_constraint_matches_all() {
        assert_eq!(compile(None, None).as_str(), "(objectClass=*)");
        assert_eq!(compile(Some("   "), None).as_str(), "(objectClass=*)");
    }

    #[test]
    fn test_constraint_only() {
        let c = ClassConstraint::new("objectClass", "user");
        assert_eq!(compile(None, Some(&c)).as_str(), "(objectClass=user)");
    }

    #[test]
    fn test_predicate_only() {
        assert_eq!(compile(Some("cn = 'x'"), None).as_str(), "(cn=x)");
    }

    #[test]
    fn test_constraint_and_predicate_joined() {
        let c = ClassConstraint::new("objectClass", "user");
        assert_eq!(
            compile(Some("cn = 'x'"), Some(&c)).as_str(),
            "(&(objectClass=user)(cn=x))"
        );
    }

    #[test]
    fn test_constraint_skipped_when_already_mentioned() {
        let c = ClassConstraint::new("objectClass", "user");
        assert_eq!(
            compile(Some("objectClass = 'group'"), Some(&c)).as_str(),
            "(objectClass=group)"
        );
        // Case-insensitive mention check
        assert_eq!(
            compile(Some("OBJECTCLASS='group'"), Some(&c)).as_str(),
            "(OBJECTCLASS=group)"
        );
    }

    #[test]
    fn test_alternate_attribute_constraint() {
        let c = ClassConstraint::new("objectCategory", "person");
        assert_eq!(
            compile(Some("sn = 'Smith'"), Some(&c)).as_str(),
            "(&(objectCategory=person)(sn=Smith))"
        );
    }

    #[test]
    fn test_compile_is_pure() {
        let c = ClassConstraint::new("objectClass", "user");
        let text = Some("cn LIKE 'A%' OR mail IS NULL");
        assert_eq!(compile(text, Some(&c)), compile(text, Some(&c)));
    }
}

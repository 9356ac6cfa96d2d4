//! AST to directory-filter rendering
//!
//! Produces RFC 4515-style filter strings. Every logical group and
//! every leaf is parenthesized, so the output always parses as a
//! balanced filter expression.

use std::fmt;

use super::ast::Predicate;

/// A compiled directory search filter.
///
/// Always syntactically balanced; never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterExpression(String);

impl FilterExpression {
    /// Wraps an already-rendered filter string
    pub(crate) fn from_rendered(s: String) -> Self {
        FilterExpression(s)
    }

    /// Returns the filter text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the expression, returning the filter text
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Renders a predicate AST into a directory filter
pub fn render(predicate: &Predicate) -> FilterExpression {
    let mut out = String::with_capacity(64);
    render_node(predicate, &mut out);
    FilterExpression(out)
}

fn render_node(predicate: &Predicate, out: &mut String) {
    match predicate {
        Predicate::And(left, right) => {
            out.push_str("(&");
            render_node(left, out);
            render_node(right, out);
            out.push(')');
        }
        Predicate::Or(left, right) => {
            out.push_str("(|");
            render_node(left, out);
            render_node(right, out);
            out.push(')');
        }
        Predicate::Not(inner) => {
            out.push_str("(!");
            render_node(inner, out);
            out.push(')');
        }
        Predicate::Compare { attr, op, value } => {
            out.push('(');
            out.push_str(attr);
            out.push_str(op.as_str());
            out.push_str(value);
            out.push(')');
        }
        Predicate::Like { attr, pattern } => {
            out.push('(');
            out.push_str(attr);
            out.push('=');
            out.push_str(pattern);
            out.push(')');
        }
        Predicate::Present { attr } => {
            out.push('(');
            out.push_str(attr);
            out.push_str("=*)");
        }
        Predicate::Raw(text) => {
            // Pre-parenthesized text passes through untouched; anything
            // else gets wrapped so the filter stays balanced.
            if text.starts_with('(') && text.ends_with(')') {
                out.push_str(text);
            } else {
                out.push('(');
                out.push_str(text);
                out.push(')');
            }
        }
    }
}

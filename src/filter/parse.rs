//! WHERE-clause parser
//!
//! Recursive-descent parsing of SQL-style predicate text into a
//! [`Predicate`] AST. Standard operator precedence: OR binds loosest,
//! AND tighter, NOT tightest. Operator scanning is paren-depth and
//! quote aware, so `AND`/`OR` inside nested groups or string literals
//! never split the wrong level.
//!
//! Parsing never fails: a condition that matches no recognized form is
//! carried through as [`Predicate::Raw`] and rendered verbatim.

use super::ast::{CompareOp, Predicate};

/// Parses predicate text into an AST.
///
/// The input must be non-empty; callers guard the empty case.
/// Whitespace runs outside string literals collapse to single spaces
/// first, so clause bodies may span multiple lines.
pub fn parse(text: &str) -> Predicate {
    parse_expr(&normalize_whitespace(text))
}

/// Collapses whitespace runs outside single-quoted literals
fn normalize_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_quote = false;
    let mut pending_space = false;
    for ch in s.trim().chars() {
        if in_quote {
            out.push(ch);
            if ch == '\'' {
                in_quote = false;
            }
            continue;
        }
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        if ch == '\'' {
            in_quote = true;
        }
        out.push(ch);
    }
    out
}

/// OR level (loosest binding)
fn parse_expr(input: &str) -> Predicate {
    let s = strip_enclosing_parens(input);
    if let Some(pos) = scan_for(s, " OR ", true) {
        let left = &s[..pos];
        let right = &s[pos + 4..];
        return Predicate::or(parse_and(left), parse_expr(right));
    }
    parse_and(s)
}

/// AND level
fn parse_and(input: &str) -> Predicate {
    let s = strip_enclosing_parens(input);
    if let Some(pos) = scan_for(s, " AND ", true) {
        let left = &s[..pos];
        let right = &s[pos + 5..];
        return Predicate::and(parse_unary(left), parse_and(right));
    }
    parse_unary(s)
}

/// NOT level and grouped sub-expressions
fn parse_unary(input: &str) -> Predicate {
    let s = input.trim();
    if let Some(prefix) = s.get(..4) {
        if prefix.eq_ignore_ascii_case("NOT ") && s.len() > 4 {
            return Predicate::negate(parse_unary(&s[4..]));
        }
    }
    if is_enclosed(s) {
        return parse_expr(&s[1..s.len() - 1]);
    }
    parse_leaf(s)
}

/// A single condition, matched against recognized forms in fixed
/// priority order. First match wins; anything else passes through raw.
fn parse_leaf(input: &str) -> Predicate {
    let s = input.trim();

    // A leaf still carrying parentheses at this point is a
    // pre-formatted directory filter; pass it through untouched.
    if s.starts_with('(') && s.ends_with(')') {
        return Predicate::Raw(s.to_string());
    }

    // NOT LIKE before LIKE, otherwise the LIKE scan splits inside it
    if let Some((attr, rest)) = split_keyword(s, " NOT LIKE ") {
        return Predicate::negate(Predicate::Like {
            attr,
            pattern: translate_pattern(&rest),
        });
    }
    if let Some((attr, rest)) = split_keyword(s, " LIKE ") {
        return Predicate::Like {
            attr,
            pattern: translate_pattern(&rest),
        };
    }
    if let Some(attr) = strip_suffix_ci(s, " IS NOT NULL") {
        return Predicate::present(attr);
    }
    if let Some(attr) = strip_suffix_ci(s, " IS NULL") {
        return Predicate::negate(Predicate::present(attr));
    }
    if let Some((attr, value)) = split_operator(s, ">=") {
        return Predicate::Compare {
            attr,
            op: CompareOp::Ge,
            value,
        };
    }
    if let Some((attr, value)) = split_operator(s, "<=") {
        return Predicate::Compare {
            attr,
            op: CompareOp::Le,
            value,
        };
    }
    if let Some((attr, value)) = split_operator(s, "<>") {
        return Predicate::negate(Predicate::eq(attr, value));
    }
    if let Some((attr, value)) = split_operator(s, "!=") {
        return Predicate::negate(Predicate::eq(attr, value));
    }
    if let Some((attr, value)) = split_operator(s, "=") {
        return Predicate::eq(attr, value);
    }

    Predicate::Raw(s.to_string())
}

/// Finds the first occurrence of `token` (case-insensitive) outside
/// single-quoted literals; with `top_level_only`, also outside parens.
fn scan_for(s: &str, token: &str, top_level_only: bool) -> Option<usize> {
    let mut depth: i32 = 0;
    let mut in_quote = false;
    for (i, ch) in s.char_indices() {
        if in_quote {
            if ch == '\'' {
                in_quote = false;
            }
            continue;
        }
        match ch {
            '\'' => {
                in_quote = true;
                continue;
            }
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        if !top_level_only || depth == 0 {
            if let Some(candidate) = s.get(i..i + token.len()) {
                if candidate.eq_ignore_ascii_case(token) {
                    return Some(i);
                }
            }
        }
    }
    None
}

/// True when the leading `(` matches the trailing `)` with no
/// intermediate return to depth zero.
fn is_enclosed(s: &str) -> bool {
    if s.len() < 2 || !s.starts_with('(') || !s.ends_with(')') {
        return false;
    }
    let mut depth: i32 = 0;
    let mut in_quote = false;
    for (idx, ch) in s.char_indices() {
        if in_quote {
            if ch == '\'' {
                in_quote = false;
            }
            continue;
        }
        match ch {
            '\'' => in_quote = true,
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 && idx != s.len() - 1 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

/// Strips every level of fully-enclosing parentheses
fn strip_enclosing_parens(input: &str) -> &str {
    let mut s = input.trim();
    while is_enclosed(s) {
        s = s[1..s.len() - 1].trim();
    }
    s
}

/// Splits `attr KEYWORD rest`; the attribute must be a plain name
fn split_keyword(s: &str, keyword: &str) -> Option<(String, String)> {
    let pos = scan_for(s, keyword, false)?;
    let attr = s[..pos].trim();
    if !is_attribute_name(attr) {
        return None;
    }
    let rest = s[pos + keyword.len()..].trim();
    Some((attr.to_string(), rest.to_string()))
}

/// Splits `attr OP value`, stripping quotes from the value
fn split_operator(s: &str, op: &str) -> Option<(String, String)> {
    let pos = scan_for(s, op, false)?;
    let attr = s[..pos].trim();
    if !is_attribute_name(attr) {
        return None;
    }
    let value = strip_quotes(s[pos + op.len()..].trim());
    Some((attr.to_string(), value.to_string()))
}

/// Case-insensitive suffix match returning the attribute before it
fn strip_suffix_ci(s: &str, suffix: &str) -> Option<String> {
    if s.len() <= suffix.len() {
        return None;
    }
    let split = s.len() - suffix.len();
    let tail = s.get(split..)?;
    if !tail.eq_ignore_ascii_case(suffix) {
        return None;
    }
    let attr = s[..split].trim();
    if !is_attribute_name(attr) {
        return None;
    }
    Some(attr.to_string())
}

/// Directory attribute names: letters, digits, underscore, hyphen
fn is_attribute_name(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Removes surrounding single quotes, tolerating an unpaired side
fn strip_quotes(s: &str) -> &str {
    let s = s.strip_prefix('\'').unwrap_or(s);
    s.strip_suffix('\'').unwrap_or(s)
}

/// SQL LIKE pattern to LDAP wildcards: `%` becomes `*`, `_` becomes `?`.
///
/// The single-char wildcard is not honored by every directory server;
/// the translation mirrors what the caller asked for regardless.
fn translate_pattern(raw: &str) -> String {
    strip_quotes(raw.trim()).replace('%', "*").replace('_', "?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_equality() {
        assert_eq!(parse("cn = 'Alice'"), Predicate::eq("cn", "Alice"));
        assert_eq!(parse("cn=Alice"), Predicate::eq("cn", "Alice"));
    }

    #[test]
    fn test_like_translation() {
        assert_eq!(
            parse("cn LIKE 'John%'"),
            Predicate::Like {
                attr: "cn".into(),
                pattern: "John*".into(),
            }
        );
        assert_eq!(
            parse("cn LIKE '%Jo_n%'"),
            Predicate::Like {
                attr: "cn".into(),
                pattern: "*Jo?n*".into(),
            }
        );
    }

    #[test]
    fn test_not_like() {
        assert_eq!(
            parse("cn NOT LIKE 'J%'"),
            Predicate::negate(Predicate::Like {
                attr: "cn".into(),
                pattern: "J*".into(),
            })
        );
    }

    #[test]
    fn test_null_tests() {
        assert_eq!(
            parse("mail IS NULL"),
            Predicate::negate(Predicate::present("mail"))
        );
        assert_eq!(parse("mail IS NOT NULL"), Predicate::present("mail"));
    }

    #[test]
    fn test_range_and_inequality() {
        assert_eq!(
            parse("uidNumber >= 1000"),
            Predicate::Compare {
                attr: "uidNumber".into(),
                op: CompareOp::Ge,
                value: "1000".into(),
            }
        );
        assert_eq!(
            parse("uidNumber <= 2000"),
            Predicate::Compare {
                attr: "uidNumber".into(),
                op: CompareOp::Le,
                value: "2000".into(),
            }
        );
        assert_eq!(
            parse("cn <> 'Bob'"),
            Predicate::negate(Predicate::eq("cn", "Bob"))
        );
        assert_eq!(
            parse("cn != 'Bob'"),
            Predicate::negate(Predicate::eq("cn", "Bob"))
        );
    }

    #[test]
    fn test_and_or_precedence() {
        // AND binds tighter than OR
        let p = parse("a = 1 OR b = 2 AND c = 3");
        assert_eq!(
            p,
            Predicate::or(
                Predicate::eq("a", "1"),
                Predicate::and(Predicate::eq("b", "2"), Predicate::eq("c", "3")),
            )
        );
    }

    #[test]
    fn test_not_binds_tightest() {
        let p = parse("NOT a = 1 AND b = 2");
        assert_eq!(
            p,
            Predicate::and(
                Predicate::negate(Predicate::eq("a", "1")),
                Predicate::eq("b", "2"),
            )
        );
    }

    #[test]
    fn test_grouping_respected() {
        let p = parse("(a = 1 OR b = 2) AND c = 3");
        assert_eq!(
            p,
            Predicate::and(
                Predicate::or(Predicate::eq("a", "1"), Predicate::eq("b", "2")),
                Predicate::eq("c", "3"),
            )
        );
    }

    #[test]
    fn test_operator_inside_quotes_not_split() {
        let p = parse("description = 'cats AND dogs'");
        assert_eq!(p, Predicate::eq("description", "cats AND dogs"));
    }

    #[test]
    fn test_operator_inside_group_not_split() {
        let p = parse("(a = 1 AND b = 2)");
        assert_eq!(
            p,
            Predicate::and(Predicate::eq("a", "1"), Predicate::eq("b", "2"))
        );
    }

    #[test]
    fn test_multi_group_raw_passthrough() {
        let p = parse("(memberOf=CN=admins,OU=groups)(objectClass=user)");
        assert_eq!(
            p,
            Predicate::Raw("(memberOf=CN=admins,OU=groups)(objectClass=user)".into())
        );
    }

    #[test]
    fn test_unrecognized_leaf_is_raw() {
        assert_eq!(
            parse("cn BETWEEN 'a' AND- 'b'"),
            Predicate::Raw("cn BETWEEN 'a' AND- 'b'".into())
        );
    }

    #[test]
    fn test_right_fold_of_and_chain() {
        let p = parse("a = 1 AND b = 2 AND c = 3");
        assert_eq!(
            p,
            Predicate::and(
                Predicate::eq("a", "1"),
                Predicate::and(Predicate::eq("b", "2"), Predicate::eq("c", "3")),
            )
        );
    }

    #[test]
    fn test_enclosing_parens_stripped_repeatedly() {
        assert_eq!(parse("((cn = 'x'))"), Predicate::eq("cn", "x"));
    }

    #[test]
    fn test_multiline_predicate_normalizes() {
        assert_eq!(
            parse("mail IS\n    NULL"),
            Predicate::negate(Predicate::present("mail"))
        );
        assert_eq!(
            parse("cn = 'a'\nAND sn = 'b'"),
            Predicate::and(Predicate::eq("cn", "a"), Predicate::eq("sn", "b"))
        );
        // Whitespace inside literals survives untouched
        assert_eq!(
            parse("description = 'two  spaces'"),
            Predicate::eq("description", "two  spaces")
        );
    }

    #[test]
    fn test_idempotent_parse() {
        let text = "cn LIKE 'A%' AND (mail IS NULL OR sn = 'B')";
        assert_eq!(parse(text), parse(text));
    }
}

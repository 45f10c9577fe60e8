//! String helpers: reversal, capitalization and a few predicates.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

/// Reverses `s` by Unicode scalar value.
///
/// Multi-byte characters are moved as a unit, so the result is always valid
/// UTF-8 and `reverse(&reverse(s)) == s`. Combining sequences are not kept
/// together.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Upper-cases the first character of `s`, leaving the rest untouched.
///
/// Uses the full Unicode mapping, so the first character may expand
/// (`"ßa"` becomes `"SSa"`). Empty input comes back empty.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// [`capitalize`] for values that may be absent; `None` stays `None`.
pub fn capitalize_opt(s: Option<&str>) -> Option<String> {
    s.map(capitalize)
}

/// True when `s` is empty or only whitespace.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Loose shape check for `local@domain.tld`. Not RFC 5322.
pub fn is_valid_email(s: &str) -> bool {
    !is_blank(s) && EMAIL_RE.is_match(s)
}

/// `camelCase` to `camel_case`. Every uppercase letter becomes `_` plus its
/// lowercase form, including a leading one.
pub fn camel_to_snake(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c.is_uppercase() {
            out.push('_');
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_ascii() {
        assert_eq!(reverse("Hello, Rust!"), "!tsuR ,olleH");
        assert_eq!(reverse(""), "");
    }

    #[test]
    fn test_reverse_keeps_multibyte_chars_intact() {
        assert_eq!(reverse("a😀b"), "b😀a");
        assert_eq!(reverse("你好"), "好你");
        for s in ["", "x", "héllo wörld", "🦀 crab 🦀", "字符串"] {
            assert_eq!(reverse(&reverse(s)), s);
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("java"), "Java");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("Already"), "Already");
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize("ßa"), "SSa");
        assert_eq!(capitalize("1abc"), "1abc");
    }

    #[test]
    fn test_capitalize_opt() {
        assert_eq!(capitalize_opt(None), None);
        assert_eq!(capitalize_opt(Some("")), Some(String::new()));
        assert_eq!(capitalize_opt(Some("rust")), Some("Rust".to_string()));
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("user@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("   "));
        assert!(!is_valid_email("a b@example.com"));
    }

    #[test]
    fn test_camel_to_snake() {
        assert_eq!(camel_to_snake("camelCaseString"), "camel_case_string");
        assert_eq!(camel_to_snake("plain"), "plain");
        assert_eq!(camel_to_snake("Leading"), "_leading");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\n"));
        assert!(!is_blank(" x "));
    }
}

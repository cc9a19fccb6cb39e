//! String ordering used by the catalog and the table sorter.
//!
//! Comparison works at "base" strength: case and diacritics are folded away
//! before comparing, so `"Élan"` and `"elan"` are equal.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

use unicode_normalization::UnicodeNormalization;

/// Lowercases and strips combining marks after canonical decomposition.
pub fn fold(s: &str) -> String {
    s.nfd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Base-strength comparison without numeric awareness.
pub fn compare_base(a: &str, b: &str) -> Ordering {
    fold(a).cmp(&fold(b))
}

/// Base-strength comparison where runs of ASCII digits compare by value,
/// so `"Row2"` sorts before `"Row10"`.
pub fn compare_natural(a: &str, b: &str) -> Ordering {
    let left = fold(a);
    let right = fold(b);
    let mut lc = left.chars().peekable();
    let mut rc = right.chars().peekable();

    loop {
        match (lc.peek().copied(), rc.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let ord = compare_digit_runs(&take_digits(&mut lc), &take_digits(&mut rc));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(l), Some(r)) => {
                if l != r {
                    return l.cmp(&r);
                }
                lc.next();
                rc.next();
            }
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Parses the longest numeric prefix of `text`, after turning the first
/// decimal comma into a point. Leading whitespace is skipped; trailing text
/// such as a unit suffix is ignored (`"550 HP"` is 550).
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let normalized = text.replacen(',', ".", 1);
    let s = normalized.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return s[..end + "Infinity".len()].replace("Infinity", "inf").parse().ok();
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_strips_accents_and_case() {
        assert_eq!(fold("Categoría"), "categoria");
        assert_eq!(compare_base("ÉLAN", "elan"), Ordering::Equal);
    }

    #[test]
    fn natural_order_handles_leading_zeros() {
        assert_eq!(compare_natural("week 007", "week 7"), Ordering::Equal);
        assert_eq!(compare_natural("week 8", "week 10"), Ordering::Less);
    }

    #[test]
    fn leading_number_edge_cases() {
        assert_eq!(parse_leading_number("  -3.5e2x"), Some(-350.0));
        assert_eq!(parse_leading_number(".5"), Some(0.5));
        assert_eq!(parse_leading_number("1e"), Some(1.0));
        assert_eq!(parse_leading_number("."), None);
        assert_eq!(parse_leading_number("-"), None);
        assert_eq!(parse_leading_number("-Infinity"), Some(f64::NEG_INFINITY));
    }
}

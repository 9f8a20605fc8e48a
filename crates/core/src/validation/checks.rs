//! Field checks: pure predicates, some of which also normalize the value.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use regex::Regex;
use serde_json::Value;
use validator::ValidateEmail;

use super::request::is_absent;

static CUID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^c[a-z0-9]{24}$").expect("valid regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9 ()\-]+$").expect("valid regex"));

/// Length bounds of a phone number, counting a leading `+`.
const PHONE_LEN: std::ops::RangeInclusive<usize> = 7..=20;

/// Minimum number of digits a phone number must contain.
const MIN_PHONE_DIGITS: usize = 7;

/// What a check decided about one value.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Pass,
    /// Passes, and the field takes this canonical value from now on.
    Replace(Value),
    Fail,
}

/// A declarative constraint on a single value.
///
/// Checks other than [`Check::Required`] fail on a missing value; mark the
/// rule optional to skip absent fields instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Check {
    /// Present and not blank.
    Required,
    /// Well-formed address; normalized to its trimmed, lowercased form.
    Email,
    /// String whose trimmed length (in chars) is within `min..=max`;
    /// normalized to the trimmed form.
    Text { min: usize, max: usize },
    /// At least `min_len` chars with a lowercase letter, an uppercase letter
    /// and a digit. Never trimmed.
    StrongPassword { min_len: usize },
    /// Canonical record id: `c` followed by 24 lowercase alphanumerics.
    Cuid,
    /// Integer (or integer string) within `min..=max`; normalized to a JSON
    /// integer.
    Integer { min: i64, max: i64 },
    /// Finite number (or numeric string) within `min..=max`; normalized to a
    /// JSON number.
    Number { min: f64, max: f64 },
    /// JSON bool, or `true`/`false`/`1`/`0`; normalized to a JSON bool.
    Boolean,
    /// Exact member of a closed set.
    OneOf(&'static [&'static str]),
    /// RFC 3339 timestamp or `YYYY-MM-DD` date.
    Date,
    /// Phone number; normalized to its trimmed form.
    Phone,
    /// Array of at most `max_items` non-blank strings of at most `max_len`
    /// chars each; entries are trimmed.
    StringList { max_items: usize, max_len: usize },
}

impl Check {
    pub fn apply(&self, value: Option<&Value>) -> Verdict {
        match *self {
            Check::Required => {
                if is_absent(value) {
                    Verdict::Fail
                } else {
                    Verdict::Pass
                }
            }
            Check::Email => email(value),
            Check::Text { min, max } => text(value, min, max),
            Check::StrongPassword { min_len } => strong_password(value, min_len),
            Check::Cuid => matches_str(value, &CUID_RE),
            Check::Integer { min, max } => integer(value, min, max),
            Check::Number { min, max } => number(value, min, max),
            Check::Boolean => boolean(value),
            Check::OneOf(allowed) => one_of(value, allowed),
            Check::Date => date(value),
            Check::Phone => phone(value),
            Check::StringList {
                max_items,
                max_len,
            } => string_list(value, max_items, max_len),
        }
    }
}

fn pass_or_replace(original: &str, canonical: String) -> Verdict {
    if original == canonical {
        Verdict::Pass
    } else {
        Verdict::Replace(Value::String(canonical))
    }
}

fn email(value: Option<&Value>) -> Verdict {
    let Some(raw) = value.and_then(Value::as_str) else {
        return Verdict::Fail;
    };
    let canonical = raw.trim().to_lowercase();
    if !canonical.validate_email() {
        return Verdict::Fail;
    }
    pass_or_replace(raw, canonical)
}

fn text(value: Option<&Value>, min: usize, max: usize) -> Verdict {
    let Some(raw) = value.and_then(Value::as_str) else {
        return Verdict::Fail;
    };
    let trimmed = raw.trim();
    let len = trimmed.chars().count();
    if len < min || len > max {
        return Verdict::Fail;
    }
    pass_or_replace(raw, trimmed.to_string())
}

fn strong_password(value: Option<&Value>, min_len: usize) -> Verdict {
    let Some(password) = value.and_then(Value::as_str) else {
        return Verdict::Fail;
    };
    let long_enough = password.chars().count() >= min_len;
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if long_enough && has_lower && has_upper && has_digit {
        Verdict::Pass
    } else {
        Verdict::Fail
    }
}

fn matches_str(value: Option<&Value>, re: &Regex) -> Verdict {
    match value.and_then(Value::as_str) {
        Some(s) if re.is_match(s) => Verdict::Pass,
        _ => Verdict::Fail,
    }
}

fn integer(value: Option<&Value>, min: i64, max: i64) -> Verdict {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    match parsed {
        Some(n) if (min..=max).contains(&n) => match value {
            Some(Value::Number(_)) => Verdict::Pass,
            _ => Verdict::Replace(Value::from(n)),
        },
        _ => Verdict::Fail,
    }
}

fn number(value: Option<&Value>, min: f64, max: f64) -> Verdict {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(n) if n.is_finite() && n >= min && n <= max => match value {
            Some(Value::Number(_)) => Verdict::Pass,
            _ => Verdict::Replace(Value::from(n)),
        },
        _ => Verdict::Fail,
    }
}

fn boolean(value: Option<&Value>) -> Verdict {
    match value {
        Some(Value::Bool(_)) => Verdict::Pass,
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Verdict::Replace(Value::Bool(true)),
            "false" | "0" => Verdict::Replace(Value::Bool(false)),
            _ => Verdict::Fail,
        },
        _ => Verdict::Fail,
    }
}

fn one_of(value: Option<&Value>, allowed: &[&str]) -> Verdict {
    match value.and_then(Value::as_str) {
        Some(s) if allowed.contains(&s) => Verdict::Pass,
        _ => Verdict::Fail,
    }
}

fn date(value: Option<&Value>) -> Verdict {
    let Some(raw) = value.and_then(Value::as_str) else {
        return Verdict::Fail;
    };
    let trimmed = raw.trim();
    let valid = DateTime::parse_from_rfc3339(trimmed).is_ok()
        || NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").is_ok();
    if valid {
        pass_or_replace(raw, trimmed.to_string())
    } else {
        Verdict::Fail
    }
}

fn phone(value: Option<&Value>) -> Verdict {
    let Some(raw) = value.and_then(Value::as_str) else {
        return Verdict::Fail;
    };
    let trimmed = raw.trim();
    let digits = trimmed.chars().filter(char::is_ascii_digit).count();
    if PHONE_LEN.contains(&trimmed.len())
        && PHONE_RE.is_match(trimmed)
        && digits >= MIN_PHONE_DIGITS
    {
        pass_or_replace(raw, trimmed.to_string())
    } else {
        Verdict::Fail
    }
}

fn string_list(value: Option<&Value>, max_items: usize, max_len: usize) -> Verdict {
    let Some(items) = value.and_then(Value::as_array) else {
        return Verdict::Fail;
    };
    if items.len() > max_items {
        return Verdict::Fail;
    }
    let mut trimmed = Vec::with_capacity(items.len());
    for item in items {
        let Some(s) = item.as_str() else {
            return Verdict::Fail;
        };
        let entry = s.trim();
        if entry.is_empty() || entry.chars().count() > max_len {
            return Verdict::Fail;
        }
        trimmed.push(Value::String(entry.to_string()));
    }
    if trimmed == *items {
        Verdict::Pass
    } else {
        Verdict::Replace(Value::Array(trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn apply(check: Check, value: Value) -> Verdict {
        check.apply(Some(&value))
    }

    #[test]
    fn required_rejects_missing_null_and_blank() {
        assert_eq!(Check::Required.apply(None), Verdict::Fail);
        assert_eq!(apply(Check::Required, Value::Null), Verdict::Fail);
        assert_eq!(apply(Check::Required, json!("  ")), Verdict::Fail);
        assert_eq!(apply(Check::Required, json!("x")), Verdict::Pass);
    }

    #[test]
    fn email_is_trimmed_and_case_folded() {
        assert_eq!(
            apply(Check::Email, json!("  Foo@Bar.COM ")),
            Verdict::Replace(json!("foo@bar.com"))
        );
    }

    #[test]
    fn canonical_email_passes_unchanged() {
        assert_eq!(apply(Check::Email, json!("foo@bar.com")), Verdict::Pass);
    }

    #[test]
    fn malformed_email_fails() {
        assert_eq!(apply(Check::Email, json!("not-an-email")), Verdict::Fail);
        assert_eq!(apply(Check::Email, json!("")), Verdict::Fail);
        assert_eq!(apply(Check::Email, json!(42)), Verdict::Fail);
        assert_eq!(Check::Email.apply(None), Verdict::Fail);
    }

    #[test]
    fn text_length_counts_trimmed_chars() {
        let check = Check::Text { min: 2, max: 5 };
        assert_eq!(apply(check, json!("  Ada  ")), Verdict::Replace(json!("Ada")));
        assert_eq!(apply(check, json!(" A ")), Verdict::Fail);
        assert_eq!(apply(check, json!("Adaeze")), Verdict::Fail);
        // Multi-byte characters count once.
        assert_eq!(apply(check, json!("Zoë")), Verdict::Pass);
    }

    #[test]
    fn text_rejects_non_strings() {
        assert_eq!(apply(Check::Text { min: 0, max: 10 }, json!(12)), Verdict::Fail);
    }

    #[test]
    fn strong_password_needs_length_and_composition() {
        let check = Check::StrongPassword { min_len: 8 };
        assert_eq!(apply(check, json!("Shutter123")), Verdict::Pass);
        assert_eq!(apply(check, json!("abc")), Verdict::Fail);
        assert_eq!(apply(check, json!("alllowercase1")), Verdict::Fail);
        assert_eq!(apply(check, json!("ALLUPPERCASE1")), Verdict::Fail);
        assert_eq!(apply(check, json!("NoDigitsHere")), Verdict::Fail);
    }

    #[test]
    fn strong_password_is_not_trimmed() {
        let check = Check::StrongPassword { min_len: 8 };
        assert_eq!(apply(check, json!(" Pass1234 ")), Verdict::Pass);
    }

    #[test]
    fn cuid_format() {
        assert_eq!(
            apply(Check::Cuid, json!("ckx1a2b3c4d5e6f7g8h9i0j1k")),
            Verdict::Pass
        );
        assert_eq!(apply(Check::Cuid, json!("ckx1a2b3")), Verdict::Fail);
        assert_eq!(
            apply(Check::Cuid, json!("CKX1A2B3C4D5E6F7G8H9I0J1K")),
            Verdict::Fail
        );
        assert_eq!(
            apply(Check::Cuid, json!("xkx1a2b3c4d5e6f7g8h9i0j1k")),
            Verdict::Fail
        );
    }

    #[test]
    fn integer_parses_strings_and_enforces_bounds() {
        let check = Check::Integer { min: 1, max: 100 };
        assert_eq!(apply(check, json!("20")), Verdict::Replace(json!(20)));
        assert_eq!(apply(check, json!(20)), Verdict::Pass);
        assert_eq!(apply(check, json!("0")), Verdict::Fail);
        assert_eq!(apply(check, json!(500)), Verdict::Fail);
        assert_eq!(apply(check, json!("1.5")), Verdict::Fail);
        assert_eq!(apply(check, json!(1.5)), Verdict::Fail);
    }

    #[test]
    fn number_accepts_numeric_strings() {
        let check = Check::Number {
            min: 0.0,
            max: f64::MAX,
        };
        assert_eq!(apply(check, json!("249.99")), Verdict::Replace(json!(249.99)));
        assert_eq!(apply(check, json!(10)), Verdict::Pass);
        assert_eq!(apply(check, json!(-1)), Verdict::Fail);
        assert_eq!(apply(check, json!("NaN")), Verdict::Fail);
        assert_eq!(apply(check, json!("inf")), Verdict::Fail);
    }

    #[test]
    fn boolean_accepts_flag_strings() {
        assert_eq!(apply(Check::Boolean, json!(true)), Verdict::Pass);
        assert_eq!(apply(Check::Boolean, json!("TRUE")), Verdict::Replace(json!(true)));
        assert_eq!(apply(Check::Boolean, json!("0")), Verdict::Replace(json!(false)));
        assert_eq!(apply(Check::Boolean, json!("yes")), Verdict::Fail);
    }

    #[test]
    fn one_of_is_exact_membership() {
        let check = Check::OneOf(&["WEDDING", "PORTRAIT"]);
        assert_eq!(apply(check, json!("WEDDING")), Verdict::Pass);
        assert_eq!(apply(check, json!("wedding")), Verdict::Fail);
        assert_eq!(apply(check, json!("FUNERAL")), Verdict::Fail);
    }

    #[test]
    fn date_accepts_calendar_dates_and_timestamps() {
        assert_eq!(apply(Check::Date, json!("2026-06-20")), Verdict::Pass);
        assert_eq!(apply(Check::Date, json!("2026-06-20T14:00:00Z")), Verdict::Pass);
        assert_eq!(
            apply(Check::Date, json!(" 2026-06-20 ")),
            Verdict::Replace(json!("2026-06-20"))
        );
        assert_eq!(apply(Check::Date, json!("2026-02-30")), Verdict::Fail);
        assert_eq!(apply(Check::Date, json!("next saturday")), Verdict::Fail);
    }

    #[test]
    fn phone_requires_enough_digits() {
        assert_eq!(apply(Check::Phone, json!("+234 (803) 555-0199")), Verdict::Pass);
        assert_eq!(
            apply(Check::Phone, json!(" 08035550199 ")),
            Verdict::Replace(json!("08035550199"))
        );
        assert_eq!(apply(Check::Phone, json!("() -- ()")), Verdict::Fail);
        assert_eq!(apply(Check::Phone, json!("call me")), Verdict::Fail);
    }

    #[test]
    fn phone_length_counts_the_plus_sign() {
        assert_eq!(
            apply(Check::Phone, json!("+1234567890123456789")),
            Verdict::Pass
        );
        assert_eq!(
            apply(Check::Phone, json!("+12345678901234567890")),
            Verdict::Fail
        );
        assert_eq!(
            apply(Check::Phone, json!("123456789012345678901")),
            Verdict::Fail
        );
    }

    #[test]
    fn string_list_trims_entries() {
        let check = Check::StringList {
            max_items: 3,
            max_len: 20,
        };
        assert_eq!(
            apply(check, json!([" Drone shots ", "Album"])),
            Verdict::Replace(json!(["Drone shots", "Album"]))
        );
        assert_eq!(apply(check, json!(["Album"])), Verdict::Pass);
        assert_eq!(apply(check, json!(["a", "b", "c", "d"])), Verdict::Fail);
        assert_eq!(apply(check, json!(["Album", "  "])), Verdict::Fail);
        assert_eq!(apply(check, json!(["Album", 3])), Verdict::Fail);
        assert_matches!(apply(check, json!("Album")), Verdict::Fail);
    }
}

// src/strings.rs

//! String helpers: blank checks, title case, placeholder formatting, join.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use regex::{Captures, Regex};
use tracing::warn;

/// `true` for `None`, the empty string, or whitespace only.
pub fn is_blank(s: Option<&str>) -> bool {
    s.is_none_or(|s| s.trim().is_empty())
}

pub fn is_not_blank(s: Option<&str>) -> bool {
    !is_blank(s)
}

/// Upper-case the first character and lower-case the rest.
pub fn to_title_case(s: &str) -> String {
    to_title_case_with(s, true)
}

/// Upper-case the first character; lower-case the rest only if `lower`.
///
/// Blank input is returned unchanged.
pub fn to_title_case_with(s: &str, lower: bool) -> String {
    if is_blank(Some(s)) {
        return s.to_string();
    }

    let mut chars = s.chars();
    let mut out = String::with_capacity(s.len());
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
    }

    let rest = chars.as_str();
    if lower {
        out.push_str(&rest.to_lowercase());
    } else {
        out.push_str(rest);
    }
    out
}

/// Replace `${key}` placeholders with values from `params`.
///
/// Placeholders whose key is missing are left as they are. Everything else
/// in the template (including `%`) is copied literally.
pub fn format<K, V>(template: &str, params: &HashMap<K, V>) -> String
where
    K: Borrow<str> + Eq + Hash,
    V: Display,
{
    format_with(template, "${", "}", params)
}

/// [`format`] with custom placeholder delimiters, e.g. `"<"` and `">"`.
///
/// Empty delimiters leave the template untouched.
pub fn format_with<K, V>(template: &str, open: &str, close: &str, params: &HashMap<K, V>) -> String
where
    K: Borrow<str> + Eq + Hash,
    V: Display,
{
    if open.is_empty() || close.is_empty() {
        return template.to_string();
    }

    let pattern = format!("{}(.*?){}", regex::escape(open), regex::escape(close));
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(e) => {
            warn!(open, close, error = %e, "invalid placeholder delimiters; leaving template as-is");
            return template.to_string();
        }
    };

    re.replace_all(template, |caps: &Captures| match params.get(&caps[1]) {
        Some(value) => value.to_string(),
        None => caps[0].to_string(),
    })
    .into_owned()
}

/// Join the `Display` form of every item with `separator`.
pub fn join<I>(items: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(&item.to_string());
    }
    out
}

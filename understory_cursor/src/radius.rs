// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corner radius resolution.
//!
//! Elements without visible rounding would turn the proxy into a hard rectangle, so the
//! tracker substitutes a fixed fallback whenever the computed `border-radius` denotes no
//! rounding or cannot be understood.

use alloc::borrow::Cow;
use alloc::string::ToString;

/// Length units accepted in a computed `border-radius` value.
const UNITS: &[&str] = &[
    "px", "%", "em", "rem", "ex", "ch", "vw", "vh", "vmin", "vmax", "cm", "mm", "q", "in",
    "pt", "pc",
];

/// A CSS `border-radius` value for the proxy element.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CornerRadius(Cow<'static, str>);

impl CornerRadius {
    /// Fully round corners, used by the idle dot.
    pub const ROUND: Self = Self(Cow::Borrowed("50%"));

    /// Wrap a static CSS value.
    pub const fn from_static(css: &'static str) -> Self {
        Self(Cow::Borrowed(css))
    }

    /// Resolve an element's computed `border-radius`.
    ///
    /// The computed value is kept (trimmed) when at least one of its components is a
    /// non-zero length or percentage. Missing, empty, all-zero, `none`, and unparsable
    /// values resolve to `fallback`.
    pub fn resolve(computed: Option<&str>, fallback: &Self) -> Self {
        match computed.map(str::trim) {
            Some(value) if is_rounded(value) => Self(Cow::Owned(value.to_string())),
            _ => fallback.clone(),
        }
    }

    /// The CSS text of this radius.
    pub fn as_css(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for CornerRadius {
    fn from(css: &'static str) -> Self {
        Self::from_static(css)
    }
}

/// Whether `value` parses as a radius with at least one non-zero component.
///
/// Accepts the one-to-four value shorthand and the `h / v` elliptical form.
fn is_rounded(value: &str) -> bool {
    let mut any_nonzero = false;
    let mut components = 0_usize;
    for token in value
        .split(|c: char| c.is_ascii_whitespace() || c == '/')
        .filter(|token| !token.is_empty())
    {
        let Some(length) = parse_length(token) else {
            return false;
        };
        components += 1;
        any_nonzero |= length > 0.0;
    }
    components > 0 && any_nonzero
}

fn parse_length(token: &str) -> Option<f64> {
    let (number, unit) = token.split_at(unit_start(token));
    let number: f64 = number.parse().ok()?;
    if !number.is_finite() || number < 0.0 {
        return None;
    }
    if unit.is_empty() {
        // Bare numbers are only meaningful as zero.
        return (number == 0.0).then_some(0.0);
    }
    UNITS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(unit))
        .then_some(number)
}

/// Byte offset where the unit begins, skipping an exponent such as `e+07`.
fn unit_start(token: &str) -> usize {
    let bytes = token.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'e' | b'E' if is_exponent(&bytes[i + 1..]) => i += 1,
            b'%' => return i,
            b if b.is_ascii_alphabetic() => return i,
            _ => {}
        }
        i += 1;
    }
    bytes.len()
}

fn is_exponent(rest: &[u8]) -> bool {
    match rest {
        [b'+' | b'-', digit, ..] | [digit, ..] => digit.is_ascii_digit(),
        [] => false,
    }
}
